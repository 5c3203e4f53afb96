// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Normalized angles

use std::f64::consts::{PI, TAU};
use std::ops::{Add, Neg, Sub};

/// An angle in radians, always normalized to `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    /// The zero angle
    pub const ZERO: Angle = Angle(0.0);

    /// Create an angle from radians, wrapping into `(-π, π]`
    pub fn from_radians(radians: f64) -> Self {
        Self(normalize(radians))
    }

    /// Create an angle from degrees, wrapping into `(-180°, 180°]`
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// The angle in radians
    pub fn radians(self) -> f64 {
        self.0
    }

    /// The angle in degrees
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Whether two angles are within `epsilon` radians of each other,
    /// taking the wrap at ±π into account.
    pub fn approx_eq(self, other: Angle, epsilon: f64) -> bool {
        (self - other).radians().abs() <= epsilon
    }
}

fn normalize(radians: f64) -> f64 {
    if !radians.is_finite() {
        return 0.0;
    }
    let wrapped = radians.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_radians(-self.0)
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Angle::from_radians(radians)
    }
}
