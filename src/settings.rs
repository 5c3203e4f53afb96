// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds non-visual settings. Visual styling (colors, widths)
//! belongs in `theme.rs`. The constants are the defaults; `EditorSettings`
//! carries the values a canvas actually uses and can be overridden from a
//! TOML file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// SELECTION SETTINGS
// ============================================================================
/// Pick tolerance around items and outlines (view units)
const SELECTION_RANGE: f64 = 8.0;

// ============================================================================
// ROTATION SETTINGS
// ============================================================================
/// Width of the angle ring drawn outside the pivot handle (view units).
/// Touch targets get a wider ring.
#[cfg(not(any(target_os = "ios", target_os = "android")))]
const ROTATION_RING_WIDTH: f64 = 8.0;
#[cfg(any(target_os = "ios", target_os = "android"))]
const ROTATION_RING_WIDTH: f64 = 16.0;

// ============================================================================
// HISTORY SETTINGS
// ============================================================================
/// Maximum number of undo entries kept
const UNDO_DEPTH: usize = 100;

// ============================================================================
// PATH SETTINGS
// ============================================================================
/// Flattening tolerance when converting circles to bezier paths
const CIRCLE_PATH_TOLERANCE: f64 = 0.1;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Selection settings
pub mod selection {
    /// Default pick tolerance (view units)
    pub const RANGE: f64 = super::SELECTION_RANGE;
}

/// Rotate tool settings
pub mod rotation {
    /// Default angle ring width (view units)
    pub const RING_WIDTH: f64 = super::ROTATION_RING_WIDTH;
}

/// Undo history settings
pub mod history {
    /// Default maximum undo depth
    pub const DEPTH: usize = super::UNDO_DEPTH;
}

/// Path generation settings
pub mod path {
    /// Tolerance for circle-to-bezier conversion
    pub const CIRCLE_TOLERANCE: f64 = super::CIRCLE_PATH_TOLERANCE;
}

/// Runtime editor settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Pick tolerance around items and outlines (view units)
    pub selection_range: f64,
    /// Width of the rotate tool's angle ring (view units)
    pub rotation_ring_width: f64,
    /// Maximum number of undo entries kept
    pub undo_depth: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            selection_range: selection::RANGE,
            rotation_ring_width: rotation::RING_WIDTH,
            undo_depth: history::DEPTH,
        }
    }
}

impl EditorSettings {
    /// Parse settings from TOML; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: EditorSettings =
            toml::from_str(source).context("Failed to parse editor settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        Self::from_toml_str(&source).with_context(|| format!("Invalid settings in {:?}", path))
    }

    fn validate(&self) -> Result<()> {
        if !(self.selection_range.is_finite() && self.selection_range > 0.0) {
            anyhow::bail!("selection_range must be positive, got {}", self.selection_range);
        }
        if !(self.rotation_ring_width.is_finite() && self.rotation_ring_width >= 0.0) {
            anyhow::bail!(
                "rotation_ring_width must be non-negative, got {}",
                self.rotation_ring_width
            );
        }
        if self.undo_depth == 0 {
            anyhow::bail!("undo_depth must be at least 1");
        }
        Ok(())
    }
}
