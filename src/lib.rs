// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Pivotal: constrained multi-point shapes with pivot rotation
//!
//! Shapes are built from ordered control points (a `Layout`). Each shape
//! kind declares how many points it takes, which points are bound to move
//! together, how it is drawn and how it is hit. A shape rotates about a
//! pivot that is either fixed or anchored to one of its points; the rotate
//! tool moves the pivot and sets the angle, and records reversible edits.

use anyhow::Result;
use std::path::PathBuf;

pub mod constraints;
mod demo;
pub mod editing;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod render;
pub mod settings;
pub mod shapes;
pub mod theme;
pub mod tools;

pub use editing::{Canvas, Edit, InteractionMode, UndoHistory, ViewPort};
pub use error::{CanvasError, LayoutError};
pub use geometry::{Angle, HitTarget};
pub use layout::{ItemPosition, Layout, LayoutAction, PointDescriptor};
pub use model::{Shape, ShapeId};
pub use settings::EditorSettings;
pub use shapes::ShapeType;
pub use tools::{Phase, Tool, ToolBox, ToolId};

/// Entry point for the Pivotal demo
pub fn run(settings_path: Option<PathBuf>) -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pivotal=info".parse()?),
        )
        .init();

    let settings = match settings_path {
        Some(path) => {
            tracing::info!("Loading settings from: {}", path.display());
            EditorSettings::load(&path)?
        }
        None => EditorSettings::default(),
    };
    demo::run(settings)
}
