// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Scripted session used by the binary

use crate::editing::{Canvas, UndoHistory};
use crate::render::DrawList;
use crate::settings::EditorSettings;
use crate::shapes::ShapeType;
use crate::tools::{Phase, RotateTool, Tool, ToolBox};
use anyhow::{Context, Result, bail};
use kurbo::{Point, Vec2};

/// One pointer gesture: press at the first point, drag through the rest
type Gesture = &'static [(f64, f64)];

const SCRIPT: &[(ShapeType, &[Gesture])] = &[
    (ShapeType::Line, &[&[(20.0, 20.0)], &[(120.0, 20.0), (140.0, 60.0)]]),
    (
        ShapeType::Triangle,
        &[&[(200.0, 20.0)], &[(300.0, 20.0)], &[(250.0, 100.0)]],
    ),
    (
        ShapeType::Circle,
        &[&[(400.0, 60.0)], &[(450.0, 10.0)], &[(500.0, 60.0)]],
    ),
    (
        ShapeType::Rectangle,
        &[&[(40.0, 160.0), (60.0, 180.0), (160.0, 240.0)]],
    ),
    (
        ShapeType::Freehand,
        &[
            &[(220.0, 160.0), (230.0, 170.0), (245.0, 175.0), (260.0, 190.0)],
            &[(300.0, 160.0), (310.0, 180.0), (330.0, 185.0)],
        ],
    ),
];

fn play(tool: &mut ToolBox, canvas: &mut Canvas, gesture: Gesture) {
    let mut points = gesture.iter().map(|&(x, y)| Point::new(x, y));
    let Some(location) = points.next() else {
        return;
    };
    if !tool.should_begin(location, canvas) {
        tracing::warn!("{:?} declined gesture at {:?}", tool.id(), location);
        return;
    }
    tool.update(Phase::Began { location }, canvas, None);
    for location in points {
        tool.update(Phase::Moved { location }, canvas, None);
    }
    tool.update(Phase::Ended, canvas, None);
}

pub(crate) fn run(settings: EditorSettings) -> Result<()> {
    let mut history = UndoHistory::with_depth(settings.undo_depth);
    let mut canvas = Canvas::new(settings);

    for &(shape_type, gestures) in SCRIPT {
        let mut tool = ToolBox::draw(shape_type);
        for &gesture in gestures {
            play(&mut tool, &mut canvas, gesture);
        }
        if let ToolBox::Draw(draw) = &mut tool {
            draw.finish(&mut canvas);
        }
    }
    tracing::info!("drew {} shape(s)", canvas.shapes().len());

    let rectangle = canvas
        .shapes()
        .iter()
        .find(|shape| shape.shape_type() == ShapeType::Rectangle)
        .map(|shape| shape.id())
        .context("rectangle was not committed")?;
    canvas.select(rectangle);
    let pivot = canvas
        .selected_shape()
        .and_then(|shape| shape.pivot())
        .context("rectangle has no pivot")?;

    // Grab the middle of the ring to the right of the pivot and swing it
    // down a quarter turn
    let reach = canvas.settings.selection_range + canvas.settings.rotation_ring_width / 2.0;
    let start = canvas.viewport.to_screen(pivot + Vec2::new(reach, 0.0));
    let end = canvas.viewport.to_screen(pivot + Vec2::new(0.0, reach));
    let mut rotate = RotateTool::new();
    if !rotate.should_begin(start, &canvas) {
        bail!("rotate tool declined the ring at {:?}", start);
    }
    rotate.update(Phase::Began { location: start }, &mut canvas, Some(&mut history));
    rotate.update(Phase::Moved { location: end }, &mut canvas, Some(&mut history));
    rotate.update(Phase::Ended, &mut canvas, Some(&mut history));

    let angle = |canvas: &Canvas| {
        canvas
            .shape(rectangle)
            .map(|shape| shape.rotation_angle().degrees())
            .unwrap_or_default()
    };
    tracing::info!("rotated {} to {:.1}°", rectangle, angle(&canvas));

    history.undo(&mut canvas)?;
    tracing::info!("after undo: {:.1}°", angle(&canvas));
    history.redo(&mut canvas)?;
    tracing::info!("after redo: {:.1}°", angle(&canvas));

    let mut list = DrawList::new();
    canvas.draw(&mut list);
    if rotate.should_draw(&canvas) {
        rotate.draw(&canvas, &mut list);
    }
    tracing::info!("rendered {} draw command(s)", list.len());
    Ok(())
}
