// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick rule mark generation.
//!
//! A tick is a short radial rule drawn outward from its anchor on the
//! gauge ring. Tick labels are plain text marks built by the renderer.

use core::f64::consts::FRAC_PI_2;

use kurbo::{BezPath, Point, Vec2};
use peniko::{Brush, Color};

use crate::style::StrokeStyle;
use crate::{Mark, MarkId, PathMark, z_order};

/// A radial tick rule at a gauge angle.
#[derive(Clone, Debug)]
pub struct TickMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor point on the gauge ring, in scene coordinates.
    pub anchor: Point,
    /// Gauge angle of the tick in radians.
    pub angle: f64,
    /// Rule length in scene coordinates.
    pub length: f64,
    /// Stroke paint and width.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TickMarkSpec {
    /// Creates a new tick mark spec with the default length and stroke.
    pub fn new(id: MarkId, anchor: Point, angle: f64) -> Self {
        Self {
            id,
            anchor,
            angle,
            length: 6.0,
            stroke: StrokeStyle::default(),
            z_index: z_order::TICK_RULES,
        }
    }

    /// Sets the rule length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Sets the stroke paint and width.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the tick rule mark.
    pub fn mark(&self) -> Mark {
        // Outward unit direction at a gauge angle (x-axis convention shift).
        let outward = Vec2::from_angle(self.angle - FRAC_PI_2);
        let mut path = BezPath::new();
        path.move_to(self.anchor);
        path.line_to(self.anchor + outward * self.length);
        Mark::path(
            self.id,
            self.z_index,
            PathMark {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: self.stroke.brush.clone(),
                stroke_width: self.stroke.stroke_width,
            },
        )
    }
}
