// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment (annular sector) mark generation.
//!
//! Each gauge segment is one annular sector between the inner and outer
//! ring radii.

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::{Brush, Color};

use crate::style::StrokeStyle;
use crate::{Mark, MarkId, PathMark, z_order};

/// An annular sector covering one gauge segment.
///
/// Angles are gauge radians (measured from 12 o'clock, clockwise); the
/// shift to kurbo's positive-x-axis convention happens at path
/// construction.
#[derive(Clone, Debug)]
pub struct SegmentMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Gauge center in scene coordinates.
    pub center: Point,
    /// Inner radius in scene coordinates (0 for a solid slice).
    pub inner_radius: f64,
    /// Outer radius in scene coordinates.
    pub outer_radius: f64,
    /// Start angle in gauge radians.
    pub start_angle: f64,
    /// End angle in gauge radians.
    pub end_angle: f64,
    /// Fill paint for the sector.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Curve flattening tolerance when converting the sector to a path.
    pub tolerance: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl SegmentMarkSpec {
    /// Creates a new segment mark spec.
    pub fn new(
        id: MarkId,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            id,
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill: Brush::default(),
            stroke: None,
            tolerance: 0.1,
            z_index: z_order::SEGMENTS,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the curve flattening tolerance used for path conversion.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates marks for this spec.
    pub fn marks(&self) -> Vec<Mark> {
        let circle = Circle::new(self.center, self.outer_radius);
        let sweep = self.end_angle - self.start_angle;
        // kurbo measures angles from the positive x-axis; gauge angles
        // measure from 12 o'clock.
        let segment = circle.segment(self.inner_radius, self.start_angle - FRAC_PI_2, sweep);
        let path: BezPath = segment.path_elements(self.tolerance).collect();

        let (stroke, stroke_width) = match &self.stroke {
            Some(stroke) => (stroke.brush.clone(), stroke.stroke_width),
            None => (Brush::Solid(Color::TRANSPARENT), 0.0),
        };
        alloc::vec![Mark::path(
            self.id,
            self.z_index,
            PathMark {
                path,
                fill: self.fill.clone(),
                stroke,
                stroke_width,
            },
        )]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::FRAC_PI_2;

    use kurbo::Shape;
    use peniko::color::palette::css;

    use super::*;
    use crate::MarkPayload;

    #[test]
    fn segment_emits_a_path_mark_with_bounds() {
        let marks = SegmentMarkSpec::new(
            MarkId::from_raw(1),
            Point::new(50.0, 50.0),
            10.0,
            20.0,
            0.0,
            FRAC_PI_2,
        )
        .with_fill(css::TOMATO)
        .with_stroke(StrokeStyle::solid(css::WHITE, 2.0))
        .marks();

        let [mark] = &marks[..] else {
            panic!("expected a single mark");
        };
        assert_eq!(mark.id, MarkId::from_raw(1));
        assert_eq!(mark.z_index, z_order::SEGMENTS);
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.fill, css::TOMATO.into());
        assert_eq!(p.stroke, css::WHITE.into());
        assert_eq!(p.stroke_width, 2.0);
        assert_ne!(p.path.bounding_box(), kurbo::Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn segment_without_stroke_has_zero_stroke_width() {
        let marks = SegmentMarkSpec::new(
            MarkId::from_raw(1),
            Point::ZERO,
            0.0,
            10.0,
            0.0,
            core::f64::consts::PI,
        )
        .with_fill(Color::TRANSPARENT)
        .marks();

        let [mark] = &marks[..] else {
            panic!("expected a single mark");
        };
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.stroke_width, 0.0);
    }

    #[test]
    fn gauge_angles_start_at_twelve_o_clock() {
        // A sector from 0 to 90 gauge degrees lives in the upper-right
        // quadrant relative to the center.
        let marks = SegmentMarkSpec::new(
            MarkId::from_raw(1),
            Point::ZERO,
            0.0,
            10.0,
            0.0,
            FRAC_PI_2,
        )
        .marks();
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected path payload");
        };
        let bounds = p.path.bounding_box();
        assert!(bounds.x1 > 9.0);
        assert!(bounds.y0 < -9.0);
        assert!(bounds.x0 >= -1e-6);
        assert!(bounds.y1 <= 1e-6);
    }
}
