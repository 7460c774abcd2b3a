// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Needle mark generation.

use kurbo::{Affine, BezPath, Point};
use peniko::Brush;
use peniko::color::palette::css;

use crate::style::StrokeStyle;
use crate::{Mark, MarkId, PathMark, z_order};

/// The needle pointer, rotated about the gauge center.
///
/// The default outline is the classic gauge needle: a rounded butt around
/// the center and an apex `height` out at 12 o'clock, before rotation.
#[derive(Clone, Debug)]
pub struct NeedleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Gauge center in scene coordinates.
    pub center: Point,
    /// Distance from the center to the needle apex.
    pub height: f64,
    /// Rotation in degrees, clockwise from 12 o'clock.
    pub rotation: f64,
    /// Fill paint for the needle body.
    pub fill: Brush,
    /// Outline stroke.
    pub stroke: StrokeStyle,
    /// Custom outline in center-local coordinates, replacing the default.
    pub outline: Option<BezPath>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl NeedleMarkSpec {
    /// Creates a new needle mark spec with the default outline and style.
    pub fn new(id: MarkId, center: Point, height: f64, rotation: f64) -> Self {
        Self {
            id,
            center,
            height,
            rotation,
            fill: css::RED.into(),
            stroke: StrokeStyle::solid(css::BLACK, 0.5),
            outline: None,
            z_index: z_order::NEEDLE,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Replaces the default outline with a custom center-local path.
    ///
    /// The path is still rotated by `rotation` and translated to the
    /// center; `height` is ignored.
    pub fn with_outline(mut self, outline: BezPath) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the needle mark.
    pub fn mark(&self) -> Mark {
        let mut path = match &self.outline {
            Some(outline) => outline.clone(),
            None => default_outline(self.height.max(0.0)),
        };
        path.apply_affine(
            Affine::translate(self.center.to_vec2()) * Affine::rotate(self.rotation.to_radians()),
        );
        Mark::path(
            self.id,
            self.z_index,
            PathMark {
                path,
                fill: self.fill.clone(),
                stroke: self.stroke.brush.clone(),
                stroke_width: self.stroke.stroke_width,
            },
        )
    }
}

/// The stock needle outline, pointing at 12 o'clock in center-local
/// coordinates.
fn default_outline(height: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 5.0));
    path.curve_to((-1.0, 5.0), (-4.0, 3.0), (-6.0, 0.0));
    path.line_to((0.0, -height));
    path.line_to((6.0, 0.0));
    path.curve_to((4.0, 3.0), (1.0, 5.0), (0.0, 5.0));
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape;

    use super::*;
    use crate::MarkPayload;

    fn path_of(mark: &Mark) -> &BezPath {
        match &mark.payload {
            MarkPayload::Path(p) => &p.path,
            MarkPayload::Text(_) => panic!("expected path payload"),
        }
    }

    #[test]
    fn unrotated_needle_points_up() {
        let mark = NeedleMarkSpec::new(MarkId::from_raw(9), Point::new(200.0, 200.0), 150.0, 0.0)
            .mark();
        let bounds = path_of(&mark).bounding_box();
        assert!((bounds.y0 - 50.0).abs() < 1e-9);
        assert!(bounds.y1 <= 206.0);
        assert!((bounds.x0 - 194.0).abs() < 1e-6);
        assert!((bounds.x1 - 206.0).abs() < 1e-6);
    }

    #[test]
    fn quarter_turn_points_right() {
        let mark = NeedleMarkSpec::new(MarkId::from_raw(9), Point::new(200.0, 200.0), 150.0, 90.0)
            .mark();
        let bounds = path_of(&mark).bounding_box();
        // The apex lands a full needle height to the right of the center.
        assert!((bounds.x1 - 350.0).abs() < 1e-9);
        assert!(bounds.x0 >= 193.0);
    }

    #[test]
    fn custom_outline_replaces_the_default() {
        let mut outline = BezPath::new();
        outline.move_to((0.0, 0.0));
        outline.line_to((0.0, -10.0));
        let mark = NeedleMarkSpec::new(MarkId::from_raw(9), Point::ZERO, 150.0, 0.0)
            .with_outline(outline)
            .mark();
        let bounds = path_of(&mark).bounding_box();
        assert!((bounds.y0 + 10.0).abs() < 1e-9);
        assert_eq!(bounds.y1, 0.0);
    }

    #[test]
    fn needle_draws_above_everything() {
        let mark = NeedleMarkSpec::new(MarkId::from_raw(9), Point::ZERO, 10.0, 0.0).mark();
        assert_eq!(mark.z_index, z_order::NEEDLE);
    }
}
