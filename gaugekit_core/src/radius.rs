// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius resolution.

use kurbo::Point;

use crate::Padding;

/// Resolved drawing extent: usable radius, adjusted padding, and center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialExtent {
    /// Usable drawing radius in pixels.
    pub radius: f64,
    /// Padding after the re-centering adjustment.
    pub padding: Padding,
    /// Gauge center in scene coordinates.
    pub center: Point,
}

/// Computes the usable radius for a `width` x `height` drawing area.
///
/// When the configured `outer_radius` is smaller than the available space,
/// the surplus moves into the left padding of the returned extent so the
/// gauge stays centered. The caller's padding is never modified; the
/// adjustment exists only in the returned copy.
pub fn resolve_radius(width: f64, height: f64, outer_radius: f64, padding: Padding) -> RadialExtent {
    let max_radius = (width - padding.left - padding.right)
        .min(height - padding.top - padding.bottom)
        .max(0.0)
        / 2.0;
    let mut padding = padding;
    if outer_radius < max_radius {
        padding.left += max_radius - outer_radius;
    }
    let radius = outer_radius.min(max_radius);
    RadialExtent {
        radius,
        padding,
        center: Point::new(radius + padding.left, radius + padding.top),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn radius_is_limited_by_the_padded_area() {
        let extent = resolve_radius(400.0, 400.0, 300.0, Padding::uniform(30.0));
        assert_eq!(extent.radius, 170.0);
        assert_eq!(extent.padding, Padding::uniform(30.0));
        assert_eq!(extent.center, Point::new(200.0, 200.0));
    }

    #[test]
    fn small_outer_radius_recenters_via_left_padding() {
        let extent = resolve_radius(400.0, 400.0, 100.0, Padding::uniform(30.0));
        assert_eq!(extent.radius, 100.0);
        assert_eq!(extent.padding.left, 100.0);
        assert_eq!(extent.padding.right, 30.0);
        assert_eq!(extent.center, Point::new(200.0, 130.0));
    }

    #[test]
    fn input_padding_is_left_untouched() {
        let padding = Padding::uniform(30.0);
        let _ = resolve_radius(400.0, 400.0, 100.0, padding);
        assert_eq!(padding, Padding::uniform(30.0));
    }

    #[test]
    fn narrow_areas_bind_on_the_smaller_dimension() {
        let extent = resolve_radius(400.0, 200.0, 300.0, Padding::uniform(10.0));
        assert_eq!(extent.radius, 90.0);
    }

    #[test]
    fn oversized_padding_collapses_the_radius() {
        let extent = resolve_radius(100.0, 100.0, 170.0, Padding::uniform(80.0));
        assert_eq!(extent.radius, 0.0);
    }
}
