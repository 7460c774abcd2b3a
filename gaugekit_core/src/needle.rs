// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Needle rotation.

use crate::{Domain, GaugeRange, ScaleLinear};

/// Maps `data` through `domain` onto the rendered gauge sweep, in degrees.
///
/// The rotation is clamped to the sweep using the unordered min/max of its
/// endpoints, so reversed gauges clamp correctly; data outside the domain
/// pins the needle to an endpoint rather than erroring.
pub fn needle_rotation(data: f64, domain: Domain, range: &GaugeRange) -> f64 {
    let scale = ScaleLinear::new(
        domain,
        (range.minimum.degrees, range.maximum.degrees),
    );
    let rotation = scale.map(data);
    let lo = range.minimum.degrees.min(range.maximum.degrees);
    let hi = range.minimum.degrees.max(range.maximum.degrees);
    rotation.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::GaugeBound;

    fn range(min_degrees: f64, max_degrees: f64) -> GaugeRange {
        GaugeRange {
            minimum: GaugeBound {
                value: 0.0,
                degrees: min_degrees,
            },
            maximum: GaugeBound {
                value: 100.0,
                degrees: max_degrees,
            },
        }
    }

    #[test]
    fn interpolates_linearly() {
        let r = range(-90.0, 90.0);
        let domain = Domain::new(0.0, 100.0);
        assert!((needle_rotation(60.0, domain, &r) - 18.0).abs() < 1e-9);
        assert!((needle_rotation(50.0, domain, &r) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_data_beyond_the_domain() {
        let r = range(-90.0, 90.0);
        let domain = Domain::new(0.0, 100.0);
        assert_eq!(needle_rotation(150.0, domain, &r), 90.0);
        assert_eq!(needle_rotation(-10.0, domain, &r), -90.0);
    }

    #[test]
    fn rotation_is_monotonic_in_data() {
        let r = range(-90.0, 90.0);
        let domain = Domain::new(0.0, 100.0);
        let mut previous = f64::NEG_INFINITY;
        for i in 0..=20 {
            let rotation = needle_rotation(f64::from(i) * 10.0 - 50.0, domain, &r);
            assert!(rotation >= previous);
            previous = rotation;
        }
    }

    #[test]
    fn reversed_range_clamps_and_descends() {
        let r = range(180.0, 0.0);
        let domain = Domain::new(0.0, 100.0);
        assert!((needle_rotation(25.0, domain, &r) - 135.0).abs() < 1e-9);
        // Non-increasing in data when the sweep runs backwards.
        assert!(needle_rotation(80.0, domain, &r) < needle_rotation(20.0, domain, &r));
        assert_eq!(needle_rotation(500.0, domain, &r), 0.0);
        assert_eq!(needle_rotation(-500.0, domain, &r), 180.0);
    }

    #[test]
    fn degenerate_domain_rests_at_the_range_start() {
        let r = range(-90.0, 90.0);
        assert_eq!(needle_rotation(42.0, Domain::new(0.0, 0.0), &r), -90.0);
    }
}
