// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular layout.
//!
//! Span widths are laid out as contiguous pie-style arcs between the
//! configured start and end angles, in input order (never sorted by value),
//! following the d3 pie layout contract.

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::TAU;

use crate::Domain;

/// One laid-out arc, in radians.
///
/// Arcs are contiguous: each `start_angle` equals the previous arc's
/// `end_angle`, and together they span the whole angular window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcDescriptor {
    /// Start angle in radians, measured from 12 o'clock, clockwise.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// The span width this arc was laid out from, in data units.
    pub data: f64,
}

impl ArcDescriptor {
    /// Signed angular width of this arc in radians.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// One endpoint of the rendered gauge sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeBound {
    /// Domain value at this endpoint.
    pub value: f64,
    /// Angle of this endpoint in degrees.
    pub degrees: f64,
}

/// The angular extent actually covered by the rendered segment arcs.
///
/// This can differ from the nominal start/end configuration: sweeps wider
/// than a full turn are clamped during layout, so the needle scale anchors
/// to the first and last rendered arc instead of the raw angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeRange {
    /// Rendered minimum (first arc start).
    pub minimum: GaugeBound,
    /// Rendered maximum (last arc end).
    pub maximum: GaugeBound,
}

impl GaugeRange {
    /// Derives the rendered range from the segment arcs.
    ///
    /// Falls back to the nominal angles when no arcs were produced.
    pub fn from_arcs(
        arcs: &[ArcDescriptor],
        domain: Domain,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        let (min_degrees, max_degrees) = match (arcs.first(), arcs.last()) {
            (Some(first), Some(last)) => (
                first.start_angle.to_degrees(),
                last.end_angle.to_degrees(),
            ),
            _ => (start_angle, end_angle),
        };
        Self {
            minimum: GaugeBound {
                value: domain.min,
                degrees: min_degrees,
            },
            maximum: GaugeBound {
                value: domain.max,
                degrees: max_degrees,
            },
        }
    }
}

/// Lays out `spans` as contiguous arcs within `[start_angle, end_angle]`.
///
/// Angles are degrees; the sweep is clamped to one full turn in either
/// direction. Each arc's width is proportional to its span relative to the
/// sum of positive spans, with `pad_angle` folded into every arc (the
/// visual separation materializes when sectors are inset at render time).
/// Non-positive spans produce zero-width arcs, and a zero sum collapses
/// every arc to the pad width alone.
pub fn angular_layout(
    spans: &[f64],
    start_angle: f64,
    end_angle: f64,
    pad_angle: f64,
) -> Vec<ArcDescriptor> {
    let n = spans.len();
    if n == 0 {
        return Vec::new();
    }
    let a0 = start_angle.to_radians();
    let da = (end_angle.to_radians() - a0).clamp(-TAU, TAU);
    let p = (da.abs() / n as f64).min(pad_angle.max(0.0).to_radians());
    let pa = if da < 0.0 { -p } else { p };
    let sum: f64 = spans.iter().copied().filter(|v| *v > 0.0).sum();
    let k = if sum > 0.0 {
        (da - n as f64 * pa) / sum
    } else {
        0.0
    };

    let mut arcs = Vec::with_capacity(n);
    let mut start = a0;
    for &span in spans {
        let end = start + if span > 0.0 { span * k } else { 0.0 } + pa;
        arcs.push(ArcDescriptor {
            start_angle: start,
            end_angle: end,
            data: span,
        });
        start = end;
    }
    arcs
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::PI;

    use super::*;

    fn total_sweep(arcs: &[ArcDescriptor]) -> f64 {
        arcs.iter().map(ArcDescriptor::sweep).sum()
    }

    #[test]
    fn arcs_are_contiguous_and_fill_the_window() {
        let arcs = angular_layout(&[1.0, 2.0, 3.0], -90.0, 90.0, 0.0);
        assert_eq!(arcs.len(), 3);
        for pair in arcs.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
        }
        assert!((arcs[0].start_angle - (-PI / 2.0)).abs() < 1e-12);
        assert!((arcs[2].end_angle - PI / 2.0).abs() < 1e-12);
        assert!((total_sweep(&arcs) - PI).abs() < 1e-12);
    }

    #[test]
    fn input_order_is_preserved() {
        let arcs = angular_layout(&[3.0, 1.0, 2.0], 0.0, 180.0, 0.0);
        let widths: alloc::vec::Vec<f64> = arcs.iter().map(ArcDescriptor::sweep).collect();
        assert!(widths[0] > widths[2]);
        assert!(widths[2] > widths[1]);
        assert_eq!(arcs[1].data, 1.0);
    }

    #[test]
    fn pad_angle_is_folded_into_each_arc() {
        let arcs = angular_layout(&[1.0, 1.0], -90.0, 90.0, 10.0);
        let pad = 10.0_f64.to_radians();
        assert!((total_sweep(&arcs) - PI).abs() < 1e-12);
        // Both spans are equal, so both arcs carry span * k + pad.
        assert!((arcs[0].sweep() - arcs[1].sweep()).abs() < 1e-12);
        assert!((arcs[0].sweep() - (PI - 2.0 * pad) / 2.0 - pad).abs() < 1e-12);
    }

    #[test]
    fn zero_sum_collapses_arcs_to_zero_width() {
        let arcs = angular_layout(&[0.0, 0.0], -90.0, 90.0, 0.0);
        assert_eq!(arcs.len(), 2);
        for arc in &arcs {
            assert_eq!(arc.sweep(), 0.0);
            assert!((arc.start_angle - (-PI / 2.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn sweep_is_clamped_to_one_full_turn() {
        let arcs = angular_layout(&[1.0], 0.0, 540.0, 0.0);
        assert!((total_sweep(&arcs) - TAU).abs() < 1e-12);
    }

    #[test]
    fn reversed_window_produces_negative_sweeps() {
        let arcs = angular_layout(&[1.0, 1.0], 180.0, 0.0, 0.0);
        assert!((total_sweep(&arcs) + PI).abs() < 1e-12);
        assert!(arcs[0].sweep() < 0.0);
        assert!((arcs[0].start_angle - PI).abs() < 1e-12);
        assert!(arcs[1].end_angle.abs() < 1e-12);
    }

    #[test]
    fn negative_spans_get_zero_width() {
        let arcs = angular_layout(&[-5.0, 10.0], -90.0, 90.0, 0.0);
        assert_eq!(arcs[0].sweep(), 0.0);
        assert!((arcs[1].sweep() - PI).abs() < 1e-12);
    }

    #[test]
    fn gauge_range_tracks_first_and_last_arc() {
        let arcs = angular_layout(&[1.0, 1.0], 0.0, 540.0, 0.0);
        let range = GaugeRange::from_arcs(&arcs, Domain::new(0.0, 100.0), 0.0, 540.0);
        assert!((range.minimum.degrees - 0.0).abs() < 1e-9);
        // The clamped sweep ends a full turn in, not at the nominal 540.
        assert!((range.maximum.degrees - 360.0).abs() < 1e-9);
        assert_eq!(range.minimum.value, 0.0);
        assert_eq!(range.maximum.value, 100.0);
    }

    #[test]
    fn gauge_range_falls_back_to_nominal_angles() {
        let range = GaugeRange::from_arcs(&[], Domain::new(0.0, 1.0), -90.0, 90.0);
        assert_eq!(range.minimum.degrees, -90.0);
        assert_eq!(range.maximum.degrees, 90.0);
    }
}
