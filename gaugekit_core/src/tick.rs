// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick placement.
//!
//! Tick values (explicit or count-derived) run through the same division
//! and angular machinery as segments; the resulting arcs' end angles,
//! deduplicated, are the tick positions. Each position gets a Cartesian
//! anchor on the gauge radius and a label angle normalized to keep text
//! upright.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{Domain, GaugeSpec, TickFormat, angular_layout, chart_divisions};

/// Lower edge of the near-vertical label dead zone, in degrees.
const LABEL_SNAP_MIN: f64 = 80.0;
/// Upper edge of the near-vertical label dead zone, in degrees.
const LABEL_SNAP_MAX: f64 = 110.0;

/// One placed tick: angular position, Cartesian anchor, label orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct TickDescriptor {
    /// The tick's data value, when one maps to this position.
    pub value: Option<f64>,
    /// Angular position in radians.
    pub angle: f64,
    /// Anchor point on the gauge radius, in scene coordinates.
    pub anchor: Point,
    /// Label rotation in degrees, normalized for upright text.
    pub label_angle: f64,
    /// Display text, when a value or explicit label maps to this position.
    pub text: Option<String>,
}

/// Converts a gauge angle to scene coordinates at `radius` from `center`.
///
/// Gauge angles measure from 12 o'clock, clockwise, with y growing down.
pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.sin(),
        center.y - radius * angle.cos(),
    )
}

/// Normalizes a raw tick angle (degrees) into a label rotation.
///
/// Magnitudes strictly inside the near-vertical dead zone snap to 0 so the
/// label stays upright instead of sideways; exactly +/-90 falls through to
/// the flip rules. Past +/-90 the label flips by a half turn to stay
/// right-side-up on the lower half of the circle.
pub fn normalize_label_angle(angle: f64) -> f64 {
    let magnitude = angle.abs();
    if magnitude != 90.0 && magnitude > LABEL_SNAP_MIN && magnitude < LABEL_SNAP_MAX {
        return 0.0;
    }
    if angle > 90.0 {
        angle + 180.0
    } else if angle < -90.0 {
        angle - 180.0
    } else {
        angle
    }
}

/// Places ticks for `spec` against the resolved `domain`, anchored at
/// `radius` from `center`.
///
/// Explicit tick values win over `tick_count`; count mode generates that
/// many interior values over equal subdivisions of the domain, excluding
/// both endpoints. Returns one descriptor per deduplicated position.
pub fn place_ticks(
    spec: &GaugeSpec,
    domain: Domain,
    center: Point,
    radius: f64,
) -> Vec<TickDescriptor> {
    let values = tick_values(spec, domain);
    let spans = chart_divisions(&values, domain, true);
    let arcs = angular_layout(&spans, spec.start_angle, spec.end_angle, spec.pad_angle);
    if arcs.is_empty() {
        return Vec::new();
    }

    // Division arcs share end angles where boundary values coincide;
    // collapse those, then drop the closing boundary the trailing span
    // introduced.
    let mut angles: Vec<f64> = arcs.iter().map(|arc| arc.end_angle).collect();
    angles.dedup();
    if angles.len() > values.len() {
        angles.pop();
    }

    angles
        .into_iter()
        .enumerate()
        .map(|(index, angle)| {
            let value = values.get(index).copied();
            TickDescriptor {
                value,
                angle,
                anchor: polar_to_cartesian(center, radius, angle),
                label_angle: normalize_label_angle(angle.to_degrees()),
                text: tick_text(spec, value, index),
            }
        })
        .collect()
}

fn tick_values(spec: &GaugeSpec, domain: Domain) -> Vec<f64> {
    if !spec.tick_values.is_empty() {
        let mut values: Vec<f64> = spec
            .tick_values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        values.sort_by(f64::total_cmp);
        return values;
    }
    match spec.tick_count {
        Some(count) if count > 0 => {
            let step = domain.span() / (count + 1) as f64;
            (1..=count).map(|i| domain.min + step * i as f64).collect()
        }
        _ => Vec::new(),
    }
}

fn tick_text(spec: &GaugeSpec, value: Option<f64>, index: usize) -> Option<String> {
    match &spec.tick_format {
        Some(TickFormat::Labels(labels)) => labels.get(index).cloned(),
        Some(TickFormat::Formatter(format)) => value.map(|v| format(v)),
        None => value.map(|v| v.to_string()),
    }
}
