// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed layout pipeline.
//!
//! [`GaugeLayout::arrange`] runs every stage in order: radius resolution,
//! domain resolution, segment divisions, angular layout, tick placement,
//! and needle rotation. The result is a complete geometry snapshot with no
//! ties back to the spec.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::{
    ArcDescriptor, Domain, GaugeRange, GaugeSpec, Padding, TickDescriptor, angular_layout,
    chart_divisions, needle_rotation, place_ticks, resolve_radius,
};

/// A complete geometry snapshot for one gauge render.
///
/// Everything is recomputed from the spec on each call; nothing persists or
/// is mutated across renders.
#[derive(Clone, Debug)]
pub struct GaugeLayout {
    /// Resolved numeric domain.
    pub domain: Domain,
    /// Usable drawing radius (outer edge of the segment ring).
    pub radius: f64,
    /// Inner ring radius, clamped to `[0, radius]`.
    pub inner_radius: f64,
    /// Padding after the re-centering adjustment.
    pub padding: Padding,
    /// Gauge center in scene coordinates.
    pub center: Point,
    /// Segment arcs in input order.
    pub arcs: Vec<ArcDescriptor>,
    /// Angular extent actually covered by the segment arcs.
    pub gauge_range: GaugeRange,
    /// Placed ticks.
    pub ticks: Vec<TickDescriptor>,
    /// Needle rotation in degrees.
    pub needle_rotation: f64,
}

impl GaugeLayout {
    /// Computes a layout from the provided specification.
    ///
    /// Invalid numeric configuration is normalized rather than rejected:
    /// negative sizes and radii clamp to zero, a reversed explicit domain
    /// is reordered during resolution, and with no numeric inputs at all
    /// the gauge falls back to a unit domain with one full-sweep segment.
    pub fn arrange(spec: &GaugeSpec) -> Self {
        let outer_radius = spec.outer_radius.max(0.0);
        let extent = resolve_radius(
            spec.width.max(0.0),
            spec.height.max(0.0),
            outer_radius,
            spec.padding,
        );
        let inner_radius = spec.inner_radius.clamp(0.0, extent.radius);

        let domain = Domain::resolve(spec.domain, &spec.segments, &spec.tick_values)
            .unwrap_or(Domain::new(0.0, 1.0));

        let spans = chart_divisions(&spec.segments, domain, false);
        let arcs = angular_layout(&spans, spec.start_angle, spec.end_angle, spec.pad_angle);
        let gauge_range = GaugeRange::from_arcs(&arcs, domain, spec.start_angle, spec.end_angle);

        let ticks = place_ticks(spec, domain, extent.center, extent.radius);

        let data = match &spec.data_accessor {
            Some(accessor) => accessor(spec.data),
            None => spec.data,
        };

        Self {
            domain,
            radius: extent.radius,
            inner_radius,
            padding: extent.padding,
            center: extent.center,
            arcs,
            gauge_range,
            ticks,
            needle_rotation: needle_rotation(data, domain, &gauge_range),
        }
    }
}
