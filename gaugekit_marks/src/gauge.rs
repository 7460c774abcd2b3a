// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge chart composition.
//!
//! [`GaugeChart`] owns a geometry spec and a style, and produces the full
//! mark list in one call: segments, ticks, tick labels, then the needle.

extern crate alloc;

use alloc::vec::Vec;

use gaugekit_core::{GaugeLayout, GaugeSpec};

use crate::Mark;
use crate::renderer::{DefaultGaugeRenderer, GaugeContext, GaugeRenderer};
use crate::style::GaugeStyle;

/// A composed gauge: configuration plus styling, lowered to marks in one
/// call.
#[derive(Clone, Debug)]
pub struct GaugeChart {
    /// Geometry configuration.
    pub spec: GaugeSpec,
    /// Styling for the default renderer.
    pub style: GaugeStyle,
    /// Stable-id base; each generated mark uses a deterministic offset from
    /// this base.
    pub id_base: u64,
}

impl GaugeChart {
    /// Creates a chart from a spec with default styling.
    pub fn new(spec: GaugeSpec) -> Self {
        Self {
            spec,
            style: GaugeStyle::default(),
            id_base: 1,
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: GaugeStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the stable-id base.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Computes the geometry snapshot for the current spec.
    pub fn layout(&self) -> GaugeLayout {
        GaugeLayout::arrange(&self.spec)
    }

    /// Computes layout and lowers it with the stock renderer.
    pub fn marks(&self) -> (GaugeLayout, Vec<Mark>) {
        self.marks_with(&DefaultGaugeRenderer)
    }

    /// Computes layout and lowers it with an injected renderer.
    pub fn marks_with(&self, renderer: &dyn GaugeRenderer) -> (GaugeLayout, Vec<Mark>) {
        let layout = self.layout();
        let ctx = GaugeContext {
            layout: &layout,
            style: &self.style,
            id_base: self.id_base,
        };

        let mut marks = Vec::new();
        for (index, arc) in layout.arcs.iter().enumerate() {
            marks.extend(renderer.segment(&ctx, index, arc));
        }
        for (index, tick) in layout.ticks.iter().enumerate() {
            marks.extend(renderer.tick(&ctx, index, tick));
            marks.extend(renderer.tick_label(&ctx, index, tick));
        }
        marks.extend(renderer.needle(&ctx, layout.needle_rotation));

        (layout, marks)
    }
}
