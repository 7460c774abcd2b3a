// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer capability interface.
//!
//! The geometry core stays decoupled from drawing: a [`GaugeRenderer`]
//! lowers computed geometry into marks, one hook per gauge part, and each
//! hook can be overridden independently while the rest keep the stock
//! behavior.

extern crate alloc;

use alloc::vec::Vec;

use gaugekit_core::{ArcDescriptor, GaugeLayout, TickDescriptor, polar_to_cartesian};

use crate::style::GaugeStyle;
use crate::{
    Mark, MarkId, NeedleMarkSpec, SegmentMarkSpec, TextAnchor, TextBaseline, TextMark,
    TickMarkSpec, z_order,
};

/// Everything a renderer hook needs to lower one gauge part into marks.
#[derive(Clone, Copy, Debug)]
pub struct GaugeContext<'a> {
    /// The computed geometry snapshot.
    pub layout: &'a GaugeLayout,
    /// Styling for the stock lowering.
    pub style: &'a GaugeStyle,
    /// Base for deterministic mark ids.
    pub id_base: u64,
}

/// Lowers gauge geometry into drawable marks.
///
/// Every hook has a stock implementation; override any subset to swap in
/// custom drawables for that part without re-deriving the rest.
pub trait GaugeRenderer {
    /// Marks for one segment arc.
    fn segment(&self, ctx: &GaugeContext<'_>, index: usize, arc: &ArcDescriptor) -> Vec<Mark> {
        let mut spec = SegmentMarkSpec::new(
            MarkId::from_raw(ctx.id_base + index as u64),
            ctx.layout.center,
            ctx.layout.inner_radius,
            ctx.layout.radius,
            arc.start_angle,
            arc.end_angle,
        )
        .with_fill(ctx.style.color_scale.fill(index));
        if let Some(stroke) = ctx.style.segment_stroke.clone() {
            spec = spec.with_stroke(stroke);
        }
        spec.marks()
    }

    /// Marks for one tick rule.
    fn tick(&self, ctx: &GaugeContext<'_>, index: usize, tick: &TickDescriptor) -> Vec<Mark> {
        alloc::vec![
            TickMarkSpec::new(
                MarkId::from_raw(ctx.id_base + 1000 + index as u64),
                tick.anchor,
                tick.angle,
            )
            .with_length(ctx.style.ticks.length)
            .with_stroke(ctx.style.ticks.stroke.clone())
            .mark(),
        ]
    }

    /// Marks for one tick label; empty when the tick has no text.
    fn tick_label(&self, ctx: &GaugeContext<'_>, index: usize, tick: &TickDescriptor) -> Vec<Mark> {
        let Some(text) = tick.text.clone() else {
            return Vec::new();
        };
        let labels = &ctx.style.labels;
        let pos = polar_to_cartesian(
            ctx.layout.center,
            ctx.layout.radius + 0.5 * labels.padding,
            tick.angle,
        );
        alloc::vec![Mark::text(
            MarkId::from_raw(ctx.id_base + 2000 + index as u64),
            z_order::TICK_LABELS,
            TextMark {
                pos,
                text,
                font_size: labels.font_size,
                angle: tick.label_angle,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                fill: labels.fill.clone(),
            },
        )]
    }

    /// Marks for the needle.
    fn needle(&self, ctx: &GaugeContext<'_>, rotation: f64) -> Vec<Mark> {
        alloc::vec![
            NeedleMarkSpec::new(
                MarkId::from_raw(ctx.id_base + 9000),
                ctx.layout.center,
                ctx.layout.radius,
                rotation,
            )
            .with_fill(ctx.style.needle.fill.clone())
            .with_stroke(ctx.style.needle.stroke.clone())
            .mark(),
        ]
    }
}

/// The stock renderer: every hook uses the default lowering.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultGaugeRenderer;

impl GaugeRenderer for DefaultGaugeRenderer {}
