// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable-mark generation for `gaugekit_core` layouts.
//!
//! This crate lowers the geometry computed by `gaugekit_core` into
//! renderer-agnostic drawable primitives:
//! - a small **mark IR** (paths and unshaped text with stable ids and a
//!   coarse z-order),
//! - **mark specs** for each gauge part (segment sectors, tick rules, the
//!   needle),
//! - a [`GaugeRenderer`] capability trait with a stock implementation and a
//!   per-part override point,
//! - a [`GaugeChart`] composer producing `(GaugeLayout, Vec<Mark>)` in one
//!   call.
//!
//! Actual drawing (SVG, canvas, GPU) stays downstream; marks carry only
//! geometry and paint.

#![no_std]

extern crate alloc;

mod gauge;
mod mark;
mod needle_mark;
mod renderer;
mod segment_mark;
mod style;
mod tick_mark;
mod z_order;

pub use gauge::GaugeChart;
pub use mark::{Mark, MarkId, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark};
pub use needle_mark::NeedleMarkSpec;
pub use renderer::{DefaultGaugeRenderer, GaugeContext, GaugeRenderer};
pub use segment_mark::SegmentMarkSpec;
pub use style::{ColorScale, GaugeStyle, LabelStyle, NeedleStyle, StrokeStyle, TickStyle};
pub use tick_mark::TickMarkSpec;
pub use z_order::*;
