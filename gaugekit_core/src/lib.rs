// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout/geometry engine for radial gauge charts.
//!
//! This crate is the pure computation half of GaugeKit:
//! - **Domains** are inferred from explicit bounds, segment boundary values,
//!   and tick values.
//! - **Divisions** turn sorted boundary values into consecutive span widths
//!   covering the domain exactly once.
//! - **Angular layout** maps spans onto contiguous pie-style arcs between
//!   the configured start and end angles.
//! - **Ticks** and the **needle** are placed against the rendered arcs, not
//!   the nominal configuration.
//!
//! Everything here is a deterministic function from a [`GaugeSpec`] to a
//! [`GaugeLayout`] snapshot, recomputed from scratch on every call. Paints,
//! drawable marks, and renderers live downstream in `gaugekit_marks`.

#![no_std]

extern crate alloc;

mod angular;
mod config;
mod division;
mod domain;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod needle;
mod radius;
mod scale;
mod tick;

pub use angular::{ArcDescriptor, GaugeBound, GaugeRange, angular_layout};
pub use config::{GaugeSpec, Padding, TickFormat};
pub use division::chart_divisions;
pub use domain::Domain;
pub use layout::GaugeLayout;
pub use needle::needle_rotation;
pub use radius::{RadialExtent, resolve_radius};
pub use scale::ScaleLinear;
pub use tick::{TickDescriptor, normalize_label_angle, place_ticks, polar_to_cartesian};
