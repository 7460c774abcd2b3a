// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart divisions.
//!
//! A division is the width between two consecutive boundary values. A full
//! set of divisions covers the domain exactly once, and drives both segment
//! arcs and tick placement.

extern crate alloc;

use alloc::vec::Vec;

use crate::Domain;

/// Converts boundary `values` into consecutive span widths covering
/// `domain`.
///
/// Values are sorted ascending first (non-finite entries are skipped). The
/// first span is measured from `domain.min`, and a trailing span is
/// appended when the last value falls short of `domain.max`, so divisions
/// always reach the end of the domain. With no values at all, ticks get no
/// implicit span while segments get a single full-domain default.
pub fn chart_divisions(values: &[f64], domain: Domain, is_ticks: bool) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    if sorted.is_empty() {
        return if is_ticks {
            Vec::new()
        } else {
            alloc::vec![domain.max]
        };
    }

    let mut spans = Vec::with_capacity(sorted.len() + 1);
    let mut previous = domain.min;
    for &value in &sorted {
        spans.push(value - previous);
        previous = value;
    }
    if domain.max - previous > 0.0 {
        spans.push(domain.max - previous);
    }
    spans
}
