// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain resolution.
//!
//! The gauge's numeric domain is inferred from the union of the explicit
//! domain (if any), the segment boundary values, and the tick values, so a
//! gauge stays well-formed no matter which subset of those inputs the
//! caller provides.

/// The numeric value range a gauge represents, mapped onto its angular
/// sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    /// Smallest domain value.
    pub min: f64,
    /// Largest domain value.
    pub max: f64,
}

impl Domain {
    /// Creates a domain from explicit bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the domain in data units.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Resolves a domain from the union of an explicit domain, segment
    /// boundary values, and tick values.
    ///
    /// Non-finite values are ignored. When the union collapses to a single
    /// value, the side closer to zero is anchored there: a non-negative
    /// value becomes the maximum of `[0, v]`, a negative value the minimum
    /// of `[v, 0]`. Returns `None` when no finite value is present.
    pub fn resolve(
        explicit: Option<(f64, f64)>,
        segments: &[f64],
        ticks: &[f64],
    ) -> Option<Self> {
        let explicit_bounds = explicit.map(|(a, b)| [a, b]);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let values = ticks
            .iter()
            .chain(segments.iter())
            .chain(explicit_bounds.iter().flatten());
        for &v in values {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        if min == max {
            if min >= 0.0 {
                min = 0.0;
            } else {
                max = 0.0;
            }
        }
        Some(Self { min, max })
    }
}
