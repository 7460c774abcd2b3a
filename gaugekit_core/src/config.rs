// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge configuration.
//!
//! Defaults live on the spec struct itself, not in hidden global state, and
//! every computation stage receives the spec explicitly.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// Per-side padding between the chart edge and rendered content, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    /// Top padding.
    pub top: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
    /// Right padding.
    pub right: f64,
}

impl Padding {
    /// Uniform padding on all four sides.
    pub fn uniform(pad: f64) -> Self {
        Self {
            top: pad,
            bottom: pad,
            left: pad,
            right: pad,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(30.0)
    }
}

impl From<f64> for Padding {
    fn from(pad: f64) -> Self {
        Self::uniform(pad)
    }
}

/// How tick labels are produced.
#[derive(Clone)]
pub enum TickFormat {
    /// Format each tick value.
    Formatter(Arc<dyn Fn(f64) -> String>),
    /// Explicit label per tick position, paired by index.
    Labels(Vec<String>),
}

impl core::fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Formatter(_) => f.write_str("Formatter(..)"),
            Self::Labels(labels) => f.debug_tuple("Labels").field(labels).finish(),
        }
    }
}

/// Declarative gauge configuration.
///
/// All fields are public; the `with_*` builders cover common construction
/// from the documented defaults.
#[derive(Clone)]
pub struct GaugeSpec {
    /// Overall start angle of the sweep in degrees (0 is 12 o'clock,
    /// positive angles run clockwise).
    pub start_angle: f64,
    /// Overall end angle of the sweep in degrees.
    pub end_angle: f64,
    /// Separation between adjacent segment arcs in degrees.
    pub pad_angle: f64,
    /// Explicit domain bounds; inferred from segments and ticks when
    /// `None`.
    pub domain: Option<(f64, f64)>,
    /// Segment boundary values in data units.
    pub segments: Vec<f64>,
    /// Explicit tick values in data units.
    pub tick_values: Vec<f64>,
    /// Number of evenly spaced interior ticks, used when `tick_values` is
    /// empty.
    pub tick_count: Option<usize>,
    /// Tick label production. Unformatted ticks display their value.
    pub tick_format: Option<TickFormat>,
    /// The scalar value the needle points at.
    pub data: f64,
    /// Optional accessor applied to `data` before the needle scale.
    pub data_accessor: Option<Arc<dyn Fn(f64) -> f64>>,
    /// Distance from the center to the inner edge of the segment ring.
    pub inner_radius: f64,
    /// Distance from the center to the outer edge of the segment ring.
    pub outer_radius: f64,
    /// Width of the chart drawing area in pixels.
    pub width: f64,
    /// Height of the chart drawing area in pixels.
    pub height: f64,
    /// Padding between the chart edge and rendered content.
    pub padding: Padding,
}

impl Default for GaugeSpec {
    fn default() -> Self {
        Self {
            start_angle: -90.0,
            end_angle: 90.0,
            pad_angle: 0.0,
            domain: None,
            segments: Vec::new(),
            tick_values: Vec::new(),
            tick_count: None,
            tick_format: None,
            data: 0.0,
            data_accessor: None,
            inner_radius: 100.0,
            outer_radius: 170.0,
            width: 400.0,
            height: 400.0,
            padding: Padding::default(),
        }
    }
}

impl core::fmt::Debug for GaugeSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GaugeSpec")
            .field("start_angle", &self.start_angle)
            .field("end_angle", &self.end_angle)
            .field("pad_angle", &self.pad_angle)
            .field("domain", &self.domain)
            .field("segments", &self.segments)
            .field("tick_values", &self.tick_values)
            .field("tick_count", &self.tick_count)
            .field("tick_format", &self.tick_format)
            .field("data", &self.data)
            .field("data_accessor", &self.data_accessor.is_some())
            .field("inner_radius", &self.inner_radius)
            .field("outer_radius", &self.outer_radius)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("padding", &self.padding)
            .finish()
    }
}

impl GaugeSpec {
    /// Creates a spec with the default configuration: a half-circle sweep
    /// from -90 to 90 degrees, one full-domain segment, and no ticks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sweep's start and end angles in degrees.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Sets the separation between adjacent segment arcs in degrees.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Sets explicit domain bounds.
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }

    /// Sets the segment boundary values.
    pub fn with_segments(mut self, segments: impl Into<Vec<f64>>) -> Self {
        self.segments = segments.into();
        self
    }

    /// Sets explicit tick values.
    pub fn with_tick_values(mut self, tick_values: impl Into<Vec<f64>>) -> Self {
        self.tick_values = tick_values.into();
        self
    }

    /// Sets the number of evenly spaced interior ticks.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = Some(tick_count);
        self
    }

    /// Sets a tick label formatter function.
    pub fn with_tick_formatter(mut self, format: impl Fn(f64) -> String + 'static) -> Self {
        self.tick_format = Some(TickFormat::Formatter(Arc::new(format)));
        self
    }

    /// Sets explicit tick labels, paired with tick positions by index.
    pub fn with_tick_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tick_format = Some(TickFormat::Labels(
            labels.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Sets the data value the needle points at.
    pub fn with_data(mut self, data: f64) -> Self {
        self.data = data;
        self
    }

    /// Sets an accessor applied to the data value before the needle scale.
    pub fn with_data_accessor(mut self, accessor: impl Fn(f64) -> f64 + 'static) -> Self {
        self.data_accessor = Some(Arc::new(accessor));
        self
    }

    /// Sets the inner and outer ring radii.
    pub fn with_radii(mut self, inner_radius: f64, outer_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self.outer_radius = outer_radius;
        self
    }

    /// Sets the drawing area size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the padding, uniform or per-side.
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn defaults_describe_a_half_circle_gauge() {
        let spec = GaugeSpec::new();
        assert_eq!(spec.start_angle, -90.0);
        assert_eq!(spec.end_angle, 90.0);
        assert_eq!(spec.pad_angle, 0.0);
        assert!(spec.segments.is_empty());
        assert!(spec.tick_values.is_empty());
        assert_eq!(spec.padding, Padding::uniform(30.0));
    }

    #[test]
    fn uniform_padding_converts_from_a_number() {
        let spec = GaugeSpec::new().with_padding(12.0);
        assert_eq!(spec.padding.left, 12.0);
        assert_eq!(spec.padding.bottom, 12.0);
    }

    #[test]
    fn debug_elides_function_fields() {
        let spec = GaugeSpec::new()
            .with_tick_formatter(|v| v.to_string())
            .with_data_accessor(|v| v * 2.0);
        let debug = format!("{spec:?}");
        assert!(debug.contains("Formatter(..)"));
        assert!(debug.contains("data_accessor: true"));
    }
}
