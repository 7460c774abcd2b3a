// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge styling defaults.
//!
//! Styling is plain data consumed by the default renderer; a custom
//! [`crate::GaugeRenderer`] is free to ignore any of it.

extern crate alloc;

use alloc::vec::Vec;

use peniko::color::palette::css;
use peniko::{Brush, Color};

/// A paint + width pair for stroked paths.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A cycling fill palette for segment arcs.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    colors: Vec<Color>,
}

impl ColorScale {
    /// Creates a scale from explicit colors.
    ///
    /// An empty list falls back to the default palette.
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    /// Returns the fill for the segment at `index`, cycling through the
    /// palette.
    pub fn fill(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Number of colors before the scale repeats.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; the empty case falls back to the default palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            colors: alloc::vec![
                Color::from_rgb8(0x75, 0xC7, 0x76),
                Color::from_rgb8(0x39, 0xB6, 0xC5),
                Color::from_rgb8(0x78, 0xCC, 0xC4),
                Color::from_rgb8(0x62, 0xC3, 0xA4),
                Color::from_rgb8(0x64, 0xA8, 0xD1),
                Color::from_rgb8(0x8C, 0x95, 0xC8),
                Color::from_rgb8(0x3B, 0xAF, 0x74),
            ],
        }
    }
}

/// Tick rule styling.
#[derive(Clone, Debug, PartialEq)]
pub struct TickStyle {
    /// Stroke for the tick rule.
    pub stroke: StrokeStyle,
    /// Tick rule length in scene coordinates, drawn outward from the ring.
    pub length: f64,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::default(),
            length: 6.0,
        }
    }
}

/// Tick label styling.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Fill paint for label text.
    pub fill: Brush,
    /// Font size for label text.
    pub font_size: f64,
    /// Radial band reserved for labels past the gauge radius; label anchors
    /// sit at its midpoint.
    pub padding: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            fill: css::BLACK.into(),
            font_size: 10.0,
            padding: 30.0,
        }
    }
}

/// Needle styling.
#[derive(Clone, Debug, PartialEq)]
pub struct NeedleStyle {
    /// Fill paint for the needle body.
    pub fill: Brush,
    /// Outline stroke.
    pub stroke: StrokeStyle,
}

impl Default for NeedleStyle {
    fn default() -> Self {
        Self {
            fill: css::RED.into(),
            stroke: StrokeStyle::solid(css::BLACK, 0.5),
        }
    }
}

/// Full gauge styling for the default renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeStyle {
    /// Fill palette cycled across segment arcs.
    pub color_scale: ColorScale,
    /// Outline stroke for segment arcs.
    pub segment_stroke: Option<StrokeStyle>,
    /// Tick rule styling.
    pub ticks: TickStyle,
    /// Tick label styling.
    pub labels: LabelStyle,
    /// Needle styling.
    pub needle: NeedleStyle,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            color_scale: ColorScale::default(),
            segment_stroke: Some(StrokeStyle::solid(css::WHITE, 1.0)),
            ticks: TickStyle::default(),
            labels: LabelStyle::default(),
            needle: NeedleStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn color_scale_cycles() {
        let scale = ColorScale::default();
        assert_eq!(scale.len(), 7);
        assert_eq!(scale.fill(7), scale.fill(0));
        assert_eq!(scale.fill(9), scale.fill(2));
    }

    #[test]
    fn empty_scale_falls_back_to_the_default_palette() {
        let scale = ColorScale::new(Vec::new());
        assert_eq!(scale, ColorScale::default());
        assert!(!scale.is_empty());
    }

    #[test]
    fn custom_scale_is_used_verbatim() {
        let scale = ColorScale::new(alloc::vec![Color::from_rgb8(0xFF, 0x00, 0x00)]);
        assert_eq!(scale.len(), 1);
        assert_eq!(scale.fill(3), Color::from_rgb8(0xFF, 0x00, 0x00));
    }
}
