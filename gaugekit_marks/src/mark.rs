// Copyright 2026 the GaugeKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable mark primitives.
//!
//! Marks are the boundary contract between the geometry engine and
//! whatever draws it: a path or a piece of unshaped text, with paint and a
//! coarse z-order. Renderers should sort by `(z_index, MarkId)` for a
//! deterministic tie-break.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point};
use peniko::Brush;

/// Stable identity for a generated mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchoring relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start of the text run.
    Start,
    /// The position is the middle of the text run.
    Middle,
    /// The position is the end of the text run.
    End,
}

/// Vertical baseline placement relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the vertical middle of the text.
    Middle,
    /// The position is the top of the text.
    Hanging,
}

/// A filled and/or stroked path payload.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; 0 disables the stroke.
    pub stroke_width: f64,
}

/// An unshaped text payload.
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation about `pos` in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Payload variants.
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A path mark.
    Path(PathMark),
    /// A text mark.
    Text(TextMark),
}

/// A drawable mark: identity, render order, payload.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable mark id.
    pub id: MarkId,
    /// Rendering order hint.
    pub z_index: i32,
    /// What to draw.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a path mark.
    pub fn path(id: MarkId, z_index: i32, payload: PathMark) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Path(payload),
        }
    }

    /// Creates a text mark.
    pub fn text(id: MarkId, z_index: i32, payload: TextMark) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Text(payload),
        }
    }
}
