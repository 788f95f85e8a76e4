//! Backend-agnostic display list.
//!
//! The renderer does not rasterize; it emits a list of primitive draw
//! commands a host backend (Canvas2D, skia, GPU quads) replays each frame.

use serde::{Deserialize, Serialize};

/// An RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Default color of untouched cells (gray).
    pub const NORMAL: Self = Self([0.5, 0.5, 0.5, 1.0]);
    /// Default color of pressed cells and the connector (black).
    pub const PRESS: Self = Self([0.0, 0.0, 0.0, 1.0]);
    /// Default color of the error state (red).
    pub const ERROR: Self = Self([1.0, 0.0, 0.0, 1.0]);

    /// Construct from components.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }
}

/// Fill style of a circle command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum FillStyle {
    /// Solid fill.
    Fill,
    /// Outline of the given stroke width.
    Stroke {
        /// Stroke width in pixels.
        width: f32,
    },
}

/// A primitive draw command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum DrawCommand {
    /// A circle at a cell center.
    Circle {
        /// Center X.
        cx: f32,
        /// Center Y.
        cy: f32,
        /// Radius in pixels.
        radius: f32,
        /// Color.
        color: Color,
        /// Filled or stroked.
        fill: FillStyle,
    },
    /// The connector polyline through the selected cells.
    Polyline {
        /// Vertices in order.
        points: Vec<(f32, f32)>,
        /// Stroke width in pixels.
        width: f32,
        /// Color.
        color: Color,
    },
}

/// One frame's worth of draw commands, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Commands in paint order.
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a circle command.
    pub fn push_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color, fill: FillStyle) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            color,
            fill,
        });
    }

    /// Append a polyline command.
    pub fn push_polyline(&mut self, points: Vec<(f32, f32)>, width: f32, color: Color) {
        self.commands.push(DrawCommand::Polyline {
            points,
            width,
            color,
        });
    }

    /// Number of commands in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the frame is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize to JSON for hosts that replay frames out of process.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::RenderResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
