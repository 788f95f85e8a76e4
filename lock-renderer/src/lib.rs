//! # Gesture Pattern Lock Renderer
//!
//! Presentation layer for the pattern lock core. Turns a
//! [`lock_core::Snapshot`] into a backend-agnostic display list each
//! frame; hosts replay the commands on whatever surface they own.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            PatternPainter trait             │
//! ├─────────────────────┬───────────────────────┤
//! │ RingPainter         │ custom host painters  │
//! │ (dot + ring look)   │                       │
//! └─────────────────────┴───────────────────────┘
//!                │ emits
//!                ▼
//!       Frame = [DrawCommand]
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod frame;
pub mod painter;

pub use error::{RenderError, RenderResult};
pub use frame::{Color, DrawCommand, FillStyle, Frame};
pub use painter::{PatternPainter, RingPainter};

use lock_core::{CellStatus, Snapshot};

/// Colors and stroke configuration for the painters.
///
/// Values are clamped/validated here, at configuration time; painters
/// assume a well-formed style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PainterStyle {
    /// Color of untouched cells.
    pub normal_color: Color,
    /// Color of pressed cells and a pressed pattern's connector.
    pub press_color: Color,
    /// Color of error cells and an error pattern's connector.
    pub error_color: Color,
    /// Stroke width of the connector line, in pixels.
    pub line_thickness: f32,
}

impl Default for PainterStyle {
    fn default() -> Self {
        Self {
            normal_color: Color::NORMAL,
            press_color: Color::PRESS,
            error_color: Color::ERROR,
            line_thickness: 1.0,
        }
    }
}

impl PainterStyle {
    /// Clamp out-of-range values into their legal ranges.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.line_thickness = self.line_thickness.max(0.0);
        self
    }

    /// Reject styles that clamping cannot repair.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidStyle`] if the line thickness is not
    /// finite.
    pub fn validate(&self) -> RenderResult<()> {
        if !self.line_thickness.is_finite() {
            return Err(RenderError::InvalidStyle(format!(
                "line_thickness must be finite, got {}",
                self.line_thickness
            )));
        }
        Ok(())
    }
}

/// Builds display-list frames from tracker snapshots.
///
/// Holds the painter strategy selected at configuration time.
pub struct PatternRenderer {
    style: PainterStyle,
    painter: Box<dyn PatternPainter>,
    frame_count: u64,
}

impl PatternRenderer {
    /// Create a renderer with the default ring painter.
    #[must_use]
    pub fn new(style: PainterStyle) -> Self {
        Self::with_painter(style, Box::new(RingPainter::new()))
    }

    /// Create a renderer with a custom painter strategy.
    #[must_use]
    pub fn with_painter(style: PainterStyle, painter: Box<dyn PatternPainter>) -> Self {
        Self {
            style: style.clamped(),
            painter,
            frame_count: 0,
        }
    }

    /// Build one frame from a snapshot: all nine cells by status, then the
    /// connector over them.
    pub fn render(&mut self, snapshot: &Snapshot) -> Frame {
        let mut frame = Frame::new();

        for cell in &snapshot.cells {
            match cell.status {
                CellStatus::Normal => self.painter.draw_normal(cell, &self.style, &mut frame),
                CellStatus::Pressed => self.painter.draw_pressed(cell, &self.style, &mut frame),
                CellStatus::Error => self.painter.draw_error(cell, &self.style, &mut frame),
            }
        }

        let points: Vec<(f32, f32)> = snapshot
            .path
            .iter()
            .map(|index| {
                let cell = &snapshot.cells[index.index()];
                (cell.x, cell.y)
            })
            .collect();
        let first_status = snapshot
            .path
            .first()
            .map_or(CellStatus::Normal, |index| {
                snapshot.cells[index.index()].status
            });
        self.painter.draw_connector(
            &points,
            (snapshot.pointer_x, snapshot.pointer_y),
            first_status,
            &self.style,
            &mut frame,
        );

        self.frame_count += 1;
        tracing::trace!(
            "Frame {} built: {} commands, {} selected cells",
            self.frame_count,
            frame.len(),
            snapshot.path.len()
        );
        frame
    }

    /// Number of frames built so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The style in effect (after clamping).
    #[must_use]
    pub fn style(&self) -> &PainterStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lock_core::{GestureTracker, TouchEvent};

    fn snapshot_of(events: &[TouchEvent]) -> Snapshot {
        let mut tracker = GestureTracker::new(300.0);
        for event in events {
            tracker.handle_event(event);
        }
        tracker.snapshot()
    }

    fn polyline_count(frame: &Frame) -> usize {
        frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polyline { .. }))
            .count()
    }

    #[test]
    fn test_idle_frame_is_nine_rings_no_line() {
        let mut renderer = PatternRenderer::new(PainterStyle::default());
        let frame = renderer.render(&snapshot_of(&[]));

        // One stroke ring per cell, no connector.
        assert_eq!(frame.len(), 9);
        assert_eq!(polyline_count(&frame), 0);
        assert_eq!(renderer.frame_count(), 1);
    }

    #[test]
    fn test_tracking_frame_has_press_connector() {
        let mut renderer = PatternRenderer::new(PainterStyle::default());
        let frame = renderer.render(&snapshot_of(&[
            TouchEvent::down(50.0, 50.0, 0),
            TouchEvent::moved(150.0, 50.0, 10),
        ]));

        // 7 normal rings + 2 pressed dot-and-rings + 1 connector.
        assert_eq!(frame.len(), 7 + 4 + 1);
        assert_eq!(polyline_count(&frame), 1);

        let line = frame
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Polyline { points, color, .. } => Some((points.clone(), *color)),
                DrawCommand::Circle { .. } => None,
            })
            .expect("connector present");
        // Path centers plus the live pointer.
        assert_eq!(line.0.len(), 3);
        assert_eq!(line.1, Color::PRESS);
    }

    #[test]
    fn test_error_frame_colors_line_from_first_cell() {
        let mut tracker = GestureTracker::new(300.0);
        tracker.handle_event(&TouchEvent::down(50.0, 50.0, 0));
        tracker.handle_event(&TouchEvent::moved(150.0, 50.0, 10));
        tracker.handle_event(&TouchEvent::up(150.0, 50.0, 20));
        tracker.show_error();

        let mut renderer = PatternRenderer::new(PainterStyle::default());
        let frame = renderer.render(&tracker.snapshot());

        let color = frame
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Polyline { color, .. } => Some(*color),
                DrawCommand::Circle { .. } => None,
            })
            .expect("connector present");
        assert_eq!(color, Color::ERROR);
    }

    #[test]
    fn test_style_clamping() {
        let style = PainterStyle {
            line_thickness: -3.0,
            ..PainterStyle::default()
        };
        let renderer = PatternRenderer::new(style);
        assert!(renderer.style().line_thickness.abs() < f32::EPSILON);
    }

    #[test]
    fn test_style_validate_rejects_nan() {
        let style = PainterStyle {
            line_thickness: f32::NAN,
            ..PainterStyle::default()
        };
        assert!(matches!(
            style.validate(),
            Err(RenderError::InvalidStyle(_))
        ));
        assert!(PainterStyle::default().validate().is_ok());
    }
}
