//! Painter strategies.
//!
//! A painter decides what a cell looks like in each status and how the
//! connector line is drawn. The renderer holds one implementation chosen
//! at configuration time; hosts swap in their own for custom looks.

use lock_core::{Cell, CellStatus};

use crate::frame::{Color, FillStyle, Frame};
use crate::PainterStyle;

/// Capability interface for drawing the widget.
pub trait PatternPainter {
    /// Draw an untouched cell.
    fn draw_normal(&self, cell: &Cell, style: &PainterStyle, frame: &mut Frame);

    /// Draw a cell that is part of the current pattern.
    fn draw_pressed(&self, cell: &Cell, style: &PainterStyle, frame: &mut Frame);

    /// Draw a cell in the error state.
    fn draw_error(&self, cell: &Cell, style: &PainterStyle, frame: &mut Frame);

    /// Draw the connector through the selected cell centers, extended to
    /// the live pointer position.
    ///
    /// `first_status` is the status of the *first* selected cell; the
    /// whole line is colored from it alone. No line is drawn for an empty
    /// `points` or a normal-only status.
    fn draw_connector(
        &self,
        points: &[(f32, f32)],
        pointer: (f32, f32),
        first_status: CellStatus,
        style: &PainterStyle,
        frame: &mut Frame,
    );
}

/// The default dot-and-ring painter.
///
/// Normal cells are a thin ring; pressed and error cells add a filled
/// center dot and a heavier ring, differing only in color.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingPainter;

impl RingPainter {
    /// Create the default painter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn draw_dot_and_ring(cell: &Cell, color: Color, frame: &mut Frame) {
        frame.push_circle(cell.x, cell.y, cell.radius / 3.0, color, FillStyle::Fill);
        frame.push_circle(
            cell.x,
            cell.y,
            cell.radius,
            color,
            FillStyle::Stroke {
                width: cell.radius / 16.0,
            },
        );
    }
}

impl PatternPainter for RingPainter {
    fn draw_normal(&self, cell: &Cell, style: &PainterStyle, frame: &mut Frame) {
        frame.push_circle(
            cell.x,
            cell.y,
            cell.radius,
            style.normal_color,
            FillStyle::Stroke {
                width: cell.radius / 32.0,
            },
        );
    }

    fn draw_pressed(&self, cell: &Cell, style: &PainterStyle, frame: &mut Frame) {
        Self::draw_dot_and_ring(cell, style.press_color, frame);
    }

    fn draw_error(&self, cell: &Cell, style: &PainterStyle, frame: &mut Frame) {
        Self::draw_dot_and_ring(cell, style.error_color, frame);
    }

    fn draw_connector(
        &self,
        points: &[(f32, f32)],
        pointer: (f32, f32),
        first_status: CellStatus,
        style: &PainterStyle,
        frame: &mut Frame,
    ) {
        if points.is_empty() {
            return;
        }
        // The connector color is keyed off the first selected cell only.
        let color = match first_status {
            CellStatus::Pressed => style.press_color,
            CellStatus::Error => style.error_color,
            CellStatus::Normal => return,
        };
        let mut vertices = points.to_vec();
        vertices.push(pointer);
        frame.push_polyline(vertices, style.line_thickness, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lock_core::CellIndex;

    fn cell(index: usize, status: CellStatus) -> Cell {
        let mut cell = Cell::new(
            CellIndex::new(index).expect("valid index"),
            50.0,
            50.0,
            30.0,
        );
        cell.status = status;
        cell
    }

    #[test]
    fn test_normal_is_single_thin_ring() {
        let painter = RingPainter::new();
        let mut frame = Frame::new();
        painter.draw_normal(&cell(0, CellStatus::Normal), &PainterStyle::default(), &mut frame);

        assert_eq!(frame.len(), 1);
        match &frame.commands[0] {
            crate::DrawCommand::Circle { radius, fill, .. } => {
                assert!((*radius - 30.0).abs() < f32::EPSILON);
                assert_eq!(*fill, FillStyle::Stroke { width: 30.0 / 32.0 });
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_pressed_is_dot_plus_ring() {
        let painter = RingPainter::new();
        let mut frame = Frame::new();
        painter.draw_pressed(&cell(4, CellStatus::Pressed), &PainterStyle::default(), &mut frame);

        assert_eq!(frame.len(), 2);
        match &frame.commands[0] {
            crate::DrawCommand::Circle { radius, fill, .. } => {
                assert!((*radius - 10.0).abs() < f32::EPSILON);
                assert_eq!(*fill, FillStyle::Fill);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_connector_extends_to_pointer() {
        let painter = RingPainter::new();
        let mut frame = Frame::new();
        painter.draw_connector(
            &[(50.0, 50.0), (150.0, 50.0)],
            (180.0, 70.0),
            CellStatus::Pressed,
            &PainterStyle::default(),
            &mut frame,
        );

        match &frame.commands[0] {
            crate::DrawCommand::Polyline { points, color, .. } => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[2], (180.0, 70.0));
                assert_eq!(*color, Color::PRESS);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_connector_color_keyed_off_first_status() {
        let painter = RingPainter::new();
        let mut frame = Frame::new();
        painter.draw_connector(
            &[(50.0, 50.0), (150.0, 50.0)],
            (150.0, 50.0),
            CellStatus::Error,
            &PainterStyle::default(),
            &mut frame,
        );

        match &frame.commands[0] {
            crate::DrawCommand::Polyline { color, .. } => assert_eq!(*color, Color::ERROR),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_no_connector_for_empty_or_normal() {
        let painter = RingPainter::new();
        let mut frame = Frame::new();
        painter.draw_connector(
            &[],
            (10.0, 10.0),
            CellStatus::Pressed,
            &PainterStyle::default(),
            &mut frame,
        );
        painter.draw_connector(
            &[(50.0, 50.0)],
            (60.0, 60.0),
            CellStatus::Normal,
            &PainterStyle::default(),
            &mut frame,
        );
        assert!(frame.is_empty());
    }
}
