use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::dashboard::app::App;
use crate::dashboard::theme::palette_color;
use crate::models::CategorySlice;

const INNER_RADIUS: f64 = 0.6;
const OUTER_RADIUS: f64 = 0.9;
const PADDING_DEGREES: f64 = 2.0;

/// Angular extent `(start, end)` in degrees of each slice, counter-clockwise
/// from 3 o'clock, with a fixed gap after every slice.
pub fn slice_spans(slices: &[CategorySlice], padding: f64) -> Vec<(f64, f64)> {
    let total: u32 = slices.iter().map(|s| s.percentage).sum();
    if total == 0 {
        return Vec::new();
    }
    let available = 360.0 - padding * slices.len() as f64;

    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            let sweep = available * slice.percentage as f64 / total as f64;
            let span = (start, start + sweep);
            start += sweep + padding;
            span
        })
        .collect()
}

/// Points filling the ring between the two radii over `[start, end]` degrees.
fn ring_points(start: f64, end: f64) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    let mut radius = INNER_RADIUS;
    while radius <= OUTER_RADIUS {
        let mut angle = start;
        while angle <= end {
            let rad = angle.to_radians();
            coords.push((radius * rad.cos(), radius * rad.sin()));
            angle += 0.5;
        }
        radius += 0.02;
    }
    coords
}

pub fn draw_expense_donut(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Expense Breakdown ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 4 {
        return;
    }

    let slices = &app.data.categories;
    let legend_height = (slices.len() as u16).min(inner.height / 2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(legend_height)].as_ref())
        .split(inner);

    let rings: Vec<_> = slice_spans(slices, PADDING_DEGREES)
        .into_iter()
        .enumerate()
        .map(|(i, (start, end))| (palette_color(i), ring_points(start, end)))
        .collect();

    // Terminal cells are about twice as tall as wide
    let canvas_area = chunks[0];
    let aspect = canvas_area.width as f64 / (canvas_area.height.max(1) as f64 * 2.0);
    let (x_half, y_half) = if aspect >= 1.0 { (aspect, 1.0) } else { (1.0, 1.0 / aspect) };

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(|ctx| {
            for (color, coords) in &rings {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: *color,
                });
            }
        });
    f.render_widget(canvas, canvas_area);

    let legend: Vec<Line> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Line::from(vec![
                Span::styled(" ■ ", Style::default().fg(palette_color(i))),
                Span::raw(format!("{}: {}%", slice.name, slice.percentage)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::get_mock_categories;

    #[test]
    fn test_spans_cover_circle_with_padding() {
        let slices = get_mock_categories();
        let spans = slice_spans(&slices, PADDING_DEGREES);
        assert_eq!(spans.len(), 5);

        let swept: f64 = spans.iter().map(|(s, e)| e - s).sum();
        assert!((swept + PADDING_DEGREES * 5.0 - 360.0).abs() < 1e-9);

        for pair in spans.windows(2) {
            assert!((pair[1].0 - pair[0].1 - PADDING_DEGREES).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spans_proportional() {
        let slices = get_mock_categories();
        let spans = slice_spans(&slices, 0.0);
        assert!((spans[0].1 - spans[0].0 - 162.0).abs() < 1e-9);
        assert!((spans[4].1 - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_slices() {
        assert!(slice_spans(&[], PADDING_DEGREES).is_empty());
    }
}
