use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::dashboard::app::App;
use crate::dashboard::theme::palette_color;
use crate::formatters::{axis_upper_bound, format_axis_thousands};
use crate::models::MonthlyPoint;

const FILL_STEPS_PER_MONTH: usize = 8;

/// Linear interpolation of revenue at fractional month index `x`.
pub fn revenue_at(points: &[MonthlyPoint], x: f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let last = points.len() - 1;
    let x = x.clamp(0.0, last as f64);
    let lo = x.floor() as usize;
    let hi = (lo + 1).min(last);
    let t = x - lo as f64;
    points[lo].revenue + (points[hi].revenue - points[lo].revenue) * t
}

pub fn draw_annual_growth(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Annual Growth ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let monthly = &app.data.monthly;
    if inner.height < 3 || monthly.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .split(inner);

    let y_max = axis_upper_bound(monthly.iter().map(|p| p.revenue).fold(0.0, f64::max), 25_000.0);
    let x_max = (monthly.len() - 1).max(1) as f64;
    let fill = palette_color(4);

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, x_max])
        .y_bounds([0.0, y_max])
        .paint(|ctx| {
            let steps = (monthly.len() - 1) * FILL_STEPS_PER_MONTH;
            for step in 0..=steps {
                let x = step as f64 / FILL_STEPS_PER_MONTH as f64;
                ctx.draw(&CanvasLine {
                    x1: x,
                    y1: 0.0,
                    x2: x,
                    y2: revenue_at(monthly, x),
                    color: fill,
                });
            }
            ctx.layer();
            for (i, pair) in monthly.windows(2).enumerate() {
                ctx.draw(&CanvasLine {
                    x1: i as f64,
                    y1: pair[0].revenue,
                    x2: (i + 1) as f64,
                    y2: pair[1].revenue,
                    color: Color::White,
                });
            }
            ctx.print(
                0.0,
                y_max,
                Span::styled(format_axis_thousands(y_max), Style::default().fg(Color::Gray)),
            );
        });
    f.render_widget(canvas, chunks[0]);

    let first = &monthly[0];
    let last = &monthly[monthly.len() - 1];
    let footer = Line::from(vec![
        Span::styled(first.label.clone(), Style::default().fg(Color::Gray)),
        Span::raw(" → "),
        Span::styled(last.label.clone(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            format!("now {}", format_axis_thousands(last.revenue)),
            Style::default().fg(fill),
        ),
    ]);
    f.render_widget(Paragraph::new(footer), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(revenue: f64) -> MonthlyPoint {
        MonthlyPoint {
            month: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            label: "Jan".to_string(),
            revenue,
            target: 60_000.0,
        }
    }

    #[test]
    fn test_revenue_interpolation() {
        let points = vec![point(30_000.0), point(50_000.0), point(40_000.0)];
        assert_eq!(revenue_at(&points, 0.0), 30_000.0);
        assert_eq!(revenue_at(&points, 0.5), 40_000.0);
        assert_eq!(revenue_at(&points, 1.5), 45_000.0);
        assert_eq!(revenue_at(&points, 2.0), 40_000.0);
        // Clamped outside the series
        assert_eq!(revenue_at(&points, 9.0), 40_000.0);
        assert_eq!(revenue_at(&[], 1.0), 0.0);
    }
}
