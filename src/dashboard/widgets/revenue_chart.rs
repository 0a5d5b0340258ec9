use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::dashboard::app::App;
use crate::dashboard::theme::palette_color;
use crate::formatters::{axis_upper_bound, format_axis_thousands};
use crate::models::TimeSeriesPoint;

const Y_STEP: f64 = 5_000.0;
const Y_TICKS: usize = 4;

/// Per-series `(x, y)` points, x being the day index.
pub fn series_points(points: &[TimeSeriesPoint]) -> [Vec<(f64, f64)>; 3] {
    let mut revenue = Vec::with_capacity(points.len());
    let mut expenses = Vec::with_capacity(points.len());
    let mut profit = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let x = i as f64;
        revenue.push((x, point.revenue));
        expenses.push((x, point.expenses));
        profit.push((x, point.profit));
    }
    [revenue, expenses, profit]
}

pub fn draw_revenue_chart(f: &mut Frame, area: Rect, app: &App) {
    let daily = &app.data.daily;
    let [revenue, expenses, profit] = series_points(daily);

    let max_value = daily
        .iter()
        .flat_map(|p| [p.revenue, p.expenses, p.profit])
        .fold(0.0, f64::max);
    let y_max = axis_upper_bound(max_value, Y_STEP);
    let x_max = daily.len().saturating_sub(1).max(1) as f64;

    // First, middle and last date
    let x_labels: Vec<Span> = [0, daily.len() / 2, daily.len().saturating_sub(1)]
        .iter()
        .filter_map(|&i| daily.get(i))
        .map(|p| Span::raw(p.label.clone()))
        .collect();

    let y_labels: Vec<Span> = (0..=Y_TICKS)
        .map(|i| Span::raw(format_axis_thousands(y_max * i as f64 / Y_TICKS as f64)))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("revenue")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette_color(0)))
            .data(&revenue),
        Dataset::default()
            .name("expenses")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette_color(1)))
            .data(&expenses),
        Dataset::default()
            .name("profit")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette_color(2)))
            .data(&profit),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Revenue & Expenses ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels)
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(y_labels)
                .bounds([0.0, y_max]),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::generate_daily_series;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_series_points_follow_day_index() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let daily = generate_daily_series(today, &mut StdRng::seed_from_u64(4));
        let [revenue, expenses, profit] = series_points(&daily);

        assert_eq!(revenue.len(), 30);
        assert_eq!(revenue[0], (0.0, daily[0].revenue));
        assert_eq!(expenses[29], (29.0, daily[29].expenses));
        assert_eq!(profit[10].1, daily[10].profit);
    }
}
