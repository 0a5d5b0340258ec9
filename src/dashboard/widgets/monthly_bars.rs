use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::dashboard::app::App;
use crate::dashboard::theme::palette_color;
use crate::formatters::format_axis_thousands;

/// Widest bar that still fits every group (two bars plus a one-column group
/// gap) into `width` columns.
pub fn fit_bar_width(width: u16, groups: usize) -> u16 {
    if groups == 0 {
        return 1;
    }
    let per_group = width as usize / groups;
    (per_group.saturating_sub(1) / 2).clamp(1, 6) as u16
}

const REVENUE_COLOR: usize = 0;
const TARGET_COLOR: usize = 3;

/// Block title doubling as the legend: one swatch per bar series.
pub fn legend_title() -> Line<'static> {
    Line::from(vec![
        Span::raw(" Monthly Performance "),
        Span::styled("■ Revenue", Style::default().fg(palette_color(REVENUE_COLOR))),
        Span::raw(" "),
        Span::styled("■ Target", Style::default().fg(palette_color(TARGET_COLOR))),
        Span::raw(" "),
    ])
}

pub fn draw_monthly_bars(f: &mut Frame, area: Rect, app: &App) {
    let monthly = &app.data.monthly;
    let revenue_style = Style::default().fg(palette_color(REVENUE_COLOR));
    let target_style = Style::default().fg(palette_color(TARGET_COLOR));
    let value_style = Style::default().fg(Color::Black).add_modifier(Modifier::BOLD);

    let block = Block::default()
        .title(legend_title())
        .borders(Borders::ALL);
    let bar_width = fit_bar_width(block.inner(area).width, monthly.len());

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(1)
        .value_style(value_style);

    for point in monthly {
        let bars = [
            Bar::default()
                .value(point.revenue.round() as u64)
                .text_value(format_axis_thousands(point.revenue))
                .style(revenue_style)
                .value_style(value_style.bg(palette_color(REVENUE_COLOR))),
            Bar::default()
                .value(point.target.round() as u64)
                .text_value(format_axis_thousands(point.target))
                .style(target_style)
                .value_style(value_style.bg(palette_color(TARGET_COLOR))),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(point.label.clone()))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}
