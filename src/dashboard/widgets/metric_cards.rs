use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::dashboard::app::App;
use crate::dashboard::theme::{icon_color, trend_color};
use crate::formatters::format_change;
use crate::models::MetricCard;

pub fn draw_metric_cards(f: &mut Frame, area: Rect, app: &App) {
    let count = app.data.metrics.len().max(1) as u32;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for (metric, chunk) in app.data.metrics.iter().zip(chunks.iter()) {
        draw_card(f, *chunk, metric);
    }
}

fn draw_card(f: &mut Frame, area: Rect, metric: &MetricCard) {
    // Borders plus the icon and its padding
    let title_width = (area.width as usize).saturating_sub(6);
    let trend = metric.trend();

    let title = vec![
        Span::raw(" "),
        Span::styled(metric.icon.glyph(), Style::default().fg(icon_color(metric.icon))),
        Span::raw(" "),
        Span::raw(fit_to_width(metric.title, title_width)),
        Span::raw(" "),
    ];

    let lines = vec![
        Line::from(Span::styled(
            metric.value,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} {}", trend.arrow(), format_change(metric.change)),
                Style::default().fg(trend_color(trend)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" vs last month", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL),
    );

    f.render_widget(card, area);
}

/// Truncate to `width` display columns, marking the cut with an ellipsis.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
