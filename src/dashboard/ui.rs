use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::widgets::{
    annual_growth::draw_annual_growth, expense_donut::draw_expense_donut,
    metric_cards::draw_metric_cards, monthly_bars::draw_monthly_bars,
    revenue_chart::draw_revenue_chart, timeframe_tabs::draw_timeframe_tabs,
    transaction_table::draw_transaction_table,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),  // Header
                Constraint::Length(5),  // Metric cards
                Constraint::Length(2),  // Timeframe toggle
                Constraint::Min(8),     // Revenue + breakdown
                Constraint::Min(8),     // Monthly + annual
                Constraint::Length(10), // Transactions
                Constraint::Length(2),  // Help
            ]
            .as_ref(),
        )
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_metric_cards(f, chunks[1], app);
    draw_timeframe_tabs(f, chunks[2], app);
    draw_chart_row(f, chunks[3], app, draw_revenue_chart, draw_expense_donut);
    draw_chart_row(f, chunks[4], app, draw_monthly_bars, draw_annual_growth);
    draw_transaction_table(f, chunks[5], app);
    draw_help(f, chunks[6]);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_text = vec![
        Span::styled(
            "FinanceDash",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Today: "),
        Span::raw(app.data.reference_date.format("%b %d, %Y").to_string()),
        Span::raw(" | Renders: "),
        Span::raw(app.render_count.to_string()),
    ];

    let header = Paragraph::new(Line::from(header_text))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Financial Dashboard ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(header, area);
}

/// Two-thirds / one-third split, like the card grid it mirrors.
fn draw_chart_row(
    f: &mut Frame,
    area: Rect,
    app: &App,
    wide: fn(&mut Frame, Rect, &App),
    narrow: fn(&mut Frame, Rect, &App),
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)].as_ref())
        .split(area);

    wide(f, chunks[0], app);
    narrow(f, chunks[1], app);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let help_text = vec![
        Span::raw("["),
        Span::styled("q", key),
        Span::raw("]uit ["),
        Span::styled("d", key),
        Span::raw("]ay ["),
        Span::styled("w", key),
        Span::raw("]eek ["),
        Span::styled("m", key),
        Span::raw("]onth ["),
        Span::styled("y", key),
        Span::raw("]ear ["),
        Span::styled("←→", key),
        Span::raw("] step ["),
        Span::styled("r", key),
        Span::raw("]e-render"),
    ];

    let help = Paragraph::new(Line::from(help_text))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help, area);
}
