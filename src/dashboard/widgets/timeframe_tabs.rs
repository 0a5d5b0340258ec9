use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::dashboard::app::App;
use crate::timeframe::timeframe_controls;

pub fn draw_timeframe_tabs(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)].as_ref())
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Financial Overview",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(heading, chunks[0]);

    let controls = timeframe_controls(app.timeframe);
    let selected = controls.iter().position(|(_, active)| *active).unwrap_or(0);
    let titles: Vec<Line> = controls
        .iter()
        .map(|(timeframe, _)| Line::from(timeframe.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" ")
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(tabs, chunks[1]);
}
