use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::dashboard::app::App;
use crate::dashboard::theme::badge_style;
use crate::formatters::format_currency;
use crate::models::TransactionRecord;

const HEADER_STYLE: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::BOLD);

fn transaction_row(trx: &TransactionRecord) -> Row<'static> {
    Row::new(vec![
        Cell::from(trx.id),
        Cell::from(Span::styled(trx.name, Style::default().add_modifier(Modifier::BOLD))),
        Cell::from(trx.category),
        Cell::from(trx.date),
        Cell::from(Line::from(format_currency(trx.amount)).alignment(Alignment::Right)),
        Cell::from(
            Line::from(Span::styled(
                format!(" {} ", trx.status.label()),
                badge_style(trx.status),
            ))
            .alignment(Alignment::Right),
        ),
    ])
}

pub fn draw_transaction_table(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec![
        Cell::from("Transaction ID"),
        Cell::from("Name"),
        Cell::from("Category"),
        Cell::from("Date"),
        Cell::from(Line::from("Amount").alignment(Alignment::Right)),
        Cell::from(Line::from("Status").alignment(Alignment::Right)),
    ])
    .style(HEADER_STYLE)
    .bottom_margin(1);

    let rows: Vec<Row> = app.data.transactions.iter().map(transaction_row).collect();

    let widths = [
        Constraint::Length(15),
        Constraint::Min(20),
        Constraint::Min(18),
        Constraint::Length(13),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .title(" Recent Transactions ")
                .borders(Borders::ALL),
        );

    f.render_widget(table, area);
}
