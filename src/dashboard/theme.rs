use ratatui::style::{Color, Modifier, Style};

use crate::models::{BadgeTone, MetricIcon, TransactionStatus, Trend};

/// Series colours, in the order the charts assign them.
pub const CHART_PALETTE: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
];

pub fn palette_color(index: usize) -> Color {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

pub fn badge_style(status: TransactionStatus) -> Style {
    let (fg, bg) = match status.badge_tone() {
        BadgeTone::Success => (Color::Black, Color::Green),
        BadgeTone::Warning => (Color::Black, Color::Yellow),
        BadgeTone::Danger => (Color::White, Color::Red),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    }
}

pub fn icon_color(icon: MetricIcon) -> Color {
    match icon {
        MetricIcon::Dollar => Color::Green,
        MetricIcon::Wallet => Color::Red,
        MetricIcon::Users => Color::Blue,
        MetricIcon::TrendingUp => Color::Magenta,
    }
}
