use chrono::NaiveDate;
use serde::Serialize;

/// Presentational marker shown next to a metric card title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricIcon {
    Dollar,
    Wallet,
    Users,
    TrendingUp,
}

impl MetricIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            MetricIcon::Dollar => "$",
            MetricIcon::Wallet => "▣",
            MetricIcon::Users => "☺",
            MetricIcon::TrendingUp => "↗",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: f64,
    pub icon: MetricIcon,
}

impl MetricCard {
    /// Zero counts as down.
    pub fn trend(&self) -> Trend {
        if self.change > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub label: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: NaiveDate,
    pub label: String,
    pub revenue: f64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub name: &'static str,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

/// Visual tone of a status badge, independent of the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    pub fn badge_tone(&self) -> BadgeTone {
        match self {
            TransactionStatus::Completed => BadgeTone::Success,
            TransactionStatus::Pending => BadgeTone::Warning,
            TransactionStatus::Failed => BadgeTone::Danger,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub amount: f64,
    pub status: TransactionStatus,
}
