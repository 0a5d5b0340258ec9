use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Display granularity selector of the overview section.
///
/// Selecting a timeframe only moves the highlighted control; none of the
/// datasets read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Day,
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::Year,
    ];

    pub fn index(&self) -> usize {
        match self {
            Timeframe::Day => 0,
            Timeframe::Week => 1,
            Timeframe::Month => 2,
            Timeframe::Year => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Day => "Day",
            Timeframe::Week => "Week",
            Timeframe::Month => "Month",
            Timeframe::Year => "Year",
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// The toggle's buttons in display order, each paired with whether it is the
/// highlighted one.
pub fn timeframe_controls(active: Timeframe) -> Vec<(Timeframe, bool)> {
    Timeframe::ALL.iter().map(|&t| (t, t == active)).collect()
}
