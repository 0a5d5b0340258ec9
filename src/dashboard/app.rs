use chrono::NaiveDate;
use chrono_tz::Tz;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::mock_data::{reference_date, DashboardData};
use crate::timeframe::Timeframe;

pub struct App {
    pub timeframe: Timeframe,
    pub data: DashboardData,
    pub timezone: Option<Tz>,
    pub render_count: u64,
    rng: StdRng,
}

impl App {
    pub fn new(timeframe: Timeframe, timezone: Option<Tz>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(timeframe, timezone, rng, reference_date(timezone))
    }

    /// Build the app against a fixed reference date. The first render pass
    /// has already run.
    pub fn with_rng(timeframe: Timeframe, timezone: Option<Tz>, mut rng: StdRng, today: NaiveDate) -> Self {
        let data = DashboardData::generate(today, &mut rng);
        Self {
            timeframe,
            data,
            timezone,
            render_count: 1,
            rng,
        }
    }

    /// Regenerate every derived dataset, as a component would on re-render.
    pub fn render_pass(&mut self) {
        let today = reference_date(self.timezone);
        self.render_pass_at(today);
    }

    pub fn render_pass_at(&mut self, today: NaiveDate) {
        self.data = DashboardData::generate(today, &mut self.rng);
        self.render_count += 1;
        debug!(render = self.render_count, %today, "render pass");
    }

    /// Move the highlight. Returns whether the state actually changed.
    ///
    /// The datasets are deliberately left alone: the toggle does not filter
    /// anything.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) -> bool {
        if self.timeframe == timeframe {
            return false;
        }
        debug!(from = %self.timeframe, to = %timeframe, "timeframe selected");
        self.timeframe = timeframe;
        true
    }

    pub fn next_timeframe(&mut self) -> bool {
        self.select_timeframe(self.timeframe.next())
    }

    pub fn previous_timeframe(&mut self) -> bool {
        self.select_timeframe(self.timeframe.previous())
    }
}
