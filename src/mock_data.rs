use chrono::{Duration, Local, Months, NaiveDate, Utc};
use chrono_tz::Tz;
use rand::Rng;
use serde::Serialize;
use std::ops::Range;

use crate::models::{
    CategorySlice, MetricCard, MetricIcon, MonthlyPoint, TimeSeriesPoint, TransactionRecord,
    TransactionStatus,
};

pub const DAILY_POINTS: usize = 30;
pub const MONTHLY_POINTS: usize = 12;

pub const DAILY_REVENUE: Range<f64> = 10_000.0..28_000.0;
pub const DAILY_EXPENSES: Range<f64> = 5_000.0..12_000.0;
pub const DAILY_PROFIT: Range<f64> = 3_000.0..13_000.0;
pub const MONTHLY_REVENUE: Range<f64> = 25_000.0..115_000.0;
pub const MONTHLY_TARGET: Range<f64> = 50_000.0..100_000.0;

/// Every dataset the dashboard displays, produced by a single render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub reference_date: NaiveDate,
    pub metrics: Vec<MetricCard>,
    pub daily: Vec<TimeSeriesPoint>,
    pub monthly: Vec<MonthlyPoint>,
    pub categories: Vec<CategorySlice>,
    pub transactions: Vec<TransactionRecord>,
}

impl DashboardData {
    pub fn generate<R: Rng>(today: NaiveDate, rng: &mut R) -> Self {
        Self {
            reference_date: today,
            metrics: get_mock_metrics(),
            daily: generate_daily_series(today, rng),
            monthly: generate_monthly_series(today, rng),
            categories: get_mock_categories(),
            transactions: get_mock_transactions(),
        }
    }
}

/// Today's date in `tz`, or in the local zone when none is configured.
pub fn reference_date(tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}

pub fn get_mock_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Total Revenue",
            value: "$48,345.20",
            change: 12.5,
            icon: MetricIcon::Dollar,
        },
        MetricCard {
            title: "Total Expenses",
            value: "$15,778.90",
            change: -2.3,
            icon: MetricIcon::Wallet,
        },
        MetricCard {
            title: "New Customers",
            value: "328",
            change: 8.1,
            icon: MetricIcon::Users,
        },
        MetricCard {
            title: "Growth Rate",
            value: "14.2%",
            change: 3.6,
            icon: MetricIcon::TrendingUp,
        },
    ]
}

/// Thirty daily points ending at `today`, oldest first.
///
/// Revenue, expenses and profit are drawn independently; profit is not
/// revenue minus expenses.
pub fn generate_daily_series<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<TimeSeriesPoint> {
    (0..DAILY_POINTS)
        .map(|i| {
            let date = today - Duration::days((DAILY_POINTS - 1 - i) as i64);
            TimeSeriesPoint {
                date,
                label: date.format("%b %d").to_string(),
                revenue: rng.gen_range(DAILY_REVENUE),
                expenses: rng.gen_range(DAILY_EXPENSES),
                profit: rng.gen_range(DAILY_PROFIT),
            }
        })
        .collect()
}

/// Twelve monthly points ending at the month of `today`, oldest first.
pub fn generate_monthly_series<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<MonthlyPoint> {
    (0..MONTHLY_POINTS)
        .map(|i| {
            // Day of month clamps, e.g. Mar 31 minus one month is Feb 28/29
            let month = today - Months::new((MONTHLY_POINTS - 1 - i) as u32);
            MonthlyPoint {
                month,
                label: month.format("%b").to_string(),
                revenue: rng.gen_range(MONTHLY_REVENUE),
                target: rng.gen_range(MONTHLY_TARGET),
            }
        })
        .collect()
}

pub fn get_mock_categories() -> Vec<CategorySlice> {
    vec![
        CategorySlice { name: "Salaries", percentage: 45 },
        CategorySlice { name: "Marketing", percentage: 20 },
        CategorySlice { name: "Operations", percentage: 15 },
        CategorySlice { name: "Equipment", percentage: 10 },
        CategorySlice { name: "Other", percentage: 10 },
    ]
}

pub fn get_mock_transactions() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord {
            id: "TRX-001",
            name: "Acme Corp",
            category: "Software Services",
            date: "Jun 21, 2023",
            amount: 12500.0,
            status: TransactionStatus::Completed,
        },
        TransactionRecord {
            id: "TRX-002",
            name: "TechGiant Inc",
            category: "Hardware",
            date: "Jun 20, 2023",
            amount: 8750.50,
            status: TransactionStatus::Completed,
        },
        TransactionRecord {
            id: "TRX-003",
            name: "Digital Marketing",
            category: "Marketing",
            date: "Jun 19, 2023",
            amount: 2430.0,
            status: TransactionStatus::Pending,
        },
        TransactionRecord {
            id: "TRX-004",
            name: "Office Supplies Ltd",
            category: "Supplies",
            date: "Jun 18, 2023",
            amount: 1250.75,
            status: TransactionStatus::Completed,
        },
        TransactionRecord {
            id: "TRX-005",
            name: "Cloud Services Co",
            category: "Infrastructure",
            date: "Jun 17, 2023",
            amount: 4500.0,
            status: TransactionStatus::Failed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Calendar month as a single increasing number, for adjacency checks.
    fn month_ordinal(date: NaiveDate) -> i32 {
        date.year() * 12 + date.month0() as i32
    }

    #[test]
    fn test_categories_sum_to_100() {
        let total: u32 = get_mock_categories().iter().map(|c| c.percentage).sum();
        assert_eq!(total, 100);
        assert_eq!(get_mock_categories().len(), 5);
    }

    #[test]
    fn test_daily_series_ordered_and_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        // Crosses a year boundary
        let today = date(2024, 1, 10);
        let series = generate_daily_series(today, &mut rng);

        assert_eq!(series.len(), 30);
        assert_eq!(series.last().unwrap().date, today);
        assert_eq!(series[0].date, date(2023, 12, 12));
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        let labels: HashSet<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels.len(), 30);
        assert_eq!(series.last().unwrap().label, "Jan 10");
    }

    #[test]
    fn test_daily_values_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            for point in generate_daily_series(date(2024, 6, 1), &mut rng) {
                assert!(DAILY_REVENUE.contains(&point.revenue));
                assert!(DAILY_EXPENSES.contains(&point.expenses));
                assert!(DAILY_PROFIT.contains(&point.profit));
            }
        }
    }

    #[test]
    fn test_monthly_series_consecutive_months() {
        let mut rng = StdRng::seed_from_u64(3);
        // Month-end clamping must not skip or repeat February
        let today = date(2024, 3, 31);
        let series = generate_monthly_series(today, &mut rng);

        assert_eq!(series.len(), 12);
        assert_eq!(month_ordinal(series.last().unwrap().month), month_ordinal(today));
        for pair in series.windows(2) {
            assert_eq!(month_ordinal(pair[1].month), month_ordinal(pair[0].month) + 1);
        }
        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels[0], "Apr");
        assert_eq!(labels[10], "Feb");
        assert_eq!(labels[11], "Mar");
    }

    #[test]
    fn test_monthly_values_within_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for point in generate_monthly_series(date(2025, 12, 15), &mut rng) {
            assert!(MONTHLY_REVENUE.contains(&point.revenue));
            assert!(MONTHLY_TARGET.contains(&point.target));
        }
    }

    #[test]
    fn test_series_differ_between_passes() {
        let mut rng = StdRng::seed_from_u64(5);
        let today = date(2024, 6, 1);
        let first = DashboardData::generate(today, &mut rng);
        let second = DashboardData::generate(today, &mut rng);
        assert_ne!(first.daily, second.daily);
        assert_eq!(first.transactions, second.transactions);
        assert_eq!(first.metrics, second.metrics);
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let today = date(2024, 6, 1);
        let a = DashboardData::generate(today, &mut StdRng::seed_from_u64(9));
        let b = DashboardData::generate(today, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_transactions_literal() {
        let transactions = get_mock_transactions();
        assert_eq!(transactions.len(), 5);
        assert_eq!(transactions[0].id, "TRX-001");
        assert_eq!(transactions[4].status, TransactionStatus::Failed);
    }
}
