use crate::error::Result;
use crate::mock_data::DashboardData;
use crate::models::{BadgeTone, TransactionStatus};
use crate::timeframe::{timeframe_controls, Timeframe};
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};
use serde::Serialize;

/// en-US currency rendering with thousands grouping and two decimals.
///
/// `12500.0` becomes `$12,500.00`, negatives carry a leading minus
/// (`-$1.00`).
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, format_number(cents / 100), cents % 100)
}

pub fn format_number(num: u64) -> String {
    let num_str = num.to_string();
    let mut result = String::new();
    let mut count = 0;

    for ch in num_str.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

/// Axis tick label in thousands, e.g. `25000.0` -> `$25k`, `12500.0` -> `$12.5k`.
pub fn format_axis_thousands(value: f64) -> String {
    let thousands = (value / 1000.0 * 10.0).round() / 10.0;
    format!("${}k", thousands)
}

/// Magnitude of a percent change; direction is shown separately.
pub fn format_change(change: f64) -> String {
    format!("{}%", change.abs())
}

/// Smallest multiple of `step` that is at least `max` (and never zero).
pub fn axis_upper_bound(max: f64, step: f64) -> f64 {
    let bound = (max / step).ceil() * step;
    if bound > 0.0 {
        bound
    } else {
        step
    }
}

#[derive(Serialize)]
struct Report<'a> {
    timeframe: Timeframe,
    #[serde(flatten)]
    data: &'a DashboardData,
}

fn status_style_spec(status: TransactionStatus) -> &'static str {
    match status.badge_tone() {
        BadgeTone::Success => "Fg",
        BadgeTone::Warning => "Fy",
        BadgeTone::Danger => "Fr",
    }
}

fn colored_status(status: TransactionStatus) -> colored::ColoredString {
    match status.badge_tone() {
        BadgeTone::Success => status.label().green(),
        BadgeTone::Warning => status.label().yellow(),
        BadgeTone::Danger => status.label().red(),
    }
}

fn titled_table(titles: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        titles
            .iter()
            .map(|t| Cell::new(t).style_spec("bFc"))
            .collect(),
    ));
    table
}

pub fn format_table(data: &DashboardData, timeframe: Timeframe) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        format!("=== Financial Dashboard ({}) ===", data.reference_date.format("%b %d, %Y"))
            .bright_cyan()
            .bold()
    ));

    let mut metrics = titled_table(&["Metric", "Value", "Change"]);
    for metric in &data.metrics {
        let change = format!(
            "{} {} vs last month",
            metric.trend().arrow(),
            format_change(metric.change)
        );
        let spec = if metric.change > 0.0 { "Fg" } else { "Fr" };
        metrics.add_row(Row::new(vec![
            Cell::new(&format!("{} {}", metric.icon.glyph(), metric.title)),
            Cell::new(metric.value).style_spec("b"),
            Cell::new(&change).style_spec(spec),
        ]));
    }
    out.push_str(&metrics.to_string());

    let toggle: Vec<String> = timeframe_controls(timeframe)
        .into_iter()
        .map(|(t, active)| {
            if active {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect();
    out.push_str(&format!(
        "\n{}  {}\n",
        "Financial Overview".yellow(),
        toggle.join(" ")
    ));

    out.push_str(&format!("\n{}\n", "Revenue & Expenses".yellow()));
    let mut daily = titled_table(&["Date", "Revenue", "Expenses", "Profit"]);
    for point in &data.daily {
        daily.add_row(Row::new(vec![
            Cell::new(&point.label),
            Cell::new(&format_currency(point.revenue)),
            Cell::new(&format_currency(point.expenses)),
            Cell::new(&format_currency(point.profit)),
        ]));
    }
    out.push_str(&daily.to_string());

    out.push_str(&format!("\n{}\n", "Expense Breakdown".yellow()));
    let mut categories = titled_table(&["Category", "Share"]);
    for slice in &data.categories {
        categories.add_row(Row::new(vec![
            Cell::new(slice.name),
            Cell::new(&format!("{}%", slice.percentage)),
        ]));
    }
    out.push_str(&categories.to_string());

    out.push_str(&format!("\n{}\n", "Monthly Performance".yellow()));
    let mut monthly = titled_table(&["Month", "Revenue", "Target"]);
    for point in &data.monthly {
        monthly.add_row(Row::new(vec![
            Cell::new(&point.label),
            Cell::new(&format_currency(point.revenue)),
            Cell::new(&format_currency(point.target)),
        ]));
    }
    out.push_str(&monthly.to_string());

    out.push_str(&format!("\n{}\n", "Recent Transactions".yellow()));
    let mut transactions =
        titled_table(&["Transaction ID", "Name", "Category", "Date", "Amount", "Status"]);
    for trx in &data.transactions {
        transactions.add_row(Row::new(vec![
            Cell::new(trx.id),
            Cell::new(trx.name).style_spec("b"),
            Cell::new(trx.category),
            Cell::new(trx.date),
            Cell::new(&format_currency(trx.amount)).style_spec("r"),
            Cell::new(trx.status.label()).style_spec(status_style_spec(trx.status)),
        ]));
    }
    out.push_str(&transactions.to_string());

    let settled: f64 = data
        .transactions
        .iter()
        .filter(|t| t.status == TransactionStatus::Completed)
        .map(|t| t.amount)
        .sum();
    out.push_str(&format!(
        "\nSettled: {}  ({} of {} transactions, {})\n",
        format_currency(settled).green().bold(),
        data.transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .count(),
        data.transactions.len(),
        data.transactions
            .iter()
            .filter(|t| t.status != TransactionStatus::Completed)
            .map(|t| colored_status(t.status).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    out
}

fn csv_section<T: Serialize>(title: &str, rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::DashError::Io(e.into_error()))?;
    Ok(format!("# {}\n{}", title, String::from_utf8_lossy(&bytes)))
}

/// One CSV block per dataset, each with its own header row, separated by a
/// blank line.
pub fn format_csv(data: &DashboardData) -> Result<String> {
    let sections = [
        csv_section("metrics", &data.metrics)?,
        csv_section("daily", &data.daily)?,
        csv_section("monthly", &data.monthly)?,
        csv_section("categories", &data.categories)?,
        csv_section("transactions", &data.transactions)?,
    ];
    Ok(sections.join("\n"))
}

pub fn format_json(data: &DashboardData, timeframe: Timeframe) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Report { timeframe, data })
}

pub fn format_markdown(data: &DashboardData, timeframe: Timeframe) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "# Financial Dashboard\n\n_Reference date: {} · Timeframe: {}_\n\n",
        data.reference_date.format("%b %d, %Y"),
        timeframe.label()
    ));

    md.push_str("| Metric | Value | Change |\n");
    md.push_str("|--------|-------|--------|\n");
    for metric in &data.metrics {
        md.push_str(&format!(
            "| {} | {} | {} {} |\n",
            metric.title,
            metric.value,
            metric.trend().arrow(),
            format_change(metric.change)
        ));
    }

    md.push_str("\n## Revenue & Expenses\n\n");
    md.push_str("| Date | Revenue | Expenses | Profit |\n");
    md.push_str("|------|---------|----------|--------|\n");
    for point in &data.daily {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            point.label,
            format_currency(point.revenue),
            format_currency(point.expenses),
            format_currency(point.profit)
        ));
    }

    md.push_str("\n## Expense Breakdown\n\n");
    md.push_str("| Category | Share |\n");
    md.push_str("|----------|-------|\n");
    for slice in &data.categories {
        md.push_str(&format!("| {} | {}% |\n", slice.name, slice.percentage));
    }

    md.push_str("\n## Monthly Performance\n\n");
    md.push_str("| Month | Revenue | Target |\n");
    md.push_str("|-------|---------|--------|\n");
    for point in &data.monthly {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            point.label,
            format_currency(point.revenue),
            format_currency(point.target)
        ));
    }

    md.push_str("\n## Recent Transactions\n\n");
    md.push_str("| Transaction ID | Name | Category | Date | Amount | Status |\n");
    md.push_str("|----------------|------|----------|------|-------:|-------:|\n");
    for trx in &data.transactions {
        md.push_str(&format!(
            "| {} | **{}** | {} | {} | {} | {} |\n",
            trx.id,
            trx.name,
            trx.category,
            trx.date,
            format_currency(trx.amount),
            trx.status.label()
        ));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn snapshot() -> DashboardData {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        DashboardData::generate(today, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12500.0), "$12,500.00");
        assert_eq!(format_currency(1250.75), "$1,250.75");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(8750.5), "$8,750.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1.0), "-$1.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(48345), "48,345");
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(format_axis_thousands(25000.0), "$25k");
        assert_eq!(format_axis_thousands(12500.0), "$12.5k");
        assert_eq!(format_axis_thousands(0.0), "$0k");
    }

    #[test]
    fn test_axis_upper_bound() {
        assert_eq!(axis_upper_bound(27_999.0, 5_000.0), 30_000.0);
        assert_eq!(axis_upper_bound(30_000.0, 5_000.0), 30_000.0);
        assert_eq!(axis_upper_bound(0.0, 5_000.0), 5_000.0);
    }

    #[test]
    fn test_format_change_drops_sign() {
        assert_eq!(format_change(-2.3), "2.3%");
        assert_eq!(format_change(12.5), "12.5%");
    }

    #[test]
    fn test_table_contains_sections() {
        let table = format_table(&snapshot(), Timeframe::Week);
        assert!(table.contains("TRX-005"));
        assert!(table.contains("$12,500.00"));
        assert!(table.contains("[Week]"));
        assert!(table.contains("Salaries"));
    }

    #[test]
    fn test_json_output() {
        let json = format_json(&snapshot(), Timeframe::Month).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["timeframe"], "month");
        assert_eq!(value["daily"].as_array().unwrap().len(), 30);
        assert_eq!(value["monthly"].as_array().unwrap().len(), 12);
        assert_eq!(value["transactions"][2]["status"], "pending");
    }

    #[test]
    fn test_csv_output() {
        let csv = format_csv(&snapshot()).unwrap();
        assert!(csv.contains("# transactions\nid,name,category,date,amount,status\n"));
        assert!(csv.contains("TRX-001,Acme Corp,Software Services,\"Jun 21, 2023\",12500.0,completed"));
        assert!(csv.contains("# categories\nname,percentage\nSalaries,45\n"));
    }

    #[test]
    fn test_markdown_output() {
        let md = format_markdown(&snapshot(), Timeframe::Year);
        assert!(md.contains("Timeframe: Year"));
        assert!(md.contains("| TRX-004 | **Office Supplies Ltd** | Supplies | Jun 18, 2023 | $1,250.75 | Completed |"));
        assert!(md.contains("| Marketing | 20% |"));
    }
}
