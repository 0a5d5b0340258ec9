pub mod cli;
pub mod dashboard;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod mock_data;
pub mod models;
pub mod timeframe;

use anyhow::{Context, Result};
use cli::{OutputFormat, ShowArgs};
use mock_data::{reference_date, DashboardData};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tracing::info;

/// Render the dashboard once as a static document.
pub fn show_report(args: ShowArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let data = DashboardData::generate(reference_date(args.timezone), &mut rng);

    let rendered = render_report(&data, &args)?;
    write_output(&rendered, args.output.as_deref())
}

pub fn render_report(data: &DashboardData, args: &ShowArgs) -> Result<String> {
    let rendered = match args.format {
        OutputFormat::Table => formatters::format_table(data, args.timeframe),
        OutputFormat::Json => formatters::format_json(data, args.timeframe)?,
        OutputFormat::Csv => formatters::format_csv(data)?,
        OutputFormat::Markdown => formatters::format_markdown(data, args.timeframe),
    };
    Ok(rendered)
}

/// Print to stdout, or write to `output` (with `~` expanded) when given.
pub fn write_output(content: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            let path = shellexpand::tilde(path).into_owned();
            fs::write(&path, content).with_context(|| format!("failed to write {}", path))?;
            info!(%path, bytes = content.len(), "report written");
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeframe::Timeframe;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn args(format: OutputFormat) -> ShowArgs {
        ShowArgs {
            format,
            output: None,
            timeframe: Timeframe::Month,
            timezone: None,
            seed: Some(3),
        }
    }

    fn data() -> DashboardData {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        DashboardData::generate(today, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_timeframe_does_not_change_report_data() {
        let data = data();
        let outputs: Vec<serde_json::Value> = Timeframe::ALL
            .iter()
            .map(|&timeframe| {
                let mut args = args(OutputFormat::Json);
                args.timeframe = timeframe;
                let mut value: serde_json::Value =
                    serde_json::from_str(&render_report(&data, &args).unwrap()).unwrap();
                value.as_object_mut().unwrap().remove("timeframe");
                value
            })
            .collect();
        assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.md");
        let rendered = render_report(&data(), &args(OutputFormat::Markdown)).unwrap();

        write_output(&rendered, path.to_str()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, rendered);
        assert!(written.starts_with("# Financial Dashboard"));
    }

    #[test]
    fn test_write_output_to_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.csv");
        assert!(write_output("x", path.to_str()).is_err());
    }
}
