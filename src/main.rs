use anyhow::Result;
use clap::Parser;
use finance_dash::{
    cli::{Cli, Commands, DashboardArgs},
    dashboard::run_dashboard,
    logging::{init_logging, LogTarget},
    show_report,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show(args)) => {
            init_logging(LogTarget::Stderr)?;
            show_report(args)?;
        }
        Some(Commands::Dashboard(args)) => {
            init_logging(LogTarget::for_dashboard(args.log_file.as_deref()))?;
            run_dashboard(args)?;
        }
        None => {
            let args = DashboardArgs::default();
            init_logging(LogTarget::for_dashboard(args.log_file.as_deref()))?;
            run_dashboard(args)?;
        }
    }

    Ok(())
}
