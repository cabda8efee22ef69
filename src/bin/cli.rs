use anyhow::Result;
use clap::Parser;
use nba_odds_lines::config::Settings;
use nba_odds_lines::data::{save_report_to_csv, save_report_to_json};
use nba_odds_lines::dates::today_date;
use nba_odds_lines::fetch_odds_report;
use nba_odds_lines::odds_api::OddsApiClient;
use std::path::PathBuf;

/// Compare NBA total-under lines across sportsbooks for a date
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Game date in YYYYMMDD format
    #[arg(short, long, conflicts_with = "today")]
    date: Option<String>,

    /// Use today's date (US Eastern time)
    #[arg(short, long)]
    today: bool,

    /// Also write the table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write the table to a JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let settings = Settings::from_env();

    let date = match (args.today, args.date) {
        (true, _) | (false, None) => today_date(),
        (false, Some(date)) => date,
    };

    println!("NBA Total Under Lines\n");

    let odds_client = OddsApiClient::new(settings.odds_api_config());
    let report = match fetch_odds_report(&odds_client, &date).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    if report.is_empty() {
        println!("No games found for this date.");
        return Ok(());
    }

    println!("Odds for {}\n", report.display_date);
    for (i, row) in report.rows.iter().enumerate() {
        println!("{}. {}", i + 1, row.format());
    }

    if let Some(path) = args.csv {
        save_report_to_csv(&report, &path)?;
        println!("\nSaved lines to {}", path.display());
    }

    if let Some(path) = args.json {
        save_report_to_json(&report, &path)?;
        println!("\nSaved lines to {}", path.display());
    }

    Ok(())
}
