use crate::OddsReport;
use anyhow::{Context, Result};
use std::path::Path;

/// Save the rendered table to a CSV file
pub fn save_report_to_csv<P: AsRef<Path>>(report: &OddsReport, filename: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(filename.as_ref()).context("Failed to create CSV file")?;

    writer.write_record([
        "Away Team",
        "Home Team",
        "Game Date",
        "Highest Line",
        "Highest Odds",
        "Highest Sportsbook",
        "Lowest Line",
        "Lowest Odds",
        "Lowest Sportsbook",
    ])?;

    for row in &report.rows {
        let highest = &row.lines.highest;
        let lowest = &row.lines.lowest;
        writer.write_record([
            row.away_team.as_str(),
            row.home_team.as_str(),
            row.game_date.as_str(),
            highest.value.as_str(),
            highest.odds.as_str(),
            highest.sportsbook.as_str(),
            lowest.value.as_str(),
            lowest.odds.as_str(),
            lowest.sportsbook.as_str(),
        ])?;
    }

    writer.flush().context("Failed to write CSV file")?;
    Ok(())
}

/// Save the rendered table as pretty JSON
pub fn save_report_to_json<P: AsRef<Path>>(report: &OddsReport, filename: P) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize odds report")?;
    std::fs::write(filename.as_ref(), json).context("Failed to write JSON file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookOdds, Game};
    use crate::GameRow;
    use tempfile::tempdir;

    fn report() -> OddsReport {
        let game = Game {
            game_id: "20240107_MIA@NY".to_string(),
            game_date: "20240107".to_string(),
            fanduel: Some(BookOdds {
                total_under: "214.5".to_string(),
                total_under_odds: "-112".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        OddsReport {
            date: "20240107".to_string(),
            display_date: "01/07/2024".to_string(),
            rows: vec![GameRow::from_game(&game)],
        }
    }

    #[test]
    fn test_save_report_to_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.csv");
        save_report_to_csv(&report(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert!(lines.next().unwrap().starts_with("Away Team,Home Team"));
        assert_eq!(
            lines.next().unwrap(),
            "MIA,NY,01/07/2024,214.5,-112,fanduel,214.5,-112,fanduel"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_save_report_to_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.json");
        save_report_to_json(&report(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["date"], "20240107");
        assert_eq!(value["rows"][0]["home_info"]["nickname"], "Knicks");
        assert_eq!(value["rows"][0]["lines"]["lowest"]["sportsbook"], "fanduel");
    }
}
