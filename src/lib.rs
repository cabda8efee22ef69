pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use api::*;
pub use error::FetchError;
pub use models::*;
pub use utils::*;

use api::OddsSource;
use serde::Serialize;
use utils::dates::{format_date, is_valid_date};
use utils::lines::find_lines;
use utils::teams::{team_info, TeamCodeInfo};

/// One table row: a game and the spread of its total-under lines
#[derive(Debug, Clone, Serialize)]
pub struct GameRow {
    pub game_id: String,
    pub away_team: String,
    pub home_team: String,
    /// MM/DD/YYYY
    pub game_date: String,
    pub away_info: Option<&'static TeamCodeInfo>,
    pub home_info: Option<&'static TeamCodeInfo>,
    pub lines: LineRange,
}

impl GameRow {
    pub fn from_game(game: &Game) -> Self {
        let (away_team, home_team) = match game.matchup() {
            Ok(matchup) => (matchup.away_team, matchup.home_team),
            Err(e) => {
                tracing::warn!("{}", e);
                (game.game_id.clone(), String::new())
            }
        };

        Self {
            game_id: game.game_id.clone(),
            away_info: team_info(&away_team),
            home_info: team_info(&home_team),
            game_date: format_date(&game.game_date),
            lines: find_lines(game),
            away_team,
            home_team,
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{} @ {} ({}) | Highest: {} | Lowest: {}",
            self.away_team,
            self.home_team,
            self.game_date,
            describe_line(&self.lines.highest),
            describe_line(&self.lines.lowest),
        )
    }
}

fn describe_line(line: &LineInfo) -> String {
    if line.has_data() {
        format!("{} ({}) via {}", line.value, line.odds, line.sportsbook)
    } else {
        "no line".to_string()
    }
}

/// Everything the table needs for one requested date
#[derive(Debug, Clone, Serialize)]
pub struct OddsReport {
    /// YYYYMMDD as requested
    pub date: String,
    /// MM/DD/YYYY
    pub display_date: String,
    pub rows: Vec<GameRow>,
}

impl OddsReport {
    pub fn from_snapshot(date: &str, snapshot: &OddsSnapshot) -> Self {
        Self {
            date: date.to_string(),
            display_date: format_date(date),
            rows: snapshot.games().map(GameRow::from_game).collect(),
        }
    }

    /// No games on this date; not an error
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Validate the date, fetch its odds and build the comparison table
pub async fn fetch_odds_report<S>(source: &S, date: &str) -> Result<OddsReport, FetchError>
where
    S: OddsSource + ?Sized,
{
    let date = date.trim();
    if !is_valid_date(date) {
        return Err(FetchError::InvalidDate(date.to_string()));
    }

    let snapshot = match source.fetch_odds(date).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            if e.is_transport() {
                tracing::error!("Error fetching odds for {}: {}", date, e);
            }
            return Err(e);
        }
    };

    let report = OddsReport::from_snapshot(date, &snapshot);
    if report.is_empty() {
        tracing::info!("No games found for {}", date);
    }

    Ok(report)
}
