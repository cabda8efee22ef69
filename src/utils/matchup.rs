use crate::models::Game;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub away_team: String,
    pub home_team: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    #[error("Malformed game ID '{0}', expected <YYYYMMDD>_<AWAY>@<HOME>")]
    MalformedGameId(String),
}

/// Split a provider game ID such as `20240107_LAL@BOS` into away and home teams
pub fn parse_game_info(game_id: &str) -> Result<Matchup, MatchupError> {
    let malformed = || MatchupError::MalformedGameId(game_id.to_string());

    let mut parts = game_id.split('_');
    let _date = parts.next();
    let teams = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    let (away, home) = teams.split_once('@').ok_or_else(malformed)?;
    if away.is_empty() || home.is_empty() || home.contains('@') {
        return Err(malformed());
    }

    Ok(Matchup {
        away_team: away.to_string(),
        home_team: home.to_string(),
    })
}

impl Game {
    /// Team names from the explicit fields, falling back to the game ID
    pub fn matchup(&self) -> Result<Matchup, MatchupError> {
        match (&self.away_team, &self.home_team) {
            (Some(away), Some(home)) if !away.is_empty() && !home.is_empty() => Ok(Matchup {
                away_team: away.clone(),
                home_team: home.clone(),
            }),
            _ => parse_game_info(&self.game_id),
        }
    }
}
