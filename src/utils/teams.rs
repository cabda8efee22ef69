use serde::Serialize;
use std::cmp::Reverse;

const BASKETBALL_REFERENCE_URL: &str = "https://www.basketball-reference.com/teams";

/// Static reference data for an NBA team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCodeInfo {
    pub nickname: &'static str,
    /// Short code used by the odds provider in game IDs
    pub code: &'static str,
    pub basketball_reference_code: &'static str,
    pub full_name: &'static str,
}

impl TeamCodeInfo {
    /// Basketball-Reference team page for a season (e.g. 2024 for 2023-24)
    pub fn reference_url(&self, season: i32) -> String {
        format!(
            "{}/{}/{}.html",
            BASKETBALL_REFERENCE_URL, self.basketball_reference_code, season
        )
    }
}

const fn team(
    nickname: &'static str,
    code: &'static str,
    basketball_reference_code: &'static str,
    full_name: &'static str,
) -> TeamCodeInfo {
    TeamCodeInfo {
        nickname,
        code,
        basketball_reference_code,
        full_name,
    }
}

pub static NBA_TEAMS: [TeamCodeInfo; 30] = [
    team("Hawks", "ATL", "ATL", "Atlanta Hawks"),
    team("Celtics", "BOS", "BOS", "Boston Celtics"),
    team("Nets", "BKN", "BRK", "Brooklyn Nets"),
    team("Hornets", "CHA", "CHO", "Charlotte Hornets"),
    team("Bulls", "CHI", "CHI", "Chicago Bulls"),
    team("Cavaliers", "CLE", "CLE", "Cleveland Cavaliers"),
    team("Mavericks", "DAL", "DAL", "Dallas Mavericks"),
    team("Nuggets", "DEN", "DEN", "Denver Nuggets"),
    team("Pistons", "DET", "DET", "Detroit Pistons"),
    team("Warriors", "GS", "GSW", "Golden State Warriors"),
    team("Rockets", "HOU", "HOU", "Houston Rockets"),
    team("Pacers", "IND", "IND", "Indiana Pacers"),
    team("Clippers", "LAC", "LAC", "Los Angeles Clippers"),
    team("Lakers", "LAL", "LAL", "Los Angeles Lakers"),
    team("Grizzlies", "MEM", "MEM", "Memphis Grizzlies"),
    team("Heat", "MIA", "MIA", "Miami Heat"),
    team("Bucks", "MIL", "MIL", "Milwaukee Bucks"),
    team("Timberwolves", "MIN", "MIN", "Minnesota Timberwolves"),
    team("Pelicans", "NO", "NOP", "New Orleans Pelicans"),
    team("Knicks", "NY", "NYK", "New York Knicks"),
    team("Thunder", "OKC", "OKC", "Oklahoma City Thunder"),
    team("Magic", "ORL", "ORL", "Orlando Magic"),
    team("76ers", "PHI", "PHI", "Philadelphia 76ers"),
    team("Suns", "PHO", "PHO", "Phoenix Suns"),
    team("Trail Blazers", "POR", "POR", "Portland Trail Blazers"),
    team("Kings", "SAC", "SAC", "Sacramento Kings"),
    team("Spurs", "SA", "SAS", "San Antonio Spurs"),
    team("Raptors", "TOR", "TOR", "Toronto Raptors"),
    team("Jazz", "UTA", "UTA", "Utah Jazz"),
    team("Wizards", "WAS", "WAS", "Washington Wizards"),
];

// Nicknames fans use that don't match the official ones
const ALIASES: [(&str, &str); 2] = [("sixers", "76ers"), ("cavs", "Cavaliers")];

/// Look up a team from a nickname, provider code, or free-text name
pub fn team_info(name: &str) -> Option<&'static TeamCodeInfo> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some(team) = NBA_TEAMS.iter().find(|t| t.nickname == name) {
        return Some(team);
    }

    if let Some(team) = NBA_TEAMS.iter().find(|t| t.code.eq_ignore_ascii_case(name)) {
        return Some(team);
    }

    let needle = name.to_lowercase();

    if let Some(team) = NBA_TEAMS.iter().find(|t| {
        t.nickname.to_lowercase() == needle || t.full_name.to_lowercase() == needle
    }) {
        return Some(team);
    }

    // Longest overlap wins so "hornets" doesn't land on "Nets"
    let overlap = |candidate: &str| {
        let candidate = candidate.to_lowercase();
        if candidate.contains(&needle) || needle.contains(&candidate) {
            Some(candidate.len().min(needle.len()))
        } else {
            None
        }
    };
    if let Some((team, _)) = NBA_TEAMS
        .iter()
        .filter_map(|t| {
            let best = overlap(t.nickname).max(overlap(t.full_name))?;
            Some((t, best))
        })
        .min_by_key(|(_, len)| Reverse(*len))
    {
        return Some(team);
    }

    ALIASES
        .iter()
        .find(|(alias, _)| needle.contains(alias))
        .and_then(|(_, nickname)| NBA_TEAMS.iter().find(|t| t.nickname == *nickname))
}
