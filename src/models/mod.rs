use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sportsbooks whose lines are compared, in the order they are scanned.
///
/// Ties between books resolve to whichever appears first here.
pub const SPORTSBOOKS: [Sportsbook; 8] = [
    Sportsbook::BallyBet,
    Sportsbook::Bet365,
    Sportsbook::BetMgm,
    Sportsbook::BetRivers,
    Sportsbook::Caesars,
    Sportsbook::DraftKings,
    Sportsbook::EspnBet,
    Sportsbook::FanDuel,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sportsbook {
    BallyBet,
    Bet365,
    BetMgm,
    BetRivers,
    Caesars,
    DraftKings,
    EspnBet,
    FanDuel,
}

impl Sportsbook {
    /// Key used by the odds provider for this book
    pub fn key(&self) -> &'static str {
        match self {
            Sportsbook::BallyBet => "ballybet",
            Sportsbook::Bet365 => "bet365",
            Sportsbook::BetMgm => "betmgm",
            Sportsbook::BetRivers => "betrivers",
            Sportsbook::Caesars => "caesars_sportsbook",
            Sportsbook::DraftKings => "draftkings",
            Sportsbook::EspnBet => "espnbet",
            Sportsbook::FanDuel => "fanduel",
        }
    }

    /// Name shown in tables
    pub fn display_name(&self) -> &'static str {
        match self {
            Sportsbook::BallyBet => "Bally Bet",
            Sportsbook::Bet365 => "bet365",
            Sportsbook::BetMgm => "BetMGM",
            Sportsbook::BetRivers => "BetRivers",
            Sportsbook::Caesars => "Caesars",
            Sportsbook::DraftKings => "DraftKings",
            Sportsbook::EspnBet => "ESPN BET",
            Sportsbook::FanDuel => "FanDuel",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        SPORTSBOOKS.iter().copied().find(|book| book.key() == key)
    }
}

impl fmt::Display for Sportsbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Odds quoted by a single sportsbook for one game.
///
/// Values are kept exactly as the provider sends them ("220.5", "-110", "+3.5").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookOdds {
    pub total_under: String,
    pub total_over: String,
    pub total_under_odds: String,
    pub total_over_odds: String,
    pub away_team_spread: String,
    pub away_team_spread_odds: String,
    pub home_team_spread: String,
    pub home_team_spread_odds: String,
    #[serde(rename = "awayTeamMLOdds")]
    pub away_team_ml_odds: String,
    #[serde(rename = "homeTeamMLOdds")]
    pub home_team_ml_odds: String,
}

/// One NBA game as returned by the odds provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "gameID")]
    pub game_id: String,
    #[serde(default)]
    pub last_updated_e_time: String,
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(
        rename = "teamIDHome",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_id_home: Option<String>,
    #[serde(
        rename = "teamIDAway",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_id_away: Option<String>,
    #[serde(rename = "homeTeam", default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(rename = "awayTeam", default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ballybet: Option<BookOdds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bet365: Option<BookOdds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub betmgm: Option<BookOdds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub betrivers: Option<BookOdds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caesars_sportsbook: Option<BookOdds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draftkings: Option<BookOdds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub espnbet: Option<BookOdds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fanduel: Option<BookOdds>,

    /// Every other key the provider sent (new sportsbooks, metadata, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Game {
    /// Odds for one of the known sportsbooks, if the provider quoted it
    pub fn book(&self, sportsbook: Sportsbook) -> Option<&BookOdds> {
        match sportsbook {
            Sportsbook::BallyBet => self.ballybet.as_ref(),
            Sportsbook::Bet365 => self.bet365.as_ref(),
            Sportsbook::BetMgm => self.betmgm.as_ref(),
            Sportsbook::BetRivers => self.betrivers.as_ref(),
            Sportsbook::Caesars => self.caesars_sportsbook.as_ref(),
            Sportsbook::DraftKings => self.draftkings.as_ref(),
            Sportsbook::EspnBet => self.espnbet.as_ref(),
            Sportsbook::FanDuel => self.fanduel.as_ref(),
        }
    }

    /// Extra keys that look like sportsbook odds but are not in `SPORTSBOOKS`
    pub fn unlisted_books(&self) -> Vec<(&str, BookOdds)> {
        self.extra
            .iter()
            .filter(|(_, value)| value.is_object())
            .filter_map(|(key, value)| {
                let odds = BookOdds::deserialize(value).ok()?;
                Some((key.as_str(), odds))
            })
            .collect()
    }
}

/// Response envelope from the odds provider
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsSnapshot {
    pub status_code: i64,
    /// Games keyed by the provider's opaque key, in the order received
    #[serde(default, deserialize_with = "ordered_games")]
    pub body: Vec<(String, Game)>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OddsSnapshot {
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.body.iter().map(|(_, game)| game)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code) && self.error.is_none()
    }
}

/// A total-under line and where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineInfo {
    pub value: String,
    pub odds: String,
    /// Empty when no sportsbook reported a usable line
    pub sportsbook: String,
}

impl LineInfo {
    pub fn highest_sentinel() -> Self {
        Self {
            value: "0".to_string(),
            odds: "0".to_string(),
            sportsbook: String::new(),
        }
    }

    pub fn lowest_sentinel() -> Self {
        Self {
            value: "999".to_string(),
            odds: "0".to_string(),
            sportsbook: String::new(),
        }
    }

    pub fn has_data(&self) -> bool {
        !self.sportsbook.is_empty()
    }
}

/// Highest and lowest total-under line for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRange {
    pub highest: LineInfo,
    pub lowest: LineInfo,
}

/// Accepts `"12"` or `12` for team IDs
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

fn ordered_games<'de, D>(deserializer: D) -> Result<Vec<(String, Game)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GamesVisitor;

    impl<'de> Visitor<'de> for GamesVisitor {
        type Value = Vec<(String, Game)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of game records")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut games = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, game)) = map.next_entry::<String, Game>()? {
                games.push((key, game));
            }
            Ok(games)
        }
    }

    deserializer.deserialize_any(GamesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "statusCode": 200,
        "body": {
            "20240107_MIA@BOS": {
                "gameID": "20240107_MIA@BOS",
                "last_updated_e_time": "1704663322.5",
                "gameDate": "20240107",
                "teamIDHome": "2",
                "teamIDAway": 16,
                "bet365": {
                    "totalUnder": "220.5",
                    "totalUnderOdds": "-110",
                    "totalOver": "220.5",
                    "totalOverOdds": "-110",
                    "awayTeamMLOdds": "+180",
                    "homeTeamMLOdds": "-220"
                },
                "newbook": { "totalUnder": "230", "totalUnderOdds": "-120" },
                "sportsBooks": "bet365,newbook"
            },
            "20240107_LAL@ATL": {
                "gameID": "20240107_LAL@ATL",
                "gameDate": "20240107",
                "awayTeam": "Lakers",
                "homeTeam": "Hawks"
            }
        }
    }"#;

    #[test]
    fn test_snapshot_keeps_provider_order() {
        let snapshot: OddsSnapshot = serde_json::from_str(SAMPLE).unwrap();
        assert!(snapshot.is_success());
        let keys: Vec<&str> = snapshot.body.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["20240107_MIA@BOS", "20240107_LAL@ATL"]);
    }

    #[test]
    fn test_game_splits_known_and_unknown_books() {
        let snapshot: OddsSnapshot = serde_json::from_str(SAMPLE).unwrap();
        let game = snapshot.games().next().unwrap();

        let bet365 = game.book(Sportsbook::Bet365).unwrap();
        assert_eq!(bet365.total_under, "220.5");
        assert_eq!(bet365.away_team_ml_odds, "+180");
        assert_eq!(bet365.home_team_spread, "");
        assert!(game.book(Sportsbook::FanDuel).is_none());

        assert_eq!(game.team_id_home.as_deref(), Some("2"));
        assert_eq!(game.team_id_away.as_deref(), Some("16"));

        assert!(game.extra.contains_key("sportsBooks"));
        let unlisted = game.unlisted_books();
        assert_eq!(unlisted.len(), 1);
        assert_eq!(unlisted[0].0, "newbook");
        assert_eq!(unlisted[0].1.total_under, "230");
    }

    #[test]
    fn test_error_envelope_without_body() {
        let snapshot: OddsSnapshot =
            serde_json::from_str(r#"{"statusCode": 400, "error": "bad gameDate"}"#).unwrap();
        assert!(snapshot.body.is_empty());
        assert!(!snapshot.is_success());
    }

    #[test]
    fn test_sportsbook_keys_round_trip() {
        for book in SPORTSBOOKS {
            assert_eq!(Sportsbook::from_key(book.key()), Some(book));
        }
        assert_eq!(Sportsbook::from_key("pointsbet"), None);
        assert_eq!(Sportsbook::Caesars.to_string(), "caesars_sportsbook");
        assert_eq!(Sportsbook::Caesars.display_name(), "Caesars");
    }
}
