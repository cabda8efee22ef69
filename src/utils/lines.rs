use crate::models::{Game, LineInfo, LineRange, SPORTSBOOKS};

/// Find the highest and lowest total-under line across the known sportsbooks.
///
/// Books are scanned in `SPORTSBOOKS` order and comparisons are strict, so on a
/// tie the earlier book keeps the spot. A book is skipped unless its whole
/// total-under string parses as a finite number: trailing junk like "220abc"
/// is rejected rather than read as 220, and "inf"/"NaN" never win. When
/// nothing qualifies the sentinel values come back unchanged (highest "0",
/// lowest "999", empty sportsbook). Sportsbooks outside `SPORTSBOOKS` are
/// only logged.
pub fn find_lines(game: &Game) -> LineRange {
    for (key, _) in game.unlisted_books() {
        tracing::debug!(
            game_id = %game.game_id,
            sportsbook = key,
            "Ignoring unlisted sportsbook"
        );
    }

    let mut highest = LineInfo::highest_sentinel();
    let mut lowest = LineInfo::lowest_sentinel();
    let mut highest_value = 0.0_f64;
    let mut lowest_value = 999.0_f64;

    for sportsbook in SPORTSBOOKS {
        let Some(book) = game.book(sportsbook) else {
            continue;
        };
        if book.total_under.is_empty() {
            continue;
        }

        let under_value = match book.total_under.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                tracing::debug!(
                    game_id = %game.game_id,
                    sportsbook = %sportsbook,
                    value = %book.total_under,
                    "Skipping unparseable total under"
                );
                continue;
            }
        };

        if under_value > highest_value {
            highest_value = under_value;
            highest = LineInfo {
                value: book.total_under.clone(),
                odds: book.total_under_odds.clone(),
                sportsbook: sportsbook.key().to_string(),
            };
        }

        if under_value < lowest_value {
            lowest_value = under_value;
            lowest = LineInfo {
                value: book.total_under.clone(),
                odds: book.total_under_odds.clone(),
                sportsbook: sportsbook.key().to_string(),
            };
        }
    }

    LineRange { highest, lowest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookOdds;

    fn under(line: &str, odds: &str) -> Option<BookOdds> {
        Some(BookOdds {
            total_under: line.to_string(),
            total_under_odds: odds.to_string(),
            ..Default::default()
        })
    }

    fn game() -> Game {
        Game {
            game_id: "20240107_LAL@BOS".to_string(),
            game_date: "20240107".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_highest_and_lowest() {
        let mut game = game();
        game.bet365 = under("220.5", "-110");
        game.draftkings = under("221", "-105");

        let lines = find_lines(&game);
        assert_eq!(
            lines.highest,
            LineInfo {
                value: "221".to_string(),
                odds: "-105".to_string(),
                sportsbook: "draftkings".to_string(),
            }
        );
        assert_eq!(
            lines.lowest,
            LineInfo {
                value: "220.5".to_string(),
                odds: "-110".to_string(),
                sportsbook: "bet365".to_string(),
            }
        );
    }

    #[test]
    fn test_tie_goes_to_earlier_book() {
        let mut game = game();
        game.fanduel = under("220", "-115");
        game.betmgm = under("220", "-108");

        let lines = find_lines(&game);
        assert_eq!(lines.highest.sportsbook, "betmgm");
        assert_eq!(lines.highest.odds, "-108");
        assert_eq!(lines.lowest.sportsbook, "betmgm");
        assert_eq!(lines.lowest.odds, "-108");
    }

    #[test]
    fn test_no_qualifying_books_returns_sentinels() {
        let mut game = game();
        game.bet365 = under("", "-110");
        game.caesars_sportsbook = under("N/A", "-110");

        let lines = find_lines(&game);
        assert_eq!(lines.highest, LineInfo::highest_sentinel());
        assert_eq!(lines.lowest, LineInfo::lowest_sentinel());
        assert!(!lines.highest.has_data());
        assert_eq!(lines.lowest.value, "999");
        assert_eq!(lines.lowest.odds, "0");
    }

    #[test]
    fn test_single_book_is_both_extremes() {
        let mut game = game();
        game.espnbet = under("215.5", "-112");

        let lines = find_lines(&game);
        assert_eq!(lines.highest, lines.lowest);
        assert_eq!(lines.highest.sportsbook, "espnbet");
    }

    #[test]
    fn test_unknown_books_are_ignored() {
        let mut game = game();
        game.bet365 = under("220.5", "-110");
        game.extra.insert(
            "pointsbet".to_string(),
            serde_json::json!({ "totalUnder": "260", "totalUnderOdds": "-110" }),
        );

        let lines = find_lines(&game);
        assert_eq!(lines.highest.sportsbook, "bet365");
        assert_eq!(lines.highest.value, "220.5");
    }

    #[test]
    fn test_unparseable_line_is_skipped_entirely() {
        let mut game = game();
        game.ballybet = under("off", "-110");
        game.betrivers = under("219", "-110");

        let lines = find_lines(&game);
        assert_eq!(lines.highest.sportsbook, "betrivers");
        assert_eq!(lines.lowest.sportsbook, "betrivers");
    }

    #[test]
    fn test_infinite_line_is_skipped() {
        let mut game = game();
        game.bet365 = under("inf", "-110");
        game.draftkings = under("-infinity", "-110");
        game.fanduel = under("220", "-105");

        let lines = find_lines(&game);
        assert_eq!(lines.highest.sportsbook, "fanduel");
        assert_eq!(lines.highest.value, "220");
        assert_eq!(lines.lowest.sportsbook, "fanduel");
    }

    #[test]
    fn test_trailing_junk_is_skipped() {
        let mut game = game();
        game.bet365 = under("230abc", "-110");
        game.fanduel = under("220", "-105");

        let lines = find_lines(&game);
        assert_eq!(lines.highest.sportsbook, "fanduel");
        assert_eq!(lines.lowest.sportsbook, "fanduel");
    }

    #[test]
    fn test_raw_strings_are_kept() {
        let mut game = game();
        game.bet365 = under("220.50", "-110");
        game.fanduel = under("219.0", "+100");

        let lines = find_lines(&game);
        assert_eq!(lines.highest.value, "220.50");
        assert_eq!(lines.lowest.value, "219.0");
        assert_eq!(lines.lowest.odds, "+100");
    }
}
