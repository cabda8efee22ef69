use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use nba_odds_lines::config::Settings;
use nba_odds_lines::dates::{season_for_date, today_date};
use nba_odds_lines::fetch_gate::FetchGate;
use nba_odds_lines::odds_api::OddsApiClient;
use nba_odds_lines::{fetch_odds_report, FetchError, OddsReport};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::services::ServeDir;

// Custom filters for formatting
mod filters {
    use nba_odds_lines::{LineInfo, Sportsbook};

    pub fn line_value(line: &LineInfo) -> ::askama::Result<String> {
        if line.has_data() {
            Ok(line.value.clone())
        } else {
            Ok("-".to_string())
        }
    }

    pub fn book_name(line: &LineInfo) -> ::askama::Result<String> {
        Ok(Sportsbook::from_key(&line.sportsbook)
            .map(|book| book.display_name().to_string())
            .unwrap_or_else(|| line.sportsbook.clone()))
    }
}

#[derive(Template, Default)]
#[template(path = "index.html")]
struct IndexTemplate {
    date: String,
    error: Option<String>,
    report: Option<OddsReport>,
    season: i32,
}

struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

#[derive(Clone)]
struct AppState {
    odds_client: Arc<OddsApiClient>,
    gate: FetchGate,
}

#[derive(Debug, Deserialize)]
struct DateQuery {
    date: Option<String>,
}

async fn home() -> impl IntoResponse {
    HtmlTemplate(IndexTemplate::default())
}

async fn odds(State(state): State<AppState>, Query(query): Query<DateQuery>) -> impl IntoResponse {
    let date = query.date.unwrap_or_default();
    HtmlTemplate(load_odds(&state, date).await)
}

async fn today(State(state): State<AppState>) -> impl IntoResponse {
    HtmlTemplate(load_odds(&state, today_date()).await)
}

async fn load_odds(state: &AppState, date: String) -> IndexTemplate {
    let date = date.trim().to_string();

    // Released when this function returns, whichever way it returns
    let result = match state.gate.try_acquire() {
        Some(_guard) => fetch_odds_report(state.odds_client.as_ref(), &date).await,
        None => Err(FetchError::Busy),
    };

    match result {
        Ok(report) => IndexTemplate {
            season: season_for_date(&report.date).unwrap_or_default(),
            date,
            error: None,
            report: Some(report),
        },
        Err(e) => {
            tracing::warn!("Odds request for '{}' failed: {}", date, e);
            IndexTemplate {
                date,
                error: Some(e.user_message().to_string()),
                report: None,
                season: 0,
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    let state = AppState {
        odds_client: Arc::new(OddsApiClient::new(settings.odds_api_config())),
        gate: FetchGate::new(),
    };

    println!("\nStarting web server at http://{}", settings.web_addr);
    println!("Press Ctrl+C to stop\n");

    // Build router with routes
    let app = Router::new()
        .nest_service("/static", ServeDir::new("static"))
        .route("/", get(home))
        .route("/odds", get(odds))
        .route("/today", get(today))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(&settings.web_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", settings.web_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
    }
}
