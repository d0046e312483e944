use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use clap::Parser;
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

use periodic::detail::{DetailSlots, NOT_FOUND_TITLE};
use periodic::html::{self, PageLinks};
use periodic::{suggest, Block, Dataset, Viewer};

#[derive(Debug, Parser)]
#[command(author, version, about = "Serve the periodic table viewer")]
struct Args {
    /// Element dataset: a JSON file path or an http(s) URL.
    #[arg(long, env = "PERIODIC_DATA", default_value = "data/elements.json")]
    data: String,
    #[arg(long, env = "PERIODIC_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

struct AppState {
    dataset: Dataset,
    load_error: Option<String>,
}

type SharedState = Arc<AppState>;

impl AppState {
    fn viewer(&self) -> Viewer {
        match &self.load_error {
            Some(message) => Viewer::with_load_error(self.dataset.clone(), message),
            None => Viewer::new(self.dataset.clone()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ViewQuery {
    q: Option<String>,
    block: Option<String>,
    open: Option<String>,
    live: Option<bool>,
}

impl ViewQuery {
    fn block(&self) -> Option<Block> {
        let raw = self.block.as_deref().map(str::trim).filter(|b| !b.is_empty())?;
        match raw.parse() {
            Ok(block) => Some(block),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    fn links(&self) -> PageLinks {
        PageLinks {
            query: self.q.clone().unwrap_or_default(),
            block: self.block(),
        }
    }

    /// Replays the request's controls onto a fresh viewer: block button,
    /// then the search box (typed live or submitted), then the selection.
    fn replay(&self, state: &AppState) -> Viewer {
        let mut viewer = state.viewer();
        viewer.highlight_block(self.block());
        let q = self.q.as_deref().unwrap_or("");
        if self.live.unwrap_or(false) {
            viewer.input(q);
        } else if !q.trim().is_empty() {
            viewer.submit_text(q);
        }
        if let Some(symbol) = self.open.as_deref().filter(|s| !s.trim().is_empty()) {
            viewer.select(symbol);
        }
        viewer
    }
}

#[derive(Deserialize)]
struct SuggestQuery {
    q: Option<String>,
}

#[derive(Deserialize)]
struct DetailsQuery {
    symbol: Option<String>,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn render(err: askama::Error) -> Self {
        log::error!("template render failed: {err}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Could not render page.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

async fn index(
    State(state): State<SharedState>,
    Query(q): Query<ViewQuery>,
) -> Result<Html<String>, ApiError> {
    let viewer = q.replay(&state);
    let page = html::render_index(&viewer.snapshot(), &q.links()).map_err(ApiError::render)?;
    Ok(Html(page))
}

async fn view(State(state): State<SharedState>, Query(q): Query<ViewQuery>) -> impl IntoResponse {
    let viewer = q.replay(&state);
    Json(html::fragments(&viewer.snapshot(), &q.links()))
}

async fn suggestions(
    State(state): State<SharedState>,
    Query(q): Query<SuggestQuery>,
) -> impl IntoResponse {
    Json(suggest(q.q.as_deref().unwrap_or(""), &state.dataset))
}

async fn element(
    State(state): State<SharedState>,
    Path(symbol): Path<String>,
) -> Result<Json<DetailSlots>, ApiError> {
    match state.dataset.find(&symbol) {
        Some(record) => Ok(Json(DetailSlots::for_record(record))),
        None => {
            log::warn!("Element with symbol {symbol} not found.");
            Err(ApiError::not_found(NOT_FOUND_TITLE))
        }
    }
}

async fn element_details(
    State(state): State<SharedState>,
    Query(q): Query<DetailsQuery>,
) -> Result<Html<String>, ApiError> {
    let symbol = q.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let slots = match symbol {
        None => {
            log::error!("No element symbol found in URL.");
            DetailSlots::default()
        }
        Some(symbol) => match state.dataset.find(symbol) {
            Some(record) => DetailSlots::for_record(record),
            None => {
                log::error!("Element with symbol {symbol} not found.");
                DetailSlots::default()
            }
        },
    };
    let page = html::render_details_page(&slots).map_err(ApiError::render)?;
    Ok(Html(page))
}

async fn elements_json(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.dataset.records().to_vec())
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], html::stylesheet())
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/element-details", get(element_details))
        .route("/elements.json", get(elements_json))
        .route("/api/view", get(view))
        .route("/api/suggest", get(suggestions))
        .route("/api/element/:symbol", get(element))
        .route("/static/style.css", get(stylesheet))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (dataset, load_error) = Dataset::load_or_empty(&args.data).await;
    let app = build_router(Arc::new(AppState { dataset, load_error }));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    log::info!("Serving on http://{}", args.addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("HTTP server exited");
    Ok(())
}
