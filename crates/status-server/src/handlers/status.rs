//! The status page handler.
//!
//! One handler serves every path and method. Each request resumes or creates
//! a session, bumps the shared visit counter (favicon requests excluded),
//! probes the database tier, and renders the diagnostics page. The response
//! is always 200: a dead database or session store degrades the page content,
//! never the HTTP status.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, Uri};
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, warn};

use crate::database;
use crate::render::{render_page, PageContext};
use crate::session;
use crate::state::AppState;

/// Only favicon requests are excluded from the visit counter. This is a
/// deliberate narrow special case, not a general static-asset filter.
pub fn is_qualifying(path: &str) -> bool {
    !path.contains("/favicon.ico") && path.starts_with('/')
}

/// Serving-instance name for display: `APP_SERVER_NAME` when set and
/// non-empty, else the machine's own hostname.
pub fn resolve_server_name() -> String {
    server_name_from(std::env::var("APP_SERVER_NAME").ok())
}

fn server_name_from(override_name: Option<String>) -> String {
    override_name
        .filter(|name| !name.is_empty())
        .or_else(sysinfo::System::host_name)
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn status_page(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let cookie_name = &state.settings.session.cookie_name;

    let (session_id, is_new_session) = match session::cookie_session_id(&headers, cookie_name) {
        Some(id) => (id, false),
        None => (session::new_session_id(), true),
    };

    let path = uri.path();
    let visits = if is_qualifying(path) {
        state.sessions.increment(&session_id).await
    } else {
        debug!(%path, "non-qualifying request, leaving visit counter untouched");
        state.sessions.peek(&session_id).await
    }
    .unwrap_or_else(|err| {
        warn!(error = %err, session_id, "session store failure, rendering without count");
        0
    });

    let connectivity = database::check_connection(&state.settings.database).await;

    let hostname = resolve_server_name();
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = render_page(&PageContext {
        connectivity: &connectivity,
        server_version: env!("CARGO_PKG_VERSION"),
        hostname: &hostname,
        timestamp: &timestamp,
        session_id: &session_id,
        visits,
    });

    let mut response = Html(html).into_response();
    if is_new_session {
        let cookie = session::session_cookie(cookie_name, &session_id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}
