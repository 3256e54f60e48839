//! Request routing and the unlock gate at request time.

use std::sync::Arc;

use advent::{Error, Result};
use lambda_http::http::Method;
use lambda_http::{Body, Request, Response};
use tracing::{error, info};

use crate::http::{error_reply, wants_json, Reply};
use crate::pages::{self, DayPage, IndexPage};
use crate::state::AppState;

/// Lambda entry point: route the request and turn any failure into an error page.
pub async fn handler(
    state: Arc<AppState>,
    event: Request,
) -> std::result::Result<Response<Body>, lambda_http::Error> {
    let raw_path = event.uri().path();
    let path = strip_base_path(raw_path, &state.base_path);
    let method = event.method().clone();

    info!("Received request: method={}, path={} (raw: {})", method, path, raw_path);

    let reply = match route(&state, &method, path).await {
        Ok(reply) => reply,
        Err(e) => {
            if e.status_code() >= 500 {
                error!("Request failed: method={}, path={}: {}", method, path, e);
            }
            error_reply(&e, wants_json(&event), &state.base_path)
        }
    };

    info!("Responded: method={}, path={}, status={}", method, path, reply.status);

    let reply = if method == Method::HEAD {
        reply.without_body()
    } else {
        reply
    };
    reply.into_response()
}

async fn route(state: &AppState, method: &Method, path: &str) -> Result<Reply> {
    if path == "/" {
        require_get(method)?;
        return home(state);
    }

    if let Some(rest) = path.strip_prefix("/day/") {
        require_get(method)?;
        return day(state, rest.strip_suffix('/').unwrap_or(rest));
    }

    if let Some(rest) = path.strip_prefix("/static/") {
        require_get(method)?;
        return static_asset(state, rest).await;
    }

    Err(Error::NotFound("Not found".to_string()))
}

fn require_get(method: &Method) -> Result<()> {
    if *method == Method::GET || *method == Method::HEAD {
        Ok(())
    } else {
        Err(Error::MethodNotAllowed("Method not allowed".to_string()))
    }
}

fn home(state: &AppState) -> Result<Reply> {
    let page = IndexPage {
        base_path: &state.base_path,
        year: state.year(),
        days: state.calendar.views_at(state.clock.now()),
    };
    Ok(Reply::html(200, pages::render(&page)?))
}

fn day(state: &AppState, raw: &str) -> Result<Reply> {
    let number = state.calendar.parse_day_number(raw)?;
    let view = state.calendar.open_day(number, state.clock.now())?;
    let page = DayPage::from_view(&state.base_path, view)?;
    Ok(Reply::html(200, pages::render(&page)?))
}

async fn static_asset(state: &AppState, relative: &str) -> Result<Reply> {
    let statics = state
        .statics
        .as_ref()
        .ok_or_else(|| Error::NotFound("Static assets are not served".to_string()))?;
    let (bytes, content_type) = statics.read(relative).await?;
    Ok(Reply::bytes(content_type, bytes))
}

/// Remove the stage prefix, e.g. `/prod/day/1` becomes `/day/1` and `/prod` becomes `/`.
fn strip_base_path<'a>(path: &'a str, base_path: &str) -> &'a str {
    if base_path.is_empty() {
        return path;
    }
    match path.strip_prefix(base_path) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}
