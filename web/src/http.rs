//! HTTP helpers for the Lambda handler.

use advent::{ApiResponse, Error};
use lambda_http::http::header::{ACCEPT, CONTENT_TYPE};
use lambda_http::{Body, Request, Response};
use tracing::error;

use crate::pages::{self, ErrorPage};

pub const HTML: &str = "text/html; charset=utf-8";
pub const JSON: &str = "application/json";
pub const PLAIN: &str = "text/plain; charset=utf-8";

/// A response before it is turned into a Lambda `Response`.
#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Body,
}

impl Reply {
    pub fn html(status: u16, html: String) -> Self {
        Self {
            status,
            content_type: HTML,
            body: Body::from(html),
        }
    }

    pub fn bytes(content_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body: Body::from(bytes),
        }
    }

    fn text(status: u16, content_type: &'static str, text: String) -> Self {
        Self {
            status,
            content_type,
            body: Body::from(text),
        }
    }

    /// Drop the body, keeping status and headers (for HEAD requests).
    pub fn without_body(self) -> Self {
        Self {
            body: Body::Empty,
            ..self
        }
    }

    pub fn into_response(self) -> Result<Response<Body>, lambda_http::Error> {
        Ok(Response::builder()
            .status(self.status)
            .header(CONTENT_TYPE, self.content_type)
            .body(self.body)
            .map_err(Box::new)?)
    }
}

/// Whether the client asked for JSON rather than a page.
pub fn wants_json(event: &Request) -> bool {
    event
        .headers()
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains(JSON) && !accept.contains("text/html"))
        .unwrap_or(false)
}

/// Build the reply for a failed request.
///
/// JSON clients get the `ApiResponse` envelope; everyone else gets the error page,
/// or plain text if the page itself fails to render.
pub fn error_reply(err: &Error, json: bool, base_path: &str) -> Reply {
    let status = err.status_code();
    let message = err.public_message();

    if json {
        return match serde_json::to_string(&ApiResponse::<()>::error(message.clone())) {
            Ok(body) => Reply::text(status, JSON, body),
            Err(e) => {
                error!("Failed to serialize error response: {}", e);
                Reply::text(status, PLAIN, message)
            }
        };
    }

    let page = ErrorPage {
        base_path,
        status,
        message: message.clone(),
    };
    match pages::render(&page) {
        Ok(html) => Reply::html(status, html),
        Err(_) => Reply::text(status, PLAIN, message),
    }
}
