//! HTML pages rendered with askama.
//!
//! Pages only take [`DayView`]s, so a locked day's content never reaches a template.

use advent::{DayView, Error, Result};
use askama::Template;
use tracing::error;

/// The whole calendar.
#[derive(Template, Debug)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub base_path: &'a str,
    pub year: i32,
    pub days: Vec<DayView>,
}

/// A single unlocked day.
#[derive(Template, Debug)]
#[template(path = "day.html")]
pub struct DayPage<'a> {
    pub base_path: &'a str,
    pub number: u32,
    pub date_label: String,
    pub content: String,
}

impl<'a> DayPage<'a> {
    /// Page for an opened day. Fails if the view carries no content.
    pub fn from_view(base_path: &'a str, view: DayView) -> Result<Self> {
        let date_label = view.date_label();
        let content = view.content.ok_or_else(|| {
            Error::AccessDenied("This day is not yet unlocked".to_string())
        })?;
        Ok(Self {
            base_path,
            number: view.number,
            date_label,
            content,
        })
    }
}

/// Error page shown for every failed request.
#[derive(Template, Debug)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub base_path: &'a str,
    pub status: u16,
    pub message: String,
}

/// Render a page, mapping template failures to [`Error::Render`].
pub fn render<T: Template>(page: &T) -> Result<String> {
    page.render().map_err(|e| {
        error!("Failed to render template: {:?}", e);
        Error::Render(e.to_string())
    })
}
