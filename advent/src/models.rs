//! Shared data models.

use chrono::NaiveDate;
use serde::Serialize;

/// Standard API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// A day as the pages see it. `content` is only present once the day is unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub number: u32,
    pub date: NaiveDate,
    pub unlocked: bool,
    pub content: Option<String>,
}

impl DayView {
    /// Short label such as "December 13".
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d").to_string()
    }
}
