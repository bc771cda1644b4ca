//! API Errors
//!
//! Failure classes for backend calls and the fixed messages shown to the user.

use thiserror::Error;

pub const LOAD_FAILED: &str = "Не вдалося підключитися до бекенду. Перевірте, чи працює Python.";
pub const CREATE_FAILED: &str = "Помилка створення";
pub const CONNECTION_FAILED: &str = "Помилка з'єднання";
pub const DELETE_FAILED: &str = "Не можна видалити активний проект";
pub const DELETE_CONFIRM: &str = "Видалити цей план подорожі?";
pub const VISIT_FAILED: &str = "Не вдалося позначити картину як відвідану";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed
    #[error("transport error: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status
    #[error("server returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    /// 2xx with a body we could not read
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Server detail, or `fallback` when the server gave none
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}
