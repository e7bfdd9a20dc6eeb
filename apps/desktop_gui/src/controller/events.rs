//! UI/backend events and error modeling for desktop GUI controller.

use shared::{domain::User, error::DirectoryError};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    UsersLoaded { attempt: u64, users: Vec<User> },
    UsersFailed { attempt: u64, error: UiError },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Http,
    Decode,
    Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadUsers,
    General,
}

/// Diagnostic view of a failure. Only the category and message reach the log;
/// the screen shows a fixed text.
#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_directory(err: &DirectoryError) -> Self {
        let category = match err {
            DirectoryError::Network { .. } => UiErrorCategory::Transport,
            DirectoryError::HttpStatus { .. } => UiErrorCategory::Http,
            DirectoryError::Decode { .. } => UiErrorCategory::Decode,
        };
        Self {
            category,
            context: UiErrorContext::LoadUsers,
            message: err.to_string(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let category = match context {
            UiErrorContext::BackendStartup => UiErrorCategory::Backend,
            UiErrorContext::LoadUsers | UiErrorContext::General => UiErrorCategory::Transport,
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
