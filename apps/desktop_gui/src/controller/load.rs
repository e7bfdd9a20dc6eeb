//! Load/error/retry lifecycle for the user listing.
//!
//! The controller never performs I/O. `begin` hands out a request that the caller
//! turns into a backend command; `finish` applies whatever completion arrives.
//! There is no in-flight guard: if two requests overlap, the completion applied
//! last decides the visible state.

use shared::domain::User;

use crate::controller::events::UiError;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub attempt: u64,
}

#[derive(Debug)]
pub struct LoadController {
    phase: LoadPhase,
    error_message: Option<&'static str>,
    attempts: u64,
}

impl Default for LoadController {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadController {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
            error_message: None,
            attempts: 0,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True until the first attempt settles, so the first frame already shows the
    /// loading indicator.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Enters `Loading` from any phase and clears the previous error.
    pub fn begin(&mut self) -> LoadRequest {
        self.attempts += 1;
        let previous = self.phase;
        self.phase = LoadPhase::Loading;
        self.error_message = None;
        tracing::info!(attempt = self.attempts, from = ?previous, "loading users");
        LoadRequest {
            attempt: self.attempts,
        }
    }

    /// Applies a completion. On success the users are handed back for the owner to
    /// install; on failure the cause is logged and replaced by the fixed message.
    pub fn finish(
        &mut self,
        attempt: u64,
        outcome: Result<Vec<User>, &UiError>,
    ) -> Option<Vec<User>> {
        if attempt != self.attempts {
            tracing::debug!(
                attempt,
                latest = self.attempts,
                "applying completion from an earlier attempt"
            );
        }

        match outcome {
            Ok(users) => {
                tracing::info!(attempt, count = users.len(), "users loaded");
                self.phase = LoadPhase::Success;
                self.error_message = None;
                Some(users)
            }
            Err(err) => {
                tracing::error!(
                    attempt,
                    category = ?err.category(),
                    context = ?err.context(),
                    "error loading users: {}",
                    err.message()
                );
                self.phase = LoadPhase::Error;
                self.error_message = Some(LOAD_FAILED_MESSAGE);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadController, LoadPhase, LOAD_FAILED_MESSAGE};
    use crate::controller::events::UiError;
    use shared::error::DirectoryError;

    fn failure() -> UiError {
        UiError::from_directory(&DirectoryError::HttpStatus { status: 500 })
    }

    #[test]
    fn starts_idle_and_reports_loading() {
        let controller = LoadController::new();
        assert_eq!(controller.phase(), LoadPhase::Idle);
        assert!(controller.is_loading());
        assert_eq!(controller.error_message(), None);
    }

    #[test]
    fn success_installs_users_and_clears_error() {
        let mut controller = LoadController::new();
        let request = controller.begin();
        controller.finish(request.attempt, Err(&failure()));
        assert_eq!(controller.error_message(), Some(LOAD_FAILED_MESSAGE));

        let retry = controller.begin();
        assert_eq!(controller.phase(), LoadPhase::Loading);
        assert_eq!(controller.error_message(), None);

        let users = controller.finish(retry.attempt, Ok(Vec::new()));
        assert_eq!(users, Some(Vec::new()));
        assert_eq!(controller.phase(), LoadPhase::Success);
        assert!(!controller.is_loading());
    }

    #[test]
    fn every_failure_kind_collapses_to_the_same_message() {
        let failures = [
            UiError::from_directory(&DirectoryError::network("connection refused")),
            UiError::from_directory(&DirectoryError::HttpStatus { status: 404 }),
            UiError::from_directory(&DirectoryError::decode("expected value")),
        ];

        for err in &failures {
            let mut controller = LoadController::new();
            let request = controller.begin();
            assert_eq!(controller.finish(request.attempt, Err(err)), None);
            assert_eq!(controller.phase(), LoadPhase::Error);
            assert_eq!(controller.error_message(), Some(LOAD_FAILED_MESSAGE));
        }
    }

    #[test]
    fn retry_is_allowed_from_success() {
        let mut controller = LoadController::new();
        let first = controller.begin();
        controller.finish(first.attempt, Ok(Vec::new()));

        let second = controller.begin();
        assert_eq!(second.attempt, first.attempt + 1);
        assert_eq!(controller.phase(), LoadPhase::Loading);
    }

    #[test]
    fn overlapping_requests_resolve_last_write_wins() {
        let mut controller = LoadController::new();
        let first = controller.begin();
        let second = controller.begin();

        controller.finish(second.attempt, Ok(Vec::new()));
        assert_eq!(controller.phase(), LoadPhase::Success);

        controller.finish(first.attempt, Err(&failure()));
        assert_eq!(controller.phase(), LoadPhase::Error);
        assert_eq!(controller.attempts(), 2);
    }
}
