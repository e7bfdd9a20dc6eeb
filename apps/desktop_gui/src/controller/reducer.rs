//! Root composition state: the live user list, the overlay selection, and the
//! load lifecycle, driven by view intents and backend completions.

use shared::domain::{User, UserId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiError;
use crate::controller::load::{LoadController, LoadPhase};

/// What a view asks the root to do. Views emit these and never act on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SelectUser(UserId),
    DeleteUser(UserId),
    Dismiss,
    Retry,
}

#[derive(Debug, Default)]
pub struct DirectoryState {
    load: LoadController,
    users: Vec<User>,
    selected_user: Option<User>,
    overlay_open: bool,
    mounted: bool,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the initial `idle -> loading` transition. Only the first call does anything.
    pub fn mount(&mut self) -> Option<BackendCommand> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.start_load())
    }

    pub fn apply(&mut self, intent: Intent) -> Option<BackendCommand> {
        match intent {
            Intent::SelectUser(user_id) => {
                match self.users.iter().find(|user| user.id == user_id) {
                    Some(user) => {
                        self.selected_user = Some(user.clone());
                        self.overlay_open = true;
                    }
                    None => tracing::debug!(%user_id, "ignoring selection of unknown user"),
                }
                None
            }
            Intent::DeleteUser(user_id) => {
                match self.users.iter().position(|user| user.id == user_id) {
                    Some(index) => {
                        self.users.remove(index);
                        tracing::info!(%user_id, remaining = self.users.len(), "removed user from view");
                    }
                    None => tracing::debug!(%user_id, "ignoring delete of unknown user"),
                }
                None
            }
            Intent::Dismiss => {
                self.overlay_open = false;
                self.selected_user = None;
                None
            }
            Intent::Retry => Some(self.start_load()),
        }
    }

    /// Installs a successful load. Replaces the list wholesale, so ids removed
    /// locally come back.
    pub fn users_loaded(&mut self, attempt: u64, users: Vec<User>) {
        if let Some(users) = self.load.finish(attempt, Ok(users)) {
            self.users = users;
        }
    }

    pub fn users_failed(&mut self, attempt: u64, error: &UiError) {
        self.load.finish(attempt, Err(error));
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.selected_user.as_ref()
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn load_phase(&self) -> LoadPhase {
        self.load.phase()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.load.error_message()
    }

    /// Attempt number of the most recent load, zero before the first one.
    pub fn latest_attempt(&self) -> u64 {
        self.load.attempts()
    }

    fn start_load(&mut self) -> BackendCommand {
        let request = self.load.begin();
        BackendCommand::FetchUsers {
            attempt: request.attempt,
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
