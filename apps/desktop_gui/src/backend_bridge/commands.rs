//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    /// Fetch the full user listing. `attempt` comes from the load controller and
    /// is echoed back on the completion event.
    FetchUsers { attempt: u64 },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchUsers { .. } => "fetch_users",
        }
    }

    pub fn attempt(&self) -> u64 {
        match self {
            Self::FetchUsers { attempt } => *attempt,
        }
    }
}
