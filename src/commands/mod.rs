//! Command implementations

pub mod completions;
pub mod get;
mod helpers;
pub mod set;

/// Final status of a sweep run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every remote operation succeeded
    Success,
    /// The sweep finished but some app services failed to fetch or update
    Partial,
}

impl RunStatus {
    /// Process exit code for this status
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Partial => 2,
        }
    }
}
