//! External process helper.
//!
//! The editor command needs "spawn, keep dispatching, run a follow-up
//! when the child exits". The helper owns the spawning and the exit
//! watch; the core only hands over a callback. Cancellation is not
//! supported, so callbacks must tolerate a world that moved on (see the
//! editor handler's weak element reference).

use thiserror::Error;

/// Identity of a spawned child, used only for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(pub u32);

/// Called exactly once with the child's exit status.
pub type ExitCallback = Box<dyn FnOnce(i32)>;

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("program not found: {0}")]
    NotFound(String),
    #[error("failed to spawn {program}: {reason}")]
    Io { program: String, reason: String },
}

/// Process-spawning collaborator.
pub trait ProcessRunner {
    fn spawn(
        &mut self,
        program: &str,
        args: &[String],
        on_exit: ExitCallback,
    ) -> Result<ProcessId, SpawnError>;
}
