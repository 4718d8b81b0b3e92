//! User feedback channel.
//!
//! Commands report to the user through a status/input line owned by the
//! embedding shell. Only two severities exist; anything structured beyond
//! that stays internal to the core.

/// Severity of a status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Normal,
    Error,
}

/// Status-line collaborator.
///
/// `persist` asks the shell to keep the message visible until the user
/// dismisses it instead of letting the next keystroke clear it.
pub trait StatusLine {
    /// Show a message unless user input is already pending.
    fn echo(&mut self, kind: MessageKind, persist: bool, text: &str);

    /// Show a message, replacing whatever the input line currently holds.
    fn echo_force(&mut self, kind: MessageKind, persist: bool, text: &str);

    /// Current contents of the input line.
    fn input_value(&self) -> String;
}
