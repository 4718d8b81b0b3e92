//! Hinting and command-line completion.

use crate::browse::HintSpec;
use crate::commands::args::{Argument, CompleteDirection, HintFocus};
use crate::messages::MessageKind;
use crate::state::Mode;

use super::CommandContext;

/// Start a hint run. The prompt (the entry's default parameter, e.g.
/// `;y`) is shown on the input line; the hinting collaborator switches
/// the mode itself once the overlay is up.
pub(super) fn start(ctx: &mut CommandContext, spec: HintSpec, arg: &Argument) -> bool {
    let prompt = arg.text.as_deref().unwrap_or("");
    ctx.status.echo_force(MessageKind::Normal, false, prompt);
    ctx.hints.start(spec, prompt.len());
    true
}

pub(super) fn focus(ctx: &mut CommandContext, focus: HintFocus) -> bool {
    match focus {
        HintFocus::Next => ctx.hints.focus_next(),
        HintFocus::Previous => ctx.hints.focus_previous(),
    }
    true
}

pub(super) fn complete(ctx: &mut CommandContext, direction: CompleteDirection) -> bool {
    ctx.completion
        .complete(direction == CompleteDirection::Backward);
    ctx.state.set_mode(Mode::Completion);
    true
}
