//! Opening pages: direct, from the closed-page store, from the
//! clipboard, plus the input-line prefill commands, history recall and
//! bookmarking.

use crate::browse::OpenTarget;
use crate::commands::args::{Argument, PrefillSource};
use crate::messages::MessageKind;
use crate::state::Mode;
use crate::stores::HistoryDirection;

use super::CommandContext;

pub(super) fn open(ctx: &mut CommandContext, target: OpenTarget, arg: &Argument) -> bool {
    let uri = arg.text.as_deref().unwrap_or("");
    let ok = ctx.browser.open(uri, target);
    ctx.state.set_mode(Mode::Normal);
    ok
}

/// Reopen the most recently closed page.
pub(super) fn open_closed(ctx: &mut CommandContext, target: OpenTarget) -> bool {
    ctx.state.set_mode(Mode::Normal);
    let Some(uri) = ctx.closed.last_closed() else {
        return false;
    };
    ctx.browser.open(&uri, target)
}

/// Open the URI held by the clipboard, primary selection first.
pub(super) fn paste(ctx: &mut CommandContext, target: OpenTarget) -> bool {
    let text = ctx
        .clipboard
        .read_primary()
        .or_else(|| ctx.clipboard.read_secondary());
    // An empty clipboard stays silent.
    let Some(text) = text else {
        return false;
    };
    let ok = ctx.browser.open(&text, target);
    ctx.state.set_mode(Mode::Normal);
    ok
}

/// Prefill the input line and enter command mode.
pub(super) fn input(ctx: &mut CommandContext, prefill: PrefillSource, arg: &Argument) -> bool {
    let base = arg.text.as_deref().unwrap_or("");
    let text = match prefill {
        PrefillSource::WithUri => match ctx.browser.current_uri() {
            Some(uri) => format!("{base}{uri}"),
            None => base.to_string(),
        },
        PrefillSource::Plain => base.to_string(),
    };

    ctx.status.echo_force(MessageKind::Normal, false, &text);
    ctx.state.set_mode(Mode::Command);
    true
}

/// Replace the input line with the next or previous history entry
/// matching what is typed so far.
pub(super) fn history_lookup(ctx: &mut CommandContext, direction: HistoryDirection) -> bool {
    let prefix = ctx.status.input_value();
    let Some(entry) = ctx.history.lookup(&prefix, direction) else {
        return false;
    };
    ctx.status.echo_force(MessageKind::Normal, false, &entry);
    true
}

pub(super) fn bookmark_add(ctx: &mut CommandContext, arg: &Argument) -> bool {
    ctx.state.set_mode(Mode::Normal);
    let Some(uri) = ctx.browser.current_uri() else {
        return false;
    };
    ctx.bookmarks.add(&uri, arg.text.as_deref());
    true
}
