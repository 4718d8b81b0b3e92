//! Key mappings and settings.

use crate::commands::args::Argument;
use crate::state::Mode;

use super::CommandContext;

/// Add a key mapping: parameter is `keys=command line`.
pub(super) fn map(ctx: &mut CommandContext, mode: Mode, arg: &Argument) -> bool {
    ctx.state.set_mode(Mode::Normal);

    let Some(text) = arg.text.as_deref() else {
        return false;
    };
    let Some((keys, command)) = text.split_once('=') else {
        return false;
    };
    ctx.keybinds.add(mode, keys, command)
}

pub(super) fn unmap(ctx: &mut CommandContext, mode: Mode, arg: &Argument) -> bool {
    ctx.state.set_mode(Mode::Normal);

    let Some(keys) = arg.text.as_deref() else {
        return false;
    };
    ctx.keybinds.remove(mode, keys)
}

/// Apply `name=value` (or a bare `name`) to the settings store.
pub(super) fn set_option(ctx: &mut CommandContext, arg: &Argument) -> bool {
    let Some(text) = arg.text.as_deref() else {
        return false;
    };
    let line = text.trim();
    if line.is_empty() {
        return false;
    }

    let result = match line.split_once('=') {
        Some((name, value)) => ctx.settings.apply(name, Some(value)),
        None => ctx.settings.apply(line, None),
    };

    ctx.state.set_mode(Mode::Normal);
    result
}
