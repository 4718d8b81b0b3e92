//! Command execution.
//!
//! The dispatcher resolves a name against the registry, builds the
//! effective argument from the caller's parameter and the entry's
//! defaults, and hands off to the handler selected by the entry's typed
//! config. Chains run every piece and AND the results; one failing piece
//! never stops the pieces after it.

mod bindings;
mod editor;
mod hints;
mod open;
mod search;
mod view;
mod yank;


use log::{debug, warn};

use crate::browse::{Browser, Clipboard, Completion, Hinting};
use crate::config::ShellConfig;
use crate::messages::{MessageKind, StatusLine};
use crate::process::ProcessRunner;
use crate::state::{Mode, ShellState};
use crate::stores::{
    Bookmarks, BrowsingHistory, ClosedHistory, KeybindTable, SearchEngines, SettingsStore,
};

use super::args::{Argument, CommandConfig};
use super::parse::{parse, split_chain};
use super::registry::Registry;

/// Everything a command handler may touch: the shared registers plus one
/// mutable handle per collaborator.
pub struct CommandContext<'a> {
    pub state: &'a mut ShellState,
    pub config: &'a ShellConfig,
    pub browser: &'a mut dyn Browser,
    pub clipboard: &'a mut dyn Clipboard,
    pub status: &'a mut dyn StatusLine,
    pub hints: &'a mut dyn Hinting,
    pub completion: &'a mut dyn Completion,
    pub closed: &'a dyn ClosedHistory,
    pub history: &'a dyn BrowsingHistory,
    pub bookmarks: &'a mut dyn Bookmarks,
    pub engines: &'a mut dyn SearchEngines,
    pub keybinds: &'a mut dyn KeybindTable,
    pub settings: &'a mut dyn SettingsStore,
    pub process: &'a mut dyn ProcessRunner,
}

/// Run a `|`-separated chain of commands.
///
/// Every piece is attempted in order; the result is the AND of all of
/// them, so a typo in one clause still lets the rest take effect.
pub fn run_chain(registry: &Registry, line: &str, ctx: &mut CommandContext) -> bool {
    let pieces = split_chain(line);
    if pieces.is_empty() {
        return false;
    }
    debug!("running chain of {} piece(s)", pieces.len());

    let mut result = true;
    for piece in pieces {
        let ok = run_string(registry, piece, ctx);
        result = result && ok;
    }
    result
}

/// Run a single command line containing a name and possible parameters.
pub fn run_string(registry: &Registry, line: &str, ctx: &mut CommandContext) -> bool {
    let Ok(parsed) = parse(line) else {
        return false;
    };
    run(
        registry,
        &parsed.name,
        parsed.param.as_deref(),
        parsed.count,
        ctx,
    )
}

/// Resolve and invoke one command.
pub fn run(
    registry: &Registry,
    name: &str,
    param: Option<&str>,
    count: usize,
    ctx: &mut CommandContext,
) -> bool {
    let Some(spec) = registry.lookup(name) else {
        warn!("command '{name}' not found");
        ctx.status
            .echo(MessageKind::Error, true, &format!("Command '{name}' not found"));
        ctx.state.set_mode(Mode::Normal);
        return false;
    };

    debug!("running '{}' (count {count})", spec.name);
    let arg = Argument {
        count,
        text: param
            .map(str::to_owned)
            .or_else(|| spec.param.map(str::to_owned)),
    };
    invoke(registry, spec.config, &arg, ctx)
}

fn invoke(
    registry: &Registry,
    config: CommandConfig,
    arg: &Argument,
    ctx: &mut CommandContext,
) -> bool {
    match config {
        CommandConfig::Open { target } => open::open(ctx, target, arg),
        CommandConfig::OpenClosed { target } => open::open_closed(ctx, target),
        CommandConfig::Input { prefill } => open::input(ctx, prefill, arg),
        CommandConfig::Quit => quit(ctx),
        CommandConfig::ViewSource => view::view_source(ctx),
        CommandConfig::Navigate(action) => view::navigate(ctx, action, arg),
        CommandConfig::Scroll(motion) => view::scroll(ctx, motion, arg),
        CommandConfig::Map { mode } => bindings::map(ctx, mode, arg),
        CommandConfig::Unmap { mode } => bindings::unmap(ctx, mode, arg),
        CommandConfig::Set => bindings::set_option(ctx, arg),
        CommandConfig::Complete { direction } => hints::complete(ctx, direction),
        CommandConfig::Inspect => view::inspect(ctx),
        CommandConfig::Hint(spec) => hints::start(ctx, spec, arg),
        CommandConfig::HintFocus(focus) => hints::focus(ctx, focus),
        CommandConfig::Yank { source } => yank::yank(ctx, source),
        CommandConfig::Paste { target } => open::paste(ctx, target),
        CommandConfig::Search { direction } => search::search(ctx, direction, arg),
        CommandConfig::Engine(action) => search::engine(ctx, action, arg),
        CommandConfig::Zoom(action) => view::zoom(ctx, action, arg),
        CommandConfig::History { direction } => open::history_lookup(ctx, direction),
        CommandConfig::Run => run_multi(registry, arg, ctx),
        CommandConfig::BookmarkAdd => open::bookmark_add(ctx, arg),
        CommandConfig::Eval => eval(ctx, arg),
        CommandConfig::Editor => editor::open_editor(ctx),
    }
}

/// The `run` command: its parameter is itself a chain.
fn run_multi(registry: &Registry, arg: &Argument, ctx: &mut CommandContext) -> bool {
    match arg.text.as_deref() {
        Some(line) if !line.is_empty() => run_chain(registry, line, ctx),
        _ => false,
    }
}

fn quit(ctx: &mut CommandContext) -> bool {
    ctx.browser.close();
    true
}

fn eval(ctx: &mut CommandContext, arg: &Argument) -> bool {
    let Some(script) = arg.text.as_deref() else {
        ctx.state.set_mode(Mode::Normal);
        return false;
    };

    let result = ctx.browser.eval_script(script);
    match &result {
        Ok(value) => ctx.status.echo_force(MessageKind::Normal, false, value),
        Err(error) => ctx.status.echo_force(MessageKind::Error, true, error),
    }
    ctx.state.set_mode(Mode::Normal);
    result.is_ok()
}
