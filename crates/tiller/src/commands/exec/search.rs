//! In-page search and search-engine shortcuts.

use crate::commands::args::{Argument, EngineAction, SearchDirection};
use crate::state::Mode;

use super::CommandContext;

/// Search the page, repeating for the invocation's count.
///
/// A parameter starts a new search and fixes the stored direction; a bare
/// invocation continues the stored query. The document direction is
/// forward exactly when the invoked direction matches the stored one, so
/// "next match" keeps its meaning in a backward search.
pub(super) fn search(ctx: &mut CommandContext, direction: SearchDirection, arg: &Argument) -> bool {
    if let Some(query) = arg.text.as_deref() {
        ctx.state.search_query = Some(query.to_string());
        ctx.state.search_direction = direction;
    }

    if let Some(query) = ctx.state.search_query.clone() {
        ctx.browser.highlight_matches(&query);
        ctx.browser.set_match_highlighting(true);

        let forward = direction == ctx.state.search_direction;
        // Loop over a local copy of the count; a nested dispatch must not
        // be able to change how often this repeats.
        let mut remaining = arg.repeat();
        while remaining > 0 {
            ctx.browser.search(&query, forward, true);
            remaining -= 1;
        }
    }

    ctx.state.set_mode(Mode::Search);
    true
}

pub(super) fn engine(ctx: &mut CommandContext, action: EngineAction, arg: &Argument) -> bool {
    let text = arg.text.as_deref().unwrap_or("");
    let result = match action {
        EngineAction::Add => {
            let Some((handle, uri)) = text.split_once('=') else {
                return false;
            };
            ctx.engines.add(handle, uri)
        }
        EngineAction::Remove => ctx.engines.remove(text),
        EngineAction::SetDefault => ctx.engines.set_default(text),
    };

    ctx.state.set_mode(Mode::Normal);
    result
}
