//! Yanking the current URI or selection into the clipboard.

use crate::commands::args::YankSource;
use crate::messages::MessageKind;
use crate::state::Mode;

use super::CommandContext;

pub(super) fn yank(ctx: &mut CommandContext, source: YankSource) -> bool {
    ctx.state.set_mode(Mode::Normal);

    let text = match source {
        YankSource::Selection => {
            ctx.browser.copy_selection();
            ctx.clipboard
                .read_primary()
                .or_else(|| ctx.clipboard.read_secondary())
        }
        YankSource::Uri => {
            let uri = ctx.browser.current_uri();
            if let Some(uri) = &uri {
                ctx.clipboard.write(uri);
            }
            uri
        }
    };

    let Some(text) = text else {
        return false;
    };
    ctx.status
        .echo_force(MessageKind::Normal, false, &format!("Yanked: {text}"));
    true
}
