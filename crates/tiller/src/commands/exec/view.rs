//! View commands: navigation, scrolling, zoom, source view, inspector.

use crate::browse::ScrollMetrics;
use crate::commands::args::{Argument, NavAction, ScrollMotion, ScrollUnit, ZoomAction};
use crate::messages::MessageKind;
use crate::state::Mode;

use super::CommandContext;

pub(super) fn navigate(ctx: &mut CommandContext, action: NavAction, arg: &Argument) -> bool {
    match action {
        NavAction::Back => ctx.browser.history_step(-(arg.repeat() as i32)),
        NavAction::Forward => ctx.browser.history_step(arg.repeat() as i32),
        NavAction::Reload => ctx.browser.reload(false),
        NavAction::ReloadBypassCache => ctx.browser.reload(true),
        NavAction::Stop => ctx.browser.stop_loading(),
    }
    ctx.state.set_mode(Mode::Normal);
    true
}

pub(super) fn scroll(ctx: &mut CommandContext, motion: ScrollMotion, arg: &Argument) -> bool {
    let (ScrollMotion::Jump { axis, .. } | ScrollMotion::Step { axis, .. }) = motion;
    let metrics = ctx.browser.scroll_metrics(axis);
    let max = metrics.max_offset();

    let target = match motion {
        ScrollMotion::Step {
            toward_end, unit, ..
        } => {
            let step = step_size(ctx, &metrics, unit);
            let sign = if toward_end { 1.0 } else { -1.0 };
            metrics.offset + sign * step * arg.repeat() as f64
        }
        ScrollMotion::Jump { toward_end, .. } => {
            if arg.count > 0 {
                // A count jumps to that percentage of the scroll range.
                max * arg.count as f64 / 100.0
            } else if toward_end {
                metrics.upper
            } else {
                metrics.lower
            }
        }
    };

    ctx.browser.set_scroll_offset(axis, target.min(max));
    ctx.state.set_mode(Mode::Normal);
    true
}

fn step_size(ctx: &CommandContext, metrics: &ScrollMetrics, unit: ScrollUnit) -> f64 {
    match unit {
        ScrollUnit::Line => ctx.config.scroll_step,
        ScrollUnit::HalfPage => metrics.page_size / 2.0,
        ScrollUnit::Page => metrics.page_size,
    }
}

pub(super) fn zoom(ctx: &mut CommandContext, action: ZoomAction, arg: &Argument) -> bool {
    match action {
        ZoomAction::Reset => ctx.browser.set_zoom_level(1.0),
        ZoomAction::In { full_content } | ZoomAction::Out { full_content } => {
            let sign = if matches!(action, ZoomAction::In { .. }) {
                1.0
            } else {
                -1.0
            };
            let level = ctx.browser.zoom_level();
            ctx.browser.set_full_content_zoom(full_content);
            ctx.browser
                .set_zoom_level(level + arg.repeat() as f32 * ctx.config.zoom_step * sign);
        }
    }
    ctx.state.set_mode(Mode::Normal);
    true
}

pub(super) fn view_source(ctx: &mut CommandContext) -> bool {
    let enabled = ctx.browser.view_source_mode();
    ctx.browser.set_view_source_mode(!enabled);
    ctx.browser.reload(false);
    ctx.state.set_mode(Mode::Normal);
    true
}

pub(super) fn inspect(ctx: &mut CommandContext) -> bool {
    ctx.state.set_mode(Mode::Normal);

    if !ctx.browser.inspector_enabled() {
        ctx.status
            .echo(MessageKind::Error, true, "web inspector is not enabled");
        return false;
    }

    if ctx.state.inspecting {
        ctx.browser.close_inspector();
        ctx.state.inspecting = false;
    } else {
        ctx.browser.show_inspector();
        ctx.state.inspecting = true;
    }
    true
}
