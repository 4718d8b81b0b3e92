//! Command arguments and per-family configuration.
//!
//! Each catalog entry carries a [`CommandConfig`] variant describing what
//! the operation should do; the executor matches on the variant to pick
//! the handler. The [`Argument`] is the per-dispatch payload built fresh
//! for every invocation: the parsed repeat count plus the effective
//! parameter text (caller-supplied, or the entry's default).

use crate::browse::{Axis, HintSpec, OpenTarget};
use crate::state::Mode;
use crate::stores::HistoryDirection;

/// Effective payload of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Parsed repeat count; 0 means "unspecified".
    pub count: usize,
    pub text: Option<String>,
}

impl Argument {
    /// Repeat count with the "unspecified means once" rule applied.
    pub fn repeat(&self) -> usize {
        if self.count == 0 {
            1
        } else {
            self.count
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Forward,
    Reload,
    ReloadBypassCache,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollUnit {
    Line,
    HalfPage,
    Page,
}

/// One scrolling gesture. `toward_end` is down or right on its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    /// Jump to an edge, or to count percent of the scroll range.
    Jump { axis: Axis, toward_end: bool },
    /// Move by a unit, multiplied by the repeat count.
    Step {
        axis: Axis,
        toward_end: bool,
        unit: ScrollUnit,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAction {
    In { full_content: bool },
    Out { full_content: bool },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YankSource {
    Uri,
    Selection,
}

/// What the `input` commands write into the command line before the
/// cursor lands there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefillSource {
    Plain,
    /// Append the current URI to the prefill text.
    WithUri,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAction {
    Add,
    Remove,
    SetDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintFocus {
    Next,
    Previous,
}

/// Typed configuration of a catalog entry; the variant selects the
/// operation, the payload parameterizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandConfig {
    Open { target: OpenTarget },
    OpenClosed { target: OpenTarget },
    Input { prefill: PrefillSource },
    Quit,
    ViewSource,
    Navigate(NavAction),
    Scroll(ScrollMotion),
    Map { mode: Mode },
    Unmap { mode: Mode },
    Set,
    Complete { direction: CompleteDirection },
    Inspect,
    Hint(HintSpec),
    HintFocus(HintFocus),
    Yank { source: YankSource },
    Paste { target: OpenTarget },
    Search { direction: SearchDirection },
    Engine(EngineAction),
    Zoom(ZoomAction),
    History { direction: HistoryDirection },
    Run,
    BookmarkAdd,
    Eval,
    Editor,
}
