//! Command registry and catalog.
//!
//! Maps command names to their specs. The catalog is a fixed literal
//! table registered once at startup; nothing registers or unregisters
//! while the shell runs. Lookup is by exact, case-sensitive name; an
//! absent name is simply absent, never a prefix match.

use std::collections::HashMap;

use crate::browse::{Axis, HintAction, HintSpec, HintTarget, OpenTarget};
use crate::state::Mode;
use crate::stores::HistoryDirection;

use super::args::{
    CommandConfig, CompleteDirection, EngineAction, HintFocus, NavAction, PrefillSource,
    ScrollMotion, ScrollUnit, SearchDirection, YankSource, ZoomAction,
};

/// Specification for a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub config: CommandConfig,
    /// Default parameter used when the caller supplies none.
    pub param: Option<&'static str>,
}

/// Name-to-spec table, built once from [`CATALOG`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: HashMap<&'static str, CommandSpec>,
}

impl Registry {
    /// Build the registry from the full catalog.
    pub fn build() -> Self {
        let mut registry = Self::default();
        for spec in CATALOG {
            registry.register(*spec);
        }
        registry
    }

    /// Insert a spec, replacing any previous entry of the same name.
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.insert(spec.name, spec);
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn all_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// The full command catalog.
pub const CATALOG: &[CommandSpec] = &[
    CommandSpec {
        name: "open",
        config: CommandConfig::Open {
            target: OpenTarget::Current,
        },
        param: Some(""),
    },
    CommandSpec {
        name: "tabopen",
        config: CommandConfig::Open {
            target: OpenTarget::NewWindow,
        },
        param: Some(""),
    },
    CommandSpec {
        name: "open-closed",
        config: CommandConfig::OpenClosed {
            target: OpenTarget::Current,
        },
        param: None,
    },
    CommandSpec {
        name: "tabopen-closed",
        config: CommandConfig::OpenClosed {
            target: OpenTarget::NewWindow,
        },
        param: None,
    },
    CommandSpec {
        name: "input",
        config: CommandConfig::Input {
            prefill: PrefillSource::Plain,
        },
        param: Some(":"),
    },
    CommandSpec {
        name: "inputuri",
        config: CommandConfig::Input {
            prefill: PrefillSource::WithUri,
        },
        param: Some(":"),
    },
    CommandSpec {
        name: "quit",
        config: CommandConfig::Quit,
        param: None,
    },
    CommandSpec {
        name: "source",
        config: CommandConfig::ViewSource,
        param: None,
    },
    CommandSpec {
        name: "back",
        config: CommandConfig::Navigate(NavAction::Back),
        param: None,
    },
    CommandSpec {
        name: "forward",
        config: CommandConfig::Navigate(NavAction::Forward),
        param: None,
    },
    CommandSpec {
        name: "reload",
        config: CommandConfig::Navigate(NavAction::Reload),
        param: None,
    },
    CommandSpec {
        name: "reload!",
        config: CommandConfig::Navigate(NavAction::ReloadBypassCache),
        param: None,
    },
    CommandSpec {
        name: "stop",
        config: CommandConfig::Navigate(NavAction::Stop),
        param: None,
    },
    CommandSpec {
        name: "jumpleft",
        config: CommandConfig::Scroll(ScrollMotion::Jump {
            axis: Axis::Horizontal,
            toward_end: false,
        }),
        param: None,
    },
    CommandSpec {
        name: "jumpright",
        config: CommandConfig::Scroll(ScrollMotion::Jump {
            axis: Axis::Horizontal,
            toward_end: true,
        }),
        param: None,
    },
    CommandSpec {
        name: "jumptop",
        config: CommandConfig::Scroll(ScrollMotion::Jump {
            axis: Axis::Vertical,
            toward_end: false,
        }),
        param: None,
    },
    CommandSpec {
        name: "jumpbottom",
        config: CommandConfig::Scroll(ScrollMotion::Jump {
            axis: Axis::Vertical,
            toward_end: true,
        }),
        param: None,
    },
    CommandSpec {
        name: "pageup",
        config: CommandConfig::Scroll(ScrollMotion::Step {
            axis: Axis::Vertical,
            toward_end: false,
            unit: ScrollUnit::Page,
        }),
        param: None,
    },
    CommandSpec {
        name: "pagedown",
        config: CommandConfig::Scroll(ScrollMotion::Step {
            axis: Axis::Vertical,
            toward_end: true,
            unit: ScrollUnit::Page,
        }),
        param: None,
    },
    CommandSpec {
        name: "halfpageup",
        config: CommandConfig::Scroll(ScrollMotion::Step {
            axis: Axis::Vertical,
            toward_end: false,
            unit: ScrollUnit::HalfPage,
        }),
        param: None,
    },
    CommandSpec {
        name: "halfpagedown",
        config: CommandConfig::Scroll(ScrollMotion::Step {
            axis: Axis::Vertical,
            toward_end: true,
            unit: ScrollUnit::HalfPage,
        }),
        param: None,
    },
    CommandSpec {
        name: "scrollleft",
        config: CommandConfig::Scroll(ScrollMotion::Step {
            axis: Axis::Horizontal,
            toward_end: false,
            unit: ScrollUnit::Line,
        }),
        param: None,
    },
    CommandSpec {
        name: "scrollright",
        config: CommandConfig::Scroll(ScrollMotion::Step {
            axis: Axis::Horizontal,
            toward_end: true,
            unit: ScrollUnit::Line,
        }),
        param: None,
    },
    CommandSpec {
        name: "scrollup",
        config: CommandConfig::Scroll(ScrollMotion::Step {
            axis: Axis::Vertical,
            toward_end: false,
            unit: ScrollUnit::Line,
        }),
        param: None,
    },
    CommandSpec {
        name: "scrolldown",
        config: CommandConfig::Scroll(ScrollMotion::Step {
            axis: Axis::Vertical,
            toward_end: true,
            unit: ScrollUnit::Line,
        }),
        param: None,
    },
    CommandSpec {
        name: "nmap",
        config: CommandConfig::Map { mode: Mode::Normal },
        param: None,
    },
    CommandSpec {
        name: "imap",
        config: CommandConfig::Map { mode: Mode::Insert },
        param: None,
    },
    CommandSpec {
        name: "cmap",
        config: CommandConfig::Map {
            mode: Mode::Command,
        },
        param: None,
    },
    CommandSpec {
        name: "hmap",
        config: CommandConfig::Map {
            mode: Mode::Hinting,
        },
        param: None,
    },
    CommandSpec {
        name: "smap",
        config: CommandConfig::Map { mode: Mode::Search },
        param: None,
    },
    CommandSpec {
        name: "nunmap",
        config: CommandConfig::Unmap { mode: Mode::Normal },
        param: None,
    },
    CommandSpec {
        name: "iunmap",
        config: CommandConfig::Unmap { mode: Mode::Insert },
        param: None,
    },
    CommandSpec {
        name: "cunmap",
        config: CommandConfig::Unmap {
            mode: Mode::Command,
        },
        param: None,
    },
    CommandSpec {
        name: "hunmap",
        config: CommandConfig::Unmap {
            mode: Mode::Hinting,
        },
        param: None,
    },
    CommandSpec {
        name: "sunmap",
        config: CommandConfig::Unmap { mode: Mode::Search },
        param: None,
    },
    CommandSpec {
        name: "set",
        config: CommandConfig::Set,
        param: None,
    },
    CommandSpec {
        name: "complete",
        config: CommandConfig::Complete {
            direction: CompleteDirection::Forward,
        },
        param: None,
    },
    CommandSpec {
        name: "complete-back",
        config: CommandConfig::Complete {
            direction: CompleteDirection::Backward,
        },
        param: None,
    },
    CommandSpec {
        name: "inspect",
        config: CommandConfig::Inspect,
        param: None,
    },
    CommandSpec {
        name: "hint-link",
        config: CommandConfig::Hint(HintSpec {
            target: HintTarget::Link,
            action: HintAction::Open { new_window: false },
        }),
        param: Some("."),
    },
    CommandSpec {
        name: "hint-link-new",
        config: CommandConfig::Hint(HintSpec {
            target: HintTarget::Link,
            action: HintAction::Open { new_window: true },
        }),
        param: Some(","),
    },
    CommandSpec {
        name: "hint-input-open",
        config: CommandConfig::Hint(HintSpec {
            target: HintTarget::Link,
            action: HintAction::PromptOpen { new_window: false },
        }),
        param: Some(";o"),
    },
    CommandSpec {
        name: "hint-input-tabopen",
        config: CommandConfig::Hint(HintSpec {
            target: HintTarget::Link,
            action: HintAction::PromptOpen { new_window: true },
        }),
        param: Some(";t"),
    },
    CommandSpec {
        name: "hint-yank",
        config: CommandConfig::Hint(HintSpec {
            target: HintTarget::Link,
            action: HintAction::Yank,
        }),
        param: Some(";y"),
    },
    CommandSpec {
        name: "hint-image-open",
        config: CommandConfig::Hint(HintSpec {
            target: HintTarget::Image,
            action: HintAction::Open { new_window: false },
        }),
        param: Some(";i"),
    },
    CommandSpec {
        name: "hint-image-tabopen",
        config: CommandConfig::Hint(HintSpec {
            target: HintTarget::Image,
            action: HintAction::Open { new_window: true },
        }),
        param: Some(";I"),
    },
    CommandSpec {
        name: "hint-editor",
        config: CommandConfig::Hint(HintSpec {
            target: HintTarget::Editable,
            action: HintAction::Edit,
        }),
        param: Some(";e"),
    },
    CommandSpec {
        name: "hint-focus-next",
        config: CommandConfig::HintFocus(HintFocus::Next),
        param: None,
    },
    CommandSpec {
        name: "hint-focus-prev",
        config: CommandConfig::HintFocus(HintFocus::Previous),
        param: None,
    },
    CommandSpec {
        name: "yank-uri",
        config: CommandConfig::Yank {
            source: YankSource::Uri,
        },
        param: None,
    },
    CommandSpec {
        name: "yank-selection",
        config: CommandConfig::Yank {
            source: YankSource::Selection,
        },
        param: None,
    },
    CommandSpec {
        name: "open-clipboard",
        config: CommandConfig::Paste {
            target: OpenTarget::Current,
        },
        param: None,
    },
    CommandSpec {
        name: "tabopen-clipboard",
        config: CommandConfig::Paste {
            target: OpenTarget::NewWindow,
        },
        param: None,
    },
    CommandSpec {
        name: "search-forward",
        config: CommandConfig::Search {
            direction: SearchDirection::Forward,
        },
        param: None,
    },
    CommandSpec {
        name: "search-backward",
        config: CommandConfig::Search {
            direction: SearchDirection::Backward,
        },
        param: None,
    },
    CommandSpec {
        name: "searchengine-add",
        config: CommandConfig::Engine(EngineAction::Add),
        param: None,
    },
    CommandSpec {
        name: "searchengine-remove",
        config: CommandConfig::Engine(EngineAction::Remove),
        param: None,
    },
    CommandSpec {
        name: "searchengine-default",
        config: CommandConfig::Engine(EngineAction::SetDefault),
        param: None,
    },
    CommandSpec {
        name: "zoomin",
        config: CommandConfig::Zoom(ZoomAction::In {
            full_content: false,
        }),
        param: None,
    },
    CommandSpec {
        name: "zoomout",
        config: CommandConfig::Zoom(ZoomAction::Out {
            full_content: false,
        }),
        param: None,
    },
    CommandSpec {
        name: "zoominfull",
        config: CommandConfig::Zoom(ZoomAction::In { full_content: true }),
        param: None,
    },
    CommandSpec {
        name: "zoomoutfull",
        config: CommandConfig::Zoom(ZoomAction::Out { full_content: true }),
        param: None,
    },
    CommandSpec {
        name: "zoomreset",
        config: CommandConfig::Zoom(ZoomAction::Reset),
        param: None,
    },
    CommandSpec {
        name: "hist-next",
        config: CommandConfig::History {
            direction: HistoryDirection::Next,
        },
        param: None,
    },
    CommandSpec {
        name: "hist-prev",
        config: CommandConfig::History {
            direction: HistoryDirection::Previous,
        },
        param: None,
    },
    CommandSpec {
        name: "run",
        config: CommandConfig::Run,
        param: None,
    },
    CommandSpec {
        name: "bookmark-add",
        config: CommandConfig::BookmarkAdd,
        param: None,
    },
    CommandSpec {
        name: "eval",
        config: CommandConfig::Eval,
        param: None,
    },
    CommandSpec {
        name: "editor",
        config: CommandConfig::Editor,
        param: None,
    },
];
