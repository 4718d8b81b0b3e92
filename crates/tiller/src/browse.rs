//! Browsing surface collaborators.
//!
//! The core never talks to a rendering engine directly; every page-level
//! effect goes through the traits here. Implementations live in the
//! embedding shell (a webview wrapper in practice, spies in tests).

use std::rc::Rc;

/// Where an opened URI should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    Current,
    NewWindow,
}

/// Scroll axis of the page viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Snapshot of one axis of the viewport's scroll range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub lower: f64,
    pub upper: f64,
    pub page_size: f64,
}

impl ScrollMetrics {
    /// Largest offset that still keeps a full page visible.
    pub fn max_offset(&self) -> f64 {
        self.upper - self.page_size
    }
}

/// The currently focused editable element of the page.
///
/// Handed out as `Rc` so the asynchronous editor flow can hold a weak
/// back-reference; the element's real lifetime belongs to the page.
pub trait Editable {
    fn editable(&self) -> bool;
    fn value(&self) -> Option<String>;
    fn set_value(&self, text: &str);
    fn set_enabled(&self, enabled: bool);
}

/// The page view and its chrome.
pub trait Browser {
    /// Load a URI in the current view or a new window. An empty URI is the
    /// implementation's cue to open its start page.
    fn open(&mut self, uri: &str, target: OpenTarget) -> bool;

    fn current_uri(&self) -> Option<String>;

    /// Move through session history; negative steps go back.
    fn history_step(&mut self, delta: i32);

    fn reload(&mut self, bypass_cache: bool);
    fn stop_loading(&mut self);

    fn zoom_level(&self) -> f32;
    fn set_zoom_level(&mut self, level: f32);
    fn set_full_content_zoom(&mut self, full: bool);

    fn scroll_metrics(&self, axis: Axis) -> ScrollMetrics;
    fn set_scroll_offset(&mut self, axis: Axis, offset: f64);

    /// Move to the next match of `query`. `forward` is in document order.
    fn search(&mut self, query: &str, forward: bool, wrap: bool) -> bool;
    fn highlight_matches(&mut self, query: &str);
    fn set_match_highlighting(&mut self, enabled: bool);

    /// Copy the current selection into the clipboard.
    fn copy_selection(&mut self);

    fn view_source_mode(&self) -> bool;
    fn set_view_source_mode(&mut self, enabled: bool);

    fn inspector_enabled(&self) -> bool;
    fn show_inspector(&mut self);
    fn close_inspector(&mut self);

    /// Evaluate a script in the page, returning its string result or the
    /// error text.
    fn eval_script(&mut self, script: &str) -> Result<String, String>;

    fn active_editable(&self) -> Option<Rc<dyn Editable>>;

    /// Close the shell window.
    fn close(&mut self);
}

/// System clipboard access, primary and secondary selections.
pub trait Clipboard {
    fn read_primary(&self) -> Option<String>;
    fn read_secondary(&self) -> Option<String>;

    /// Write `text` to both selections.
    fn write(&mut self, text: &str);
}

/// What a hint run marks on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTarget {
    Link,
    Image,
    Editable,
}

/// What happens once the user picks a hinted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintAction {
    Open { new_window: bool },
    /// Write an open command for the element into the input line instead
    /// of following it.
    PromptOpen { new_window: bool },
    Yank,
    Edit,
}

/// Complete description of one hint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintSpec {
    pub target: HintTarget,
    pub action: HintAction,
}

/// Hint-overlay collaborator. Starting a run switches the shell into
/// hinting mode on the collaborator's side.
pub trait Hinting {
    fn start(&mut self, spec: HintSpec, prompt_len: usize);
    fn focus_next(&mut self);
    fn focus_previous(&mut self);
}

/// Command-line completion collaborator.
pub trait Completion {
    fn complete(&mut self, backward: bool);
}
