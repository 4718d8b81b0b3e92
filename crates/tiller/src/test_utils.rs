//! Recording spy collaborators shared by the executor tests.
//!
//! Each spy records the calls it receives in plain public fields and
//! returns configurable canned answers, so tests can assert on what a
//! command actually asked the outside world to do.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::browse::{
    Axis, Browser, Clipboard, Completion, Editable, HintSpec, Hinting, OpenTarget, ScrollMetrics,
};
use crate::commands::CommandContext;
use crate::config::ShellConfig;
use crate::messages::{MessageKind, StatusLine};
use crate::process::{ExitCallback, ProcessId, ProcessRunner, SpawnError};
use crate::state::{Mode, ShellState};
use crate::stores::{
    Bookmarks, BrowsingHistory, ClosedHistory, HistoryDirection, KeybindTable, SearchEngines,
    SettingsStore,
};

pub struct SpyEditable {
    pub editable: Cell<bool>,
    pub enabled: Cell<bool>,
    pub value: RefCell<Option<String>>,
    pub writes: RefCell<Vec<String>>,
}

impl SpyEditable {
    pub fn new(value: &str) -> Rc<Self> {
        Rc::new(Self {
            editable: Cell::new(true),
            enabled: Cell::new(true),
            value: RefCell::new(Some(value.to_string())),
            writes: RefCell::new(Vec::new()),
        })
    }
}

impl Editable for SpyEditable {
    fn editable(&self) -> bool {
        self.editable.get()
    }

    fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set_value(&self, text: &str) {
        self.writes.borrow_mut().push(text.to_string());
        *self.value.borrow_mut() = Some(text.to_string());
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

pub struct SpyBrowser {
    pub opened: Vec<(String, OpenTarget)>,
    pub open_result: bool,
    pub uri: Option<String>,
    pub history_steps: Vec<i32>,
    pub reloads: Vec<bool>,
    pub stops: usize,
    pub zoom: f32,
    pub full_content_zoom: Option<bool>,
    pub metrics_h: ScrollMetrics,
    pub metrics_v: ScrollMetrics,
    pub scroll_sets: Vec<(Axis, f64)>,
    pub searches: Vec<(String, bool, bool)>,
    pub highlighted: Vec<String>,
    pub highlighting: Option<bool>,
    pub selection_copies: usize,
    pub view_source: bool,
    pub inspector_enabled: bool,
    pub inspector_shows: usize,
    pub inspector_closes: usize,
    pub eval_result: Result<String, String>,
    pub editable: Option<Rc<SpyEditable>>,
    pub closed: bool,
}

impl Default for SpyBrowser {
    fn default() -> Self {
        let metrics = ScrollMetrics {
            offset: 0.0,
            lower: 0.0,
            upper: 1000.0,
            page_size: 100.0,
        };
        Self {
            opened: Vec::new(),
            open_result: true,
            uri: None,
            history_steps: Vec::new(),
            reloads: Vec::new(),
            stops: 0,
            zoom: 1.0,
            full_content_zoom: None,
            metrics_h: metrics,
            metrics_v: metrics,
            scroll_sets: Vec::new(),
            searches: Vec::new(),
            highlighted: Vec::new(),
            highlighting: None,
            selection_copies: 0,
            view_source: false,
            inspector_enabled: false,
            inspector_shows: 0,
            inspector_closes: 0,
            eval_result: Ok(String::new()),
            editable: None,
            closed: false,
        }
    }
}

impl Browser for SpyBrowser {
    fn open(&mut self, uri: &str, target: OpenTarget) -> bool {
        self.opened.push((uri.to_string(), target));
        self.open_result
    }

    fn current_uri(&self) -> Option<String> {
        self.uri.clone()
    }

    fn history_step(&mut self, delta: i32) {
        self.history_steps.push(delta);
    }

    fn reload(&mut self, bypass_cache: bool) {
        self.reloads.push(bypass_cache);
    }

    fn stop_loading(&mut self) {
        self.stops += 1;
    }

    fn zoom_level(&self) -> f32 {
        self.zoom
    }

    fn set_zoom_level(&mut self, level: f32) {
        self.zoom = level;
    }

    fn set_full_content_zoom(&mut self, full: bool) {
        self.full_content_zoom = Some(full);
    }

    fn scroll_metrics(&self, axis: Axis) -> ScrollMetrics {
        match axis {
            Axis::Horizontal => self.metrics_h,
            Axis::Vertical => self.metrics_v,
        }
    }

    fn set_scroll_offset(&mut self, axis: Axis, offset: f64) {
        match axis {
            Axis::Horizontal => self.metrics_h.offset = offset,
            Axis::Vertical => self.metrics_v.offset = offset,
        }
        self.scroll_sets.push((axis, offset));
    }

    fn search(&mut self, query: &str, forward: bool, wrap: bool) -> bool {
        self.searches.push((query.to_string(), forward, wrap));
        true
    }

    fn highlight_matches(&mut self, query: &str) {
        self.highlighted.push(query.to_string());
    }

    fn set_match_highlighting(&mut self, enabled: bool) {
        self.highlighting = Some(enabled);
    }

    fn copy_selection(&mut self) {
        self.selection_copies += 1;
    }

    fn view_source_mode(&self) -> bool {
        self.view_source
    }

    fn set_view_source_mode(&mut self, enabled: bool) {
        self.view_source = enabled;
    }

    fn inspector_enabled(&self) -> bool {
        self.inspector_enabled
    }

    fn show_inspector(&mut self) {
        self.inspector_shows += 1;
    }

    fn close_inspector(&mut self) {
        self.inspector_closes += 1;
    }

    fn eval_script(&mut self, _script: &str) -> Result<String, String> {
        self.eval_result.clone()
    }

    fn active_editable(&self) -> Option<Rc<dyn Editable>> {
        self.editable
            .clone()
            .map(|element| element as Rc<dyn Editable>)
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[derive(Default)]
pub struct SpyClipboard {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub written: Vec<String>,
}

impl Clipboard for SpyClipboard {
    fn read_primary(&self) -> Option<String> {
        self.primary.clone()
    }

    fn read_secondary(&self) -> Option<String> {
        self.secondary.clone()
    }

    fn write(&mut self, text: &str) {
        self.written.push(text.to_string());
        self.primary = Some(text.to_string());
        self.secondary = Some(text.to_string());
    }
}

#[derive(Default)]
pub struct SpyStatus {
    pub messages: Vec<(MessageKind, bool, String)>,
    pub forced: Vec<(MessageKind, bool, String)>,
    pub input: String,
}

impl StatusLine for SpyStatus {
    fn echo(&mut self, kind: MessageKind, persist: bool, text: &str) {
        self.messages.push((kind, persist, text.to_string()));
    }

    fn echo_force(&mut self, kind: MessageKind, persist: bool, text: &str) {
        self.forced.push((kind, persist, text.to_string()));
    }

    fn input_value(&self) -> String {
        self.input.clone()
    }
}

#[derive(Default)]
pub struct SpyHints {
    pub started: Vec<(HintSpec, usize)>,
    pub next_moves: usize,
    pub prev_moves: usize,
}

impl Hinting for SpyHints {
    fn start(&mut self, spec: HintSpec, prompt_len: usize) {
        self.started.push((spec, prompt_len));
    }

    fn focus_next(&mut self) {
        self.next_moves += 1;
    }

    fn focus_previous(&mut self) {
        self.prev_moves += 1;
    }
}

#[derive(Default)]
pub struct SpyCompletion {
    pub calls: Vec<bool>,
}

impl Completion for SpyCompletion {
    fn complete(&mut self, backward: bool) {
        self.calls.push(backward);
    }
}

#[derive(Default)]
pub struct SpyClosed {
    pub last: Option<String>,
}

impl ClosedHistory for SpyClosed {
    fn last_closed(&self) -> Option<String> {
        self.last.clone()
    }
}

#[derive(Default)]
pub struct SpyHistory {
    pub response: Option<String>,
    pub queries: RefCell<Vec<(String, HistoryDirection)>>,
}

impl BrowsingHistory for SpyHistory {
    fn lookup(&self, prefix: &str, direction: HistoryDirection) -> Option<String> {
        self.queries
            .borrow_mut()
            .push((prefix.to_string(), direction));
        self.response.clone()
    }
}

#[derive(Default)]
pub struct SpyBookmarks {
    pub added: Vec<(String, Option<String>)>,
}

impl Bookmarks for SpyBookmarks {
    fn add(&mut self, uri: &str, tags: Option<&str>) {
        self.added.push((uri.to_string(), tags.map(str::to_owned)));
    }
}

pub struct SpyEngines {
    pub added: Vec<(String, String)>,
    pub removed: Vec<String>,
    pub defaults: Vec<String>,
    pub result: bool,
}

impl Default for SpyEngines {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            defaults: Vec::new(),
            result: true,
        }
    }
}

impl SearchEngines for SpyEngines {
    fn add(&mut self, handle: &str, uri: &str) -> bool {
        self.added.push((handle.to_string(), uri.to_string()));
        self.result
    }

    fn remove(&mut self, handle: &str) -> bool {
        self.removed.push(handle.to_string());
        self.result
    }

    fn set_default(&mut self, handle: &str) -> bool {
        self.defaults.push(handle.to_string());
        self.result
    }
}

pub struct SpyKeybinds {
    pub added: Vec<(Mode, String, String)>,
    pub removed: Vec<(Mode, String)>,
    pub result: bool,
}

impl Default for SpyKeybinds {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            result: true,
        }
    }
}

impl KeybindTable for SpyKeybinds {
    fn add(&mut self, mode: Mode, keys: &str, command: &str) -> bool {
        self.added
            .push((mode, keys.to_string(), command.to_string()));
        self.result
    }

    fn remove(&mut self, mode: Mode, keys: &str) -> bool {
        self.removed.push((mode, keys.to_string()));
        self.result
    }
}

pub struct SpySettings {
    pub applied: Vec<(String, Option<String>)>,
    pub result: bool,
}

impl Default for SpySettings {
    fn default() -> Self {
        Self {
            applied: Vec::new(),
            result: true,
        }
    }
}

impl SettingsStore for SpySettings {
    fn apply(&mut self, name: &str, value: Option<&str>) -> bool {
        self.applied
            .push((name.to_string(), value.map(str::to_owned)));
        self.result
    }
}

#[derive(Default)]
pub struct SpyProcess {
    pub spawns: Vec<(String, Vec<String>)>,
    pub callbacks: Vec<Option<ExitCallback>>,
    pub fail_spawn: bool,
}

impl SpyProcess {
    /// Fire a recorded exit callback, as the event loop would on child
    /// exit.
    pub fn fire(&mut self, index: usize, status: i32) {
        if let Some(callback) = self.callbacks[index].take() {
            callback(status);
        }
    }
}

impl ProcessRunner for SpyProcess {
    fn spawn(
        &mut self,
        program: &str,
        args: &[String],
        on_exit: ExitCallback,
    ) -> Result<ProcessId, SpawnError> {
        if self.fail_spawn {
            return Err(SpawnError::NotFound(program.to_string()));
        }
        self.spawns.push((program.to_string(), args.to_vec()));
        self.callbacks.push(Some(on_exit));
        Ok(ProcessId(self.callbacks.len() as u32))
    }
}

/// A full set of spies plus the shared registers, bundled so a test can
/// borrow a [`CommandContext`] in one line.
#[derive(Default)]
pub struct TestShell {
    pub state: ShellState,
    pub config: ShellConfig,
    pub browser: SpyBrowser,
    pub clipboard: SpyClipboard,
    pub status: SpyStatus,
    pub hints: SpyHints,
    pub completion: SpyCompletion,
    pub closed: SpyClosed,
    pub history: SpyHistory,
    pub bookmarks: SpyBookmarks,
    pub engines: SpyEngines,
    pub keybinds: SpyKeybinds,
    pub settings: SpySettings,
    pub process: SpyProcess,
}

impl TestShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctx(&mut self) -> CommandContext<'_> {
        CommandContext {
            state: &mut self.state,
            config: &self.config,
            browser: &mut self.browser,
            clipboard: &mut self.clipboard,
            status: &mut self.status,
            hints: &mut self.hints,
            completion: &mut self.completion,
            closed: &self.closed,
            history: &self.history,
            bookmarks: &mut self.bookmarks,
            engines: &mut self.engines,
            keybinds: &mut self.keybinds,
            settings: &mut self.settings,
            process: &mut self.process,
        }
    }
}
