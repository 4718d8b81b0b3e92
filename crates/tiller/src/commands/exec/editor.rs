//! External editor integration.
//!
//! Writes the focused editable element's value to a temp file, spawns
//! the configured editor on it and disables the element while the
//! editor runs. The exit callback writes the edited text back through a
//! weak reference; if the element is gone by then the text is simply
//! dropped. The temp file is removed on every path once the child exits.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::browse::Editable;
use crate::messages::MessageKind;
use crate::process::ExitCallback;

use super::CommandContext;

pub(super) fn open_editor(ctx: &mut CommandContext) -> bool {
    let Some(template) = ctx.config.editor_command.clone() else {
        ctx.status
            .echo(MessageKind::Error, true, "No editor-command configured");
        return false;
    };

    let Some(element) = ctx.browser.active_editable() else {
        return false;
    };
    if !element.editable() {
        return false;
    }
    let Some(text) = element.value() else {
        return false;
    };

    let Some(path) = write_temp_file(&text) else {
        return false;
    };
    let Some((program, args)) = build_editor_argv(&template, &path) else {
        warn!("could not parse editor-command '{template}'");
        let _ = fs::remove_file(&path);
        return false;
    };

    let weak = Rc::downgrade(&element);
    let resume_path = path.clone();
    let on_exit: ExitCallback = Box::new(move |status| resume(status, &resume_path, &weak));

    match ctx.process.spawn(&program, &args, on_exit) {
        Ok(pid) => {
            debug!("editor '{program}' spawned as {pid:?}");
            element.set_enabled(false);
            true
        }
        Err(error) => {
            warn!("editor spawn failed: {error}");
            let _ = fs::remove_file(&path);
            false
        }
    }
}

fn write_temp_file(text: &str) -> Option<PathBuf> {
    let file = NamedTempFile::new().ok()?;
    fs::write(file.path(), text).ok()?;
    // Keep the file on disk; the resume callback owns its removal.
    let (_, path) = file.keep().ok()?;
    Some(path)
}

/// Expand the editor command template into program and arguments. A
/// literal `%s` receives the temp-file path; without one the path is
/// appended. Tokens split on whitespace, quoting is not supported.
fn build_editor_argv(template: &str, path: &Path) -> Option<(String, Vec<String>)> {
    let path_str = path.to_string_lossy();
    let mut replaced = false;
    let mut tokens: Vec<String> = template
        .split_whitespace()
        .map(|token| {
            if token.contains("%s") {
                replaced = true;
                token.replace("%s", &path_str)
            } else {
                token.to_string()
            }
        })
        .collect();

    if tokens.is_empty() {
        return None;
    }
    if !replaced {
        tokens.push(path_str.into_owned());
    }
    let program = tokens.remove(0);
    Some((program, tokens))
}

fn resume(status: i32, path: &Path, element: &Weak<dyn Editable>) {
    debug!("editor exited with status {status}");
    if status == 0 {
        if let (Ok(text), Some(element)) = (fs::read_to_string(path), element.upgrade()) {
            element.set_value(&text);
        }
    }
    if let Some(element) = element.upgrade() {
        element.set_enabled(true);
    }
    let _ = fs::remove_file(path);
}
