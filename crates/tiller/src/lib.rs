//! Command dispatch core of a keyboard-driven browser shell.
//!
//! The crate owns the command grammar and its execution: a registry of
//! named, typed operations, a parser for `[count]name [parameter]`
//! lines, and a chain executor for `|`-separated command sequences.
//! Everything with real side effects (the page view, clipboard,
//! persistent stores, process spawning, the status line) is reached
//! through the collaborator traits in [`browse`], [`stores`],
//! [`process`] and [`messages`], so the embedding shell decides what a
//! "browser" actually is.

pub mod browse;
pub mod commands;
pub mod config;
pub mod messages;
pub mod process;
pub mod state;
pub mod stores;

#[cfg(test)]
mod test_utils;
