// rephrase/src/lib.rs
//! # Rephrase CLI Application
//!
//! This crate provides the host side of the Rephrase engine: the document
//! model and watcher that keep a live structure transformed as content is
//! added, and a command-line interface that pipes text through the engine.

pub mod cli;
pub mod commands;
pub mod document;
pub mod logger;
pub mod ui;
pub mod watcher;

pub use document::Document;
pub use watcher::{DocumentWatcher, WatchStats};
