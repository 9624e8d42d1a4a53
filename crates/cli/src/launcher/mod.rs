//! Interactive three-pane launcher.
//!
//! This module provides the terminal interface for rust-deck: a command
//! selector, a tabbed output viewport and a free-form command input.
//!
//! # Structure
//!
//! - [`types`]: actions, effects and selector state
//! - [`controller`]: the launcher model and the pure `update` function
//! - [`input`]: mapping of key and mouse events to actions
//! - [`ui`] and [`theme`]: layout and drawing
//! - [`run`]: terminal setup and the event loop
//!
//! # User Interface
//!
//! - Ctrl-N / Ctrl-P to move focus between panes
//! - Arrow keys or vim-style (j/k) navigation in the selector and viewport
//! - Enter to run the selected command or the typed line
//! - `/` in the viewport to fuzzy filter the output
//! - Tab in the input to cycle through completions
//! - 'q' or Ctrl-C to quit

pub mod controller;
pub mod input;
pub mod run;
pub mod text_input;
pub mod theme;
pub mod types;
pub mod ui;

pub use controller::{update, App};
pub use run::run;
pub use types::{Action, Effect, Transition};
