//! Modal fuzzy picker over the lines of an output log.
//!
//! The picker owns the terminal while it is open. Typing narrows the lines by
//! fuzzy subsequence match, Enter picks the highlighted line and Esc aborts.

pub mod state;
pub mod ui;

pub use state::{map_picker_key, PickerAction, PickerState};
pub use ui::pick_line;
