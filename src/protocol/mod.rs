//! Text protocol for the interactive loop.
//!
//! Command parsing on the way in, single-line response rendering on the
//! way out.

pub mod parser;
pub mod render;

pub use parser::{parse_command, Command};
pub use render::{format_outcome, format_report, format_rolls, format_territory};
