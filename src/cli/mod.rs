//! Command-line interface module.

mod args;
pub mod code;
pub mod list;
mod output;
pub mod paginate;
pub mod render;
pub mod toc;

pub use args::{Cli, Commands, ListArgs, OutputArgs};
