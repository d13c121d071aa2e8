//! Command line surface: argument parsing, dispatch and rendering.

mod cmds;
mod output;
mod sharedopts;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
