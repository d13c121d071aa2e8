//! Harness for running commands against a throwaway repository.

mod case;
mod resultmatcher;
mod state;

pub(crate) use case::generate_testcases;
pub use case::{Case, Invocation, MutCase};
pub use resultmatcher::ResultMatcher;
pub use state::{State, StrState};

use crate::base;
use crate::cli;

pub const BIN: &str = "proxyadmin";

/// Parses `args` as if typed after the binary name.
pub fn parse(args: &[&str]) -> cli::Root {
    let argv = std::iter::once(BIN).chain(args.iter().copied());
    match <cli::Root as clap::Parser>::try_parse_from(argv) {
        Ok(root) => root,
        Err(e) => panic!("{}", e),
    }
}

/// Returns a repository handle on a fresh temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}
