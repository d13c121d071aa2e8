use crate::cli;

/// One command line run against the repository, without the binary name.
pub struct Invocation<'a> {
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

impl Invocation<'_> {
    fn run(&self, fs: &crate::base::Fs) {
        let root = cli::testing::parse(self.args);
        let res = root.run(fs);
        eprintln!("$ {} {}", cli::testing::BIN, self.args.join(" "));
        self.res.assert_matches(res);
    }
}

/// Invocations that may write to the repository. After the last one, the
/// repository files must equal `final_state`.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);
        for inv in self.invocations {
            inv.run(&fs);
        }
        assert_eq!(cli::testing::State::from_fs(&fs), self.final_state);
    }
}

/// Read-only invocations. The repository files must come out exactly as they
/// went in.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    pub fn run(self) {
        MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        }
        .run()
    }
}

/// Expands `(name, case)` pairs into `#[test]` functions inside a
/// `cmd_testcases` submodule of the caller.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
