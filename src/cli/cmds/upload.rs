use anyhow::Context;

use crate::base;
use crate::cli;

/// Upload a batch of codes
///
/// Reads one code per line from a .txt file, or from the first column of a
/// .csv file. Blank lines and codes that already exist are skipped.
#[derive(clap::Parser)]
pub struct Upload {
    /// File to upload, at most 10MB
    file: std::path::PathBuf,

    /// Category of the new codes, by display label (e.g. '50')
    ///
    /// Defaults to the first category the backend offers.
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<String>,
}

impl Upload {
    pub fn run(
        self,
        mut cl: base::Codelist,
        feed: base::Categoryfeed,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let category = match &self.category {
            Some(display) => cli::util::parse_category(display)?,
            None => feed.default_token(),
        };
        let path = fs.dir().join(&self.file);
        let size = std::fs::metadata(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?
            .len();
        let kind = base::upload::check_file(&path, size)?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;

        let res = base::upload::upload(&content, kind, category, &base::date::now_timestamp(), &mut cl);
        if res.total_uploaded > 0 {
            cli::util::write(fs, &cl)?;
        }
        tracing::info!(
            uploaded = res.total_uploaded,
            duplicates = res.duplicates.len(),
            blank_lines = res.blank_lines,
            "upload finished"
        );

        let mut out = format!(
            "Uploaded {} of {} lines as category {}.",
            res.total_uploaded,
            res.total_processed(),
            category.display()
        );
        if !res.duplicates.is_empty() {
            out.push_str(&format!(
                "\nSkipped {} duplicates: {}",
                res.duplicates.len(),
                res.duplicates.join(", ")
            ));
        }
        if res.blank_lines > 0 {
            out.push_str(&format!("\nSkipped {} blank lines.", res.blank_lines));
        }
        Ok(cli::Output::Str(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_batch(fs: &base::Fs, name: &str, content: &str) {
        std::fs::write(fs.dir().join(name), content).unwrap();
    }

    #[test]
    fn test_upload_txt() {
        let (fs, _td) = cli::testing::tempfs();
        fs.write(&base::Config::default()).unwrap();
        fs.write(&"[{\"id\":4,\"code\":\"OLD\",\"category\":\"FIFTY\"}]".parse::<base::Codelist>().unwrap())
            .unwrap();
        write_batch(&fs, "batch.txt", "NEW1\n\nOLD\nNEW2\nNEW1\n");

        let root = <cli::Root as clap::Parser>::try_parse_from(["", "upload", "batch.txt", "-c", "200"]).unwrap();
        let output = root.run(&fs).unwrap();
        assert_eq!(
            output,
            cli::Output::Str(
                "Uploaded 2 of 5 lines as category 200.\nSkipped 2 duplicates: OLD, NEW1\nSkipped 1 blank lines."
                    .into()
            )
        );

        let cl = fs.read::<base::Codelist>().unwrap();
        let want = r#"[
            {"id":4,"code":"OLD","category":"FIFTY"},
            {"id":5,"code":"NEW1","category":"TWO_HUNDRED","uploadedAt":"2024-03-15T09:30:00Z"},
            {"id":6,"code":"NEW2","category":"TWO_HUNDRED","uploadedAt":"2024-03-15T09:30:00Z"}
        ]"#
        .parse::<base::Codelist>()
        .unwrap();
        assert_eq!(cl, want);
    }

    #[test]
    fn test_upload_csv_default_category() {
        let (fs, _td) = cli::testing::tempfs();
        fs.write(&base::Config::default()).unwrap();
        fs.write(&r#"["NEW","HUNDRED"]"#.parse::<base::Categoryfeed>().unwrap())
            .unwrap();
        write_batch(&fs, "batch.CSV", "\"C1\",x\nC2,y\n");

        let root = <cli::Root as clap::Parser>::try_parse_from(["", "upload", "batch.CSV"]).unwrap();
        let output = root.run(&fs).unwrap();
        assert_eq!(
            output,
            cli::Output::Str("Uploaded 2 of 2 lines as category 100.".into())
        );
        let cl = fs.read::<base::Codelist>().unwrap();
        assert!(cl.iter().all(|c| c.category == base::RecordCategory::Known(base::CategoryToken::Hundred)));
    }

    cli::testing::generate_testcases![
        (
            unsupported_type,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["upload", ".proxyadmin.json"],
                    res: cli::testing::ResultMatcher::ErrGlob("unsupported file type*"),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
            }
        ),
        (
            missing_file,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["upload", "nope.txt"],
                    res: cli::testing::ResultMatcher::ErrGlob("failed to read '*nope.txt'"),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
            }
        ),
        (
            bad_category,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["upload", "nope.txt", "-c", "FIFTY"],
                    res: cli::testing::ResultMatcher::ErrGlob("expected one of*"),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
            }
        ),
    ];
}
