use crate::domain::LocalSuffix;
use crate::error::Result;
use crate::git::{command_line, CommandRunner};
use tracing::debug;

/// Counts merges and first-parent commits between a release tag and HEAD
pub struct HistoryWalker<R: CommandRunner> {
    runner: R,
    dry_run: bool,
}

impl<R: CommandRunner> HistoryWalker<R> {
    /// Create a walker that queries git through `runner`
    pub fn new(runner: R) -> Self {
        HistoryWalker {
            runner,
            dry_run: false,
        }
    }

    /// In dry-run mode no git command runs and every query yields no lines
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Walk the history from `release` to HEAD.
    ///
    /// `post` is the number of merge commits in `<release>...HEAD`. The most
    /// recent merge, if there is one, becomes the start of the first-parent
    /// query; otherwise `release` does. `dev` is the number of first-parent
    /// commits in `<start>...HEAD`.
    pub fn walk(&self, release: &str) -> Result<LocalSuffix> {
        let merges = self.rev_list("--merges", release)?;
        debug!("found {} merges since tag {}", merges.len(), release);

        let start = merges.first().map(String::as_str).unwrap_or(release);

        let commits = self.rev_list("--first-parent", start)?;
        debug!("found {} commits since {}", commits.len(), start);

        Ok(LocalSuffix::new(merges.len(), commits.len()))
    }

    fn rev_list(&self, mode: &str, start: &str) -> Result<Vec<String>> {
        let range = format!("{}...HEAD", start);
        let args = ["rev-list", mode, range.as_str()];

        if self.dry_run {
            debug!("dry run, skipping: {}", command_line("git", &args));
            return Ok(Vec::new());
        }

        let output = self.runner.run(&args)?;
        if !output.stderr.is_empty() {
            debug!(
                "{} produced output on stderr: {}",
                command_line("git", &args),
                output.stderr.trim_end()
            );
        }

        Ok(output.lines())
    }
}
