//! The gitversion build step
//!
//! [GitVersion] is what a build tool registers and runs once per build. It
//! reads the declared version from a [BuildContext], walks the git history
//! from the release tag to HEAD and writes the computed version back into
//! the same context.

use crate::analyzer::HistoryWalker;
use crate::domain::{release_boundary, BuildContext, LocalSuffix, SuffixPolicy};
use crate::error::Result;
use crate::git::CommandRunner;
use crate::version_file::write_local_version;
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of one run of the step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOutcome {
    /// Numeric release prefix used as the tag name
    pub release: String,
    /// Counted distance from the release
    pub suffix: LocalSuffix,
    /// Rendered local suffix, including the leading `.`, possibly empty
    pub local: String,
    /// `release` followed by `local`
    pub version: String,
}

/// Build step computing a PEP 440 version from git history
#[derive(Debug, Clone, Default)]
pub struct GitVersion {
    /// Where to write the local suffix, if anywhere
    pub version_file: Option<PathBuf>,
    /// How zero counts are rendered
    pub policy: SuffixPolicy,
}

impl GitVersion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.version_file = Some(path.into());
        self
    }

    pub fn with_policy(mut self, policy: SuffixPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compute the version and store it in `context.version`.
    ///
    /// Git is queried through `runner` unless `context.dry_run` is set, in
    /// which case both queries count zero lines and the version file is not
    /// written.
    ///
    /// # Errors
    /// * [crate::GitVersionError::CommandFailed] if git exits nonzero
    /// * [crate::GitVersionError::Spawn] if git cannot be started
    /// * [crate::GitVersionError::Io] if the version file cannot be written
    pub fn run<R: CommandRunner>(
        &self,
        runner: R,
        context: &mut BuildContext,
    ) -> Result<VersionOutcome> {
        let release = release_boundary(&context.version);

        let suffix = HistoryWalker::new(runner)
            .dry_run(context.dry_run)
            .walk(&release)?;

        let local = suffix.render(self.policy);
        let version = format!("{}{}", release, local);
        info!("setting version to {}", version);
        context.version = version.clone();

        if let Some(path) = &self.version_file {
            debug!("writing local version {:?} to {}", local, path.display());
            if !context.dry_run {
                write_local_version(path, &local)?;
            }
        }

        Ok(VersionOutcome {
            release,
            suffix,
            local,
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::ScriptedRunner;

    fn merges_and_commits() -> ScriptedRunner {
        ScriptedRunner::new()
            .with_output(
                &["rev-list", "--merges", "1.2.3...HEAD"],
                "second merge\nfirst merge\n",
            )
            .with_output(
                &["rev-list", "--first-parent", "second merge...HEAD"],
                "third commit\nsecond commit\nfirst commit\n",
            )
    }

    #[test]
    fn test_run_sets_context_version() {
        let runner = merges_and_commits();
        let mut context = BuildContext::new("1.2.3");

        let outcome = GitVersion::new().run(&runner, &mut context).unwrap();

        assert_eq!(context.version, "1.2.3.post2.dev3");
        assert_eq!(outcome.release, "1.2.3");
        assert_eq!(outcome.suffix, LocalSuffix::new(2, 3));
        assert_eq!(outcome.local, ".post2.dev3");
    }

    #[test]
    fn test_declared_version_with_old_suffix_is_recomputed() {
        let runner = merges_and_commits();
        let mut context = BuildContext::new("1.2.3.post9.dev9");

        GitVersion::new().run(&runner, &mut context).unwrap();

        assert_eq!(context.version, "1.2.3.post2.dev3");
    }

    #[test]
    fn test_always_policy_on_clean_release() {
        let runner = ScriptedRunner::new();
        let mut context = BuildContext::new("1.2.3");

        GitVersion::new()
            .with_policy(SuffixPolicy::Always)
            .run(&runner, &mut context)
            .unwrap();

        assert_eq!(context.version, "1.2.3.post0.dev0");
    }

    #[test]
    fn test_dry_run_leaves_release_version() {
        let runner = merges_and_commits();
        let mut context = BuildContext::new("1.2.3").with_dry_run(true);

        let outcome = GitVersion::new().run(&runner, &mut context).unwrap();

        assert_eq!(context.version, "1.2.3");
        assert!(outcome.local.is_empty());
        assert!(runner.calls().is_empty());
        assert!(context.dry_run);
    }

    #[test]
    fn test_failure_leaves_context_untouched() {
        let runner = ScriptedRunner::new().with_failure(&["rev-list", "--merges", "1.2.3...HEAD"], 128);
        let mut context = BuildContext::new("1.2.3");

        assert!(GitVersion::new().run(&runner, &mut context).is_err());
        assert_eq!(context.version, "1.2.3");
    }
}
