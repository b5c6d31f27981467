//! Main workflow orchestration logic
//!
//! Merges command line overrides into the loaded configuration, resolves the
//! declared version and runs the gitversion step. Kept apart from `main.rs`
//! so the workflow can be driven without clap.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{BuildContext, SuffixPolicy};
use crate::git::CommandRunner;
use crate::manifest::read_manifest_version;
use crate::step::{GitVersion, VersionOutcome};

/// Manifest read when no base version is given
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Arguments for the gitversion workflow
///
/// Every `Some` value overrides the matching configuration entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// File receiving the local version suffix
    pub version_file: Option<PathBuf>,

    /// Declared version; read from the manifest when absent
    pub base_version: Option<String>,

    /// Manifest holding the declared version
    pub manifest_path: Option<PathBuf>,

    pub policy: Option<SuffixPolicy>,

    /// Directory git runs in
    pub git_dir: Option<PathBuf>,

    /// Skip git and file writes
    pub dry_run: bool,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version declared before the run
    pub declared: String,

    pub outcome: VersionOutcome,

    /// Version file that was (or in dry-run mode would have been) written
    pub version_file: Option<PathBuf>,
}

/// Apply command line overrides on top of the loaded configuration
pub fn merge_config(args: &WorkflowArgs, mut config: Config) -> Config {
    if let Some(path) = &args.version_file {
        config.version_file = Some(path.clone());
    }
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(dir) = &args.git_dir {
        config.git.work_dir = Some(dir.clone());
    }
    config
}

/// Resolve the declared version from the arguments or the manifest
pub fn declared_version(args: &WorkflowArgs) -> Result<String> {
    if let Some(version) = &args.base_version {
        return Ok(version.clone());
    }

    let manifest = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));
    read_manifest_version(&manifest)
        .with_context(|| format!("Failed to read the package version from {}", manifest.display()))
}

/// Main gitversion workflow
///
/// 1. Merge overrides into the configuration
/// 2. Resolve the declared version
/// 3. Run the step against a git process runner built from the configuration
pub fn run_gitversion_workflow(args: WorkflowArgs, config: Config) -> Result<WorkflowResult> {
    let config = merge_config(&args, config);
    let runner = config.git.runner();
    run_with_runner(&args, &config, runner)
}

/// Same as [run_gitversion_workflow] with the overrides already merged and an
/// explicit runner.
pub fn run_with_runner<R: CommandRunner>(
    args: &WorkflowArgs,
    config: &Config,
    runner: R,
) -> Result<WorkflowResult> {
    let declared = declared_version(args)?;

    let mut step = GitVersion::new().with_policy(config.policy);
    if let Some(path) = &config.version_file {
        step = step.with_version_file(path.clone());
    }

    let mut context = BuildContext::new(declared.clone()).with_dry_run(args.dry_run);
    let outcome = step
        .run(runner, &mut context)
        .with_context(|| format!("Failed to compute the version for {}", declared))?;

    Ok(WorkflowResult {
        declared,
        outcome,
        version_file: config.version_file.clone(),
    })
}
