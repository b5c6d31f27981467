pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod manifest;
pub mod step;
pub mod ui;
pub mod version_file;

pub use domain::{BuildContext, LocalSuffix, SuffixPolicy};
pub use error::{GitVersionError, Result};
pub use step::{GitVersion, VersionOutcome};
