/// Build metadata shared with the invoking build tool
///
/// The build tool owns this record and hands it to the gitversion step as
/// `&mut`. The step reads `version` and `dry_run`, and overwrites `version`
/// with the computed version. No other field is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// The version currently being built
    pub version: String,
    /// Skip external commands and file writes
    pub dry_run: bool,
}

impl BuildContext {
    pub fn new(version: impl Into<String>) -> Self {
        BuildContext {
            version: version.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
