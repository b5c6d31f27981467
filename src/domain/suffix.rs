use serde::{Deserialize, Serialize};
use std::fmt;

/// How the post/dev counts are appended to the public version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixPolicy {
    /// Append `postN` and `devM` only when the count is nonzero
    #[default]
    Nonzero,
    /// Always append `.postN.devM`, even for zero counts
    Always,
}

impl fmt::Display for SuffixPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixPolicy::Nonzero => write!(f, "nonzero"),
            SuffixPolicy::Always => write!(f, "always"),
        }
    }
}

impl std::str::FromStr for SuffixPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nonzero" => Ok(SuffixPolicy::Nonzero),
            "always" => Ok(SuffixPolicy::Always),
            other => Err(format!(
                "unknown suffix policy '{}' (expected 'nonzero' or 'always')",
                other
            )),
        }
    }
}

/// Distance of HEAD from the last release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalSuffix {
    /// Merge commits since the release tag
    pub post: usize,
    /// First-parent commits since the most recent merge, or the release tag
    pub dev: usize,
}

impl LocalSuffix {
    pub fn new(post: usize, dev: usize) -> Self {
        LocalSuffix { post, dev }
    }

    /// Render the suffix, including its leading `.`, or an empty string.
    pub fn render(&self, policy: SuffixPolicy) -> String {
        let parts = match policy {
            SuffixPolicy::Always => vec![format!("post{}", self.post), format!("dev{}", self.dev)],
            SuffixPolicy::Nonzero => {
                let mut parts = Vec::new();
                if self.post > 0 {
                    parts.push(format!("post{}", self.post));
                }
                if self.dev > 0 {
                    parts.push(format!("dev{}", self.dev));
                }
                parts
            }
        };

        if parts.is_empty() {
            String::new()
        } else {
            format!(".{}", parts.join("."))
        }
    }

    /// Append the rendered suffix to a public version
    pub fn apply(&self, public: &str, policy: SuffixPolicy) -> String {
        format!("{}{}", public, self.render(policy))
    }
}
