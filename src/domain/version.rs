use regex::Regex;

/// PEP 440 version grammar, matched case-insensitively against a trimmed string.
const PEP440_PATTERN: &str = r"(?ix)^
    v?
    (?:(?P<epoch>[0-9]+)!)?
    (?P<release>[0-9]+(?:\.[0-9]+)*)
    (?P<pre>
        [-_.]?
        (?P<pre_l>alpha|a|beta|b|preview|pre|c|rc)
        [-_.]?
        (?P<pre_n>[0-9]+)?
    )?
    (?P<post>
        (?:-(?P<post_n1>[0-9]+))
        |
        (?:[-_.]?(?P<post_l>post|rev|r)[-_.]?(?P<post_n2>[0-9]+)?)
    )?
    (?P<dev>
        [-_.]?
        (?P<dev_l>dev)
        [-_.]?
        (?P<dev_n>[0-9]+)?
    )?
    (?:\+(?P<local>[a-z0-9]+(?:[-_.][a-z0-9]+)*))?
$";

/// Split version segments into the numeric public prefix and the remainder.
///
/// The boundary is the first segment that is not an integer. Both halves are
/// joined back with `.`. A non-numeric first segment yields an empty public
/// version; this is not treated as an error.
///
/// # Example
/// ```
/// use gitversion::domain::partition_version;
///
/// assert_eq!(
///     partition_version(&["1", "2", "3", "dev4"]),
///     ("1.2.3".to_string(), "dev4".to_string())
/// );
/// ```
pub fn partition_version<S: AsRef<str>>(segments: &[S]) -> (String, String) {
    let needle = segments
        .iter()
        .position(|segment| !is_integer(segment.as_ref()))
        .unwrap_or(segments.len());

    (join(&segments[..needle]), join(&segments[needle..]))
}

/// Reduce a declared version to its PEP 440 public form.
///
/// Strips a leading `v` and any `+local` label, and normalizes pre, post and
/// dev release spellings. Strings that are not PEP 440 versions are returned
/// trimmed but otherwise untouched.
pub fn public_version(declared: &str) -> String {
    let trimmed = declared.trim();

    let captures = match Regex::new(PEP440_PATTERN)
        .ok()
        .and_then(|re| re.captures(trimmed))
    {
        Some(captures) => captures,
        None => return trimmed.to_string(),
    };

    let mut public = String::new();

    if let Some(epoch) = captures.name("epoch") {
        let epoch = normalize_number(epoch.as_str());
        if epoch != "0" {
            public.push_str(&epoch);
            public.push('!');
        }
    }

    let release: Vec<String> = captures["release"].split('.').map(normalize_number).collect();
    public.push_str(&release.join("."));

    if let Some(label) = captures.name("pre_l") {
        let label = match label.as_str().to_lowercase().as_str() {
            "alpha" | "a" => "a",
            "beta" | "b" => "b",
            _ => "rc",
        };
        public.push_str(label);
        public.push_str(&optional_number(captures.name("pre_n")));
    }

    if captures.name("post").is_some() {
        let number = captures.name("post_n1").or_else(|| captures.name("post_n2"));
        public.push_str(".post");
        public.push_str(&optional_number(number));
    }

    if captures.name("dev").is_some() {
        public.push_str(".dev");
        public.push_str(&optional_number(captures.name("dev_n")));
    }

    public
}

/// Resolve the release boundary of a declared version.
///
/// Combines [public_version] and [partition_version]: the result is the
/// numeric release prefix that names the release tag.
pub fn release_boundary(declared: &str) -> String {
    let public = public_version(declared);
    let segments: Vec<&str> = public.split('.').collect();
    let (release, _) = partition_version(&segments);
    release
}

fn is_integer(segment: &str) -> bool {
    let trimmed = segment.trim();
    let digits = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(".")
}

fn normalize_number(digits: &str) -> String {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

fn optional_number(number: Option<regex::Match<'_>>) -> String {
    number
        .map(|n| normalize_number(n.as_str()))
        .unwrap_or_else(|| "0".to_string())
}
