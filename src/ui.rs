use console::style;

use crate::cli::WorkflowResult;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print the computed version on stdout; nothing else goes to stdout.
pub fn display_version(result: &WorkflowResult) {
    println!("{}", result.outcome.version);
}

/// Render an error and its chain of causes on one line each
pub fn format_error_chain(err: &anyhow::Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n  caused by: ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_chain() {
        let err = anyhow::anyhow!("inner").context("outer");
        assert_eq!(format_error_chain(&err), "outer\n  caused by: inner");
    }
}
