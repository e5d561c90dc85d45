use crate::types::RunSummary;

/// Operator-facing summary lines for a finished run.
///
/// The store location is only mentioned when there is something in it.
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![format!("{} results found.", summary.result_count)];

    if let Some(path) = &summary.output_path {
        lines.push(format!("See {} for more info.", path.display()));
    }

    if summary.failed_jobs > 0 {
        lines.push(format!(
            "{} of {} commit searches failed; see the log for details.",
            summary.failed_jobs, summary.commits_searched
        ));
    }

    lines
}

/// Print the final summary to stdout
pub fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn summary(result_count: usize, failed: usize, path: Option<&str>) -> RunSummary {
        RunSummary {
            commits_searched: 10,
            matched_commits: if result_count > 0 { 1 } else { 0 },
            failed_jobs: failed,
            result_count,
            output_path: path.map(PathBuf::from),
        }
    }

    #[test]
    fn test_zero_results_omits_store_path() {
        let lines = summary_lines(&summary(0, 0, None));
        assert_eq!(lines, vec!["0 results found."]);
    }

    #[test]
    fn test_nonzero_results_mention_store_path() {
        let lines = summary_lines(&summary(3, 0, Some("git-search-results.json")));
        assert_eq!(lines[0], "3 results found.");
        assert_eq!(lines[1], "See git-search-results.json for more info.");
    }

    #[test]
    fn test_failures_are_reported() {
        let lines = summary_lines(&summary(0, 2, None));
        assert_eq!(
            lines[1],
            "2 of 10 commit searches failed; see the log for details."
        );
    }
}
