//! Final run report
//!
//! Rendered once per run, after the walk finished or stopped. The report is
//! advisory: it never changes the exit status.

use serde_json::{json, Value};
use tplsync_sync::{RunOutcome, SyncError};

use crate::output::{OutputFormat, OutputFormatter};

/// Build the `--json` report document.
pub fn report_json(outcome: &RunOutcome, dry_run: bool) -> Value {
    json!({
        "success": outcome.is_complete() && outcome.summary.is_clean(),
        "complete": outcome.is_complete(),
        "dry_run": dry_run,
        "summary": outcome.summary,
        "error": outcome.error.as_ref().map(|err| json!({
            "kind": err.kind(),
            "message": err.to_string(),
        })),
    })
}

/// Print the report for `outcome` in the requested format.
pub fn render_report(
    outcome: &RunOutcome,
    dry_run: bool,
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
) {
    if format == OutputFormat::Json {
        formatter.print_json(&report_json(outcome, dry_run));
        return;
    }

    if let Some(err) = &outcome.error {
        formatter.error(&err.to_string());
        // nothing was walked, so there are no totals to report
        if matches!(err, SyncError::Bootstrap { .. }) {
            return;
        }
    }

    let failures = outcome.summary.failures.len();
    if failures > 0 {
        formatter.warn(&format!(
            "{} file{} could not be processed",
            failures,
            if failures == 1 { "" } else { "s" }
        ));
    }

    formatter.info("");
    let heading = if dry_run {
        "Dry run completed"
    } else {
        "Operation completed"
    };
    formatter.success(&format!("{heading}: {}", outcome.summary));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    use tplsync_core::domain::RunSummary;

    use super::*;

    #[derive(Default)]
    struct Captured {
        lines: RefCell<Vec<String>>,
    }

    impl OutputFormatter for Captured {
        fn success(&self, message: &str) {
            self.lines.borrow_mut().push(format!("success: {message}"));
        }
        fn error(&self, message: &str) {
            self.lines.borrow_mut().push(format!("error: {message}"));
        }
        fn warn(&self, message: &str) {
            self.lines.borrow_mut().push(format!("warn: {message}"));
        }
        fn info(&self, message: &str) {
            self.lines.borrow_mut().push(format!("info: {message}"));
        }
        fn print_json(&self, value: &Value) {
            self.lines.borrow_mut().push(value.to_string());
        }
    }

    fn summary(deleted: u32, copied: u32) -> RunSummary {
        let mut summary = RunSummary::new();
        summary.deleted_count = deleted;
        summary.copied_count = copied;
        summary
    }

    #[test]
    fn human_report_ends_with_totals() {
        let outcome = RunOutcome {
            summary: summary(1, 2),
            error: None,
        };
        let out = Captured::default();

        render_report(&outcome, false, OutputFormat::Human, &out);

        assert_eq!(
            *out.lines.borrow(),
            vec![
                "info: ".to_string(),
                "success: Operation completed: 1 files deleted, 2 files copied".to_string(),
            ]
        );
    }

    #[test]
    fn human_report_after_bootstrap_failure_has_no_totals() {
        let outcome = RunOutcome {
            summary: summary(0, 0),
            error: Some(SyncError::Bootstrap {
                path: PathBuf::from("templates"),
                reason: "read-only file system".into(),
            }),
        };
        let out = Captured::default();

        render_report(&outcome, false, OutputFormat::Human, &out);

        assert_eq!(
            *out.lines.borrow(),
            vec![
                "error: Failed to create target directory templates: read-only file system"
                    .to_string()
            ]
        );
    }

    #[test]
    fn human_report_counts_failures() {
        let mut s = summary(1, 0);
        s.record_failure(Path::new("tasks/a.png"), "denied");
        let outcome = RunOutcome {
            summary: s,
            error: None,
        };
        let out = Captured::default();

        render_report(&outcome, true, OutputFormat::Human, &out);

        let lines = out.lines.borrow();
        assert_eq!(lines[0], "warn: 1 file could not be processed");
        assert_eq!(
            lines.last().unwrap(),
            "success: Dry run completed: 1 files deleted, 0 files copied"
        );
    }

    #[test]
    fn json_report_contains_summary_and_error() {
        let outcome = RunOutcome {
            summary: summary(3, 4),
            error: Some(SyncError::Bootstrap {
                path: PathBuf::from("lib"),
                reason: "nope".into(),
            }),
        };

        let json = report_json(&outcome, false);

        assert_eq!(json["success"], false);
        assert_eq!(json["complete"], false);
        assert_eq!(json["dry_run"], false);
        assert_eq!(json["summary"]["deleted_count"], 3);
        assert_eq!(json["summary"]["copied_count"], 4);
        assert_eq!(json["error"]["kind"], "bootstrap");
    }

    #[test]
    fn json_report_for_clean_run() {
        let outcome = RunOutcome {
            summary: summary(0, 1),
            error: None,
        };

        let json = report_json(&outcome, true);

        assert_eq!(json["success"], true);
        assert!(json["error"].is_null());
        assert_eq!(json["dry_run"], true);
    }
}
