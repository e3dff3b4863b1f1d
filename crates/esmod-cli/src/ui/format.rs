//! Rendering of the final change report.

use esmod_core::ChangeReport;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Plain-text summary of `report`.
///
/// ```
/// use esmod_cli::ui::format_summary;
/// use esmod_core::ChangeReport;
///
/// assert_eq!(format_summary(&ChangeReport::new()), "No files changed!");
///
/// let report = ChangeReport::for_file([("jsImports", 3)]);
/// assert_eq!(format_summary(&report), "In 1 file(s), converted:\n  3 jsImports");
/// ```
pub fn format_summary(report: &ChangeReport) -> String {
    if report.file_count == 0 {
        return "No files changed!".to_string();
    }
    let mut lines = vec![format!("In {} file(s), converted:", report.file_count)];
    lines.extend(
        report
            .transformed
            .iter()
            .filter(|counter| counter.count > 0)
            .map(|counter| format!("  {} {}", counter.count, counter.name)),
    );
    lines.join("\n")
}

/// Print the summary of `report` to stdout.
pub fn print_summary(report: &ChangeReport) {
    let summary = format_summary(report);
    if !colors_enabled() {
        println!("{summary}");
        return;
    }

    let mut lines = summary.lines();
    if let Some(heading) = lines.next() {
        println!("{}", heading.bold());
    }
    for line in lines {
        println!("{}", line.green());
    }
}
