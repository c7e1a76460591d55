// ============================================================================
// Output Module
// Renders a ConstantTermReport for the console or as JSON
// ============================================================================

use crate::domain::OutputFormat;
use crate::engine::ConstantTermReport;
use std::fmt::Write as _;
use std::io;

/// Console layout: one line per root, then product, sign and result.
pub fn render_text(report: &ConstantTermReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "--- Converting Roots ---");
    for root in &report.roots {
        let _ = writeln!(
            out,
            "Root \"{}\" (base {}): {} -> {}",
            root.label, root.base, root.digits, root.value
        );
    }
    let _ = writeln!(out, "------------------------");
    let _ = writeln!(out);
    let _ = writeln!(out, "Product of all roots: {}", report.product);
    let _ = writeln!(out, "n = {}, so (-1)^n is {}", report.degree, report.sign);
    let _ = writeln!(out);
    let _ = writeln!(out, "Final Constant Term (c):");
    let _ = writeln!(out, "{}", report.constant_term);

    out
}

/// Pretty-printed JSON document with a trailing newline.
pub fn render_json(report: &ConstantTermReport) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(report)?;
    text.push('\n');
    Ok(text)
}

/// Write the report in the requested format.
pub fn write_report<W: io::Write>(
    out: &mut W,
    report: &ConstantTermReport,
    format: OutputFormat,
) -> io::Result<()> {
    let text = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report)?,
    };
    out.write_all(text.as_bytes())?;
    out.flush()
}
