use std::collections::HashMap;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{PolicyVerdict, ScanResult, ScanStatus};

/// Render a colored terminal report.
pub fn render(results: &[ScanResult], verbose: bool, quiet: bool) -> Result<()> {
    let total = results.len();
    let pass_count = count(results, PolicyVerdict::Pass);
    let warn_count = count(results, PolicyVerdict::Warn);
    let error_count = count(results, PolicyVerdict::Error);

    if quiet {
        println!(
            "Total: {}  Pass: {}  Warn: {}  Error: {}",
            total,
            pass_count.to_string().green(),
            warn_count.to_string().yellow(),
            error_count.to_string().red(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}\n",
        "license-guess".bold(),
        env!("CARGO_PKG_VERSION")
    );

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Paths scanned : {}", total));
    println!(
        " │  {:<48} │",
        format!(
            "{}  Pass       : {:>4}  {}",
            "✓".green(),
            pass_count,
            summarize_licenses(results, PolicyVerdict::Pass)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Warn       : {:>4}  {}",
            "⚠".yellow(),
            warn_count,
            summarize_licenses(results, PolicyVerdict::Warn)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Error      : {:>4}  {}",
            "✗".red(),
            error_count,
            summarize_licenses(results, PolicyVerdict::Error)
        )
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if error_count > 0 {
        println!(" {} Paths requiring attention:\n", "[ERROR]".red().bold());
        render_table(results, PolicyVerdict::Error);
        println!();
    }

    if warn_count > 0 {
        println!(" {} Paths with warnings:\n", "[WARN]".yellow().bold());
        render_table(results, PolicyVerdict::Warn);
        println!();
    }

    if verbose && pass_count > 0 {
        println!(" {} All passing paths:\n", "[PASS]".green().bold());
        render_table(results, PolicyVerdict::Pass);
        println!();
    }

    Ok(())
}

fn count(results: &[ScanResult], verdict: PolicyVerdict) -> usize {
    results.iter().filter(|r| r.verdict == verdict).count()
}

fn render_table(results: &[ScanResult], verdict_filter: PolicyVerdict) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Path").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("File(s)").add_attribute(Attribute::Bold),
            Cell::new("Verdict").add_attribute(Attribute::Bold),
        ]);

    for result in results.iter().filter(|r| r.verdict == verdict_filter) {
        let (verdict_str, verdict_color) = match result.verdict {
            PolicyVerdict::Pass => ("✓ pass", Color::Green),
            PolicyVerdict::Warn => ("⚠ warn", Color::Yellow),
            PolicyVerdict::Error => ("✗ error", Color::Red),
        };

        let status_color = match result.status {
            ScanStatus::Identified => Color::Green,
            ScanStatus::Unrecognized | ScanStatus::Missing => Color::DarkGrey,
            ScanStatus::Ambiguous => Color::Yellow,
            ScanStatus::Unreadable => Color::Red,
        };

        let files = result
            .files
            .iter()
            .map(|f| f.display().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            Cell::new(result.path.display()),
            Cell::new(license_label(result)),
            Cell::new(result.status.to_string()).fg(status_color),
            Cell::new(files),
            Cell::new(verdict_str)
                .fg(verdict_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

fn license_label(result: &ScanResult) -> &str {
    result.license_type.as_deref().unwrap_or("unknown")
}

/// Top three licenses for a verdict, e.g. `[MIT (3), Apache-2.0 (1)]`.
fn summarize_licenses(results: &[ScanResult], verdict: PolicyVerdict) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.verdict == verdict) {
        *counts.entry(license_label(result)).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(lic, cnt)| format!("{} ({})", lic, cnt))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
