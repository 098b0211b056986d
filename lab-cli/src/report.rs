//! Plain-text reports over saved test records: single-record export and
//! side-by-side comparison of two records.

use generator::Solution;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;
use storage::TestRecord;

/// Renders one record as a readable text export suitable for sharing outside
/// the tool.
pub fn text_export(record: &TestRecord) -> String {
    let mut out = String::new();
    let metadata = &record.metadata;

    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "PROMPT LAB SOLUTIONS EXPORT");
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out);
    let _ = writeln!(out, "METADATA:");
    let _ = writeln!(out, "- Test ID: {}", record.test_id);
    let _ = writeln!(out, "- Model: {}", metadata.model);
    let _ = writeln!(out, "- Temperature: {}", metadata.temperature);
    let _ = writeln!(out, "- Cost: ${:.4}", metadata.cost_usd);
    let _ = writeln!(out, "- Tokens: {}", metadata.tokens);
    let _ = writeln!(out, "- Latency: {:.0}ms", metadata.latency_ms);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "-".repeat(60));
    let _ = writeln!(out);
    let _ = writeln!(out, "SOLUTIONS:");
    let _ = writeln!(out);

    for (index, solution) in record.results.solutions.iter().enumerate() {
        let _ = writeln!(out, "Solution {}: {}", index + 1, solution.title);
        let _ = writeln!(out, "{}", "=".repeat(40));
        let _ = writeln!(out);
        let _ = writeln!(out, "Prompt:");
        let _ = writeln!(out, "{}", solution.prompt);
        let _ = writeln!(out);
        if !solution.tools_used.is_empty() {
            let _ = writeln!(out, "Tools: {}", solution.tools_used.join(", "));
        }
        if !solution.tags.is_empty() {
            let _ = writeln!(out, "Tags: {}", solution.tags.join(", "));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out);
    }

    out
}

/// Renders a comparison of two records: metric deltas, configs, solutions
/// paired by index, tool-usage overlap, and tag frequencies.
pub fn comparison_report(first: &TestRecord, second: &TestRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Comparing {} vs {}", first.test_id, second.test_id);
    let _ = writeln!(out);

    render_metrics(&mut out, first, second);
    render_configs(&mut out, first, second);
    render_solutions(&mut out, first, second);
    render_tool_overlap(&mut out, first, second);
    render_tag_frequencies(&mut out, first, second);

    out
}

fn render_metrics(out: &mut String, first: &TestRecord, second: &TestRecord) {
    let (a, b) = (&first.metadata, &second.metadata);
    let _ = writeln!(out, "Metrics (first -> second):");
    let _ = writeln!(
        out,
        "  Cost:        ${:.4} -> ${:.4} ({:+.4})",
        a.cost_usd,
        b.cost_usd,
        b.cost_usd - a.cost_usd
    );
    let _ = writeln!(
        out,
        "  Tokens:      {} -> {} ({:+})",
        a.tokens,
        b.tokens,
        b.tokens as i64 - a.tokens as i64
    );
    let _ = writeln!(
        out,
        "  Latency:     {:.0}ms -> {:.0}ms ({:+.0}ms)",
        a.latency_ms,
        b.latency_ms,
        b.latency_ms - a.latency_ms
    );
    let _ = writeln!(out, "  Temperature: {} -> {}", a.temperature, b.temperature);
    let _ = writeln!(out);
}

fn render_configs(out: &mut String, first: &TestRecord, second: &TestRecord) {
    for (label, record) in [("First", first), ("Second", second)] {
        let config = &record.config;
        let _ = writeln!(
            out,
            "{} config: {} / {} / level {} / tools: {}",
            label,
            config.problem_id,
            config.domain,
            config.level,
            config.tools.join(", ")
        );
    }
    let _ = writeln!(out);
}

fn render_solutions(out: &mut String, first: &TestRecord, second: &TestRecord) {
    let a = &first.results.solutions;
    let b = &second.results.solutions;
    let _ = writeln!(out, "Solutions:");
    for index in 0..a.len().max(b.len()) {
        let _ = writeln!(
            out,
            "  {}. {} | {}",
            index + 1,
            title_at(a, index),
            title_at(b, index)
        );
    }
    let _ = writeln!(out);
}

fn title_at(solutions: &[Solution], index: usize) -> &str {
    solutions.get(index).map_or("(none)", |s| s.title.as_str())
}

fn render_tool_overlap(out: &mut String, first: &TestRecord, second: &TestRecord) {
    let a = tools_used(&first.results.solutions);
    let b = tools_used(&second.results.solutions);

    let _ = writeln!(out, "Tool usage:");
    let _ = writeln!(out, "  First only:  {}", join_or_none(a.difference(&b)));
    let _ = writeln!(out, "  Common:      {}", join_or_none(a.intersection(&b)));
    let _ = writeln!(out, "  Second only: {}", join_or_none(b.difference(&a)));
    let _ = writeln!(out);
}

fn tools_used(solutions: &[Solution]) -> BTreeSet<String> {
    solutions
        .iter()
        .flat_map(|solution| solution.tools_used.iter().cloned())
        .collect()
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let joined = items.cloned().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

fn render_tag_frequencies(out: &mut String, first: &TestRecord, second: &TestRecord) {
    for (label, record) in [("First", first), ("Second", second)] {
        let frequencies = tag_frequency(&record.results.solutions);
        if frequencies.is_empty() {
            let _ = writeln!(out, "{} tags: (none)", label);
        } else {
            let line = frequencies
                .iter()
                .map(|(tag, count)| format!("{tag}: {count}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "{} tags: {}", label, line);
        }
    }
}

/// Tag counts across all solutions, most frequent first, ties by name.
fn tag_frequency(solutions: &[Solution]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for solution in solutions {
        for tag in &solution.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    let mut frequencies: Vec<(String, usize)> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies
}
