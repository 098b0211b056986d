//! Catalog listing filters shared by the `problems` and `tools` commands.

use prompt::ToolDescriptor;
use storage::Problem;

/// Keeps problems matching the given domain and/or level. `None` keeps all.
pub fn filter_problems(
    problems: Vec<Problem>,
    domain: Option<&str>,
    level: Option<i64>,
) -> Vec<Problem> {
    problems
        .into_iter()
        .filter(|problem| domain.map_or(true, |domain| problem.domain == domain))
        .filter(|problem| level.map_or(true, |level| problem.level == level))
        .collect()
}

/// Keeps tools matching the given category. Complex descriptors list under
/// "Integration", Simple ones under their own category ("Other" when unset).
pub fn filter_tools(tools: Vec<ToolDescriptor>, category: Option<&str>) -> Vec<ToolDescriptor> {
    tools
        .into_iter()
        .filter(|tool| category.map_or(true, |category| tool.category() == category))
        .collect()
}

/// Short single-line preview of a problem text for listings.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    let mut out: String = flat.chars().take(max_chars).collect();
    if flat.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
