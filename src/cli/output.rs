//! Output formatting and progress bars for CLI

use crate::{
    identifiers::{ActionId, StateId},
    q_learning::ActionStats,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// One row of the value table
pub fn format_stats_row(action: &ActionId, stats: &ActionStats) -> String {
    format!(
        "  {:<16} calls={:<6} qRaw={:>10.6} qWeighted={:>10.6}",
        action.as_str(),
        stats.calls,
        stats.q_raw,
        stats.q_weighted
    )
}

/// Print every action recorded for a state
pub fn print_state<'a>(
    state: &StateId,
    actions: impl IntoIterator<Item = (&'a ActionId, &'a ActionStats)>,
) {
    print_subsection(state.as_str());
    for (action, stats) in actions {
        println!("{}", format_stats_row(action, stats));
    }
}
