//! Plain-text rendering of a stats summary.

use std::fmt::Write;

use crate::core::types::WrappedState;

/// Render the human-readable summary shown by `wrapped show` and the menu.
pub fn render_summary(state: &WrappedState) -> String {
    let mut out = String::new();
    out.push_str("Your Spopi Wrapped:\n\n");
    let _ = writeln!(out, "Total minutes listened: {}", state.total_minutes);
    out.push('\n');
    render_ranked(&mut out, "Top Artists:", &state.top_artists, "(no artists yet)");
    out.push('\n');
    render_ranked(&mut out, "Top Songs:", &state.top_songs, "(no songs yet)");
    out
}

fn render_ranked(out: &mut String, title: &str, items: &[String], placeholder: &str) {
    out.push_str(title);
    out.push('\n');
    if items.is_empty() {
        let _ = writeln!(out, "  {placeholder}");
        return;
    }
    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, item);
    }
}
