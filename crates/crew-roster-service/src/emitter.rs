//! Sorting and output of the roster

use crew_roster_core::Identifier;
use std::io::Write;

/// Sort identifiers in ascending numeric order
pub fn sort_identifiers(mut identifiers: Vec<Identifier>) -> Vec<Identifier> {
    identifiers.sort();
    identifiers
}

/// Render identifiers as newline-separated decimal text, no trailing newline
pub fn render(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(Identifier::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the rendered roster to `out` in a single write
///
/// A non-empty roster is terminated by one newline. An empty roster writes
/// nothing at all.
pub fn emit<W: Write>(out: &mut W, identifiers: &[Identifier]) -> std::io::Result<()> {
    if identifiers.is_empty() {
        return Ok(());
    }

    let mut text = render(identifiers);
    text.push('\n');
    out.write_all(text.as_bytes())?;
    out.flush()
}
