//! Renders retrieved passages into the context block handed to the model.

use std::fmt::Write;

use super::Passage;

const HEADER: &str = "## Context provided:\n";

/// Wrap each passage in `<Document i>` / `</Document i>` tags, numbered from
/// zero in input order, under a fixed header. Content is inserted verbatim.
///
/// An empty batch still yields the header line.
pub fn format_docs(passages: &[Passage]) -> String {
    let body: usize = passages.iter().map(|p| p.content.len() + 32).sum();
    let mut out = String::with_capacity(HEADER.len() + body);
    out.push_str(HEADER);
    for (i, passage) in passages.iter().enumerate() {
        // Writing to a String is infallible.
        let _ = write!(out, "\n<Document {i}>\n{}\n</Document {i}>\n", passage.content);
    }
    out
}
