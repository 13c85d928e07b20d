//! Grounding-block formatting for the downstream generation prompt.
//!
//! The retrieval core stops at ranked chunks; these helpers render them
//! into the block the prompt assembler splices into its template. The fixed
//! no-material sentence is what lets the product layer decline to answer
//! instead of letting the model fabricate content.

use std::fmt::Write as _;

use crate::models::RetrievedChunk;

/// Fixed sentence rendered when retrieval produced nothing.
pub const NO_MATERIAL_NOTICE: &str = "No teacher material is available.";

/// Render retrieved chunks into a grounding block, most relevant first.
///
/// Each chunk is cited with its title, topic, level, and author so the end
/// user can be shown where an explanation came from.
pub fn format_context(results: &[RetrievedChunk]) -> String {
    if results.is_empty() {
        return NO_MATERIAL_NOTICE.to_owned();
    }

    let mut out = String::from("=== TEACHER MATERIAL ===\n\n");
    for (i, ctx) in results.iter().enumerate() {
        let _ = writeln!(out, "[Source {}] {}", i + 1, ctx.metadata.title);
        let _ = writeln!(
            out,
            "Topic: {} | Level: {}",
            ctx.metadata.topic, ctx.metadata.level
        );
        let _ = writeln!(out, "By: {}", ctx.metadata.author);
        out.push('\n');
        out.push_str(&ctx.text);
        out.push_str("\n\n");
        out.push_str(&"=".repeat(50));
        out.push_str("\n\n");
    }
    out
}
