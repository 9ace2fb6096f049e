//! Table-of-contents generation for markdown documents.
//!
//! Headers get hash-derived anchor tags (`<a name="..."></a>`) and a
//! `# Table of contents` block is spliced in after the first header line.
//! The rewrite is not idempotent: back up the original before overwriting it.

mod anchor;
mod assemble;
mod registry;
#[cfg(test)]
mod tests;

pub use anchor::AnchorStrategy;
pub use assemble::{PatchMode, TocEntry, TocOptions, add_toc_to_markdown, add_toc_with};
pub use registry::SeedMode;
