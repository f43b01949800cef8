//! # mark
//!
//! A block-level parser core for Markdown-style documents.
//!
//! The crate is organized around line-by-line block recognition: a document is
//! consumed one physical line at a time, and a table of block rules decides,
//! in a resolved priority order, which block type a line starts or continues.
//! The thematic break rule (`***`, `---`, `___` divider lines) is the fully
//! implemented recognizer; the other block types it must cooperate with exist
//! as opaque rule identifiers consumed by the ordering resolution.
//!
//! Layout:
//!
//! src/mark
//!   ├── source      Line views over the document buffer
//!   ├── ast         Spans, nodes and the block tree
//!   ├── options     Parser configuration snapshot
//!   ├── state       Per-line parser state offered to rules
//!   ├── blocks      Block parser lifecycle, rule ordering, thematic break
//!   └── parser      The line scheduler driving rules over a document

pub mod mark;
