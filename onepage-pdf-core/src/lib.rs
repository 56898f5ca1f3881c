//! # onepage-pdf
//!
//! A minimal PDF encoder that produces one page of positioned text.
//!
//! The document is always the same six-object graph: catalog, page tree, page,
//! two standard Type 1 fonts (Helvetica and Helvetica-Bold) and one
//! uncompressed content stream. Object numbers are fixed, dictionaries keep
//! insertion order, and no timestamps or IDs are written, so identical input
//! produces byte-identical files.
//!
//! ## Quick Start
//!
//! ```rust
//! use onepage_pdf::{Document, PageConfig, Result, TextInstruction};
//!
//! # fn main() -> Result<()> {
//! let mut doc = Document::new(PageConfig::letter());
//! doc.add_text(TextInstruction::bold(18.0, 54.0, 756.0, "Title"))
//!     .add_text(TextInstruction::regular(10.0, 54.0, 730.0, "Body (with) parens"));
//!
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.4\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`text`] - literal-string escaping, WinAnsi encoding, page fonts
//! - [`content`] - text instructions and content stream assembly
//! - [`document`] - fixed object graph and the [`Document`] facade
//! - [`writer`] - object serialization, cross-reference table, trailer, file output
//!
//! ## Limitations
//!
//! Text is encoded as WinAnsiEncoding (Windows-1252). Characters outside that
//! set are rejected with [`PdfError::EncodingError`] instead of being replaced.

pub mod content;
pub mod document;
pub mod error;
pub mod objects;
pub mod page;
pub mod text;
pub mod writer;

pub use content::{
    build_content_stream, ContentStream, ContentStreamBuilder, InstructionList, TextInstruction,
};
pub use document::{Document, ObjectGraph};
pub use error::{PdfError, Result};
pub use page::PageConfig;
pub use text::{escape_literal, escape_literal_bytes, FontId};
pub use writer::{write_pdf_file, PdfWriter};

/// Encode `instructions` on a page described by `config` and return the file bytes.
pub fn generate(config: &PageConfig, instructions: &InstructionList) -> Result<Vec<u8>> {
    Document::with_instructions(*config, instructions.clone()).to_bytes()
}

/// Current version of onepage-pdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
