//! Domain types for the document-assistant session.
//!
//! These types represent the loaded document and the chat transcript in the
//! domain model, independent of any infrastructure concerns.

mod chat;
mod document;

pub use chat::{ChatMessage, MessageKind};
pub use document::{join_document_text, normalize_paragraphs, Paragraph, ParagraphInput};
