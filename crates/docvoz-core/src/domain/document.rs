//! Document domain types.

use serde::{Deserialize, Serialize};

/// One document text segment as returned by the backend parser.
///
/// Ephemeral: paragraphs have no lifecycle beyond the currently rendered
/// document view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub index: usize,
    pub text: String,
}

/// Tolerant wire shape for parser output.
///
/// The `/process` endpoint returns either bare strings or objects exposing a
/// `text` field, depending on the parser path taken server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParagraphInput {
    Text(String),
    Object { text: String },
}

impl ParagraphInput {
    /// Extract the paragraph text regardless of wire shape.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Object { text } => text,
        }
    }
}

/// Normalize parser output into indexed paragraphs, dropping empty entries.
#[must_use]
pub fn normalize_paragraphs(inputs: Vec<ParagraphInput>) -> Vec<Paragraph> {
    inputs
        .into_iter()
        .map(ParagraphInput::into_text)
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(index, text)| Paragraph { index, text })
        .collect()
}

/// Join paragraph texts with a blank line into the session document text.
#[must_use]
pub fn join_document_text(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_entries_are_dropped_and_remainder_reindexed() {
        let inputs = vec![
            ParagraphInput::Text("A".into()),
            ParagraphInput::Text("B".into()),
            ParagraphInput::Text(String::new()),
        ];
        let paragraphs = normalize_paragraphs(inputs);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].index, 1);
        assert_eq!(join_document_text(&paragraphs), "A\n\nB");
    }

    #[test]
    fn join_of_empty_sequence_is_empty() {
        assert_eq!(join_document_text(&[]), "");
    }

    #[test]
    fn deserializes_bare_strings_and_text_objects() {
        let inputs: Vec<ParagraphInput> =
            serde_json::from_value(json!(["plain", { "text": "wrapped" }])).unwrap();
        let texts: Vec<String> = inputs.into_iter().map(ParagraphInput::into_text).collect();
        assert_eq!(texts, vec!["plain", "wrapped"]);
    }
}
