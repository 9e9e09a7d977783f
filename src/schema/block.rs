use serde::{Deserialize, Serialize};

/// A typed line of synthesized text, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayBlock {
    /// A title line. Leading `#` markers and surrounding whitespace are
    /// stripped before storage.
    Heading(String),
    /// A bold callout line, stored with all `**` markers removed.
    Emphasis(String),
    /// Any other line, stored verbatim. Blank lines become empty paragraphs.
    Paragraph(String),
}

impl DisplayBlock {
    /// Returns a stable lowercase name for the block kind (e.g., "heading").
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading",
            Self::Emphasis(_) => "emphasis",
            Self::Paragraph(_) => "paragraph",
        }
    }

    /// The block's text content.
    pub fn text(&self) -> &str {
        match self {
            Self::Heading(text) | Self::Emphasis(text) | Self::Paragraph(text) => text,
        }
    }
}
