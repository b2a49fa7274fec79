//! Splits a parsed document into its title and second-level sections.

use comrak::nodes::{AstNode, NodeValue};
use comrak::Arena;

use super::text::{container, plain_text};

/// Content under one second-level heading.
pub struct Section<'a> {
    /// Heading text without markup
    pub heading: String,
    /// Document node holding the section's blocks
    pub body: &'a AstNode<'a>,
}

/// Title and sections of a document.
pub struct Outline<'a> {
    pub title: Option<String>,
    pub sections: Vec<Section<'a>>,
}

fn heading_level<'a>(node: &'a AstNode<'a>) -> Option<u8> {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => Some(heading.level),
        _ => None,
    }
}

/// Moves the top-level blocks of `root` into one container per section.
///
/// The title is the first level-1 heading anywhere in the document. Blocks
/// before the first level-2 heading are dropped, as are level-1 headings
/// found between sections.
pub fn split_sections<'a>(arena: &'a Arena<AstNode<'a>>, root: &'a AstNode<'a>) -> Outline<'a> {
    let title = root
        .descendants()
        .find(|node| heading_level(*node) == Some(1))
        .map(|node| plain_text(node).trim().to_string());

    let blocks: Vec<_> = root.children().collect();
    let mut sections: Vec<Section<'a>> = Vec::new();

    for block in blocks {
        match heading_level(block) {
            Some(2) => sections.push(Section {
                heading: plain_text(block).trim().to_string(),
                body: container(arena),
            }),
            Some(1) => {}
            _ => {
                if let Some(section) = sections.last() {
                    section.body.append(block);
                }
            }
        }
    }

    Outline { title, sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::MarkdownRenderer;

    fn outline<'a>(arena: &'a Arena<AstNode<'a>>, markdown: &str) -> Outline<'a> {
        let renderer = MarkdownRenderer::new();
        let root = renderer.parse(arena, markdown);
        split_sections(arena, root)
    }

    #[test]
    fn test_title_and_sections() {
        // Arrange
        let arena = Arena::new();

        // Act
        let markdown = "# Daily Brief\n\n## Markets\n\nUp.\n\n## Weather\n\nRain.\n";
        let outline = outline(&arena, markdown);

        // Assert
        assert_eq!(outline.title.as_deref(), Some("Daily Brief"));
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.sections[0].heading, "Markets");
        assert_eq!(plain_text(outline.sections[0].body), "Up.");
        assert_eq!(outline.sections[1].heading, "Weather");
        assert_eq!(plain_text(outline.sections[1].body), "Rain.");
    }

    #[test]
    fn test_missing_title() {
        // Arrange
        let arena = Arena::new();

        // Act
        let outline = outline(&arena, "## Only\n\nBody.\n");

        // Assert
        assert!(outline.title.is_none());
        assert_eq!(outline.sections.len(), 1);
    }

    #[test]
    fn test_preamble_is_dropped() {
        // Arrange
        let arena = Arena::new();

        // Act
        let outline = outline(&arena, "# T\n\nIntro paragraph.\n\n## S\n\nKept.\n");

        // Assert
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(plain_text(outline.sections[0].body), "Kept.");
    }

    #[test]
    fn test_level_one_heading_inside_section_is_excluded() {
        // Arrange
        let arena = Arena::new();

        // Act
        let outline = outline(&arena, "## S\n\nBefore.\n\n# Stray\n\nAfter.\n");

        // Assert
        assert_eq!(outline.title.as_deref(), Some("Stray"));
        assert_eq!(plain_text(outline.sections[0].body), "Before.After.");
    }

    #[test]
    fn test_deeper_headings_stay_in_section() {
        // Arrange
        let arena = Arena::new();

        // Act
        let outline = outline(&arena, "## S\n\n### Detail\n\nText.\n");

        // Assert
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(plain_text(outline.sections[0].body), "DetailText.");
    }

    #[test]
    fn test_no_sections() {
        // Arrange
        let arena = Arena::new();

        // Act
        let outline = outline(&arena, "# Title\n\nJust a preamble.\n");

        // Assert
        assert!(outline.sections.is_empty());
    }

    #[test]
    fn test_heading_with_inline_code() {
        // Arrange
        let arena = Arena::new();

        // Act
        let outline = outline(&arena, "## The `render` call\n\nx\n");

        // Assert
        assert_eq!(outline.sections[0].heading, "The render call");
    }
}
