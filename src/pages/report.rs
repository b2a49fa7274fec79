//! Card report page generation

use maud::{Markup, html};

use crate::assets::{MODAL_SCRIPT, report_styles};
use crate::cards::Card;
use crate::components::card::card_grid;
use crate::components::footer::footer;
use crate::components::layout::page_wrapper;
use crate::components::modal::modal;

/// Data container for report page generation
pub struct ReportPageData<'a> {
    pub title: &'a str,
    pub cards: &'a [Card],
    pub generated_on: &'a str,
}

/// Generates the report page
///
/// Lays out the title header, the card grid, one hidden modal per truncated
/// card, and the generation footer. Styles and the modal script are inlined.
///
/// # Arguments
///
/// * `data`: Report page data container
///
/// # Returns
///
/// Complete HTML markup for the report
pub fn generate(data: ReportPageData<'_>) -> Markup {
    page_wrapper(
        data.title,
        &report_styles(),
        Some(MODAL_SCRIPT),
        html! {
            header {
                h1 { (data.title) }
            }
            div class="container" {
                (card_grid(data.cards))
            }
            @for card in data.cards {
                @if let Some(full) = &card.modal {
                    (modal(full))
                }
            }
            (footer(data.generated_on))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Fragment, Modal};

    fn fragment(text: &str) -> Fragment {
        Fragment {
            html: format!("<p>{}</p>\n", text),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_report_page_with_short_card() {
        // Arrange
        let cards = vec![Card {
            id: "card-0".to_string(),
            heading: "Markets".to_string(),
            content: fragment("Stocks rose."),
            modal: None,
        }];

        // Act
        let html = generate(ReportPageData {
            title: "Daily Brief",
            cards: &cards,
            generated_on: "October 16, 2026",
        })
        .into_string();

        // Assert
        assert!(html.contains("<h1>Daily Brief</h1>"));
        assert!(html.contains("id=\"card-0\""));
        assert!(html.contains("<h2>Markets</h2>"));
        assert!(html.contains("<p>Stocks rose.</p>"));
        assert!(!html.contains("see-more-btn\""), "No button without modal");
        assert!(!html.contains("class=\"modal\""));
        assert!(html.contains("Generated on October 16, 2026"));
    }

    #[test]
    fn test_report_page_with_truncated_card() {
        // Arrange
        let cards = vec![Card {
            id: "card-3".to_string(),
            heading: "Long".to_string(),
            content: fragment("Start..."),
            modal: Some(Modal {
                id: "modal-3".to_string(),
                heading: "Long".to_string(),
                content: fragment("Start of the full story."),
            }),
        }];

        // Act
        let html = generate(ReportPageData {
            title: "T",
            cards: &cards,
            generated_on: "today",
        })
        .into_string();

        // Assert
        assert!(html.contains("data-modal=\"modal-3\""));
        assert!(html.contains("class=\"modal\" id=\"modal-3\""));
        assert!(html.contains("Start of the full story."));
        assert!(html.contains("class=\"close\""));
    }

    #[test]
    fn test_report_page_without_cards() {
        // Act
        let html = generate(ReportPageData {
            title: "Empty",
            cards: &[],
            generated_on: "today",
        })
        .into_string();

        // Assert
        assert!(html.contains("<div class=\"card-container\"></div>"));
    }

    #[test]
    fn test_heading_is_escaped() {
        // Arrange
        let cards = vec![Card {
            id: "card-0".to_string(),
            heading: "R&D <2026>".to_string(),
            content: fragment("x"),
            modal: None,
        }];

        // Act
        let html = generate(ReportPageData {
            title: "T",
            cards: &cards,
            generated_on: "today",
        })
        .into_string();

        // Assert
        assert!(html.contains("<h2>R&amp;D &lt;2026&gt;</h2>"));
    }
}
