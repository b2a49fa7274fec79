//! Section card component

use maud::{Markup, PreEscaped, html};

use crate::cards::Card;

/// Renders one section card
///
/// Shows the section heading and its content. Truncated cards get a footer
/// with a "See More" button whose `data-modal` attribute names the modal
/// holding the full section.
///
/// # Arguments
///
/// * `card`: Card with rendered content and optional modal
///
/// # Returns
///
/// Card markup
pub fn card(card: &Card) -> Markup {
    html! {
        div class="card" id=(card.id) {
            div class="card-header" {
                h2 { (card.heading) }
            }
            div class="card-content" {
                (PreEscaped(&card.content.html))
            }
            @if let Some(modal) = &card.modal {
                div class="card-footer" {
                    button type="button" class="see-more-btn" data-modal=(modal.id) { "See More" }
                }
            }
        }
    }
}

/// Wraps cards in the responsive grid container
pub fn card_grid(cards: &[Card]) -> Markup {
    html! {
        div class="card-container" {
            @for item in cards {
                (card(item))
            }
        }
    }
}
