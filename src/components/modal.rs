//! Full section modal component

use maud::{Markup, PreEscaped, html};

use crate::cards::Modal;

/// Renders a hidden modal with the untruncated section
pub fn modal(modal: &Modal) -> Markup {
    html! {
        div class="modal" id=(modal.id) {
            div class="modal-content" {
                div class="modal-header" {
                    h2 { (modal.heading) }
                    button type="button" class="close" aria-label="Close" { "×" }
                }
                div class="modal-body" {
                    (PreEscaped(&modal.content.html))
                }
            }
        }
    }
}
