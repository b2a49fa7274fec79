//! Page footer component

use maud::{Markup, html};

/// Renders the generation footer shown under the card grid
pub fn footer(generated_on: &str) -> Markup {
    html! {
        footer {
            p { "Generated on " (generated_on) }
        }
    }
}
