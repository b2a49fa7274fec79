//! Inline CSS and script bundling

const BASE: &str = include_str!("../assets/base.css");
const CARD: &str = include_str!("../assets/components/card.css");
const MODAL: &str = include_str!("../assets/components/modal.css");
const HIGHLIGHT: &str = include_str!("../assets/highlight.css");

const NAVIGATION_PAGE: &str = include_str!("../assets/page-navigation.css");

/// Script opening and closing modals from card buttons
pub const MODAL_SCRIPT: &str = include_str!("../assets/modal.js");

/// Stylesheet embedded in every report page
pub fn report_styles() -> String {
    bundle(&[BASE, CARD, MODAL, HIGHLIGHT])
}

/// Stylesheet embedded in the navigation page
pub fn navigation_styles() -> String {
    bundle(&[NAVIGATION_PAGE])
}

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_styles_cover_cards_and_modals() {
        let css = report_styles();
        assert!(css.contains(".card-container"));
        assert!(css.contains(".modal.open"));
        assert!(css.contains(".hljs-keyword"));
    }

    #[test]
    fn test_modal_script_handles_escape() {
        assert!(MODAL_SCRIPT.contains("Escape"));
        assert!(MODAL_SCRIPT.contains("data-modal"));
    }
}
