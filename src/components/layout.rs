//! Page layout wrapper component

use base64::{Engine as _, engine::general_purpose::STANDARD};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const FAVICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">📰</text></svg>"#;

/// Returns the favicon as a base64 data URI
pub fn favicon_href() -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(FAVICON_SVG))
}

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset, viewport, favicon and the inline stylesheet.
/// Everything is embedded so generated pages open without network access.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `styles`: CSS embedded in a `style` element
/// * `script`: Optional JavaScript embedded in a `script` element
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, styles: &str, script: Option<&str>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" type="image/svg+xml" href=(favicon_href());
                style { (PreEscaped(styles)) }
                @if let Some(code) = script {
                    script { (PreEscaped(code)) }
                }
            }
            body {
                (body)
            }
        }
    }
}
