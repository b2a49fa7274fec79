//! Navigation page listing generated reports

use maud::{Markup, html};

use crate::assets::navigation_styles;
use crate::batch::ReportEntry;
use crate::components::layout::page_wrapper;
use crate::util::{format_file_size, format_timestamp};

/// Data container for navigation page generation
pub struct NavigationPageData<'a> {
    pub name: &'a str,
    pub folder: &'a str,
    pub entries: &'a [ReportEntry],
    pub generated_at: &'a str,
}

/// Generates the navigation page
///
/// Lists every report with its size and modification time. Links open in a
/// new tab. An explanatory item replaces the list when no report exists.
pub fn generate(data: NavigationPageData<'_>) -> Markup {
    page_wrapper(
        data.name,
        &navigation_styles(),
        None,
        html! {
            h1 { (data.name) }
            p { "Navigation:" }
            ul {
                @if data.entries.is_empty() {
                    li class="empty-message" {
                        "No HTML files found in the " (data.folder) " folder."
                    }
                } @else {
                    @for entry in data.entries {
                        li {
                            a href=(entry.href) target="_blank" { (entry.name) }
                            div class="info" {
                                "Size: " (format_file_size(entry.size))
                                " | Last modified: " (format_timestamp(&entry.modified))
                            }
                        }
                    }
                }
            }
            div class="footer" {
                "Generated on " (data.generated_at)
            }
        },
    )
}
