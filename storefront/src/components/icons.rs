//! Inline SVG glyphs for the storefront chrome.
//!
//! Only three are needed: the chevron on a dropdown's footer link and the
//! cart and account buttons on the right of the nav bar. Path data is
//! Phosphor Regular on a 256 unit grid.

use leptos::prelude::*;

/// Square glyph in the current text colour, hidden from screen readers.
///
/// The nav bar uses the 20px default; the dropdown footer passes `size="16"`
/// and `class="dropdown-footer-caret"` so the caret can slide on hover.
#[component]
pub fn Icon(
    path: &'static str,
    #[prop(default = "20")] size: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            width=size
            height=size
            viewBox="0 0 256 256"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}

/// Dropdown footer chevron.
pub const ICON_CARET_RIGHT: &str = "M181.66,133.66l-80,80a8,8,0,0,1-11.32-11.32L164.69,128,90.34,53.66a8,8,0,0,1,11.32-11.32l80,80A8,8,0,0,1,181.66,133.66Z";

/// Cart button.
pub const ICON_SHOPPING_BAG: &str = "M216,40H40A16,16,0,0,0,24,56V200a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A16,16,0,0,0,216,40Zm0,160H40V56H216V200ZM176,88a48,48,0,0,1-96,0,8,8,0,0,1,16,0,32,32,0,0,0,64,0,8,8,0,0,1,16,0Z";

/// Account button.
pub const ICON_USER: &str = "M230.92,212c-15.23-26.33-38.7-45.21-66.09-54.16a72,72,0,1,0-73.66,0C63.78,166.78,40.31,185.66,25.08,212a8,8,0,1,0,13.85,8c18.84-32.56,52.14-52,89.07-52s70.23,19.44,89.07,52a8,8,0,1,0,13.85-8ZM72,96a56,56,0,1,1,56,56A56.06,56.06,0,0,1,72,96Z";
