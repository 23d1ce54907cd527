//! Inert call-to-action buttons. Nothing on the page checks out or navigates.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    /// Frosted glass pill used over the hero image.
    Glass,
    /// Text-only link styling.
    Link,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Glass => "btn btn-glass",
            ButtonVariant::Link => "btn btn-link",
        }
    }
}

#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(optional)] variant: ButtonVariant,
    /// Extra classes appended after the variant's own
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), class)
    };
    view! { <button type="button" class=class>{label}</button> }
}
