//! Pill badges

use leptos::prelude::*;

/// Visual style of a [`Badge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Solid, for established products ("Bestseller").
    #[default]
    Solid,
    /// Translucent, for new launches.
    Soft,
    /// Bordered, for product codes.
    Outline,
    /// Lime promo pill used inside dropdown panels.
    Promo,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Solid => "badge badge-solid",
            BadgeVariant::Soft => "badge badge-soft",
            BadgeVariant::Outline => "badge badge-outline",
            BadgeVariant::Promo => "badge badge-promo",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(into)] label: String,
    #[prop(optional)] variant: BadgeVariant,
) -> impl IntoView {
    view! { <span class=variant.class()>{label}</span> }
}
