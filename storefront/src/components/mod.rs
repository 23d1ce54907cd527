//! Leptos UI components for the storefront.
//!
//! # Component Hierarchy
//!
//! ```text
//! NavDropdown (per hover menu)
//! ├── trigger link
//! └── panel (while open)
//!     ├── DropdownRow × items
//!     │   └── Badge (promo, optional)
//!     └── footer link + Icon
//!
//! ProductCard
//! ├── Badge (headline) + Badge (tag)
//! └── Button × 2
//! ```
//!
//! Page sections that compose these live in the landing binary.

mod badge;
mod button;
mod icons;
mod nav_dropdown;
mod product_card;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use icons::*;
pub use nav_dropdown::{NavDropdown, PanelEntry, panel_entries, state_attr};
pub use product_card::{ProductCard, headline_badge, price_line};
