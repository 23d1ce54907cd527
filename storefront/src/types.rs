//! Page content types.
//!
//! Everything the storefront renders is plain data supplied by the caller:
//!
//! - **Serializable** - loaded from `site.toml` via serde
//! - **Clone-friendly** - components take owned values
//! - **Default-able** - partial configs fall back to the built-in catalog
//!
//! # Example
//!
//! ```rust
//! use storefront::types::DropdownItem;
//!
//! let item = DropdownItem {
//!     id: "ds-01".into(),
//!     name: "Daily Synbiotic".into(),
//!     code: "DS-01®".into(),
//!     badge: Some("Bestseller".into()),
//!     ..Default::default()
//! };
//! assert_eq!(item.image_src(), storefront::types::PLACEHOLDER_IMAGE);
//! ```

use serde::{Deserialize, Serialize};

/// Image shown when an entry has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// One entry in a navigation dropdown panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownItem {
    /// Stable identifier, unique within its menu.
    pub id: String,
    /// Display name, e.g. "Daily Synbiotic".
    pub name: String,
    /// Short product code shown above the name, e.g. "DS-01®".
    pub code: String,
    /// Opaque image reference resolved by the host; may be empty.
    #[serde(default)]
    pub image: String,
    /// Optional promotional badge ("New", "Bestseller").
    #[serde(default)]
    pub badge: Option<String>,
}

impl DropdownItem {
    /// Image reference to render, falling back to [`PLACEHOLDER_IMAGE`].
    pub fn image_src(&self) -> &str {
        image_or_placeholder(&self.image)
    }
}

/// A hover menu in the top navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    /// Always-visible label that reveals the panel.
    pub trigger: String,
    /// Panel entries, rendered in this order.
    #[serde(default)]
    pub items: Vec<DropdownItem>,
    /// Label of the "see everything" link closing the panel.
    #[serde(default = "default_footer_label")]
    pub footer_label: String,
}

pub(crate) fn default_footer_label() -> String {
    "Shop All Products".into()
}

/// Plain navigation link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
}

fn default_href() -> String {
    "#".into()
}

/// Brand mark in the navigation bar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInfo {
    pub name: String,
    #[serde(default = "default_href")]
    pub href: String,
}

/// Product card content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Headline badge: "Bestseller", "New", ...
    pub badge: String,
    /// Product code shown in the outline badge.
    pub tag: String,
    /// Monthly price, already formatted ("$49.99").
    pub price: String,
    /// New products get the softer badge style.
    #[serde(default)]
    pub is_new: bool,
}

/// Full-height hero banner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub description: String,
    pub cta_label: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_alt: String,
}

/// Copy around the product grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseCopy {
    /// Headline lines, one `<h2>` each.
    pub headline: Vec<String>,
    pub blurb: String,
    pub cta_label: String,
}

/// Closing promo section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleContent {
    pub badge: String,
    pub headline: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_alt: String,
}

/// Resolve an optional image reference the same way dropdown items do.
pub fn image_or_placeholder(image: &str) -> &str {
    if image.trim().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_src_passes_reference_through() {
        let item = DropdownItem {
            image: "/products/ds-01.jpg".into(),
            ..Default::default()
        };
        assert_eq!(item.image_src(), "/products/ds-01.jpg");
    }

    #[test]
    fn blank_image_uses_placeholder() {
        let item = DropdownItem {
            image: "   ".into(),
            ..Default::default()
        };
        assert_eq!(item.image_src(), PLACEHOLDER_IMAGE);
        assert_eq!(image_or_placeholder(""), PLACEHOLDER_IMAGE);
    }
}
