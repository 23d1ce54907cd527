//! Built-in storefront content.
//!
//! Used as-is when no `site.toml` is supplied and as the fallback for any
//! section a config leaves out.

use crate::types::{
    BrandInfo, BundleContent, DropdownItem, HeroContent, NavLink, NavMenu, Product, ShowcaseCopy,
    default_footer_label,
};

pub fn brand() -> BrandInfo {
    BrandInfo {
        name: "Seed".into(),
        href: "/".into(),
    }
}

pub fn hero() -> HeroContent {
    HeroContent {
        title: "The probiotic pioneering the future of gut health.".into(),
        description: "DS-01® Daily Synbiotic is clinically proven to deliver relief from \
                      bloating, gas, and irregularity.*"
            .into(),
        cta_label: "Is DS-01® right for you?".into(),
        image: "/seed-probiotic-bottle-tilted-dark-green-sage-color.jpg".into(),
        image_alt: "Seed Probiotic Bottle".into(),
    }
}

fn item(id: &str, name: &str, code: &str, image: &str, badge: Option<&str>) -> DropdownItem {
    DropdownItem {
        id: id.into(),
        name: name.into(),
        code: code.into(),
        image: image.into(),
        badge: badge.map(Into::into),
    }
}

/// The "Shop" dropdown.
pub fn shop_menu() -> NavMenu {
    NavMenu {
        trigger: "Shop".into(),
        items: vec![
            item("ds-01", "Daily Synbiotic", "DS-01®", "/products/ds-01.jpg", Some("Bestseller")),
            item("dm-02", "Daily Multivitamin", "DM-02®", "/products/dm-02.jpg", Some("New")),
            item("am-02", "Energy + Focus", "AM-02®", "/products/am-02.jpg", Some("New")),
            item("pm-02", "Sleep + Restore", "PM-02®", "/products/pm-02.jpg", Some("New")),
            item("pds-08", "Pediatric Daily Synbiotic", "PDS-08®", "/products/pds-08.jpg", None),
            item("vs-01", "Vaginal Synbiotic", "VS-01®", "/products/vs-01.jpg", None),
            item("bundle", "Daily Essentials Bundle", "DS-01® + DM-02®", "", Some("Save 25%")),
        ],
        footer_label: default_footer_label(),
    }
}

pub fn menus() -> Vec<NavMenu> {
    vec![shop_menu()]
}

pub fn links() -> Vec<NavLink> {
    ["Science", "Learn"]
        .into_iter()
        .map(|label| NavLink {
            label: label.into(),
            href: "#".into(),
        })
        .collect()
}

pub fn showcase() -> ShowcaseCopy {
    ShowcaseCopy {
        headline: vec!["Whole body health starts".into(), "in the gut.".into()],
        blurb: "Formulations that provide fast-acting and sustained support using \
                scientifically and clinically studied ingredients."
            .into(),
        cta_label: "Shop All →".into(),
    }
}

fn product(id: &str, name: &str, badge: &str, tag: &str, price: &str, is_new: bool) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        badge: badge.into(),
        tag: tag.into(),
        price: price.into(),
        is_new,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("1", "Daily Synbiotic", "Bestseller", "DS-01®", "$49.99", false),
        product("2", "Daily Multivitamin", "New", "DM-02®", "$39.99", true),
        product("3", "Energy + Focus", "New", "AM-02®", "$24.99", true),
        product("4", "Sleep + Restore", "New", "PM-02®", "$24.99", true),
    ]
}

pub fn bundle() -> BundleContent {
    BundleContent {
        badge: "Bundle + Save 25%".into(),
        headline: "Daily essentials for nutrition and gut health.".into(),
        image: "/seed-probiotic-bottle-dark-green-sage-color-produc.jpg".into(),
        image_alt: "Seed Products".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn shop_menu_ids_are_unique() {
        let menu = shop_menu();
        let ids: HashSet<_> = menu.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), menu.items.len());
    }

    #[test]
    fn only_new_products_are_flagged_new() {
        for product in products() {
            assert_eq!(product.is_new, product.badge == "New", "{}", product.name);
        }
    }
}
