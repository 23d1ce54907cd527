//! Product card - glass panel with badges, image well and two CTAs

use leptos::prelude::*;

use super::{Badge, BadgeVariant, Button, ButtonVariant};
use crate::types::Product;

/// Badge style for a product's headline badge.
pub fn headline_badge(product: &Product) -> BadgeVariant {
    if product.is_new {
        BadgeVariant::Soft
    } else {
        BadgeVariant::Solid
    }
}

/// Footnote under the buttons.
pub fn price_line(price: &str) -> String {
    format!("Starting at {} per month", price)
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let badge_variant = headline_badge(&product);
    let price = price_line(&product.price);

    view! {
        <article class="product-card" data-product=product.id>
            <div class="product-card-glow"></div>
            <div class="product-card-body">
                <div class="product-badges">
                    <Badge label=product.badge variant=badge_variant />
                    <Badge label=product.tag variant=BadgeVariant::Outline />
                </div>
                <div class="product-image">
                    <div class="product-image-well"></div>
                </div>
                <h3 class="product-name">{product.name}</h3>
                <Button label="Shop Now" class="btn-block" />
                <Button label="Learn More" variant=ButtonVariant::Outline class="btn-block" />
                <p class="product-price">{price}</p>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_products_get_soft_badge() {
        let product = Product {
            is_new: true,
            ..Default::default()
        };
        assert_eq!(headline_badge(&product), BadgeVariant::Soft);
        assert_eq!(headline_badge(&Product::default()), BadgeVariant::Solid);
    }

    #[test]
    fn price_line_wording() {
        assert_eq!(price_line("$49.99"), "Starting at $49.99 per month");
    }
}
