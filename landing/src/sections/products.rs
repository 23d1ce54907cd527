use leptos::prelude::*;
use storefront::components::{Button, ButtonVariant, ProductCard};
use storefront::types::{Product, ShowcaseCopy};

#[component]
pub fn ProductGrid(showcase: ShowcaseCopy, products: Vec<Product>) -> impl IntoView {
    view! {
        <section id="products" class="products">
            <div class="container">
                <div class="products-header">
                    <div>
                        {showcase.headline.into_iter().map(|line| {
                            view! { <h2 class="products-title">{line}</h2> }
                        }).collect::<Vec<_>>()}
                    </div>
                    <div class="products-aside">
                        <p class="products-blurb">{showcase.blurb}</p>
                        <Button label=showcase.cta_label variant=ButtonVariant::Link />
                    </div>
                </div>
                <div class="product-grid">
                    {products.into_iter().map(|product| {
                        view! { <ProductCard product=product /> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
