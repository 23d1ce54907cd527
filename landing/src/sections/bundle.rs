use leptos::prelude::*;
use storefront::components::Badge;
use storefront::types::{BundleContent, image_or_placeholder};

#[component]
pub fn BundleSection(bundle: BundleContent) -> impl IntoView {
    let image = image_or_placeholder(&bundle.image).to_string();
    view! {
        <section class="bundle">
            <div class="container bundle-inner">
                <div class="bundle-copy">
                    <Badge label=bundle.badge />
                    <h2 class="bundle-title">{bundle.headline}</h2>
                </div>
                <div class="bundle-visual">
                    <div class="bundle-image">
                        <img src=image alt=bundle.image_alt />
                    </div>
                </div>
            </div>
        </section>
    }
}
