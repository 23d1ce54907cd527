// Seed storefront landing page, Leptos 0.8 client-side rendered

mod sections;

use leptos::prelude::*;
use sections::*;
use storefront::SiteConfig;
use storefront::styles::STOREFRONT_CSS;

/// Page content, baked in at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    // Errs only when a logger is already installed.
    console_log::init_with_level(log::Level::Info).ok();

    let site = SiteConfig::load_or_default(SITE_TOML);
    log::info!(
        "[storefront][landing] {} menus, {} products",
        site.menus.len(),
        site.products.len()
    );
    leptos::mount::mount_to_body(move || view! { <App site=site /> });
}

#[component]
fn App(site: SiteConfig) -> impl IntoView {
    let close_delay = site.hover.close_delay();
    view! {
        <style>{STOREFRONT_CSS}</style>
        <SiteNav brand=site.brand menus=site.menus links=site.links close_delay=close_delay />
        <main class="storefront">
            <HeroSection hero=site.hero />
            <ProductGrid showcase=site.showcase products=site.products />
            <BundleSection bundle=site.bundle />
        </main>
    }
}
