use std::time::Duration;

use leptos::prelude::*;
use storefront::components::{ICON_SHOPPING_BAG, ICON_USER, Icon, NavDropdown};
use storefront::types::{BrandInfo, NavLink, NavMenu};

#[component]
pub fn SiteNav(
    brand: BrandInfo,
    menus: Vec<NavMenu>,
    links: Vec<NavLink>,
    close_delay: Duration,
) -> impl IntoView {
    view! {
        <nav class="site-nav">
            <div class="container site-nav-inner">
                <div class="site-nav-left">
                    <a href=brand.href class="brand">
                        <span class="brand-dot"></span>
                        <span class="brand-name">{brand.name}</span>
                    </a>
                    <div class="nav-links">
                        {menus.into_iter().map(|menu| {
                            view! {
                                <NavDropdown
                                    trigger=menu.trigger
                                    items=menu.items
                                    footer_label=menu.footer_label
                                    close_delay=close_delay
                                />
                            }
                        }).collect::<Vec<_>>()}
                        {links.into_iter().map(|link| {
                            view! { <a href=link.href class="nav-link">{link.label}</a> }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                // Account and cart are placeholders; no auth or checkout here.
                <div class="site-nav-right">
                    <button type="button" class="nav-icon" aria-label="Account">
                        <Icon path=ICON_USER />
                    </button>
                    <button type="button" class="nav-icon" aria-label="Cart">
                        <Icon path=ICON_SHOPPING_BAG />
                    </button>
                </div>
            </div>
        </nav>
    }
}
