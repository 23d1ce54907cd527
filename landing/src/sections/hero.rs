use leptos::prelude::*;
use storefront::components::{Button, ButtonVariant};
use storefront::types::{HeroContent, image_or_placeholder};

#[component]
pub fn HeroSection(hero: HeroContent) -> impl IntoView {
    let image = image_or_placeholder(&hero.image).to_string();
    view! {
        <section class="hero">
            <div class="hero-image">
                <img src=image alt=hero.image_alt />
            </div>
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">{hero.title}</h1>
                    <p class="hero-description">{hero.description}</p>
                    <Button label=hero.cta_label variant=ButtonVariant::Glass />
                </div>
            </div>
            <PauseButton />
        </section>
    }
}

// Decorative; there is no carousel to pause.
#[component]
fn PauseButton() -> impl IntoView {
    view! {
        <button type="button" class="hero-pause" aria-label="Pause">
            <span class="hero-pause-bar"></span>
            <span class="hero-pause-bar"></span>
        </button>
    }
}
