// Landing page sections

mod bundle;
mod hero;
mod nav;
mod products;

pub use bundle::BundleSection;
pub use hero::HeroSection;
pub use nav::SiteNav;
pub use products::ProductGrid;
