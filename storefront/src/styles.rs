//! CSS styles for the storefront page.
//!
//! The landing binary injects [`STOREFRONT_CSS`] once, in a `<style>` tag at
//! the top of the app. Extend it the same way:
//!
//! ```rust
//! use storefront::styles::STOREFRONT_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", STOREFRONT_CSS, my_css);
//! ```
//!
//! # Features
//!
//! - Sage/forest palette with frosted-glass surfaces
//! - Hover panel positioning and fade-in
//! - Responsive product grid (1 / 2 / 4 columns)

/// Complete CSS for the storefront page.
pub const STOREFRONT_CSS: &str = r#"
:root {
    --sage-bg: #e8ebe8;
    --forest: #2d4a3a;
    --forest-deep: #1a3a2a;
    --cream: #f5f3ed;
    --panel: rgba(200, 198, 190, 0.9);
    --lime: #c4d96f;
    --mint: #d4e5c7;
    --card: rgba(255, 255, 255, 0.08);
    --card-hover: rgba(255, 255, 255, 0.14);
    --border: rgba(255, 255, 255, 0.18);
    --text: #f4f4f0;
    --text-muted: rgba(244, 244, 240, 0.7);
    --radius-lg: 24px;
    --radius-md: 16px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    background: var(--sage-bg);
    color: var(--forest);
}

a { color: inherit; text-decoration: none; }

.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }

/* ---------------------------------------------------------------- nav */

.site-nav {
    position: fixed;
    top: 0; left: 0; right: 0;
    z-index: 50;
    backdrop-filter: blur(12px);
    background: rgba(255, 255, 255, 0.3);
    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
}

.site-nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 0;
}

.site-nav-left { display: flex; align-items: center; gap: 2rem; }
.site-nav-right { display: flex; align-items: center; gap: 1rem; }

.brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; }
.brand-dot { width: 8px; height: 8px; border-radius: 9999px; background: var(--forest); }

.nav-links { display: none; align-items: center; gap: 1.5rem; font-size: 0.875rem; }
@media (min-width: 768px) { .nav-links { display: flex; } }

.nav-link { transition: opacity 0.2s; }
.nav-link:hover { opacity: 0.7; }

.nav-icon { background: none; border: 0; padding: 0; color: var(--forest); cursor: default; }

/* ----------------------------------------------------------- dropdown */

.nav-dropdown { position: relative; }

.dropdown-panel {
    position: absolute;
    top: 100%;
    left: 0;
    margin-top: 1rem;
    width: 300px;
    padding: 1.5rem;
    border-radius: var(--radius-md);
    background: var(--panel);
    backdrop-filter: blur(24px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    animation: dropdown-in 0.2s ease-out;
}

@keyframes dropdown-in {
    from { opacity: 0; transform: translateY(-0.5rem); }
    to { opacity: 1; transform: translateY(0); }
}

.dropdown-items { display: flex; flex-direction: column; gap: 1rem; }

.dropdown-item { display: flex; align-items: center; gap: 0.75rem; transition: filter 0.2s; }
.dropdown-item:hover { filter: brightness(1.1); }

.dropdown-thumb {
    width: 48px; height: 48px;
    flex-shrink: 0;
    overflow: hidden;
    border-radius: 8px;
    background: rgba(255, 255, 255, 0.2);
}
.dropdown-thumb img { width: 100%; height: 100%; object-fit: cover; }

.dropdown-meta { flex: 1; min-width: 0; }
.dropdown-meta-line { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.125rem; }
.dropdown-code { font-size: 0.75rem; font-weight: 300; color: rgba(255, 255, 255, 0.7); }
.dropdown-name { margin: 0; font-size: 0.875rem; font-weight: 500; color: #fff; }

.dropdown-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-top: 1.5rem;
    padding-top: 1rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    font-size: 0.875rem;
    color: #fff;
}
.dropdown-footer:hover { opacity: 0.7; }
.dropdown-footer-caret { transition: transform 0.2s; }
.dropdown-footer:hover .dropdown-footer-caret { transform: translateX(4px); }

/* -------------------------------------------------------------- badges */

.badge {
    display: inline-flex;
    align-items: center;
    border-radius: 9999px;
    padding: 0.125rem 0.625rem;
    font-size: 0.75rem;
    font-weight: 500;
    border: 1px solid transparent;
}
.badge-solid { background: var(--mint); color: var(--forest); }
.badge-soft { background: rgba(196, 217, 111, 0.2); color: var(--text); backdrop-filter: blur(4px); }
.badge-outline { border-color: var(--border); color: var(--text-muted); }
.badge-promo { background: var(--lime); color: var(--forest-deep); font-size: 10px; padding: 0 0.5rem; height: 20px; }

/* ------------------------------------------------------------- buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 9999px;
    padding: 0.625rem 1.25rem;
    font: inherit;
    font-size: 0.875rem;
    cursor: pointer;
    border: 1px solid transparent;
    transition: all 0.2s;
}
.btn-block { width: 100%; margin-bottom: 0.75rem; }
.btn-primary { background: var(--lime); color: var(--forest-deep); }
.btn-primary:hover { filter: brightness(0.95); }
.btn-outline { background: transparent; border-color: var(--border); color: var(--text); }
.btn-outline:hover { background: rgba(255, 255, 255, 0.08); }
.btn-glass {
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(12px);
    border-color: rgba(45, 74, 58, 0.2);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    padding: 1.5rem 2rem;
    font-size: 1rem;
    color: var(--forest);
}
.btn-glass:hover { border-color: rgba(45, 74, 58, 0.4); background: rgba(255, 255, 255, 0.9); }
.btn-link { background: none; padding: 0; color: #fff; }
.btn-link:hover { color: rgba(255, 255, 255, 0.8); }

/* ---------------------------------------------------------------- hero */

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
    padding-top: 4rem;
    background: linear-gradient(135deg, var(--sage-bg), #dfe4df 50%, #d5dbd5);
}
.hero-image {
    position: absolute;
    right: 0; top: 50%;
    transform: translateY(-50%);
    width: 60%; height: 80%;
    opacity: 0.9;
}
.hero-image img { width: 100%; height: 100%; object-fit: contain; }
.hero-content { position: relative; z-index: 10; padding: 5rem 0; max-width: 42rem; }
.hero-title { font-size: 3rem; font-weight: 300; line-height: 1.15; margin: 0 0 1.5rem; }
@media (min-width: 768px) { .hero-title { font-size: 4.5rem; } }
.hero-description { font-size: 1.125rem; max-width: 32rem; margin: 0 0 2rem; opacity: 0.75; }
.hero-pause {
    position: absolute;
    bottom: 2rem; right: 2rem;
    width: 48px; height: 48px;
    border-radius: 9999px;
    display: flex; align-items: center; justify-content: center; gap: 4px;
    background: rgba(255, 255, 255, 0.4);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(45, 74, 58, 0.2);
}
.hero-pause-bar { width: 4px; height: 12px; border-radius: 9999px; background: rgba(45, 74, 58, 0.6); }

/* ------------------------------------------------------------ products */

.products { padding: 5rem 1.5rem; background: var(--forest); color: var(--text); }
.products-header {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    justify-content: space-between;
    margin-bottom: 3rem;
}
@media (min-width: 768px) { .products-header { flex-direction: row; align-items: flex-end; } }
.products-title { font-size: 2.25rem; font-weight: 300; margin: 0; }
.products-aside { display: flex; flex-direction: column; gap: 1rem; }
.products-blurb { font-size: 0.875rem; max-width: 28rem; color: var(--text-muted); margin: 0; }

.product-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
@media (min-width: 768px) { .product-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .product-grid { grid-template-columns: repeat(4, 1fr); } }

.product-card {
    position: relative;
    padding: 1.5rem;
    border-radius: var(--radius-lg);
    background: var(--card);
    border: 1px solid var(--border);
    backdrop-filter: blur(12px);
    transition: all 0.3s;
}
.product-card:hover { background: var(--card-hover); transform: scale(1.02); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2); }
.product-card-glow {
    position: absolute; inset: 0;
    border-radius: var(--radius-lg);
    background: linear-gradient(135deg, rgba(196, 217, 111, 0.05), transparent);
    opacity: 0;
    transition: opacity 0.3s;
}
.product-card:hover .product-card-glow { opacity: 1; }
.product-card-body { position: relative; z-index: 10; }
.product-badges { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.product-image { aspect-ratio: 1 / 1; margin-bottom: 1.5rem; }
.product-image-well { width: 100%; height: 100%; border-radius: var(--radius-md); background: rgba(255, 255, 255, 0.06); }
.product-name { font-size: 1.25rem; font-weight: 300; margin: 0 0 1rem; }
.product-price { font-size: 0.875rem; text-align: center; color: var(--text-muted); margin: 0; }

/* -------------------------------------------------------------- bundle */

.bundle { padding: 5rem 1.5rem; background: var(--cream); }
.bundle-inner { display: flex; flex-direction: column; gap: 3rem; align-items: center; }
@media (min-width: 768px) { .bundle-inner { flex-direction: row; } }
.bundle-copy, .bundle-visual { flex: 1; }
.bundle-title { font-size: 2.25rem; font-weight: 300; margin: 1rem 0 1.5rem; }
.bundle-image { width: 100%; max-width: 28rem; aspect-ratio: 1 / 1; margin: 0 auto; }
.bundle-image img { width: 100%; height: 100%; object-fit: contain; }
"#;

