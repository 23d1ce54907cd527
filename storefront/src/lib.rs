//! # storefront-leptos
//!
//! Leptos components for the Seed storefront landing page.
//!
//! The page itself is static: a hero banner, a grid of product cards and a
//! promo strip, all driven by [`SiteConfig`]. The one interactive piece is
//! the top navigation's hover menu, whose open/close timing is modelled as a
//! small state machine in [`hover`] and driven by a swappable timer from
//! [`scheduler`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use storefront::hover::HoverController;
//! use storefront::scheduler::ManualScheduler;
//!
//! let clock = ManualScheduler::new();
//! let menu = HoverController::new(clock.clone(), Duration::from_millis(100), |_open| {});
//!
//! menu.pointer_enter();
//! menu.pointer_leave();
//! clock.advance(Duration::from_millis(50));
//! assert!(menu.is_open());
//! clock.advance(Duration::from_millis(50));
//! assert!(!menu.is_open());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Page content data
//! - [`catalog`] - Built-in content
//! - [`config`] - `site.toml` loading and validation
//! - [`hover`] - Hover-intent state machine
//! - [`scheduler`] - Browser and manual timers
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod hover;
pub mod scheduler;
pub mod styles;
pub mod types;

pub use config::{HoverConfig, SiteConfig};
pub use error::ConfigError;
pub use types::DropdownItem;
