//! Site configuration.
//!
//! The landing page embeds a `site.toml` at build time. Every section is
//! optional; anything left out comes from [`crate::catalog`].

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::ConfigError;
use crate::hover::DEFAULT_CLOSE_DELAY;
use crate::scheduler::MAX_TIMER_DELAY;
use crate::types::{BrandInfo, BundleContent, HeroContent, NavLink, NavMenu, Product, ShowcaseCopy};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandInfo,
    pub hover: HoverConfig,
    pub hero: HeroContent,
    /// Hover menus, left to right.
    pub menus: Vec<NavMenu>,
    /// Plain links after the menus.
    pub links: Vec<NavLink>,
    pub showcase: ShowcaseCopy,
    pub products: Vec<Product>,
    pub bundle: BundleContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: catalog::brand(),
            hover: HoverConfig::default(),
            hero: catalog::hero(),
            menus: catalog::menus(),
            links: catalog::links(),
            showcase: catalog::showcase(),
            products: catalog::products(),
            bundle: catalog::bundle(),
        }
    }
}

/// Hover menu timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Grace period after the pointer leaves a menu, in milliseconds.
    pub close_delay_ms: u64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: DEFAULT_CLOSE_DELAY.as_millis() as u64,
        }
    }
}

impl HoverConfig {
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

impl SiteConfig {
    /// Parse and validate a `site.toml` document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_toml_str`](Self::from_toml_str), but logs the problem and
    /// returns the built-in site instead of failing.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[storefront][config] {e}; using built-in site");
                Self::default()
            }
        }
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hover.close_delay_ms == 0 {
            return Err(ConfigError::ZeroCloseDelay);
        }
        let max = MAX_TIMER_DELAY.as_millis() as u64;
        if self.hover.close_delay_ms > max {
            return Err(ConfigError::CloseDelayTooLong {
                value: self.hover.close_delay_ms,
                max,
            });
        }
        for (index, menu) in self.menus.iter().enumerate() {
            if menu.trigger.trim().is_empty() {
                return Err(ConfigError::EmptyTrigger { index });
            }
            let mut seen = HashSet::new();
            for item in &menu.items {
                if !seen.insert(item.id.as_str()) {
                    return Err(ConfigError::DuplicateItemId {
                        trigger: menu.trigger.clone(),
                        id: item.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
