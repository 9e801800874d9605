//! Session configuration from environment variables.

use std::path::PathBuf;

use quotedesk_catalog::{Catalog, CatalogLoadError, PageSize};

/// Product list shipped with the binary, used when no catalog path is set.
pub const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

pub const ENV_CATALOG: &str = "QUOTEDESK_CATALOG";
pub const ENV_PAGE_SIZE: &str = "QUOTEDESK_PAGE_SIZE";
pub const ENV_PUBLIC_URL: &str = "QUOTEDESK_PUBLIC_URL";
pub const ENV_SHOW_IMAGES: &str = "QUOTEDESK_SHOW_IMAGES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Catalog JSON file; `None` uses [`BUNDLED_CATALOG`].
    pub catalog_path: Option<PathBuf>,
    /// Page size on start-up and after a reset.
    pub default_page_size: PageSize,
    /// Prefix for image URLs.
    pub public_url: String,
    pub show_images: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_page_size: PageSize::default(),
            public_url: String::new(),
            show_images: true,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values fall back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let catalog_path = lookup(ENV_CATALOG)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        if catalog_path.is_none() {
            tracing::info!("{ENV_CATALOG} not set; using bundled catalog");
        }

        let default_page_size = match lookup(ENV_PAGE_SIZE) {
            None => defaults.default_page_size,
            Some(raw) => raw.parse::<PageSize>().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "invalid {ENV_PAGE_SIZE}; using default");
                defaults.default_page_size
            }),
        };

        let show_images = match lookup(ENV_SHOW_IMAGES) {
            None => defaults.show_images,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "invalid {ENV_SHOW_IMAGES}; using default");
                defaults.show_images
            }),
        };

        Self {
            catalog_path,
            default_page_size,
            public_url: lookup(ENV_PUBLIC_URL).unwrap_or(defaults.public_url),
            show_images,
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog, CatalogLoadError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Catalog::from_json_str(BUNDLED_CATALOG),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> SessionConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SessionConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), SessionConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            (ENV_CATALOG, "/srv/catalog.json"),
            (ENV_PAGE_SIZE, "0"),
            (ENV_PUBLIC_URL, "https://cdn.example.com"),
            (ENV_SHOW_IMAGES, "off"),
        ]);
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(cfg.default_page_size, PageSize::Unlimited);
        assert_eq!(cfg.public_url, "https://cdn.example.com");
        assert!(!cfg.show_images);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[(ENV_PAGE_SIZE, "35"), (ENV_SHOW_IMAGES, "maybe"), (ENV_CATALOG, " ")]);
        assert_eq!(cfg.default_page_size, PageSize::Twenty);
        assert!(cfg.show_images);
        assert_eq!(cfg.catalog_path, None);
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = SessionConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 25);
    }
}
