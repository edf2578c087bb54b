//! Configuration types for Strata bundle ordering.
//!
//! This module provides configuration structures that control how input
//! files are classified and how the final bundle is assembled. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining naming and bundle settings.
//! - [`NamingConfig`] - Controls how declaration documents are recognized.
//! - [`BundleConfig`] - Controls how ordered payload files are joined.
//!
//! # Example
//!
//! ```
//! # use strata::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.naming().deps_marker(), "deps");
//! ```

use serde::Deserialize;

/// Top-level application configuration combining naming and bundle settings.
///
/// Groups [`NamingConfig`] and [`BundleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Naming configuration section.
    #[serde(default)]
    naming: NamingConfig,

    /// Bundle assembly configuration section.
    #[serde(default)]
    bundle: BundleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified naming and bundle configurations.
    ///
    /// # Arguments
    ///
    /// * `naming` - Declaration-recognition settings.
    /// * `bundle` - Bundle assembly settings.
    pub fn new(naming: NamingConfig, bundle: BundleConfig) -> Self {
        Self { naming, bundle }
    }

    /// Returns the naming configuration.
    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    /// Returns the bundle configuration.
    pub fn bundle(&self) -> &BundleConfig {
        &self.bundle
    }
}

/// Declaration-recognition configuration.
///
/// A file named `<owner>.<marker>.yaml` (or `.yml`) is treated as the
/// dependency declaration of `<owner>` rather than as payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    /// Name suffix marking declaration documents.
    #[serde(default = "default_deps_marker")]
    deps_marker: String,
}

impl NamingConfig {
    /// Creates a new [`NamingConfig`] with the specified declaration marker.
    pub fn new(deps_marker: impl Into<String>) -> Self {
        Self {
            deps_marker: deps_marker.into(),
        }
    }

    /// Returns the declaration-document marker.
    pub fn deps_marker(&self) -> &str {
        &self.deps_marker
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            deps_marker: default_deps_marker(),
        }
    }
}

fn default_deps_marker() -> String {
    "deps".to_string()
}

/// Bundle assembly configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleConfig {
    /// Separator emitted between payload files in the assembled bundle.
    #[serde(default = "default_separator")]
    separator: String,
}

impl BundleConfig {
    /// Creates a new [`BundleConfig`] with the specified separator.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Returns the separator emitted between payload files.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> String {
    "\n".to_string()
}
