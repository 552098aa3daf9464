//! ==============================================================================
//! lib.rs - shared types for the static site
//! ==============================================================================
//!
//! purpose:
//!     defines the route strings, navigation entries and site metadata
//!     used by the site front end. keeping them out of the leptos crate
//!     lets them be tested natively without a renderer.
//!
//! relationships:
//!     - used by: site (Header, Layout, App)
//!     - used by: site::config (SiteMetadata loading)
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==============================================================================
// routes
// ==============================================================================

/// site root
pub const HOME_ROUTE: &str = "/";
/// blog index
pub const BLOG_ROUTE: &str = "/blog";
/// notes index
pub const NOTES_ROUTE: &str = "/notes";

// ==============================================================================
// navigation
// ==============================================================================

/// a fixed link in the header navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// visible link text
    pub label: &'static str,
    /// route string the host resolves to a page
    pub to: &'static str,
}

/// header navigation, in display order
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink { label: "Blog", to: BLOG_ROUTE },
    NavLink { label: "Notes", to: NOTES_ROUTE },
];

// ==============================================================================
// site metadata
// ==============================================================================

/// site-wide metadata, loaded from `site.json`
///
/// every field is optional in the json and falls back to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
}

/// errors raised while reading site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SiteMetadata {
    /// parse metadata from a json document
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

// ==============================================================================
// tests
// ==============================================================================
