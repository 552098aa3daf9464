//! ==============================================================================
//! config.rs - site metadata loading
//! ==============================================================================
//!
//! site.json is embedded at build time. a broken file never stops the page
//! from rendering: we warn and fall back to empty metadata.

use leptos::logging::warn;
use shared::SiteMetadata;

const SITE_JSON: &str = include_str!("../site.json");

/// load the embedded site metadata
pub fn load_site_metadata() -> SiteMetadata {
    metadata_or_default(SITE_JSON)
}

fn metadata_or_default(raw: &str) -> SiteMetadata {
    match SiteMetadata::from_json(raw) {
        Ok(meta) => meta,
        Err(e) => {
            warn!("{e}; using default site metadata");
            SiteMetadata::default()
        }
    }
}
