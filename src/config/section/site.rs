//! `[site]` configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site origin, e.g. "https://example.com". Relative route URLs are
    /// resolved against it.
    pub hostname: Option<String>,
}
