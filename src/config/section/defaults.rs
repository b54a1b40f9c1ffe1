//! `[defaults]` configuration.
//!
//! Applied to routes that leave the field unset.

use crate::route::ChangeFrequency;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSectionConfig {
    pub changefreq: Option<ChangeFrequency>,
    pub priority: Option<f64>,
    /// W3C datetime.
    pub lastmod: Option<String>,
}
