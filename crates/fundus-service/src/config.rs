//! Service configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the clinic service.
///
/// All fields default sensibly, so an embedder can deserialize a partial
/// document or just use `ServiceConfig::default()`.
///
/// # Example (TOML)
///
/// ```toml
/// [service]
/// page_size = 20
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Records shown per page when the caller does not pick a page size.
    pub page_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}
