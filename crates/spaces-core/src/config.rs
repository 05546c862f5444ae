//! Provider configuration
//!
//! The host hands the provider one configuration blob at construction time.
//! It is immutable for the lifetime of the provider.

use serde::Deserialize;

use crate::hash::HashAlgorithm;

/// Configuration for the Spaces upload provider
///
/// Recognized options mirror the host's provider-configuration surface:
/// `endpoint`, `key`/`secret` credentials, `space` (the destination bucket),
/// an optional `directory` key prefix, an optional `cdn` base URL, and an
/// optional `hash` algorithm name (default `md5`).
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderConfig {
    /// Storage-service host, e.g. "nyc3.digitaloceanspaces.com".
    /// A scheme is optional; the transport always connects over https.
    pub endpoint: String,
    /// Access key id, opaque to everything but the transport.
    pub key: String,
    /// Secret access key, opaque to everything but the transport.
    pub secret: String,
    /// Destination space (bucket) name.
    pub space: String,
    /// Optional key prefix. When absent, objects land at the space root.
    #[serde(default)]
    pub directory: Option<String>,
    /// Optional CDN base URL. When set, all public URLs are rewritten
    /// through it instead of the transport's returned location.
    #[serde(default)]
    pub cdn: Option<String>,
    /// Algorithm used to normalize file identities before key computation.
    #[serde(default)]
    pub hash: HashAlgorithm,
}
