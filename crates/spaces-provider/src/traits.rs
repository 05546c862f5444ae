//! Object transport abstraction
//!
//! This module defines the narrow capability the provider needs from an
//! object store (put and delete), plus the provider error types. The provider
//! core is written against this trait so it can be exercised with a fake
//! transport, without any storage SDK in the loop.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Provider operation errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid file descriptor: {0}")]
    InvalidFile(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Outcome of a successful put
///
/// `location` is the store's own description of where the object landed; the
/// URL policy uses it as the basis for the public URL when no CDN is
/// configured. Some stores report it without a scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOutcome {
    pub key: String,
    pub location: String,
}

/// Narrow object-store capability consumed by the provider
///
/// The transport owns credentials, the destination bucket, network behavior,
/// and retry semantics. Failures (including delete of a missing object) are
/// surfaced as-is; the provider neither retries nor masks them.
#[async_trait]
pub trait ObjectTransport: Send + Sync {
    /// Store `body` under `key` with the given content type and return the
    /// resulting location descriptor.
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> ProviderResult<PutOutcome>;

    /// Remove the object stored under `key`.
    async fn delete(&self, key: &str) -> ProviderResult<()>;
}
