//! Spaces Upload Provider
//!
//! Storage provider for DigitalOcean Spaces (or any S3-compatible endpoint).
//! Given a file descriptor, `upload` normalizes the file identity to a hex
//! digest, stores the bytes under a deterministic key, and sets the file's
//! public URL; `delete` recomputes the same key and removes the object.
//!
//! # Key format
//!
//! Keys are `{hash}{ext}`, prefixed with `{directory}/` when a directory is
//! configured. Key derivation is centralized in the `keys` module so upload
//! and delete stay consistent.
//!
//! # Public URLs
//!
//! With a `cdn` base configured, URLs are rewritten through it (scheme forced
//! to https, path replaced with the key). Without one, the transport's
//! reported location is used, prefixed with `https://` when it lacks a
//! scheme.

#[cfg(feature = "storage-s3")]
pub mod factory;
pub mod keys;
pub mod provider;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "storage-s3")]
pub use factory::init;
pub use provider::SpacesProvider;
#[cfg(feature = "storage-s3")]
pub use s3::SpacesClient;
pub use spaces_core::{FileDescriptor, FilePayload, HashAlgorithm, PayloadStream, ProviderConfig};
pub use traits::{ObjectTransport, ProviderError, ProviderResult, PutOutcome};

/// Provider identifier the host registers this provider under.
pub const PROVIDER_ID: &str = "do";

/// Human-readable provider name for display.
pub const PROVIDER_NAME: &str = "Digital Ocean Spaces";
