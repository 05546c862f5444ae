//! Spaces Core Library
//!
//! This crate provides the domain types shared by the Spaces upload provider:
//! the provider configuration, the file descriptor passed in by the host, and
//! the hash algorithms used to normalize file identities. It performs no I/O.

pub mod config;
pub mod file;
pub mod hash;

// Re-export commonly used types
pub use config::ProviderConfig;
pub use file::{FileDescriptor, FilePayload, PayloadStream};
pub use hash::HashAlgorithm;
