//! Upload/delete orchestration.

use std::sync::Arc;

use bytes::Bytes;
use spaces_core::{FileDescriptor, FilePayload, ProviderConfig};
use tokio::io::AsyncReadExt;

use crate::keys;
use crate::traits::{ObjectTransport, ProviderError, ProviderResult};

/// The Spaces upload provider
///
/// Holds the immutable configuration and a transport handle, and nothing
/// else: every call computes its own key from its own descriptor, so
/// concurrent uploads and deletes against one provider need no coordination.
pub struct SpacesProvider {
    config: ProviderConfig,
    transport: Arc<dyn ObjectTransport>,
}

impl SpacesProvider {
    /// Create a provider over an already-built transport.
    pub fn new(config: ProviderConfig, transport: Arc<dyn ObjectTransport>) -> Self {
        SpacesProvider { config, transport }
    }

    fn object_key(&self, file: &FileDescriptor) -> String {
        keys::object_key(&file.hash, &file.ext, self.config.directory.as_deref())
    }

    fn validate_identity(file: &FileDescriptor) -> ProviderResult<()> {
        if file.hash.is_empty() {
            return Err(ProviderError::InvalidFile("file hash is empty".to_string()));
        }
        if file.ext.is_empty() {
            return Err(ProviderError::InvalidFile(
                "file extension is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Store the file and set `file.url` to its public URL.
    ///
    /// The identity seed in `file.hash` is always replaced with
    /// `hex(algo(hash))` before the key is computed, even when it already
    /// looks like a digest; it does not round-trip. If the transport call
    /// fails the hash mutation is not rolled back, and the stored object
    /// state is unknown to the caller. A retried upload with the same
    /// pre-hash seed lands on the same key.
    pub async fn upload(&self, file: &mut FileDescriptor) -> ProviderResult<()> {
        Self::validate_identity(file)?;
        let payload = file.take_payload().ok_or_else(|| {
            ProviderError::InvalidFile("file has no buffer or stream payload".to_string())
        })?;

        file.hash = self.config.hash.digest(&file.hash);
        let key = self.object_key(file);

        let body = match payload {
            FilePayload::Buffer(bytes) => bytes,
            FilePayload::Stream(mut reader) => {
                let mut buffered = Vec::new();
                reader.read_to_end(&mut buffered).await?;
                Bytes::from(buffered)
            }
        };

        let outcome = self.transport.put(&key, body, &file.mime).await?;

        file.url = Some(keys::public_url(
            &outcome.location,
            &outcome.key,
            self.config.cdn.as_deref(),
        )?);

        Ok(())
    }

    /// Remove the object stored for this descriptor.
    ///
    /// The key is recomputed from whatever `file.hash` currently holds,
    /// normally the post-upload digest, so it targets exactly the key the
    /// upload used. Transport failures, including not-found, propagate
    /// unmodified.
    pub async fn delete(&self, file: &FileDescriptor) -> ProviderResult<()> {
        Self::validate_identity(file)?;
        self.transport.delete(&self.object_key(file)).await
    }
}
