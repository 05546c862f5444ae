//! File descriptor passed between the host and the provider.
//!
//! The host owns the descriptor; the provider mutates it in place during an
//! upload (the identity hash is normalized and the public URL is set).

use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use tokio::io::AsyncRead;

/// Boxed async reader carrying a streamed file payload.
pub type PayloadStream = Pin<Box<dyn AsyncRead + Send + Unpin>>;

/// File payload, either fully buffered bytes or an async byte stream.
pub enum FilePayload {
    Buffer(Bytes),
    Stream(PayloadStream),
}

impl fmt::Debug for FilePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilePayload::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            FilePayload::Stream(_) => f.debug_tuple("Stream").finish(),
        }
    }
}

/// One file to store or remove
///
/// `hash` is the identity seed. `upload` replaces it with the hex digest of
/// the configured hash algorithm; `delete` uses whatever `hash` currently
/// holds, so a descriptor that went through `upload` deletes the same key.
#[derive(Debug)]
pub struct FileDescriptor {
    /// Identity seed before upload, hex digest after.
    pub hash: String,
    /// File extension including the leading separator, e.g. ".jpg".
    pub ext: String,
    /// Content type handed to the transport.
    pub mime: String,
    /// Public URL, set after a successful upload.
    pub url: Option<String>,
    payload: Option<FilePayload>,
}

impl FileDescriptor {
    /// Build a descriptor around an in-memory payload.
    pub fn from_buffer(
        hash: impl Into<String>,
        ext: impl Into<String>,
        mime: impl Into<String>,
        buffer: impl Into<Bytes>,
    ) -> Self {
        FileDescriptor {
            hash: hash.into(),
            ext: ext.into(),
            mime: mime.into(),
            url: None,
            payload: Some(FilePayload::Buffer(buffer.into())),
        }
    }

    /// Build a descriptor around a streamed payload.
    pub fn from_stream(
        hash: impl Into<String>,
        ext: impl Into<String>,
        mime: impl Into<String>,
        stream: PayloadStream,
    ) -> Self {
        FileDescriptor {
            hash: hash.into(),
            ext: ext.into(),
            mime: mime.into(),
            url: None,
            payload: Some(FilePayload::Stream(stream)),
        }
    }

    /// Take the payload out of the descriptor. A payload can be consumed
    /// exactly once; a second call returns `None`.
    pub fn take_payload(&mut self) -> Option<FilePayload> {
        self.payload.take()
    }

    /// Whether the descriptor still carries an unconsumed payload.
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_consumed_once() {
        let mut file = FileDescriptor::from_buffer("abc", ".jpg", "image/jpeg", &b"data"[..]);
        assert!(file.has_payload());
        assert!(matches!(
            file.take_payload(),
            Some(FilePayload::Buffer(bytes)) if bytes.as_ref() == b"data"
        ));
        assert!(!file.has_payload());
        assert!(file.take_payload().is_none());
    }

    #[test]
    fn test_stream_descriptor() {
        let cursor = std::io::Cursor::new(b"stream data".to_vec());
        let mut file =
            FileDescriptor::from_stream("abc", ".txt", "text/plain", Box::pin(cursor));
        assert!(matches!(file.take_payload(), Some(FilePayload::Stream(_))));
    }
}
