//! S3-compatible transport for DigitalOcean Spaces.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use bytes::Bytes;
use spaces_core::ProviderConfig;

use crate::traits::{ObjectTransport, ProviderError, ProviderResult, PutOutcome};

// Stored objects are content-addressed, so they never change under a key.
const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

// Spaces ignores the region name but the SDK requires one.
const DEFAULT_REGION: &str = "us-east-1";

/// Object transport backed by an S3-compatible endpoint
///
/// Every object is stored with a `public-read` ACL and a long-lived immutable
/// cache-control header. Retry behavior is the SDK's own; the transport adds
/// none of its own.
#[derive(Clone)]
pub struct SpacesClient {
    client: Client,
    bucket: String,
    endpoint: String,
}

impl SpacesClient {
    /// Create a new SpacesClient from the provider configuration
    ///
    /// The endpoint may be configured with or without a scheme (e.g.
    /// "nyc3.digitaloceanspaces.com"); the SDK client always connects over
    /// https, while put locations are reported against the endpoint exactly
    /// as configured.
    pub fn new(config: &ProviderConfig) -> ProviderResult<Self> {
        if config.endpoint.is_empty() {
            return Err(ProviderError::ConfigError(
                "endpoint not configured".to_string(),
            ));
        }
        if config.space.is_empty() {
            return Err(ProviderError::ConfigError(
                "space (bucket) not configured".to_string(),
            ));
        }

        let endpoint_url = if config.endpoint.contains("://") {
            config.endpoint.clone()
        } else {
            format!("https://{}", config.endpoint)
        };

        let credentials = Credentials::new(
            config.key.clone(),
            config.secret.clone(),
            None,
            None,
            "spaces-provider",
        );

        // Path-style addressing is required by most S3-compatible providers.
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(endpoint_url)
            .region(Region::new(DEFAULT_REGION))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Ok(SpacesClient {
            client: Client::from_conf(s3_config),
            bucket: config.space.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Location reported for a stored key, path-style on the configured
    /// endpoint. Carries a scheme only if the endpoint was configured with
    /// one; the URL policy normalizes scheme-less locations.
    fn location(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }
}

#[async_trait]
impl ObjectTransport for SpacesClient {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> ProviderResult<PutOutcome> {
        let size = body.len() as u64;
        let start = std::time::Instant::now();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .cache_control(CACHE_CONTROL)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Spaces upload failed"
                );
                ProviderError::UploadFailed(e.to_string())
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Spaces upload successful"
        );

        Ok(PutOutcome {
            key: key.to_string(),
            location: self.location(key),
        })
    }

    async fn delete(&self, key: &str) -> ProviderResult<()> {
        let start = std::time::Instant::now();

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Spaces delete failed"
                );
                ProviderError::DeleteFailed(e.to_string())
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Spaces delete successful"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spaces_core::HashAlgorithm;

    fn config(endpoint: &str) -> ProviderConfig {
        ProviderConfig {
            endpoint: endpoint.to_string(),
            key: "AKIA".to_string(),
            secret: "s3cr3t".to_string(),
            space: "assets".to_string(),
            directory: None,
            cdn: None,
            hash: HashAlgorithm::Md5,
        }
    }

    #[test]
    fn test_location_keeps_endpoint_as_configured() {
        let client = SpacesClient::new(&config("nyc3.digitaloceanspaces.com")).unwrap();
        assert_eq!(
            client.location("uploads/abc.jpg"),
            "nyc3.digitaloceanspaces.com/assets/uploads/abc.jpg"
        );

        let client = SpacesClient::new(&config("https://nyc3.digitaloceanspaces.com/")).unwrap();
        assert_eq!(
            client.location("abc.jpg"),
            "https://nyc3.digitaloceanspaces.com/assets/abc.jpg"
        );
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let result = SpacesClient::new(&config(""));
        assert!(matches!(result, Err(ProviderError::ConfigError(_))));
    }

    #[test]
    fn test_empty_space_rejected() {
        let mut config = config("nyc3.digitaloceanspaces.com");
        config.space = String::new();
        let result = SpacesClient::new(&config);
        assert!(matches!(result, Err(ProviderError::ConfigError(_))));
    }
}
