//! Provider construction from host configuration.

use std::sync::Arc;

use spaces_core::ProviderConfig;

use crate::provider::SpacesProvider;
use crate::traits::ProviderResult;

/// Create a provider backed by the S3-compatible transport.
///
/// Validates the required configuration (endpoint and space) and builds the
/// transport client once; the returned provider reuses it for every call.
pub fn init(config: ProviderConfig) -> ProviderResult<SpacesProvider> {
    let client = crate::s3::SpacesClient::new(&config)?;
    Ok(SpacesProvider::new(config, Arc::new(client)))
}
