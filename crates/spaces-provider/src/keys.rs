//! Key and public URL derivation.
//!
//! Key format: `{directory}/{hash}{ext}` when a directory prefix is
//! configured, `{hash}{ext}` otherwise. Both `upload` and `delete` go through
//! this module so the two always agree on an object's key.
//!
//! Public URLs follow one of two mutually exclusive policies:
//!
//! - **CDN**: the configured CDN base is parsed, its scheme forced to https
//!   and its path replaced with the key. Host, port and query of the base
//!   carry over unchanged.
//! - **Direct**: the location reported by the transport is used as-is when it
//!   already carries a URI scheme, and prefixed with `https://` when it does
//!   not (some stores report bare host/path locations).

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::traits::{ProviderError, ProviderResult};

// Matches a leading URI scheme like "http://" or "https://".
static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w*://").expect("scheme pattern is valid"));

/// Compute the storage key for a file identity.
///
/// Pure and total: calling it with the same inputs always yields the same
/// key. No escaping is applied; the hash is expected to be a hex digest and
/// the extension to include its leading separator.
pub fn object_key(hash: &str, ext: &str, directory: Option<&str>) -> String {
    let filename = format!("{}{}", hash, ext);
    match directory {
        Some(dir) if !dir.is_empty() => format!("{}/{}", dir, filename),
        _ => filename,
    }
}

/// Derive the public URL for a stored object.
///
/// With a CDN base configured, the base wins regardless of the transport
/// location. A malformed CDN base is a configuration error and fails the
/// call; it never silently falls back to the direct policy.
pub fn public_url(location: &str, key: &str, cdn: Option<&str>) -> ProviderResult<String> {
    let Some(cdn) = cdn.filter(|base| !base.is_empty()) else {
        if URL_SCHEME.is_match(location) {
            return Ok(location.to_string());
        }
        return Ok(format!("https://{}", location));
    };

    let mut base = Url::parse(cdn)
        .map_err(|e| ProviderError::ConfigError(format!("Invalid CDN base URL {}: {}", cdn, e)))?;
    base.set_scheme("https")
        .map_err(|()| ProviderError::ConfigError(format!("CDN base URL {} cannot use https", cdn)))?;
    base.set_path(key);

    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_without_directory() {
        assert_eq!(object_key("abc123", ".jpg", None), "abc123.jpg");
        assert_eq!(object_key("abc123", ".jpg", Some("")), "abc123.jpg");
    }

    #[test]
    fn test_key_with_directory() {
        assert_eq!(
            object_key("abc123", ".jpg", Some("uploads")),
            "uploads/abc123.jpg"
        );
    }

    #[test]
    fn test_key_is_deterministic() {
        let first = object_key("deadbeef", ".png", Some("media"));
        let second = object_key("deadbeef", ".png", Some("media"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_direct_policy_keeps_schemed_location() {
        let url = public_url("https://host/path", "k.jpg", None).unwrap();
        assert_eq!(url, "https://host/path");

        let url = public_url("http://host/path", "k.jpg", None).unwrap();
        assert_eq!(url, "http://host/path");
    }

    #[test]
    fn test_direct_policy_prepends_https() {
        let url = public_url("host/path", "k.jpg", None).unwrap();
        assert_eq!(url, "https://host/path");
    }

    #[test]
    fn test_cdn_policy_overrides_location() {
        let url = public_url(
            "nyc3.digitaloceanspaces.com/space/uploads/abc.jpg",
            "uploads/abc.jpg",
            Some("https://cdn.example.com"),
        )
        .unwrap();
        assert_eq!(url, "https://cdn.example.com/uploads/abc.jpg");
    }

    #[test]
    fn test_cdn_policy_forces_https() {
        let url = public_url("anything", "abc.jpg", Some("http://cdn.example.com")).unwrap();
        assert_eq!(url, "https://cdn.example.com/abc.jpg");
    }

    #[test]
    fn test_cdn_policy_keeps_host_and_port() {
        let url = public_url("anything", "abc.jpg", Some("https://cdn.example.com:8443")).unwrap();
        assert_eq!(url, "https://cdn.example.com:8443/abc.jpg");
    }

    #[test]
    fn test_cdn_policy_replaces_existing_path() {
        let url = public_url("anything", "uploads/abc.jpg", Some("https://cdn.example.com/old"))
            .unwrap();
        assert_eq!(url, "https://cdn.example.com/uploads/abc.jpg");
    }

    #[test]
    fn test_malformed_cdn_base_is_config_error() {
        let result = public_url("host/path", "k.jpg", Some("not a url"));
        assert!(matches!(result, Err(ProviderError::ConfigError(_))));
    }

    #[test]
    fn test_empty_cdn_base_uses_direct_policy() {
        let url = public_url("host/path", "k.jpg", Some("")).unwrap();
        assert_eq!(url, "https://host/path");
    }
}
