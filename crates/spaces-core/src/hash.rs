//! Hash algorithms for file identity normalization.
//!
//! Before an object is stored, the caller-supplied hash seed is replaced with
//! `hex(algo(seed))` so keys are always built from a fixed-width hex digest.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;

/// Hash algorithms supported for identity normalization
///
/// The provider defaults to MD5, matching the common expectation that storage
/// keys are 32-character hex digests. The digest is used as an identifier
/// only, never as a security primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// Digest the input and return the lowercase hex encoding.
    pub fn digest(&self, input: &str) -> String {
        match self {
            HashAlgorithm::Md5 => hex::encode(Md5::digest(input.as_bytes())),
            HashAlgorithm::Sha1 => hex::encode(Sha1::digest(input.as_bytes())),
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            _ => Err(anyhow::anyhow!("Invalid hash algorithm: {}", s)),
        }
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha1 => write!(f, "sha1"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
        }
    }
}
