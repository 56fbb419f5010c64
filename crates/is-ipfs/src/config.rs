//! Configuration for the validator.

use serde::{Deserialize, Serialize};

/// How strictly IPNS identifiers are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpnsPolicy {
    /// Any non-empty segment is accepted as an IPNS name.
    #[default]
    Permissive,
    /// The name must be a CID (libp2p key) or a DNS name.
    Strict,
}

/// Configuration for the [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Policy applied to IPNS names in paths, URLs and subdomains
    pub ipns_policy: IpnsPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Config {
    pub(crate) const DEFAULT: Config = Config {
        ipns_policy: IpnsPolicy::Permissive,
    };

    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the IPNS policy
    pub fn ipns_policy(mut self, policy: IpnsPolicy) -> Self {
        self.ipns_policy = policy;
        self
    }
}
