//! The predicates, bound to a CID parser and a [`Config`].

use crate::config::{Config, IpnsPolicy};
use crate::gateway;
use crate::parser::{self, CidParser, MultibaseCidParser};
use crate::path::{self, Namespace};
use crate::value::Value;
use cid::multibase::Base;
use tracing::{debug, trace};

/// Classifies values as CIDs, content paths and gateway URLs.
///
/// Every predicate is a pure function of its input. Anything that is not a
/// string is rejected before any parsing happens; the only exception is
/// [`Validator::is_cid`], which accepts an already parsed CID.
///
/// ```
/// use is_ipfs::Validator;
///
/// let validator = Validator::new();
/// assert!(validator.ipfs_path("/ipfs/QmYHNYAaYK5hm3ZhZFx5W9H6xydKDGimjdgJMrMSdnctEm/a.txt"));
/// assert!(!validator.ipfs_path("/ipfs/js-ipfs/blob/master/README.md"));
/// assert!(!validator.ipfs_path(42i64));
/// ```
#[derive(Debug, Clone)]
pub struct Validator<P = MultibaseCidParser> {
    parser: P,
    config: Config,
}

impl Validator {
    pub(crate) const DEFAULT: Validator = Validator {
        parser: MultibaseCidParser,
        config: Config::DEFAULT,
    };

    /// Create a validator with the default parser and configuration.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Create a validator with the default parser and the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self::with_parser(MultibaseCidParser, config)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CidParser> Validator<P> {
    /// Create a validator around a custom CID parser.
    pub fn with_parser(parser: P, config: Config) -> Self {
        if config != Config::default() {
            debug!(?config, "validator configured");
        }
        Self { parser, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether `value` is a content identifier.
    pub fn is_cid<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let value: Value<'a> = value.into();
        match value {
            Value::Str(s) => self.cid_str(s),
            Value::Cid(_) => true,
            other => reject(other),
        }
    }

    /// Whether `value` is `/ipfs/<cid>` optionally followed by a subpath,
    /// query or fragment.
    pub fn ipfs_path<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.content_path(s, Some(Namespace::Ipfs))
    }

    /// Whether `value` is `/ipns/<name>` optionally followed by a subpath,
    /// query or fragment.
    pub fn ipns_path<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.content_path(s, Some(Namespace::Ipns))
    }

    /// Whether `value` is an IPFS or an IPNS path.
    pub fn path<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.content_path(s, None)
    }

    /// Whether `value` is `<cid>/` or `<cid>/<subpath>`, without a namespace
    /// prefix.
    pub fn cid_path<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        path::split_relative(s).is_some_and(|(identifier, _)| self.cid_str(identifier))
    }

    /// Whether `value` is a URL whose path is a content path, or is itself a
    /// content path.
    pub fn url_or_path<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        match gateway::parse_absolute(s) {
            Some(url) => self.content_path(url.path(), None),
            None => self.content_path(s, None),
        }
    }

    /// Whether `value` is an `http(s)` path gateway URL for `/ipfs/<cid>`.
    pub fn ipfs_url<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.gateway_url(s, Some(Namespace::Ipfs))
    }

    /// Whether `value` is an `http(s)` path gateway URL for `/ipns/<name>`.
    pub fn ipns_url<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.gateway_url(s, Some(Namespace::Ipns))
    }

    /// Whether `value` is an IPFS or an IPNS path gateway URL.
    pub fn url<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.gateway_url(s, None)
    }

    /// Whether `value` is a subdomain gateway URL, `http(s)://<cid>.ipfs.<gateway>`.
    pub fn ipfs_subdomain<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.subdomain_url(s, Some(Namespace::Ipfs))
    }

    /// Whether `value` is a subdomain gateway URL, `http(s)://<name>.ipns.<gateway>`.
    pub fn ipns_subdomain<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.subdomain_url(s, Some(Namespace::Ipns))
    }

    /// Whether `value` is an IPFS or an IPNS subdomain gateway URL.
    pub fn subdomain<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.subdomain_url(s, None)
    }

    /// Whether `value` is a base58btc encoded multihash.
    pub fn multihash<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        match parser::decode_multihash(s) {
            Ok(_) => true,
            Err(err) => {
                trace!(input = s, error = %err, "rejected multihash candidate");
                false
            }
        }
    }

    /// The multibase `value` is encoded in, if it is a decodable multibase string.
    pub fn multibase<'a>(&self, value: impl Into<Value<'a>>) -> Option<Base> {
        let s = text(value)?;
        parser::detect_multibase(s).ok()
    }

    /// Whether `value` is a CID encoded in lowercase base32.
    pub fn base32cid<'a>(&self, value: impl Into<Value<'a>>) -> bool {
        let Some(s) = text(value) else {
            return false;
        };
        self.multibase(s) == Some(Base::Base32Lower) && self.cid_str(s)
    }

    fn cid_str(&self, s: &str) -> bool {
        match self.parser.try_parse(s) {
            Ok(_) => true,
            Err(err) => {
                trace!(input = s, error = %err, "rejected CID candidate");
                false
            }
        }
    }

    fn ipns_name(&self, name: &str) -> bool {
        match self.config.ipns_policy {
            IpnsPolicy::Permissive => true,
            IpnsPolicy::Strict => gateway::is_dns_name(name) || self.cid_str(name),
        }
    }

    /// Shared by every path-shaped predicate. `None` accepts either namespace.
    fn content_path(&self, s: &str, want: Option<Namespace>) -> bool {
        let Some(found) = path::parse_path(s) else {
            return false;
        };
        if want.is_some_and(|ns| ns != found.namespace) {
            return false;
        }
        match found.namespace {
            Namespace::Ipfs => self.cid_str(found.identifier),
            Namespace::Ipns => self.ipns_name(found.identifier),
        }
    }

    fn gateway_url(&self, s: &str, want: Option<Namespace>) -> bool {
        match gateway::parse_absolute(s) {
            Some(url) if gateway::is_web(&url) => self.content_path(url.path(), want),
            _ => false,
        }
    }

    fn subdomain_url(&self, s: &str, want: Option<Namespace>) -> bool {
        let Some(url) = gateway::parse_absolute(s).filter(gateway::is_web) else {
            return false;
        };
        let Some((namespace, identifier)) = url.host_str().and_then(gateway::split_subdomain)
        else {
            return false;
        };
        if want.is_some_and(|ns| ns != namespace) {
            return false;
        }

        // Browsers lowercase the authority, so base32 is the only CID form
        // that survives; lowercase here too for hosts built by hand.
        let identifier = identifier.to_ascii_lowercase();
        match namespace {
            Namespace::Ipfs => self.cid_str(&identifier),
            Namespace::Ipns => {
                self.cid_str(&identifier)
                    || (self.config.ipns_policy == IpnsPolicy::Permissive
                        && gateway::decode_inlined_dnslink(&identifier)
                            .is_some_and(|name| gateway::is_dns_name(&name)))
            }
        }
    }
}

fn text<'a>(value: impl Into<Value<'a>>) -> Option<&'a str> {
    let value: Value<'a> = value.into();
    value.as_str()
}

fn reject(value: Value<'_>) -> bool {
    trace!(kind = value.kind(), "non-string input rejected");
    false
}
