//! Predicates for IPFS content identifiers, paths and gateway URLs.
//!
//! Every predicate takes any [`Value`] and answers with a `bool`; only
//! strings can match (plus parsed [`Cid`]s for [`is_cid`]). Nothing here
//! performs I/O, and no predicate panics or returns an error: a malformed
//! input is simply `false`.
//!
//! ```
//! let cid = "QmYHNYAaYK5hm3ZhZFx5W9H6xydKDGimjdgJMrMSdnctEm";
//!
//! assert!(is_ipfs::is_cid(cid));
//! assert!(is_ipfs::ipfs_path(format!("/ipfs/{cid}/index.html?x=1#top").as_str()));
//! assert!(is_ipfs::ipns_path("/ipns/github.com/"));
//! assert!(is_ipfs::cid_path(format!("{cid}/path/to/file").as_str()));
//! assert!(is_ipfs::url_or_path("http://ipfs.io/ipns/foo.bar.com"));
//!
//! // A GitHub repository link is not an IPFS path.
//! assert!(!is_ipfs::ipfs_path("/ipfs/js-ipfs/blob/master/README.md"));
//! ```
//!
//! The free functions use a default [`Validator`]. Build one explicitly to
//! plug in a different [`CidParser`] or to tighten the [`IpnsPolicy`].

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

mod config;
mod error;
mod gateway;
mod parser;
mod path;
mod validator;
mod value;

// Public exports
pub use self::{
    config::{Config, IpnsPolicy},
    error::{ParseError, Result},
    parser::{CidParser, MultibaseCidParser},
    path::{parse_path, ContentPath, Namespace},
    validator::Validator,
    value::Value,
};

// Re-export common types
pub use cid::multibase::Base;
pub use cid::Cid;

static DEFAULT: Validator = Validator::DEFAULT;

/// Whether `value` is a content identifier. See [`Validator::is_cid`].
pub fn is_cid<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.is_cid(value)
}

/// Whether `value` is an `/ipfs/<cid>` path. See [`Validator::ipfs_path`].
pub fn ipfs_path<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.ipfs_path(value)
}

/// Whether `value` is an `/ipns/<name>` path. See [`Validator::ipns_path`].
pub fn ipns_path<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.ipns_path(value)
}

/// Whether `value` is an IPFS or IPNS path. See [`Validator::path`].
pub fn path<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.path(value)
}

/// Whether `value` is `<cid>/<subpath>`. See [`Validator::cid_path`].
pub fn cid_path<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.cid_path(value)
}

/// Whether `value` is a URL or a path naming IPFS/IPNS content. See
/// [`Validator::url_or_path`].
pub fn url_or_path<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.url_or_path(value)
}

/// Whether `value` is a base58btc multihash. See [`Validator::multihash`].
pub fn multihash<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.multihash(value)
}

/// The multibase of `value`, if any. See [`Validator::multibase`].
pub fn multibase<'a>(value: impl Into<Value<'a>>) -> Option<Base> {
    DEFAULT.multibase(value)
}

/// Whether `value` is a base32 CID. See [`Validator::base32cid`].
pub fn base32cid<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.base32cid(value)
}

/// Whether `value` is an IPFS path gateway URL. See [`Validator::ipfs_url`].
pub fn ipfs_url<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.ipfs_url(value)
}

/// Whether `value` is an IPNS path gateway URL. See [`Validator::ipns_url`].
pub fn ipns_url<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.ipns_url(value)
}

/// Whether `value` is an IPFS or IPNS path gateway URL. See [`Validator::url`].
pub fn url<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.url(value)
}

/// Whether `value` is an IPFS subdomain gateway URL. See
/// [`Validator::ipfs_subdomain`].
pub fn ipfs_subdomain<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.ipfs_subdomain(value)
}

/// Whether `value` is an IPNS subdomain gateway URL. See
/// [`Validator::ipns_subdomain`].
pub fn ipns_subdomain<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.ipns_subdomain(value)
}

/// Whether `value` is a subdomain gateway URL. See [`Validator::subdomain`].
pub fn subdomain<'a>(value: impl Into<Value<'a>>) -> bool {
    DEFAULT.subdomain(value)
}
