//! Recognizer for `/ipfs/<id>` and `/ipns/<id>` content paths.
//!
//! The input is first split at the fragment (`#`) and then at the query
//! (`?`). What remains is walked through three states:
//!
//! ```text
//! ExpectPrefix --"/ipfs/" | "/ipns/"--> ExpectIdentifier
//! ExpectIdentifier --non-empty segment--> ExpectSubpathOrEnd
//! ExpectSubpathOrEnd --"" | "/..."--> accepted
//! ```
//!
//! The recognizer is purely syntactic. Whether the identifier is a valid CID
//! is decided by the [`Validator`](crate::Validator).

use std::fmt;

/// The namespace a content path lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Immutable content addressed by CID.
    Ipfs,
    /// Mutable names resolved through IPNS or DNSLink.
    Ipns,
}

impl Namespace {
    /// The namespace label as it appears in paths and subdomains.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Ipfs => "ipfs",
            Namespace::Ipns => "ipns",
        }
    }

    /// Parse a bare namespace label.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "ipfs" => Some(Namespace::Ipfs),
            "ipns" => Some(Namespace::Ipns),
            _ => None,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntactically well-formed content path, borrowed from its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPath<'a> {
    /// `ipfs` or `ipns`.
    pub namespace: Namespace,
    /// The first segment after the namespace. Never empty.
    pub identifier: &'a str,
    /// Everything after the identifier up to the query. Empty or starts with `/`.
    pub subpath: &'a str,
    /// Text after `?`, if any.
    pub query: Option<&'a str>,
    /// Text after `#`, if any.
    pub fragment: Option<&'a str>,
}

impl fmt::Display for ContentPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}{}", self.namespace, self.identifier, self.subpath)?;
        if let Some(query) = self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    ExpectPrefix(&'a str),
    ExpectIdentifier(Namespace, &'a str),
    ExpectSubpathOrEnd(Namespace, &'a str, &'a str),
}

/// Recognize `input` as a content path.
///
/// Returns `None` when the prefix is neither `/ipfs/` nor `/ipns/`, or when
/// the identifier segment is empty.
pub fn parse_path(input: &str) -> Option<ContentPath<'_>> {
    let (rest, fragment) = split_once_opt(input, '#');
    let (path, query) = split_once_opt(rest, '?');

    let mut state = State::ExpectPrefix(path);
    loop {
        state = match state {
            State::ExpectPrefix(s) => {
                let rest = s.strip_prefix('/')?;
                let (label, rest) = rest.split_once('/')?;
                State::ExpectIdentifier(Namespace::parse(label)?, rest)
            }
            State::ExpectIdentifier(namespace, s) => {
                let end = s.find('/').unwrap_or(s.len());
                let (identifier, rest) = s.split_at(end);
                if identifier.is_empty() {
                    return None;
                }
                State::ExpectSubpathOrEnd(namespace, identifier, rest)
            }
            State::ExpectSubpathOrEnd(namespace, identifier, subpath) => {
                // The identifier ran to the first '/', so anything left starts with one.
                debug_assert!(subpath.is_empty() || subpath.starts_with('/'));
                return Some(ContentPath {
                    namespace,
                    identifier,
                    subpath,
                    query,
                    fragment,
                });
            }
        };
    }
}

/// Split a relative `<id>/<rest>` path. Returns the identifier and the
/// remainder after the first `/`, or `None` when there is no `/` or the
/// identifier is empty.
pub(crate) fn split_relative(input: &str) -> Option<(&str, &str)> {
    let (identifier, rest) = input.split_once('/')?;
    // A '?' or '#' before the first '/' means no slash follows the identifier.
    if identifier.is_empty() || identifier.contains(|c: char| c == '?' || c == '#') {
        return None;
    }
    Some((identifier, rest))
}

fn split_once_opt(s: &str, delim: char) -> (&str, Option<&str>) {
    match s.split_once(delim) {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}
