//! Gateway URL handling.
//!
//! Two gateway styles are recognized:
//! - path gateways, `https://ipfs.io/ipfs/<cid>/...`
//! - subdomain gateways, `https://<cid>.ipfs.dweb.link/...`

use crate::path::Namespace;
use url::Url;

/// Longest DNS name, in octets.
const MAX_DNS_NAME: usize = 253;
/// Longest DNS label, in octets.
const MAX_DNS_LABEL: usize = 63;

/// Parse `input` as an absolute URL that carries a host.
///
/// Relative references and host-less URLs such as `mailto:` yield `None`.
pub(crate) fn parse_absolute(input: &str) -> Option<Url> {
    Url::parse(input).ok().filter(Url::has_host)
}

/// Gateways are only ever reached over plain web schemes.
pub(crate) fn is_web(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Split a subdomain gateway host into its namespace and identifier.
///
/// The last `ipfs`/`ipns` label that is neither the first nor the final label
/// wins, so `a.b.ipfs.example.com` yields `(Ipfs, "a.b")`.
pub(crate) fn split_subdomain(host: &str) -> Option<(Namespace, &str)> {
    for (dot, _) in host.rmatch_indices('.') {
        let (identifier, rest) = (&host[..dot], &host[dot + 1..]);
        let Some((label, suffix)) = rest.split_once('.') else {
            continue;
        };
        let Some(namespace) = Namespace::parse(label) else {
            continue;
        };
        if identifier.is_empty() || suffix.split('.').any(str::is_empty) {
            return None;
        }
        return Some((namespace, identifier));
    }
    None
}

/// Decode a DNSLink name inlined into a single subdomain label.
///
/// `.` is encoded as `-` and a literal `-` as `--`, so
/// `en-wikipedia--on--ipfs-org` is `en.wikipedia-on-ipfs.org`.
pub(crate) fn decode_inlined_dnslink(label: &str) -> Option<String> {
    if label.is_empty() || label.contains('.') {
        return None;
    }
    let mut out = String::with_capacity(label.len());
    let mut chars = label.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if chars.peek() == Some(&'-') {
                chars.next();
                out.push('-');
            } else {
                out.push('.');
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Whether `name` is a fully qualified DNS name with at least two labels.
pub(crate) fn is_dns_name(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name.len() > MAX_DNS_NAME {
        return false;
    }
    let mut count = 0;
    for label in name.split('.') {
        let valid = !label.is_empty()
            && label.len() <= MAX_DNS_LABEL
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');
        if !valid {
            return false;
        }
        count += 1;
    }
    count >= 2
}
