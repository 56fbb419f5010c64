//! Algebraic properties that must hold for arbitrary input.

use is_ipfs::Value;
use proptest::prelude::*;

const CID: &str = "QmYHNYAaYK5hm3ZhZFx5W9H6xydKDGimjdgJMrMSdnctEm";

/// Strings biased toward the shapes the predicates care about.
fn path_like() -> impl Strategy<Value = String> {
    let prefix = prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        Just("/ipfs/".to_string()),
        Just("/ipns/".to_string()),
        Just("http://ipfs.io/ipfs/".to_string()),
        Just("https://ipfs.io/ipns/".to_string()),
    ];
    let identifier = prop_oneof![
        Just(CID.to_string()),
        Just("github.com".to_string()),
        Just("js-ipfs".to_string()),
        "[a-zA-Z0-9.]{0,12}",
    ];
    let suffix = "[a-z/?#=.]{0,16}";
    (prefix, identifier, suffix).prop_map(|(p, i, s)| format!("{p}{i}{s}"))
}

proptest! {
    #[test]
    fn path_is_union_of_ipfs_and_ipns(input in path_like()) {
        let s = input.as_str();
        prop_assert_eq!(is_ipfs::path(s), is_ipfs::ipfs_path(s) || is_ipfs::ipns_path(s));
    }

    #[test]
    fn ipfs_and_ipns_paths_are_exclusive(input in path_like()) {
        let s = input.as_str();
        prop_assert!(!(is_ipfs::ipfs_path(s) && is_ipfs::ipns_path(s)));
    }

    #[test]
    fn cid_path_and_path_are_exclusive(input in path_like()) {
        let s = input.as_str();
        prop_assert!(!(is_ipfs::cid_path(s) && is_ipfs::path(s)));
    }

    #[test]
    fn predicates_are_idempotent(input in path_like()) {
        let s = input.as_str();
        prop_assert_eq!(is_ipfs::is_cid(s), is_ipfs::is_cid(s));
        prop_assert_eq!(is_ipfs::path(s), is_ipfs::path(s));
        prop_assert_eq!(is_ipfs::cid_path(s), is_ipfs::cid_path(s));
        prop_assert_eq!(is_ipfs::url_or_path(s), is_ipfs::url_or_path(s));
    }

    #[test]
    fn arbitrary_strings_never_panic(s in "\\PC*") {
        let s = s.as_str();
        let _ = is_ipfs::is_cid(s);
        let _ = is_ipfs::path(s);
        let _ = is_ipfs::cid_path(s);
        let _ = is_ipfs::url_or_path(s);
        let _ = is_ipfs::multihash(s);
        let _ = is_ipfs::multibase(s);
        let _ = is_ipfs::subdomain(s);
    }

    #[test]
    fn bytes_never_match(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert!(!is_ipfs::is_cid(&bytes));
        prop_assert!(!is_ipfs::path(&bytes));
        prop_assert!(!is_ipfs::cid_path(&bytes));
        prop_assert!(!is_ipfs::url_or_path(&bytes));
    }

    #[test]
    fn numbers_never_match(n in any::<f64>()) {
        prop_assert!(!is_ipfs::is_cid(n));
        prop_assert!(!is_ipfs::ipfs_path(n));
        prop_assert!(!is_ipfs::ipns_path(Value::Number(n)));
        prop_assert!(!is_ipfs::url(n));
    }
}
