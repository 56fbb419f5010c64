use anyhow::Result;
use is_ipfs::{Base, Cid, CidParser, MultibaseCidParser, ParseError, Value};
use std::sync::Once;

const CID_V0: &str = "QmYHNYAaYK5hm3ZhZFx5W9H6xydKDGimjdgJMrMSdnctEm";
const CID_V1: &str = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";
const MULTIHASH: &str = "QmYjtig7VJQ6XsnUjqqJvj7QaMcCAwtrgNdahSiFofrE7o";

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn test_canonical_cid() {
    init_tracing();
    assert!(is_ipfs::is_cid(CID_V0));
    assert!(is_ipfs::is_cid(CID_V1));
}

#[test]
fn test_truncated_or_corrupted_cid() {
    init_tracing();
    assert!(!is_ipfs::is_cid(&CID_V0[..CID_V0.len() - 1]));
    assert!(!is_ipfs::is_cid(&CID_V0[..20]));
    // '0' and 'l' are outside the base58btc alphabet
    assert!(!is_ipfs::is_cid("QmYHNYAaYK5hm3ZhZFx5W9H6xydKDGimjdgJMrMSdnctE0"));
    assert!(!is_ipfs::is_cid("QmYHNYAaYK5hm3ZhZFx5W9H6xydKDGimjdgJMrMSdnctEl"));
    // '1' is outside the base32 alphabet
    assert!(!is_ipfs::is_cid("bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzd1"));
}

#[test]
fn test_cid_rejects_non_cids() {
    init_tracing();
    assert!(!is_ipfs::is_cid(""));
    assert!(!is_ipfs::is_cid("hello world"));
    assert!(!is_ipfs::is_cid("js-ipfs"));
    assert!(!is_ipfs::is_cid(format!("/ipfs/{CID_V0}").as_str()));
}

#[test]
fn test_cid_rejects_cid_embedded_in_paths_and_urls() {
    init_tracing();
    for input in [
        format!("/ipfs/{CID_V0}"),
        format!("foo/ipfs/{CID_V0}"),
        format!("garbage/ipfs/{CID_V1}"),
        format!("https://ipfs.io/ipfs/{CID_V0}"),
        format!("http://ipfs.io/ipfs/{CID_V1}/index.html"),
        format!("{CID_V0}/"),
    ] {
        assert!(!is_ipfs::is_cid(input.as_str()), "{input}");
    }
}

#[test]
fn test_cid_rejects_trailing_bytes_after_v0_multihash() -> Result<()> {
    init_tracing();
    let cid = Cid::try_from(CID_V0)?;
    let mut bytes = cid.hash().to_bytes();
    bytes.extend_from_slice(&[0xde, 0xad]);
    let padded = cid::multibase::encode(Base::Base58Btc, &bytes);
    assert!(!is_ipfs::is_cid(padded.as_str()));

    let clean = cid::multibase::encode(Base::Base58Btc, cid.hash().to_bytes());
    assert!(is_ipfs::is_cid(clean.as_str()));
    Ok(())
}

#[test]
fn test_cid_rejects_other_shapes() {
    init_tracing();
    assert!(!is_ipfs::is_cid(Value::Null));
    assert!(!is_ipfs::is_cid(Value::Undefined));
    assert!(!is_ipfs::is_cid(42i64));
    assert!(!is_ipfs::is_cid(true));
    assert!(!is_ipfs::is_cid(Value::Object));
    assert!(!is_ipfs::is_cid(&serde_json::json!({ "cid": CID_V0 })));
}

#[test]
fn test_cid_accepts_parsed_cid() -> Result<()> {
    let cid = Cid::try_from(CID_V1)?;
    assert!(is_ipfs::is_cid(&cid));
    Ok(())
}

#[test]
fn test_parser_reports_cause() {
    let err = MultibaseCidParser.try_parse("").unwrap_err();
    assert!(matches!(err, ParseError::Empty));

    let err = MultibaseCidParser.try_parse("zzzz").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_parser_roundtrips_string_form() -> Result<()> {
    let cid = MultibaseCidParser.try_parse(CID_V1)?;
    assert_eq!(cid.to_string(), CID_V1);
    Ok(())
}

#[test]
fn test_base32cid() {
    assert!(is_ipfs::base32cid(CID_V1));
    assert!(!is_ipfs::base32cid(CID_V0));
    assert!(!is_ipfs::base32cid("bafyinvalid"));
    assert!(!is_ipfs::base32cid(Value::Null));
}

#[test]
fn test_multibase() {
    assert_eq!(is_ipfs::multibase(CID_V1), Some(Base::Base32Lower));
    assert_eq!(
        is_ipfs::multibase("zdj7WWeQ43G6JJvLWQWZpyHuAMq6uYWRjkBXFad11vE2LHhQ7"),
        Some(Base::Base58Btc)
    );
    assert_eq!(is_ipfs::multibase(CID_V0), None);
    assert_eq!(is_ipfs::multibase("z0OIl"), None);
    assert_eq!(is_ipfs::multibase(&b"bafy"[..]), None);
}

#[test]
fn test_multihash() {
    init_tracing();
    assert!(is_ipfs::multihash(MULTIHASH));
    assert!(is_ipfs::multihash(CID_V0));
    assert!(!is_ipfs::multihash("0OIl"));
    assert!(!is_ipfs::multihash(""));
    assert!(!is_ipfs::multihash(CID_V1));
    assert!(!is_ipfs::multihash(&b"QmYjtig7VJQ6XsnUjqqJvj7QaMcCAwtrgNdahSiFofrE7o"[..]));
}
