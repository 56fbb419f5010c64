//! Content identifier decoding.
//!
//! The text is decoded here (base58btc for CIDv0, multibase otherwise) and the
//! bytes are handed to the `cid` crate. This module narrows that to the
//! [`CidParser`] interface and adds the structural checks the predicates rely
//! on: the whole input is one CID, and its hash function is known.

use crate::error::{ParseError, Result};
use cid::multibase::{self, Base};
use cid::{Cid, Version};
use multihash::Multihash;
use multihash_codetable::Code;

/// Multihash code of the identity "hash", which is not part of the code table.
const IDENTITY: u64 = 0x00;

/// Something that can turn a candidate string into a [`Cid`].
///
/// Implementations decide which multibases and hash functions are recognized.
/// The path and URL predicates only ever ask "did this parse?", so a new
/// encoding table never requires changes above this trait.
pub trait CidParser {
    /// Parse `input` as a CID.
    fn try_parse(&self, input: &str) -> Result<Cid>;
}

impl<P: CidParser + ?Sized> CidParser for &P {
    fn try_parse(&self, input: &str) -> Result<Cid> {
        (**self).try_parse(input)
    }
}

/// The default parser: CIDv0 base58btc strings and any multibase supported by
/// the `cid` crate, with hash functions from `multihash-codetable`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultibaseCidParser;

impl CidParser for MultibaseCidParser {
    fn try_parse(&self, input: &str) -> Result<Cid> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        // Decode the text here rather than through `Cid::try_from(&str)`, which
        // also accepts strings that merely contain `/ipfs/<cid>`.
        let decoded = if Version::is_v0_str(input) {
            bs58::decode(input).into_vec()?
        } else {
            let (_, bytes) = multibase::decode(input).map_err(cid::Error::from)?;
            bytes
        };

        // Reading a CID stops after the digest, for both versions.
        let cid = Cid::try_from(decoded.as_slice())?;
        let encoded = cid.to_bytes().len();
        if decoded.len() != encoded {
            return Err(ParseError::TrailingBytes {
                extra: decoded.len().saturating_sub(encoded),
            });
        }

        check_hash_code(cid.hash().code())?;
        Ok(cid)
    }
}

/// Fails unless `code` names a hash function this crate recognizes.
pub(crate) fn check_hash_code(code: u64) -> Result<()> {
    if code == IDENTITY || Code::try_from(code).is_ok() {
        Ok(())
    } else {
        Err(ParseError::UnsupportedHash(code))
    }
}

/// Decode a base58btc string as a multihash.
pub(crate) fn decode_multihash(input: &str) -> Result<Multihash<64>> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let bytes = bs58::decode(input).into_vec()?;
    let hash = Multihash::<64>::from_bytes(&bytes)?;
    check_hash_code(hash.code())?;
    Ok(hash)
}

/// Detect the multibase of a prefixed string, requiring the body to decode.
pub(crate) fn detect_multibase(input: &str) -> Result<Base> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let (base, _) = multibase::decode(input).map_err(cid::Error::from)?;
    Ok(base)
}
