//! The digest primitive and the hash-to-point mapping that turns byte
//! strings into group elements.
use crate::group::CoordinateGroup;
use sha2::{Digest, Sha256};

// 32 bytes = 256 bits.
const HASH_LENGTH_IN_BYTES: usize = 32;

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; HASH_LENGTH_IN_BYTES] {
  let mut out = [0u8; HASH_LENGTH_IN_BYTES];
  out.copy_from_slice(&Sha256::digest(data));
  out
}

/// Maps arbitrary bytes to a non-identity element of `G` by trial and
/// rehash: each candidate digest is interpreted as an x-coordinate and
/// lifted where possible, rehashing the candidate itself on failure.
///
/// Roughly half of all candidates lift, so the loop runs twice in
/// expectation; it is unbounded in theory and must not be capped, or the
/// mapping would change for the inputs that hit the cap. The trial count
/// leaks timing correlated with the input, which is acceptable because
/// mapped data is not secret.
pub fn hash_to_point<G: CoordinateGroup>(data: &[u8]) -> G::Elem {
  let mut candidate = sha256(data);
  loop {
    if let Some(point) = G::elem_from_x(&candidate) {
      return point;
    }
    candidate = sha256(&candidate);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::group::{Group, Secp256k1};

  #[test]
  fn test_sha256() {
    // FIPS 180-2 test vector for "abc".
    let expected = [
      0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22,
      0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00,
      0x15, 0xad,
    ];
    assert_eq!(sha256(b"abc"), expected);
    assert_ne!(sha256(b"abc"), sha256(b"abd"));
  }

  #[test]
  fn test_hash_to_point_deterministic() {
    let data = b"martian cyborg gerbil attack";
    assert_eq!(
      hash_to_point::<Secp256k1>(data),
      hash_to_point::<Secp256k1>(data)
    );
  }

  #[test]
  fn test_hash_to_point_distinct() {
    let b_1 = b"boom i got ur boyfriend";
    let b_2 = b"boom i got ur boyfriene";
    assert_ne!(
      hash_to_point::<Secp256k1>(b_1),
      hash_to_point::<Secp256k1>(b_2)
    );
  }

  #[test]
  fn test_hash_to_point_never_identity() {
    for i in 0u32..32 {
      let point = hash_to_point::<Secp256k1>(&i.to_be_bytes());
      assert!(!Secp256k1::is_id(&point));
    }
  }
}
