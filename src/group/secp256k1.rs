//! secp256k1 group, backed by the arkworks curve primitive.
//!
//! Only glue lives here: conversions between the wire form (fixed-width
//! big-endian coordinates) and `ark_secp256k1` points. Accumulator state
//! stays projective; normalization to affine happens in `encode`.
use super::{CoordinateGroup, Group, ParseError, COORDINATE_BYTES, POINT_BYTES};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInt, BigInteger, PrimeField, Zero};
use ark_secp256k1::{Affine, Fq, Projective};
use arrayref::array_ref;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Secp256k1 {}

/// Reads a big-endian coordinate, rejecting values outside `[0, p)`.
fn coordinate_from_bytes(bytes: &[u8; COORDINATE_BYTES]) -> Option<Fq> {
  let limbs = [
    u64::from_be_bytes(*array_ref![bytes, 24, 8]),
    u64::from_be_bytes(*array_ref![bytes, 16, 8]),
    u64::from_be_bytes(*array_ref![bytes, 8, 8]),
    u64::from_be_bytes(*array_ref![bytes, 0, 8]),
  ];
  Fq::from_bigint(BigInt::new(limbs))
}

fn coordinate_to_bytes(fe: &Fq) -> [u8; COORDINATE_BYTES] {
  let mut out = [0u8; COORDINATE_BYTES];
  out.copy_from_slice(&fe.into_bigint().to_bytes_be());
  out
}

impl Group for Secp256k1 {
  type Elem = Projective;

  fn id() -> Projective {
    Projective::zero()
  }

  fn is_id(a: &Projective) -> bool {
    a.is_zero()
  }

  fn op(a: &Projective, b: &Projective) -> Projective {
    *a + *b
  }

  fn inv(a: &Projective) -> Projective {
    -*a
  }
}

impl CoordinateGroup for Secp256k1 {
  fn elem_from_x(candidate: &[u8; COORDINATE_BYTES]) -> Option<Projective> {
    let x = coordinate_from_bytes(candidate)?;
    // Two points share a valid x-coordinate; take the one with the smaller
    // y. Any fixed choice works as long as every caller sees the same one.
    Affine::get_point_from_x_unchecked(x, false).map(Projective::from)
  }

  fn encode(a: &Projective) -> [u8; POINT_BYTES] {
    let mut out = [0u8; POINT_BYTES];
    let affine = a.into_affine();
    if let Some((x, y)) = affine.xy() {
      out[..COORDINATE_BYTES].copy_from_slice(&coordinate_to_bytes(x));
      out[COORDINATE_BYTES..].copy_from_slice(&coordinate_to_bytes(y));
    }
    // The identity has no affine coordinates and keeps the zero encoding.
    out
  }

  fn decode(buf: &[u8; POINT_BYTES]) -> Result<Projective, ParseError> {
    if buf.iter().all(|&b| b == 0) {
      // (0, 0) is not on the curve, so the identity owns this encoding.
      return Ok(Projective::zero());
    }
    let x = coordinate_from_bytes(array_ref![buf, 0, COORDINATE_BYTES])
      .ok_or(ParseError::CoordinateOutOfRange)?;
    let y = coordinate_from_bytes(array_ref![buf, COORDINATE_BYTES, COORDINATE_BYTES])
      .ok_or(ParseError::CoordinateOutOfRange)?;
    let point = Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
      return Err(ParseError::NotOnCurve);
    }
    // Cofactor 1: every point on the curve is in the prime-order group.
    Ok(point.into())
  }
}
