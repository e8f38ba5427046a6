//! The group interface the multiset hash is built on, and its secp256k1
//! implementation.
//!
//! Accumulation itself only needs an abelian group with an identity
//! (`Group`). Mapping byte strings onto the curve and moving accumulator
//! state across the wire additionally need affine coordinates, which is
//! what `CoordinateGroup` captures. Curve and field arithmetic are consumed
//! from the backing primitive, never implemented here.
use std::fmt::Debug;

mod secp256k1;
pub use secp256k1::Secp256k1;

/// Width of one affine coordinate: a field element in big-endian form.
pub const COORDINATE_BYTES: usize = 32;

/// Width of the canonical point encoding, x followed by y.
pub const POINT_BYTES: usize = 2 * COORDINATE_BYTES;

/// Ways a 64-byte buffer can fail to decode to a group element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
  /// A coordinate is not in `[0, p)` for the field modulus `p`.
  CoordinateOutOfRange,
  /// Both coordinates are in range but the point is not on the curve.
  NotOnCurve,
}

/// An abelian group, written additively.
pub trait Group: Clone + Debug + Eq {
  type Elem: Clone + Debug + Eq + Sized + Send + Sync;

  fn id() -> Self::Elem;

  fn is_id(a: &Self::Elem) -> bool;

  fn op(a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

  fn inv(a: &Self::Elem) -> Self::Elem;
}

/// A curve group whose elements admit affine coordinates.
pub trait CoordinateGroup: Group {
  /// Lifts a big-endian candidate x-coordinate to a curve point. Returns
  /// `None` when the candidate is out of field range or no point has that
  /// x-coordinate. Of the two points sharing a valid x-coordinate, the
  /// implementation must pick one deterministically; callers may rely on
  /// the choice being stable, not on which point it is.
  fn elem_from_x(candidate: &[u8; COORDINATE_BYTES]) -> Option<Self::Elem>;

  /// Canonical affine encoding, both coordinates fixed-width big-endian.
  /// The identity encodes to all zero bytes.
  fn encode(a: &Self::Elem) -> [u8; POINT_BYTES];

  /// Inverse of `encode`. All zero bytes decode to the identity; any other
  /// buffer must hold a valid point in canonical form.
  fn decode(buf: &[u8; POINT_BYTES]) -> Result<Self::Elem, ParseError>;
}
