//! Multiset hash, built on a generic curve group interface.
//!
//! The accumulator holds one group element: the sum of the points every
//! element ever added maps to, minus the points of every element removed.
//! Group addition commutes, so insertion order cannot be observed, and
//! merging two accumulators is a single group operation.
use crate::group::{CoordinateGroup, ParseError, POINT_BYTES};
use crate::hash::{hash_to_point, sha256};

/// Hashed in place of affine coordinates when finalizing the empty
/// multiset, which has no coordinates of its own. Distinct from the all-zero
/// serialized form so neither can alias a real point encoding.
const EMPTY_SENTINEL: [u8; POINT_BYTES] = [0xff; POINT_BYTES];

/// Hash of a multiset of byte strings, insensitive to element order.
///
/// Elements carry multiplicity: adding the same bytes twice is different
/// from adding them once, and one `remove` undoes one `add`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultisetHash<G: CoordinateGroup>(G::Elem);

impl<G: CoordinateGroup> MultisetHash<G> {
  /// The hash of the empty multiset: the group identity.
  pub fn new() -> Self {
    MultisetHash(G::id())
  }

  /// Returns this accumulator to the empty multiset.
  pub fn reset(&mut self) {
    self.0 = G::id();
  }

  // Low probability of confusion with the Add trait; the method is named
  // after the multiset operation.
  #[allow(clippy::should_implement_trait)]
  /// Adds one occurrence of `data`. Never fails: any byte string maps to a
  /// group element.
  pub fn add(&mut self, data: &[u8]) {
    let elem = hash_to_point::<G>(data);
    self.0 = G::op(&self.0, &elem);
  }

  /// Removes one occurrence of `data`, exactly inverting `add` with the
  /// same bytes. Removing an element that was never added is not detected;
  /// the multiset goes "negative" in that element and the accumulator holds
  /// whatever group element results.
  pub fn remove(&mut self, data: &[u8]) {
    let elem = hash_to_point::<G>(data);
    self.0 = G::op(&self.0, &G::inv(&elem));
  }

  /// Merges `other` into `self`, as if everything added to or removed from
  /// `other` had been applied to `self` directly.
  pub fn combine(&mut self, other: &Self) {
    self.0 = G::op(&self.0, &other.0);
  }

  /// The canonical 32-byte digest of the current multiset: the hash of the
  /// normalized affine encoding, or of a distinguished sentinel for the
  /// empty multiset. Projective state is normalized first, so equal
  /// multisets always produce equal digests.
  pub fn finalize(&self) -> [u8; 32] {
    let buffer = if G::is_id(&self.0) {
      EMPTY_SENTINEL
    } else {
      G::encode(&self.0)
    };
    sha256(&buffer)
  }

  /// The full accumulator state as 64 bytes (x then y, big-endian), for
  /// storage or transmission. The empty multiset serializes to all zeros.
  /// Unlike `finalize` output, the result can be restored with `parse` and
  /// accumulated onto further.
  pub fn serialize(&self) -> [u8; POINT_BYTES] {
    G::encode(&self.0)
  }

  /// Restores an accumulator from its `serialize` form. Fails if either
  /// coordinate is out of field range or the pair is not a point on the
  /// curve; on failure no accumulator is produced at all.
  pub fn parse(buf: &[u8; POINT_BYTES]) -> Result<Self, ParseError> {
    G::decode(buf).map(MultisetHash)
  }
}

impl<G: CoordinateGroup> Default for MultisetHash<G> {
  fn default() -> Self {
    Self::new()
  }
}
