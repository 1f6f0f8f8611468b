use core::fmt;
use core::num::NonZeroU32;

use crate::error::{CsError, CsResult};

/// Compact, stable identifier of one polynomial segment.
///
/// Segment ids are handed out in emission order starting at 0, so the id of
/// a segment is also its position in the segment sequence.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<SegmentId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(NonZeroU32);

impl SegmentId {
    /// Largest representable 0-based index.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Create an id from a 0-based index by storing index+1.
    ///
    /// `None` when `index + 1` does not fit in a `u32`.
    pub fn from_index(index: u32) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Create an id from a sequence position.
    pub fn from_usize(index: usize) -> CsResult<Self> {
        u32::try_from(index)
            .ok()
            .and_then(Self::from_index)
            .ok_or(CsError::IndexOob {
                what: "segment id",
                index,
                len: Self::MAX_INDEX as usize + 1,
            })
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as a sequence position.
    pub fn as_usize(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentId({})", self.index())
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
