use std::fmt;

use geo::Rect;
use rstar::{RTreeObject, AABB};
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::claim::{Axis, ClaimError};

/// An axis-aligned rectangle `[x1,x2] × [y1,y2]` (inclusive integer bounds)
/// owned by a faction.
///
/// Claims are immutable once built. Construction guarantees `x1 < x2` and
/// `y1 < y2`.
#[derive(Clone, Debug)]
pub struct Claim {
    faction: String,
    bounds: Rect<i64>,
}

impl Claim {
    /// Build a claim, rejecting rectangles that are degenerate on either axis.
    pub fn new(faction: impl Into<String>, x1: i64, y1: i64, x2: i64, y2: i64) -> Result<Self, ClaimError> {
        if x1 >= x2 { return Err(ClaimError::Degenerate { axis: Axis::X, min: x1, max: x2 }) }
        if y1 >= y2 { return Err(ClaimError::Degenerate { axis: Axis::Y, min: y1, max: y2 }) }

        Ok(Self { faction: faction.into(), bounds: Rect::new((x1, y1), (x2, y2)) })
    }

    /// Get the owning faction.
    #[inline] pub fn faction(&self) -> &str { &self.faction }

    /// Get the bounding rectangle (inclusive on all sides).
    #[inline] pub fn bounds(&self) -> &Rect<i64> { &self.bounds }

    #[inline] pub fn x1(&self) -> i64 { self.bounds.min().x }
    #[inline] pub fn y1(&self) -> i64 { self.bounds.min().y }
    #[inline] pub fn x2(&self) -> i64 { self.bounds.max().x }
    #[inline] pub fn y2(&self) -> i64 { self.bounds.max().y }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{} -> {},{} {}>", self.x1(), self.y1(), self.x2(), self.y2(), self.faction)
    }
}

impl Serialize for Claim {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Claim", 5)?;
        state.serialize_field("faction", &self.faction)?;
        state.serialize_field("x1", &self.x1())?;
        state.serialize_field("y1", &self.y1())?;
        state.serialize_field("x2", &self.x2())?;
        state.serialize_field("y2", &self.y2())?;
        state.end()
    }
}

// Float envelopes keep R-tree area math from overflowing on huge grids. Rounding
// is monotonic, so the envelope never excludes an intersecting claim.
impl RTreeObject for Claim {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.x1() as f64, self.y1() as f64], [self.x2() as f64, self.y2() as f64])
    }
}
