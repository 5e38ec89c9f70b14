use crate::claim::Claim;

/// Check whether the closed intervals `[min1, max1]` and `[min2, max2]` share
/// at least one point.
#[inline]
pub fn range_intersect(min1: i64, max1: i64, min2: i64, max2: i64) -> bool {
    !(min1 > max2 || max1 < min2)
}

/// Check whether `[min2, max2]` starts or ends exactly one unit beyond `[min1, max1]`.
#[inline]
fn range_aligned(min1: i64, max1: i64, min2: i64, max2: i64) -> bool {
    max1.checked_add(1) == Some(min2) || min1.checked_sub(1) == Some(max2)
}

impl Claim {
    /// Check if the projections onto the x axis share at least one unit.
    pub fn intersects_in_x(&self, other: &Claim) -> bool {
        range_intersect(self.x1(), self.x2(), other.x1(), other.x2())
    }

    /// Check if the projections onto the y axis share at least one unit.
    pub fn intersects_in_y(&self, other: &Claim) -> bool {
        range_intersect(self.y1(), self.y2(), other.y1(), other.y2())
    }

    /// Check if `other` sits immediately left or right of `self`, with no gap
    /// and no overlap along x.
    pub fn aligned_in_x(&self, other: &Claim) -> bool {
        range_aligned(self.x1(), self.x2(), other.x1(), other.x2())
    }

    /// Check if `other` sits immediately above or below `self`, with no gap
    /// and no overlap along y.
    pub fn aligned_in_y(&self, other: &Claim) -> bool {
        range_aligned(self.y1(), self.y2(), other.y1(), other.y2())
    }

    /// Check if the claims share a border segment without overlapping.
    /// Diagonal (corner-only) contact does not count.
    pub fn touches(&self, other: &Claim) -> bool {
        (self.aligned_in_x(other) && self.intersects_in_y(other))
            || (self.aligned_in_y(other) && self.intersects_in_x(other))
    }

    /// Check if the claims share any area, boundary included.
    pub fn overlaps(&self, other: &Claim) -> bool {
        self.intersects_in_x(other) && self.intersects_in_y(other)
    }

    /// Check if the two claims may coexist.
    ///
    /// Overlapping claims are never compatible. Claims of the same faction may
    /// touch; rival claims must keep at least one empty unit between them.
    pub fn valid_neighbour(&self, other: &Claim) -> bool {
        if self.overlaps(other) { return false }
        if self.faction() == other.faction() { return true }
        !self.touches(other)
    }
}
