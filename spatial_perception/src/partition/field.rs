/// PartitionField - routes entity bounds to the child slots of an interior node.
///
/// The field is fixed when the node is split. It holds a reference point;
/// an entity goes to the orthant of its center around that point
/// (bit0 = X, bit1 = Y, bit2 = Z; a coordinate equal to the reference
/// goes to the high side). Routing is total: every bounds maps to exactly
/// one slot, even when it lies outside the node's region.

use crate::bounds::Bounds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionField<B: Bounds> {
    reference: B::Point,
}

impl<B: Bounds> PartitionField<B> {
    pub fn new(reference: B::Point) -> Self {
        Self { reference }
    }

    /// Split point of the field
    pub fn reference(&self) -> B::Point {
        self.reference
    }

    /// Number of child slots (2, 4 or 8 depending on the dimension)
    pub fn child_count(&self) -> usize {
        B::DIMENSION.child_count()
    }

    /// Child slot of a candidate bounds.
    pub fn classify(&self, bounds: &B) -> usize {
        B::orthant(self.reference, bounds.center())
    }

    /// Partition cell of a child slot inside the parent's region.
    pub fn child_region(&self, region: &B, slot: usize) -> B {
        region.orthant_bounds(self.reference, slot)
    }

    /// Number of distinct child slots the given bounds are routed to.
    ///
    /// A field that sends everything to one slot does not partition anything.
    pub fn occupied_slots<'a>(&self, bounds: impl IntoIterator<Item = &'a B>) -> usize {
        let mut mask = 0u8;
        for b in bounds {
            mask |= 1 << self.classify(b);
        }
        mask.count_ones() as usize
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
