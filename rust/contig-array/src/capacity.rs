//! Pre-allocation directive for array construction.

/// A capacity hint: "pre-allocate this many slots with a logical size of
/// zero."
///
/// Consumed by [`DynArray::with_capacity`](crate::array::DynArray::with_capacity);
/// it carries no elements and has no lifecycle of its own. Plain `usize`
/// slot counts convert into a hint, so call sites can pass either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapacityHint(usize);

impl CapacityHint {
    /// Creates a hint requesting `slots` pre-allocated slots.
    pub fn new(slots: usize) -> CapacityHint {
        CapacityHint(slots)
    }

    /// Returns the requested slot count.
    #[inline]
    pub fn slots(&self) -> usize {
        self.0
    }
}

impl From<usize> for CapacityHint {
    fn from(slots: usize) -> CapacityHint {
        CapacityHint::new(slots)
    }
}
