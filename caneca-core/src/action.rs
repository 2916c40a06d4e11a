//! Trait seams for collection actions and their quantity sources.

/// A unit of work that, when executed, records recovered material against
/// exactly one target shift.
///
/// Implementations keep a handle to their target shift and remember the
/// quantity they recorded, so a caller can read back what happened after a
/// dispatch. Executing again records a fresh quantity on top of the
/// previous one; execution is not idempotent.
pub trait CollectionAction: Send {
    /// Run the action against its target shift.
    fn execute(&mut self);

    /// Quantity recorded by the most recent execution, zero before the
    /// first one.
    fn last_quantity(&self) -> u64;
}

/// Source of quantities for simulated collection actions.
///
/// A seam rather than a hard-wired random draw, so tests can substitute a
/// deterministic sequence.
pub trait QuantitySource: Send {
    /// Produce the next quantity, within `0..=max`.
    fn draw(&mut self, max: u64) -> u64;
}
