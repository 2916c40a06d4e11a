//! Simulated glass recovery: a collection action that draws a bounded
//! random quantity and records it against its target shift.

use std::sync::Arc;

use caneca_core::{
    action::{CollectionAction, QuantitySource},
    model::{SharedShift, lock_shift},
};
use rand::Rng;

/// Inclusive upper bound for one simulated draw.
const MAX_DRAW: u64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// Quantity source drawing uniformly from the thread-local RNG.
pub struct ThreadRngSource;

impl QuantitySource for ThreadRngSource {
    fn draw(&mut self, max: u64) -> u64 {
        rand::thread_rng().gen_range(0..=max)
    }
}

/// Action that simulates recovering glass on one shift.
///
/// Each execution draws a quantity in `0..=100`, remembers it, and
/// accumulates it into the target shift's glass entry, leaving the other
/// four kinds untouched. Executing again draws and accumulates anew.
pub struct GlassRecovery {
    shift: SharedShift,
    source: Box<dyn QuantitySource>,
    last_quantity: u64,
}

impl GlassRecovery {
    /// Action over the given shift with the default uniform draw.
    #[must_use]
    pub fn new(shift: &SharedShift) -> Self {
        Self::with_source(shift, Box::new(ThreadRngSource))
    }

    /// Action over the given shift drawing from the supplied source.
    #[must_use]
    pub fn with_source(shift: &SharedShift, source: Box<dyn QuantitySource>) -> Self {
        Self {
            shift: Arc::clone(shift),
            source,
            last_quantity: 0,
        }
    }
}

impl CollectionAction for GlassRecovery {
    fn execute(&mut self) {
        let quantity = self.source.draw(MAX_DRAW);
        self.last_quantity = quantity;
        lock_shift(&self.shift).accumulate(quantity, 0, 0, 0, 0);
    }

    fn last_quantity(&self) -> u64 {
        self.last_quantity
    }
}

/// Boxed glass-recovery action ready for the dispatcher.
#[must_use]
pub fn action(shift: &SharedShift) -> Box<dyn CollectionAction> {
    Box::new(GlassRecovery::new(shift))
}
