//! One-slot dispatcher that decouples loading an action from running it.

use crate::action::CollectionAction;

#[derive(thiserror::Error, Debug)]
/// Errors raised when triggering a dispatch.
pub enum DispatchError {
    /// [`Dispatcher::run`] was called before any action was set.
    #[error("No action set")]
    NoAction,
}

#[derive(Default)]
/// Holds at most one pending action and triggers it on demand.
pub struct Dispatcher {
    action: Option<Box<dyn CollectionAction>>,
}

impl Dispatcher {
    /// Dispatcher with no action loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an action, replacing whichever one was held before.
    pub fn set_action(&mut self, action: Box<dyn CollectionAction>) {
        self.action = Some(action);
    }

    /// Execute the held action.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NoAction`] when nothing is loaded; no
    /// shift is touched in that case.
    pub fn run(&mut self) -> Result<(), DispatchError> {
        let action = self.action.as_mut().ok_or(DispatchError::NoAction)?;
        action.execute();
        tracing::debug!(quantity = action.last_quantity(), "collection action executed");
        Ok(())
    }

    /// The currently held action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&dyn CollectionAction> {
        self.action.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::model::{Material, Person, Route, SharedShift, Shift, Vehicle, lock_shift};

    struct FixedRecovery {
        shift: SharedShift,
        quantity: u64,
        last_quantity: u64,
    }

    impl FixedRecovery {
        fn new(shift: &SharedShift, quantity: u64) -> Self {
            Self {
                shift: Arc::clone(shift),
                quantity,
                last_quantity: 0,
            }
        }
    }

    impl CollectionAction for FixedRecovery {
        fn execute(&mut self) {
            self.last_quantity = self.quantity;
            lock_shift(&self.shift).accumulate(self.quantity, 0, 0, 0, 0);
        }

        fn last_quantity(&self) -> u64 {
            self.last_quantity
        }
    }

    fn sample_shift() -> SharedShift {
        let day = NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date");
        Shift::new(
            day.and_hms_opt(6, 0, 0).expect("valid time"),
            day.and_hms_opt(14, 0, 0).expect("valid time"),
            Arc::new(Route::new(Vec::new())),
            Arc::new(Vehicle::new("AB 1234")),
            Arc::new(Person::new("Luis Prada", "1098765432")),
            (
                Arc::new(Person::new("Marta Rojas", "1023456789")),
                Arc::new(Person::new("Iván Soto", "1011121314")),
            ),
        )
        .into_shared()
    }

    #[test]
    fn run_without_action_fails() {
        let mut dispatcher = Dispatcher::new();
        assert!(matches!(dispatcher.run(), Err(DispatchError::NoAction)));
    }

    #[test]
    fn run_executes_the_held_action() {
        let shift = sample_shift();
        let mut dispatcher = Dispatcher::new();
        dispatcher.set_action(Box::new(FixedRecovery::new(&shift, 42)));
        dispatcher.run().expect("action is loaded");

        assert_eq!(lock_shift(&shift).ledger().amount(Material::Glass), 42);
        let action = dispatcher.action().expect("action is still held");
        assert_eq!(action.last_quantity(), 42);
    }

    #[test]
    fn rerunning_accumulates_again() {
        let shift = sample_shift();
        let mut dispatcher = Dispatcher::new();
        dispatcher.set_action(Box::new(FixedRecovery::new(&shift, 15)));
        dispatcher.run().expect("action is loaded");
        dispatcher.run().expect("action is loaded");

        assert_eq!(lock_shift(&shift).ledger().amount(Material::Glass), 30);
    }

    #[test]
    fn set_action_replaces_the_previous_one() {
        let shift = sample_shift();
        let mut dispatcher = Dispatcher::new();
        dispatcher.set_action(Box::new(FixedRecovery::new(&shift, 10)));
        dispatcher.set_action(Box::new(FixedRecovery::new(&shift, 3)));
        dispatcher.run().expect("action is loaded");

        assert_eq!(lock_shift(&shift).ledger().amount(Material::Glass), 3);
    }
}
