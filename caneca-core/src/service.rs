//! High-level facade owning the run-level fleet state.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::action::CollectionAction;
use crate::dispatch::{DispatchError, Dispatcher};
use crate::model::{Material, Person, Route, SharedShift, Shift, Vehicle};
use crate::report::sum_material;
use crate::validate::{is_valid_person_id, is_valid_plate};

#[derive(thiserror::Error, Debug)]
/// Errors raised by fleet registration and shift assembly.
pub enum FleetError {
    /// Plate did not match either accepted format.
    #[error("Invalid plate: {0}")]
    InvalidPlate(String),
    /// Person identifier was not exactly ten digits.
    #[error("Invalid person id: {0}")]
    InvalidPersonId(String),
    /// A selection index pointed past the end of a fleet collection.
    #[error("Unknown {collection} index: {index}")]
    UnknownIndex {
        /// Which collection was indexed.
        collection: &'static str,
        /// The out-of-range index.
        index: usize,
    },
    /// The same assistant was picked for both slots of a shift.
    #[error("Shift assistants must be two different people")]
    DuplicateAssistants,
    /// Triggering the dispatcher failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[derive(Default)]
/// Run-level fleet state: registered routes, trucks, and crew, the shifts
/// assembled from them, and the dispatcher that triggers collection
/// actions.
///
/// Registrations apply the format validators, so every caller gets the
/// same retryable rejections; selection happens by index into the
/// registered collections, mirroring how a menu-driven caller presents
/// them.
pub struct FleetService {
    routes: Vec<Arc<Route>>,
    vehicles: Vec<Arc<Vehicle>>,
    drivers: Vec<Arc<Person>>,
    assistants: Vec<Arc<Person>>,
    shifts: Vec<SharedShift>,
    dispatcher: Dispatcher,
}

impl FleetService {
    /// Empty fleet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route and return the shared handle shifts will
    /// reference.
    pub fn add_route(&mut self, route: Route) -> Arc<Route> {
        let route = Arc::new(route);
        self.routes.push(Arc::clone(&route));
        route
    }

    /// Register a truck.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::InvalidPlate`] when the plate fails
    /// validation.
    pub fn register_vehicle(&mut self, plate: &str) -> Result<Arc<Vehicle>, FleetError> {
        if !is_valid_plate(plate) {
            return Err(FleetError::InvalidPlate(plate.to_owned()));
        }
        let vehicle = Arc::new(Vehicle::new(plate));
        self.vehicles.push(Arc::clone(&vehicle));
        tracing::debug!(plate, "vehicle registered");
        Ok(vehicle)
    }

    /// Register a driver.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::InvalidPersonId`] when the identifier is not
    /// exactly ten digits.
    pub fn register_driver(&mut self, name: &str, id: &str) -> Result<Arc<Person>, FleetError> {
        let driver = checked_person(name, id)?;
        self.drivers.push(Arc::clone(&driver));
        Ok(driver)
    }

    /// Register a collection assistant.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::InvalidPersonId`] when the identifier is not
    /// exactly ten digits.
    pub fn register_assistant(&mut self, name: &str, id: &str) -> Result<Arc<Person>, FleetError> {
        let assistant = checked_person(name, id)?;
        self.assistants.push(Arc::clone(&assistant));
        Ok(assistant)
    }

    /// Registered routes, in registration order.
    #[must_use]
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Registered trucks, in registration order.
    #[must_use]
    pub fn vehicles(&self) -> &[Arc<Vehicle>] {
        &self.vehicles
    }

    /// Registered drivers, in registration order.
    #[must_use]
    pub fn drivers(&self) -> &[Arc<Person>] {
        &self.drivers
    }

    /// Registered assistants, in registration order.
    #[must_use]
    pub fn assistants(&self) -> &[Arc<Person>] {
        &self.assistants
    }

    /// Shifts assembled so far, in creation order.
    #[must_use]
    pub fn shifts(&self) -> &[SharedShift] {
        &self.shifts
    }

    /// Assemble a shift from selection indices into the fleet
    /// collections.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::DuplicateAssistants`] when both assistant
    /// slots name the same pick, and [`FleetError::UnknownIndex`] when any
    /// index is out of range.
    pub fn create_shift(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        route: usize,
        vehicle: usize,
        driver: usize,
        assistants: (usize, usize),
    ) -> Result<SharedShift, FleetError> {
        let (first, second) = assistants;
        if first == second {
            return Err(FleetError::DuplicateAssistants);
        }
        let route = pick(&self.routes, route, "route")?;
        let vehicle = pick(&self.vehicles, vehicle, "vehicle")?;
        let driver = pick(&self.drivers, driver, "driver")?;
        let first = pick(&self.assistants, first, "assistant")?;
        let second = pick(&self.assistants, second, "assistant")?;

        let shift = Shift::new(start, end, route, vehicle, driver, (first, second)).into_shared();
        self.shifts.push(Arc::clone(&shift));
        tracing::debug!(total = self.shifts.len(), "shift created");
        Ok(shift)
    }

    /// Load the dispatcher with an action, trigger it, and report the
    /// quantity the action recorded.
    ///
    /// # Errors
    ///
    /// Propagates dispatch failures as [`FleetError::Dispatch`].
    pub fn run_collection(
        &mut self,
        action: Box<dyn CollectionAction>,
    ) -> Result<u64, FleetError> {
        self.dispatcher.set_action(action);
        self.dispatcher.run()?;
        Ok(self
            .dispatcher
            .action()
            .map_or(0, |action| action.last_quantity()))
    }

    /// Total quantity of one material recovered across all shifts that
    /// started on the given date.
    #[must_use]
    pub fn recovered_on(&self, material: Material, date: NaiveDate) -> u64 {
        sum_material(&self.shifts, material, date)
    }
}

fn checked_person(name: &str, id: &str) -> Result<Arc<Person>, FleetError> {
    if !is_valid_person_id(id) {
        return Err(FleetError::InvalidPersonId(id.to_owned()));
    }
    Ok(Arc::new(Person::new(name, id)))
}

fn pick<T>(items: &[Arc<T>], index: usize, collection: &'static str) -> Result<Arc<T>, FleetError> {
    items
        .get(index)
        .cloned()
        .ok_or(FleetError::UnknownIndex { collection, index })
}
