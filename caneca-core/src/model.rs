//! Domain data structures for crews, trucks, routes, shifts, and ledgers.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Material kinds a shift's ledger accounts for.
pub enum Material {
    /// Glass bottles and jars.
    Glass,
    /// Paper and cardboard.
    Paper,
    /// Plastics and light packaging.
    Plastic,
    /// Metal scrap.
    Metal,
    /// Organic waste.
    Organic,
}

impl Material {
    /// Every material kind, in ledger order.
    pub const ALL: [Material; 5] = [
        Material::Glass,
        Material::Paper,
        Material::Plastic,
        Material::Metal,
        Material::Organic,
    ];
}

impl fmt::Display for Material {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Material::Glass => "glass",
            Material::Paper => "paper",
            Material::Plastic => "plastic",
            Material::Metal => "metal",
            Material::Organic => "organic",
        };
        write!(formatter, "{slug}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier carried by every crew member.
pub struct PersonId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Crew member assigned to shifts as driver or assistant.
pub struct Person {
    /// Full name.
    pub name: String,
    /// Identifier; the registering caller guarantees it is exactly ten digits.
    pub id: PersonId,
}

impl Person {
    /// Construct a person from pre-validated parts.
    #[must_use]
    pub fn new<N: Into<String>, I: Into<String>>(name: N, id: I) -> Self {
        Self {
            name: name.into(),
            id: PersonId(id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Registration plate of a collection truck.
pub struct Plate(pub String);

impl fmt::Display for Plate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Collection truck identified by its registration plate.
pub struct Vehicle {
    /// Plate in one of the two accepted formats.
    pub plate: Plate,
}

impl Vehicle {
    /// Construct a truck from a pre-validated plate.
    #[must_use]
    pub fn new<P: Into<String>>(plate: P) -> Self {
        Self {
            plate: Plate(plate.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
/// Geographic point a route passes through.
pub struct Waypoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
/// Position sample recorded while a route was being driven.
pub struct VisitedSample {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// When the position was recorded.
    pub recorded_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Ordered waypoints a truck follows, plus a log of positions actually
/// visited while driving it.
pub struct Route {
    /// Planned waypoints in driving order.
    pub waypoints: Vec<Waypoint>,
    visited: Vec<VisitedSample>,
}

impl Route {
    /// Create a route over the given waypoints with an empty visited log.
    #[must_use]
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints,
            visited: Vec::new(),
        }
    }

    /// Append a position sample to the visited log.
    ///
    /// The log is independent of the waypoint list. Appending needs
    /// exclusive access, so it happens before the route is shared across
    /// shifts.
    pub fn log_visit(&mut self, latitude: f64, longitude: f64, recorded_at: NaiveDateTime) {
        self.visited.push(VisitedSample {
            latitude,
            longitude,
            recorded_at,
        });
    }

    /// Position samples recorded so far, in insertion order.
    #[must_use]
    pub fn visited(&self) -> &[VisitedSample] {
        &self.visited
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Accumulated recovered quantities for one shift, one entry per material
/// kind.
///
/// All five entries start at zero and only ever grow. Accumulation
/// saturates instead of wrapping.
pub struct Ledger {
    glass: u64,
    paper: u64,
    plastic: u64,
    metal: u64,
    organic: u64,
}

impl Ledger {
    /// Ledger with all five entries at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated quantity for one material kind.
    #[must_use]
    pub fn amount(&self, material: Material) -> u64 {
        match material {
            Material::Glass => self.glass,
            Material::Paper => self.paper,
            Material::Plastic => self.plastic,
            Material::Metal => self.metal,
            Material::Organic => self.organic,
        }
    }

    /// Add `amount` to the entry for `material`.
    pub fn accumulate(&mut self, material: Material, amount: u64) {
        let entry = match material {
            Material::Glass => &mut self.glass,
            Material::Paper => &mut self.paper,
            Material::Plastic => &mut self.plastic,
            Material::Metal => &mut self.metal,
            Material::Organic => &mut self.organic,
        };
        *entry = entry.saturating_add(amount);
    }
}

#[derive(Debug)]
/// One scheduled work period binding a crew, truck, and route, with the
/// running ledger of what the crew recovered.
pub struct Shift {
    /// Start of the work window.
    pub start: NaiveDateTime,
    /// End of the work window.
    pub end: NaiveDateTime,
    /// Route driven during the shift; shared read-only with other shifts.
    pub route: Arc<Route>,
    /// Truck assigned to the shift.
    pub vehicle: Arc<Vehicle>,
    /// Crew member driving the truck.
    pub driver: Arc<Person>,
    /// The two collection assistants; callers guarantee they are distinct.
    pub assistants: (Arc<Person>, Arc<Person>),
    ledger: Ledger,
}

impl Shift {
    /// Bind a work window, route, truck, and crew into a shift with an
    /// all-zero ledger.
    #[must_use]
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        route: Arc<Route>,
        vehicle: Arc<Vehicle>,
        driver: Arc<Person>,
        assistants: (Arc<Person>, Arc<Person>),
    ) -> Self {
        Self {
            start,
            end,
            route,
            vehicle,
            driver,
            assistants,
            ledger: Ledger::new(),
        }
    }

    /// Add recovered quantities to the ledger, one amount per material
    /// kind.
    pub fn accumulate(&mut self, glass: u64, paper: u64, plastic: u64, metal: u64, organic: u64) {
        self.ledger.accumulate(Material::Glass, glass);
        self.ledger.accumulate(Material::Paper, paper);
        self.ledger.accumulate(Material::Plastic, plastic);
        self.ledger.accumulate(Material::Metal, metal);
        self.ledger.accumulate(Material::Organic, organic);
    }

    /// The shift's recovery ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Wrap the shift for sharing between the fleet and in-flight actions.
    #[must_use]
    pub fn into_shared(self) -> SharedShift {
        Arc::new(Mutex::new(self))
    }
}

/// Shift shared between the run-level fleet and the actions targeting it.
pub type SharedShift = Arc<Mutex<Shift>>;

/// Lock a shared shift for reading or accumulation.
///
/// Poisoning is recovered from: the ledger is plain data and every
/// mutation is a single arithmetic step, so the data behind a poisoned
/// lock is never half-written.
#[must_use]
pub fn lock_shift(shift: &SharedShift) -> MutexGuard<'_, Shift> {
    shift.lock().unwrap_or_else(PoisonError::into_inner)
}
