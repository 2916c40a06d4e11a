//! Date-scoped aggregation over recorded shifts.

use chrono::NaiveDate;

use crate::model::{Material, SharedShift, lock_shift};

/// Sum one material's recovered quantity across every shift that started
/// on the given calendar date, ignoring time of day.
///
/// Returns 0 when no shift matches. The result reflects whatever
/// accumulation has already happened at call time.
#[must_use]
pub fn sum_material(shifts: &[SharedShift], material: Material, date: NaiveDate) -> u64 {
    shifts
        .iter()
        .map(lock_shift)
        .filter(|shift| shift.start.date() == date)
        .map(|shift| shift.ledger().amount(material))
        .sum()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, NaiveDate, NaiveDateTime};

    use super::*;
    use crate::model::{Person, Route, Shift, Vehicle, lock_shift};

    fn shift_starting(start: NaiveDateTime) -> SharedShift {
        Shift::new(
            start,
            start + Duration::hours(8),
            Arc::new(Route::new(Vec::new())),
            Arc::new(Vehicle::new("ABC 123")),
            Arc::new(Person::new("Luis Prada", "1098765432")),
            (
                Arc::new(Person::new("Marta Rojas", "1023456789")),
                Arc::new(Person::new("Iván Soto", "1011121314")),
            ),
        )
        .into_shared()
    }

    #[test]
    fn sums_only_shifts_starting_on_the_given_date() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date");
        let next_day = day.succ_opt().expect("valid date");

        let first = shift_starting(day.and_hms_opt(6, 0, 0).expect("valid time"));
        let second = shift_starting(day.and_hms_opt(13, 30, 0).expect("valid time"));
        let third = shift_starting(next_day.and_hms_opt(6, 0, 0).expect("valid time"));

        lock_shift(&first).accumulate(40, 0, 0, 0, 0);
        lock_shift(&second).accumulate(25, 0, 0, 0, 0);
        lock_shift(&third).accumulate(99, 0, 0, 0, 0);

        let shifts = vec![first, second, third];
        assert_eq!(sum_material(&shifts, Material::Glass, day), 65);
        assert_eq!(sum_material(&shifts, Material::Glass, next_day), 99);
    }

    #[test]
    fn empty_fleet_sums_to_zero() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date");
        assert_eq!(sum_material(&[], Material::Glass, day), 0);
    }

    #[test]
    fn unmatched_date_sums_to_zero() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date");
        let shift = shift_starting(day.and_hms_opt(6, 0, 0).expect("valid time"));
        lock_shift(&shift).accumulate(40, 0, 0, 0, 0);

        let elsewhere = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        assert_eq!(sum_material(&[shift], Material::Glass, elsewhere), 0);
    }

    #[test]
    fn aggregates_any_material_kind() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date");
        let shift = shift_starting(day.and_hms_opt(6, 0, 0).expect("valid time"));
        lock_shift(&shift).accumulate(0, 7, 0, 11, 0);

        let shifts = vec![shift];
        assert_eq!(sum_material(&shifts, Material::Paper, day), 7);
        assert_eq!(sum_material(&shifts, Material::Metal, day), 11);
        assert_eq!(sum_material(&shifts, Material::Organic, day), 0);
    }
}
