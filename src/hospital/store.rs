//! In-memory doctor directory and appointment ledger.
//!
//! Both collections live behind one `RwLock` so that creating an appointment
//! checks the doctor and appends in a single critical section.
//!
//! Ids come from monotonic counters seeded past the highest existing id, so
//! an id is never handed out twice even after deletions.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::HospitalError;
use super::models::{Appointment, Doctor, appointment_status, seed_doctors};

#[derive(Debug)]
struct Ledger {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    next_doctor_id: i64,
    next_appointment_id: i64,
}

impl Ledger {
    fn alloc_doctor_id(&mut self) -> i64 {
        let id = self.next_doctor_id;
        self.next_doctor_id += 1;
        id
    }

    fn alloc_appointment_id(&mut self) -> i64 {
        let id = self.next_appointment_id;
        self.next_appointment_id += 1;
        id
    }
}

/// Doctor + appointment store for one hospital service instance.
#[derive(Debug)]
pub struct HospitalStore {
    inner: RwLock<Ledger>,
}

impl HospitalStore {
    /// Store preloaded with the three seed doctors and no appointments.
    pub fn seeded() -> Self {
        Self::with_doctors(seed_doctors())
    }

    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        let next_doctor_id = doctors.iter().map(|d| d.id).max().unwrap_or(0).max(0) + 1;
        Self {
            inner: RwLock::new(Ledger {
                doctors,
                appointments: Vec::new(),
                next_doctor_id,
                next_appointment_id: 1,
            }),
        }
    }

    // No operation leaves the ledger half-updated; poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------
    // Doctors
    // ------------------------------------------------------------------

    /// All doctors, or those whose specialization matches case-insensitively.
    /// An empty filter string means no filter.
    pub fn list_doctors(
        &self,
        specialization: Option<&str>,
    ) -> Result<Vec<Doctor>, HospitalError> {
        let ledger = self.read();
        let result: Vec<Doctor> = match specialization.filter(|s| !s.is_empty()) {
            Some(spec) => ledger
                .doctors
                .iter()
                .filter(|d| d.has_specialization(spec))
                .cloned()
                .collect(),
            None => ledger.doctors.clone(),
        };

        if result.is_empty() {
            return Err(HospitalError::NotFound("No doctors found."));
        }
        Ok(result)
    }

    pub fn add_doctor(&self, name: &str, specialization: &str) -> Doctor {
        let mut ledger = self.write();
        let doctor = Doctor::new(ledger.alloc_doctor_id(), name, specialization);
        ledger.doctors.push(doctor.clone());
        doctor
    }

    /// Delete the first doctor with `doctor_id`. Appointments that reference
    /// it are left untouched.
    pub fn remove_doctor(&self, doctor_id: i64) -> Result<Doctor, HospitalError> {
        let mut ledger = self.write();
        let pos = ledger
            .doctors
            .iter()
            .position(|d| d.id == doctor_id)
            .ok_or(HospitalError::NotFound("Doctor not found"))?;
        Ok(ledger.doctors.remove(pos))
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    pub fn list_appointments(
        &self,
        doctor_id: Option<i64>,
        status: Option<&str>,
    ) -> Result<Vec<Appointment>, HospitalError> {
        let ledger = self.read();
        let result: Vec<Appointment> = ledger
            .appointments
            .iter()
            .filter(|a| doctor_id.is_none_or(|id| a.doctor_id == id))
            .filter(|a| status.is_none_or(|s| a.has_status(s)))
            .cloned()
            .collect();

        if result.is_empty() {
            return Err(HospitalError::NotFound("No matching appointments found."));
        }
        Ok(result)
    }

    /// New appointments always start as `pending`.
    pub fn create_appointment(
        &self,
        patient_name: &str,
        doctor_id: i64,
        date: &str,
    ) -> Result<Appointment, HospitalError> {
        let mut ledger = self.write();
        if !ledger.doctors.iter().any(|d| d.id == doctor_id) {
            return Err(HospitalError::InvalidReference("Invalid doctor ID"));
        }

        let appointment = Appointment {
            id: ledger.alloc_appointment_id(),
            patient_name: patient_name.to_string(),
            doctor_id,
            date: date.to_string(),
            status: appointment_status::PENDING.to_string(),
        };
        ledger.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Overwrite the status. Any string is accepted.
    pub fn update_appointment(
        &self,
        appointment_id: i64,
        status: &str,
    ) -> Result<Appointment, HospitalError> {
        let mut ledger = self.write();
        let appointment = ledger
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or(HospitalError::NotFound("Appointment not found"))?;
        appointment.status = status.to_string();
        Ok(appointment.clone())
    }

    pub fn remove_appointment(&self, appointment_id: i64) -> Result<Appointment, HospitalError> {
        let mut ledger = self.write();
        let pos = ledger
            .appointments
            .iter()
            .position(|a| a.id == appointment_id)
            .ok_or(HospitalError::NotFound("Appointment not found"))?;
        Ok(ledger.appointments.remove(pos))
    }
}

impl Default for HospitalStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_seeded_lists_three_doctors() {
        let store = HospitalStore::seeded();
        let doctors = store.list_doctors(None).unwrap();
        assert_eq!(doctors.len(), 3);
        assert_eq!(doctors, seed_doctors());
    }

    #[test]
    fn test_filter_specialization_any_case() {
        let store = HospitalStore::seeded();
        for spec in ["cardiologist", "CARDIOLOGIST", "Cardiologist"] {
            let doctors = store.list_doctors(Some(spec)).unwrap();
            assert_eq!(doctors.len(), 1);
            assert_eq!(doctors[0].name, "Dr. Winny");
        }
    }

    #[test]
    fn test_empty_specialization_means_no_filter() {
        let store = HospitalStore::seeded();
        assert_eq!(store.list_doctors(Some("")).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_specialization_not_found() {
        let store = HospitalStore::seeded();
        assert_eq!(
            store.list_doctors(Some("Surgeon")),
            Err(HospitalError::NotFound("No doctors found."))
        );
    }

    #[test]
    fn test_empty_store_list_not_found() {
        let store = HospitalStore::with_doctors(Vec::new());
        assert!(matches!(
            store.list_doctors(None),
            Err(HospitalError::NotFound(_))
        ));
    }

    #[test]
    fn test_add_doctor_assigns_next_id() {
        let store = HospitalStore::seeded();
        let d = store.add_doctor("Dr. House", "Diagnostician");
        assert_eq!(d.id, 4);
        assert_eq!(store.list_doctors(None).unwrap().len(), 4);
        assert_eq!(store.list_doctors(Some("diagnostician")).unwrap(), vec![d]);
    }

    #[test]
    fn test_doctor_ids_not_reused_after_delete() {
        let store = HospitalStore::seeded();
        store.remove_doctor(1).unwrap();
        let d = store.add_doctor("Dr. New", "Dentist");
        // count+1 would give 3 and collide with Dr. Sheeba
        assert_eq!(d.id, 4);
        let ids: HashSet<i64> = store
            .list_doctors(None)
            .unwrap()
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_remove_missing_doctor() {
        let store = HospitalStore::seeded();
        assert_eq!(
            store.remove_doctor(42),
            Err(HospitalError::NotFound("Doctor not found"))
        );
        assert_eq!(store.list_doctors(None).unwrap().len(), 3);
    }

    #[test]
    fn test_negative_ids_are_plain_misses() {
        let store = HospitalStore::seeded();
        assert_eq!(
            store.remove_doctor(-1),
            Err(HospitalError::NotFound("Doctor not found"))
        );
        assert_eq!(
            store.create_appointment("Jane", -5, "2025-01-01"),
            Err(HospitalError::InvalidReference("Invalid doctor ID"))
        );
        store.create_appointment("Jane", 1, "2025-01-01").unwrap();
        assert_eq!(
            store.list_appointments(Some(-1), None),
            Err(HospitalError::NotFound("No matching appointments found."))
        );
    }

    #[test]
    fn test_create_appointment_invalid_doctor() {
        let store = HospitalStore::seeded();
        assert_eq!(
            store.create_appointment("Jane", 999, "2025-01-01"),
            Err(HospitalError::InvalidReference("Invalid doctor ID"))
        );
    }

    #[test]
    fn test_create_appointment_pending_unique_ids() {
        let store = HospitalStore::seeded();
        let a1 = store.create_appointment("Jane", 1, "2025-01-01").unwrap();
        let a2 = store.create_appointment("John", 2, "next week").unwrap();
        assert_eq!(a1.status, "pending");
        assert_eq!(a2.status, "pending");
        assert_eq!(a1.id, 1);
        assert_eq!(a2.id, 2);
        assert_eq!(a2.date, "next week");
    }

    #[test]
    fn test_appointment_ids_not_reused_after_delete() {
        let store = HospitalStore::seeded();
        store.create_appointment("A", 1, "d").unwrap();
        store.create_appointment("B", 1, "d").unwrap();
        store.remove_appointment(1).unwrap();
        let c = store.create_appointment("C", 1, "d").unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_list_appointments_filters() {
        let store = HospitalStore::seeded();
        store.create_appointment("A", 1, "d").unwrap();
        store.create_appointment("B", 2, "d").unwrap();
        store.create_appointment("C", 2, "d").unwrap();
        store.update_appointment(3, "Confirmed").unwrap();

        assert_eq!(store.list_appointments(None, None).unwrap().len(), 3);
        assert_eq!(store.list_appointments(Some(2), None).unwrap().len(), 2);

        let confirmed = store.list_appointments(None, Some("confirmed")).unwrap();
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].patient_name, "C");

        let both = store.list_appointments(Some(2), Some("PENDING")).unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].patient_name, "B");

        assert_eq!(
            store.list_appointments(Some(1), Some("confirmed")),
            Err(HospitalError::NotFound("No matching appointments found."))
        );
    }

    #[test]
    fn test_list_appointments_empty_not_found() {
        let store = HospitalStore::seeded();
        assert!(matches!(
            store.list_appointments(None, None),
            Err(HospitalError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_accepts_any_status() {
        let store = HospitalStore::seeded();
        store.create_appointment("A", 1, "d").unwrap();
        let updated = store.update_appointment(1, "rescheduled-maybe").unwrap();
        assert_eq!(updated.status, "rescheduled-maybe");

        let listed = store.list_appointments(None, Some("RESCHEDULED-MAYBE")).unwrap();
        assert_eq!(listed, vec![updated]);
    }

    #[test]
    fn test_update_missing_appointment() {
        let store = HospitalStore::seeded();
        assert_eq!(
            store.update_appointment(7, "confirmed"),
            Err(HospitalError::NotFound("Appointment not found"))
        );
    }

    #[test]
    fn test_delete_last_appointment_then_list_not_found() {
        let store = HospitalStore::seeded();
        let a = store.create_appointment("A", 1, "d").unwrap();
        assert_eq!(store.remove_appointment(a.id).unwrap(), a);
        assert!(matches!(
            store.list_appointments(None, None),
            Err(HospitalError::NotFound(_))
        ));
        assert!(store.remove_appointment(a.id).is_err());
    }

    #[test]
    fn test_deleting_doctor_keeps_appointments() {
        let store = HospitalStore::seeded();
        store.create_appointment("A", 1, "d").unwrap();
        store.remove_doctor(1).unwrap();
        assert!(store.list_doctors(None).unwrap().iter().all(|d| d.id != 1));

        let remaining = store.list_appointments(Some(1), None).unwrap();
        assert_eq!(remaining.len(), 1);
        // ...but new bookings against it are rejected
        assert!(matches!(
            store.create_appointment("B", 1, "d"),
            Err(HospitalError::InvalidReference(_))
        ));
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(HospitalStore::seeded());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| {
                            store
                                .create_appointment(&format!("p{}-{}", t, i), 1, "d")
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 400);
        assert_eq!(store.list_appointments(None, None).unwrap().len(), 400);
    }
}
