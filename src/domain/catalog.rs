use crate::domain::{SlotLabelError, TimeSlot};

pub const DEFAULT_TIME_SLOTS: [&str; 11] = [
    "9:00 AM – 10:00 AM",
    "10:00 AM – 11:00 AM",
    "11:00 AM – 12:00 PM",
    "12:00 PM – 1:00 PM",
    "1:00 PM – 2:00 PM",
    "2:00 PM – 3:00 PM",
    "3:00 PM – 4:00 PM",
    "4:00 PM – 5:00 PM",
    "5:00 PM – 6:00 PM",
    "6:00 PM – 7:00 PM",
    "7:00 PM – 8:00 PM",
];

pub const DEFAULT_SERVICES: [&str; 6] = [
    "Individual Therapy",
    "Couples Therapy",
    "Family Therapy",
    "Anxiety Treatment",
    "Stress Management",
    "Online Therapy",
];

/// The options a client can pick from. Built once at startup and shared
/// read-only by every request.
#[derive(Debug, Clone)]
pub struct BookingCatalog {
    time_slots: Vec<TimeSlot>,
    services: Vec<String>,
}

impl BookingCatalog {
    pub fn new(time_slots: Vec<String>, services: Vec<String>) -> Result<Self, SlotLabelError> {
        let time_slots = time_slots
            .into_iter()
            .map(TimeSlot::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            time_slots,
            services,
        })
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn find_slot(&self, label: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|slot| slot.label() == label)
    }

    /// Exact, case-sensitive title match.
    pub fn find_service(&self, title: &str) -> Option<&str> {
        self.services
            .iter()
            .map(String::as_str)
            .find(|service| *service == title)
    }
}

impl Default for BookingCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
        )
        .expect("default time slot labels are well formed")
    }
}
