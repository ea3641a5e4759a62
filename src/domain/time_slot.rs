use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Separates the start and end of a slot label.
const RANGE_SEPARATOR: char = '–';

/// A labelled one-hour interval from the slot catalog, e.g. `2:00 PM – 3:00 PM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    label: String,
    start: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{label}` is not a valid time slot label: {reason}")]
pub struct SlotLabelError {
    label: String,
    reason: &'static str,
}

impl TimeSlot {
    /// Parses `"<H>:<MM> <AM|PM> – <H>:<MM> <AM|PM>"`. Only the start time is read.
    pub fn parse(label: String) -> Result<TimeSlot, SlotLabelError> {
        let fail = |reason| SlotLabelError {
            label: label.clone(),
            reason,
        };
        let (start, _end) = label
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| fail("missing en-dash between start and end"))?;
        let (clock, meridiem) = start
            .trim()
            .split_once(' ')
            .ok_or_else(|| fail("missing AM/PM marker"))?;
        let (hour, minute) = clock
            .split_once(':')
            .ok_or_else(|| fail("missing `:` between hour and minutes"))?;
        let hour: u32 = hour.parse().map_err(|_| fail("hour is not a number"))?;
        let minute: u32 = minute.parse().map_err(|_| fail("minutes are not a number"))?;
        if !(1..=12).contains(&hour) {
            return Err(fail("hour must be between 1 and 12"));
        }
        let hour = match (meridiem.trim(), hour) {
            ("AM", 12) => 0,
            ("AM", hour) => hour,
            ("PM", 12) => 12,
            ("PM", hour) => hour + 12,
            _ => return Err(fail("marker must be AM or PM")),
        };
        let start =
            NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| fail("minutes out of range"))?;
        Ok(Self { label, start })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Whether the slot can still be picked for `day`, as seen at `now`.
    pub fn is_available(&self, day: NaiveDate, now: NaiveDateTime) -> bool {
        if day != now.date() {
            return true;
        }
        day.and_time(self.start) > now
    }
}

impl AsRef<str> for TimeSlot {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SlotAvailability {
    pub label: String,
    pub enabled: bool,
}

/// Projects the catalog onto the chosen day. Order is preserved and nothing is
/// removed; slots that already started today come back disabled.
pub fn compute_available_slots(
    catalog: &[TimeSlot],
    selected_date: Option<NaiveDate>,
    now: NaiveDateTime,
) -> Vec<SlotAvailability> {
    catalog
        .iter()
        .map(|slot| SlotAvailability {
            label: slot.label.clone(),
            enabled: selected_date.map_or(true, |day| slot.is_available(day, now)),
        })
        .collect()
}
