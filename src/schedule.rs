//! The studio opening grid.

use jiff::{Span, civil::Time};
use smallvec::SmallVec;
use thiserror::Error;

/// Bookable start times, in ascending order. The default grid holds 45
/// entries, so the list stays inline.
pub type Slots = SmallVec<[Time; 64]>;

/// Errors raised when constructing an invalid opening grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpeningHoursError {
    /// Closing time precedes opening time.
    #[error("closing time {close} is earlier than opening time {open}")]
    Inverted {
        /// The opening boundary.
        open: Time,

        /// The closing boundary.
        close: Time,
    },

    /// Slot length outside 1..=60 minutes.
    #[error("slot length must be between 1 and 60 minutes, got {0}")]
    SlotLength(u8),

    /// Closing time is not itself a grid point, which would make the last
    /// bookable slot and the closing boundary disagree.
    #[error("closing time {close} does not fall on the {slot_minutes}-minute grid")]
    Misaligned {
        /// The closing boundary.
        close: Time,

        /// The configured slot length.
        slot_minutes: u8,
    },
}

/// The fixed grid of bookable start times.
///
/// Both boundaries are bookable: with the default grid the last slot is
/// 20:00 exactly, and 20:15 onward is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    open: Time,
    close: Time,
    slot_minutes: u8,
}

impl Default for OpeningHours {
    fn default() -> Self {
        OpeningHours {
            open: Time::constant(9, 0, 0, 0),
            close: Time::constant(20, 0, 0, 0),
            slot_minutes: 15,
        }
    }
}

impl OpeningHours {
    /// Create a validated grid between `open` and `close` inclusive.
    ///
    /// # Errors
    ///
    /// - [`OpeningHoursError::Inverted`]: `close` precedes `open`.
    /// - [`OpeningHoursError::SlotLength`]: slot length outside 1..=60 minutes.
    /// - [`OpeningHoursError::Misaligned`]: `close` is not a grid point.
    pub fn new(open: Time, close: Time, slot_minutes: u8) -> Result<Self, OpeningHoursError> {
        if close < open {
            return Err(OpeningHoursError::Inverted { open, close });
        }

        if slot_minutes == 0 || slot_minutes > 60 {
            return Err(OpeningHoursError::SlotLength(slot_minutes));
        }

        let span = minutes_of(close) - minutes_of(open);
        if span % i32::from(slot_minutes) != 0 {
            return Err(OpeningHoursError::Misaligned {
                close,
                slot_minutes,
            });
        }

        Ok(OpeningHours {
            open,
            close,
            slot_minutes,
        })
    }

    /// First bookable time of day.
    #[must_use]
    pub const fn open(&self) -> Time {
        self.open
    }

    /// Last bookable time of day.
    #[must_use]
    pub const fn close(&self) -> Time {
        self.close
    }

    /// Distance between consecutive slots, in minutes.
    #[must_use]
    pub const fn slot_minutes(&self) -> u8 {
        self.slot_minutes
    }

    /// The ascending sequence of bookable start times.
    ///
    /// Purely a function of the grid: recomputing it always yields the same
    /// sequence.
    #[must_use]
    pub fn slots(&self) -> Slots {
        self.open
            .series(Span::new().minutes(i64::from(self.slot_minutes)))
            .take_while(|slot| *slot <= self.close)
            .collect()
    }

    /// `"HH:MM"` labels for every slot, for time-selection controls.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.slots()
            .iter()
            .map(|slot| slot.strftime("%H:%M").to_string())
            .collect()
    }

    /// Whether a wall-clock time is a bookable grid point.
    ///
    /// Seconds and sub-seconds must be zero; anything between grid points or
    /// outside the boundaries is closed.
    #[must_use]
    pub fn contains(&self, time: Time) -> bool {
        if time.second() != 0 || time.subsec_nanosecond() != 0 {
            return false;
        }

        if time < self.open || time > self.close {
            return false;
        }

        (minutes_of(time) - minutes_of(self.open)) % i32::from(self.slot_minutes) == 0
    }
}

fn minutes_of(time: Time) -> i32 {
    i32::from(time.hour()) * 60 + i32::from(time.minute())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_grid_runs_nine_to_eight_in_quarter_hours() {
        let slots = OpeningHours::default().slots();

        // 09:00 through 19:45 is 44 slots, plus the 20:00 boundary itself.
        assert_eq!(slots.len(), 45);
        assert_eq!(slots.first().copied(), Some(Time::constant(9, 0, 0, 0)));
        assert_eq!(slots.last().copied(), Some(Time::constant(20, 0, 0, 0)));
    }

    #[test]
    fn slots_are_strictly_ascending_on_the_quarter_hour() {
        let slots = OpeningHours::default().slots();

        assert!(
            slots
                .iter()
                .zip(slots.iter().skip(1))
                .all(|(earlier, later)| earlier < later)
        );
        assert!(
            slots
                .iter()
                .all(|slot| matches!(slot.minute(), 0 | 15 | 30 | 45))
        );
    }

    #[test]
    fn slot_generation_is_deterministic() {
        let hours = OpeningHours::default();

        assert_eq!(hours.slots(), hours.slots());
        assert_eq!(hours.labels(), hours.labels());
    }

    #[test]
    fn labels_are_zero_padded() {
        let labels = OpeningHours::default().labels();

        assert_eq!(labels.first().map(String::as_str), Some("09:00"));
        assert_eq!(labels.last().map(String::as_str), Some("20:00"));
        assert!(labels.iter().any(|label| label == "09:15"));
        assert!(!labels.iter().any(|label| label == "20:15"));
    }

    #[test]
    fn closing_boundary_is_bookable_but_nothing_after() {
        let hours = OpeningHours::default();

        assert!(hours.contains(Time::constant(20, 0, 0, 0)));
        assert!(!hours.contains(Time::constant(20, 15, 0, 0)));
        assert!(!hours.contains(Time::constant(8, 45, 0, 0)));
    }

    #[test]
    fn off_grid_times_are_closed() {
        let hours = OpeningHours::default();

        assert!(hours.contains(Time::constant(10, 45, 0, 0)));
        assert!(!hours.contains(Time::constant(10, 7, 0, 0)));
        assert!(!hours.contains(Time::constant(10, 45, 30, 0)));
        assert!(!hours.contains(Time::constant(10, 45, 0, 1)));
    }

    #[test]
    fn custom_grid_generates_expected_slots() -> TestResult {
        let hours = OpeningHours::new(Time::constant(10, 0, 0, 0), Time::constant(12, 0, 0, 0), 30)?;

        assert_eq!(hours.slots().len(), 5);
        assert_eq!(
            hours.labels(),
            ["10:00", "10:30", "11:00", "11:30", "12:00"]
        );

        Ok(())
    }

    #[test]
    fn invalid_grids_are_rejected() {
        let open = Time::constant(9, 0, 0, 0);
        let close = Time::constant(20, 0, 0, 0);

        assert_eq!(
            OpeningHours::new(close, open, 15),
            Err(OpeningHoursError::Inverted {
                open: close,
                close: open
            })
        );
        assert_eq!(
            OpeningHours::new(open, close, 0),
            Err(OpeningHoursError::SlotLength(0))
        );
        assert_eq!(
            OpeningHours::new(open, Time::constant(20, 10, 0, 0), 15),
            Err(OpeningHoursError::Misaligned {
                close: Time::constant(20, 10, 0, 0),
                slot_minutes: 15
            })
        );
    }
}
