//! Studio configuration.
//!
//! The booking rules are policy, not code: a deployment tunes them through a
//! small YAML document. Absent fields fall back to the studio defaults
//! (48-hour notice, 09:00–20:00 grid in 15-minute slots, staff bound to the
//! grid, owner id 1).

use jiff::{SignedDuration, civil::Time};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    policy::BookingPolicy,
    schedule::{OpeningHours, OpeningHoursError},
    usuario::UsuarioId,
};

/// Errors raised while loading studio configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML for this schema.
    #[error("failed to parse studio configuration: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The configured grid is unusable.
    #[error(transparent)]
    Hours(#[from] OpeningHoursError),

    /// The minimum notice must be at least one hour.
    #[error("minimum notice must be positive, got {0} hours")]
    NonPositiveNotice(i64),
}

/// Tunable booking rules plus the studio's fixed staff identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudioConfig {
    /// Minimum lead time, in hours, for client-initiated bookings.
    #[serde(default = "default_min_notice_hours")]
    pub min_notice_hours: i64,

    /// First bookable time of day.
    #[serde(default = "default_open")]
    pub open: Time,

    /// Last bookable time of day (itself bookable).
    #[serde(default = "default_close")]
    pub close: Time,

    /// Distance between consecutive slots, in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u8,

    /// Whether staff-created turnos must also land on the grid.
    #[serde(default = "default_staff_on_grid")]
    pub staff_on_grid: bool,

    /// The single staff identity every turno is assigned to.
    #[serde(default = "default_dueno")]
    pub dueno: UsuarioId,
}

fn default_min_notice_hours() -> i64 {
    48
}

fn default_open() -> Time {
    Time::constant(9, 0, 0, 0)
}

fn default_close() -> Time {
    Time::constant(20, 0, 0, 0)
}

fn default_slot_minutes() -> u8 {
    15
}

fn default_staff_on_grid() -> bool {
    true
}

fn default_dueno() -> UsuarioId {
    UsuarioId(1)
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            min_notice_hours: default_min_notice_hours(),
            open: default_open(),
            close: default_close(),
            slot_minutes: default_slot_minutes(),
            staff_on_grid: default_staff_on_grid(),
            dueno: default_dueno(),
        }
    }
}

impl StudioConfig {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Yaml`]: the document does not match the schema.
    /// - [`ConfigError::Hours`]: the configured grid is unusable.
    /// - [`ConfigError::NonPositiveNotice`]: a zero or negative notice.
    pub fn from_yaml(document: &str) -> Result<Self, ConfigError> {
        let config: StudioConfig = serde_norway::from_str(document)?;
        config.policy()?;

        Ok(config)
    }

    /// Build the validated [`BookingPolicy`] these settings describe.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Hours`]: the configured grid is unusable.
    /// - [`ConfigError::NonPositiveNotice`]: a zero or negative notice.
    pub fn policy(&self) -> Result<BookingPolicy, ConfigError> {
        if self.min_notice_hours <= 0 {
            return Err(ConfigError::NonPositiveNotice(self.min_notice_hours));
        }

        let hours = OpeningHours::new(self.open, self.close, self.slot_minutes)?;

        Ok(BookingPolicy::new(
            SignedDuration::from_hours(self.min_notice_hours),
            hours,
            self.staff_on_grid,
        ))
    }
}
