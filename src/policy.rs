//! Booking eligibility and role authorization.
//!
//! Every form and page consults this one module before offering an action or
//! issuing a request to the backend; the rules are not re-implemented
//! anywhere else. Decisions here only drive UI affordances — the backend
//! enforces the same rules authoritatively and may still reject an operation
//! this module permitted (clock skew, or another actor got there first), so a
//! `403` from the API overrides any local decision.

use jiff::{SignedDuration, Timestamp, Zoned};
use thiserror::Error;
use tracing::debug;

use crate::{
    schedule::OpeningHours,
    turno::{EstadoTurno, MAX_DESCRIPCION, Turno},
    usuario::{Actor, Role},
};

/// Why an action was refused.
///
/// Rule violations are values, never panics: callers map each variant to the
/// message they want to show and simply skip the network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EligibilityError {
    /// The requested time is inside the minimum-notice window.
    #[error("the requested time is inside the minimum notice window")]
    TooSoon,

    /// The requested time is not a bookable slot on the opening grid.
    #[error("the requested time is outside the studio opening grid")]
    OutsideOpeningHours,

    /// A client tried to act on a turno owned by another client.
    #[error("the turno belongs to another client")]
    NotOwner,

    /// A client tried to set a state it may never set.
    #[error("this role may not set the requested state")]
    StateChangeForbidden,

    /// Defensive guard for input the caller should have rejected already.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// When a state value is being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A brand-new turno is being created.
    Creation,

    /// An existing turno is being edited.
    Update,
}

const SOLO_SOLICITADO: &[EstadoTurno] = &[EstadoTurno::Solicitado];
const NINGUNO: &[EstadoTurno] = &[];

/// The studio's booking rules.
///
/// Pure and side-effect free: callers pass in all context, including the
/// current time, so the same inputs always produce the same decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPolicy {
    min_notice: SignedDuration,
    hours: OpeningHours,
    staff_on_grid: bool,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        BookingPolicy {
            min_notice: SignedDuration::from_hours(48),
            hours: OpeningHours::default(),
            staff_on_grid: true,
        }
    }
}

impl BookingPolicy {
    /// Create a policy from its parts. Most callers load one via
    /// [`StudioConfig`](crate::config::StudioConfig) instead.
    #[must_use]
    pub fn new(min_notice: SignedDuration, hours: OpeningHours, staff_on_grid: bool) -> Self {
        BookingPolicy {
            min_notice,
            hours,
            staff_on_grid,
        }
    }

    /// Minimum lead time for client-initiated bookings.
    #[must_use]
    pub const fn min_notice(&self) -> SignedDuration {
        self.min_notice
    }

    /// The opening grid in force.
    #[must_use]
    pub const fn hours(&self) -> &OpeningHours {
        &self.hours
    }

    /// Whether `scheduled_at` is far enough ahead of `now` for a client to
    /// book or still touch it. The boundary is inclusive: exactly the
    /// minimum notice is eligible. Times in the past never are.
    #[must_use]
    pub fn is_within_booking_window(&self, scheduled_at: Timestamp, now: Timestamp) -> bool {
        scheduled_at.duration_since(now) >= self.min_notice
    }

    /// May `actor` modify `turno` (reschedule, edit the description) as of
    /// `now`?
    ///
    /// Staff may always. A client must own the turno and the turno must
    /// still be outside the minimum-notice cutoff.
    ///
    /// # Errors
    ///
    /// - [`EligibilityError::NotOwner`]: the turno belongs to another client.
    /// - [`EligibilityError::TooSoon`]: the turno is inside the cutoff.
    pub fn authorize_modify(
        &self,
        actor: Actor,
        turno: &Turno,
        now: Timestamp,
    ) -> Result<(), EligibilityError> {
        match actor {
            Actor::Dueno | Actor::Admin => Ok(()),
            Actor::Cliente(id) => {
                if id != turno.cliente.id {
                    debug!(turno = turno.id.0, "modify denied: actor is not the owner");
                    return Err(EligibilityError::NotOwner);
                }

                if !self.is_within_booking_window(turno.fecha_hora, now) {
                    debug!(turno = turno.id.0, "modify denied: inside the notice window");
                    return Err(EligibilityError::TooSoon);
                }

                Ok(())
            }
        }
    }

    /// Boolean form of [`Self::authorize_modify`].
    #[must_use]
    pub fn can_modify(&self, actor: Actor, turno: &Turno, now: Timestamp) -> bool {
        self.authorize_modify(actor, turno, now).is_ok()
    }

    /// May `actor` delete (cancel) `turno` as of `now`? Same rule as
    /// modification: staff at any time, the owning client only within the
    /// booking window.
    ///
    /// # Errors
    ///
    /// - [`EligibilityError::NotOwner`]: the turno belongs to another client.
    /// - [`EligibilityError::TooSoon`]: the turno is inside the cutoff.
    pub fn authorize_delete(
        &self,
        actor: Actor,
        turno: &Turno,
        now: Timestamp,
    ) -> Result<(), EligibilityError> {
        self.authorize_modify(actor, turno, now)
    }

    /// May `actor` see `turno` at all? Staff see every turno; clients only
    /// their own.
    ///
    /// # Errors
    ///
    /// - [`EligibilityError::NotOwner`]: the turno belongs to another client.
    pub fn authorize_view(&self, actor: Actor, turno: &Turno) -> Result<(), EligibilityError> {
        match actor {
            Actor::Dueno | Actor::Admin => Ok(()),
            Actor::Cliente(id) => {
                if id == turno.cliente.id {
                    Ok(())
                } else {
                    Err(EligibilityError::NotOwner)
                }
            }
        }
    }

    /// Boolean form of [`Self::authorize_view`].
    #[must_use]
    pub fn can_view(&self, actor: Actor, turno: &Turno) -> bool {
        self.authorize_view(actor, turno).is_ok()
    }

    /// May `actor` submit `estado` during `phase`?
    ///
    /// Staff may set any state at any time. A client may only submit
    /// `SOLICITADO`, and only when creating a brand-new turno; afterwards the
    /// state control is read-only for them.
    ///
    /// # Errors
    ///
    /// - [`EligibilityError::StateChangeForbidden`]: the combination is not
    ///   allowed for this role.
    pub fn authorize_set_state(
        &self,
        actor: Actor,
        estado: EstadoTurno,
        phase: Phase,
    ) -> Result<(), EligibilityError> {
        if settable_states(actor.role(), phase).contains(&estado) {
            Ok(())
        } else {
            debug!(?estado, ?phase, role = actor.role().as_str(), "state change denied");
            Err(EligibilityError::StateChangeForbidden)
        }
    }

    /// Boolean form of [`Self::authorize_set_state`].
    #[must_use]
    pub fn can_set_state(&self, actor: Actor, estado: EstadoTurno, phase: Phase) -> bool {
        self.authorize_set_state(actor, estado, phase).is_ok()
    }

    /// Validate the requested time of a new turno.
    ///
    /// Clients must respect the minimum notice; staff skip that check but are
    /// still held to the opening grid unless the policy was built with
    /// `staff_on_grid` off. The wall-clock component is read from
    /// `scheduled_at`'s own time zone, so callers localise to the studio
    /// zone before asking.
    ///
    /// # Errors
    ///
    /// - [`EligibilityError::TooSoon`]: a client asked for a time inside the
    ///   notice window.
    /// - [`EligibilityError::OutsideOpeningHours`]: the time of day is not a
    ///   bookable slot.
    pub fn validate_new_turno_time(
        &self,
        actor: Actor,
        scheduled_at: &Zoned,
        now: &Zoned,
    ) -> Result<(), EligibilityError> {
        if !actor.is_staff()
            && !self.is_within_booking_window(scheduled_at.timestamp(), now.timestamp())
        {
            debug!(%scheduled_at, "new turno denied: inside the notice window");
            return Err(EligibilityError::TooSoon);
        }

        let grid_applies = !actor.is_staff() || self.staff_on_grid;
        if grid_applies && !self.hours.contains(scheduled_at.time()) {
            debug!(%scheduled_at, "new turno denied: off the opening grid");
            return Err(EligibilityError::OutsideOpeningHours);
        }

        Ok(())
    }

    /// Full form-submit check for a new turno: description first, then time,
    /// so callers surface errors in the order the form presents the fields.
    ///
    /// # Errors
    ///
    /// - [`EligibilityError::InvalidInput`]: unusable description.
    /// - [`EligibilityError::TooSoon`]: a client asked for a time inside the
    ///   notice window.
    /// - [`EligibilityError::OutsideOpeningHours`]: the time of day is not a
    ///   bookable slot.
    pub fn validate_new_turno(
        &self,
        actor: Actor,
        scheduled_at: &Zoned,
        descripcion: &str,
        now: &Zoned,
    ) -> Result<(), EligibilityError> {
        validate_descripcion(descripcion)?;
        self.validate_new_turno_time(actor, scheduled_at, now)
    }
}

/// The states `role` may submit during `phase`. An empty slice means the
/// state control should render read-only: the same source of truth drives
/// both the selector options and [`BookingPolicy::authorize_set_state`].
#[must_use]
pub fn settable_states(role: Role, phase: Phase) -> &'static [EstadoTurno] {
    if role.is_staff() {
        &EstadoTurno::ALL
    } else if phase == Phase::Creation {
        SOLO_SOLICITADO
    } else {
        NINGUNO
    }
}

/// Validate the free-text work description: non-empty once trimmed and at
/// most [`MAX_DESCRIPCION`] characters, matching the backend column.
///
/// # Errors
///
/// - [`EligibilityError::InvalidInput`]: empty or oversized description.
pub fn validate_descripcion(descripcion: &str) -> Result<(), EligibilityError> {
    if descripcion.trim().is_empty() {
        return Err(EligibilityError::InvalidInput("empty descripcion"));
    }

    if descripcion.chars().count() > MAX_DESCRIPCION {
        return Err(EligibilityError::InvalidInput("descripcion too long"));
    }

    Ok(())
}
