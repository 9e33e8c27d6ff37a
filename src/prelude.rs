//! Tinta prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{ConfigError, StudioConfig},
    policy::{BookingPolicy, EligibilityError, Phase, settable_states, validate_descripcion},
    schedule::{OpeningHours, OpeningHoursError, Slots},
    session::{MemorySessionStore, RouteDecision, Session, SessionStore, route_decision},
    turno::{EstadoTurno, MAX_DESCRIPCION, Turno, TurnoId},
    usuario::{Actor, Role, Usuario, UsuarioId},
    wire::{AuthResponse, LoginRequest, NuevoTurno, RegisterRequest, TurnoPatch, UsuarioRef},
};
