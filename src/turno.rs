//! Turnos: scheduled tattoo sessions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::usuario::Usuario;

/// Maximum length of the free-text work description, matching the backend
/// column size.
pub const MAX_DESCRIPCION: usize = 500;

/// Identifier of a turno, as assigned by the studio backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnoId(pub i64);

/// Lifecycle status of a turno.
///
/// The backend is the authority on transitions; the client side only decides
/// which states a given role may *set* (see
/// [`settable_states`](crate::policy::settable_states)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoTurno {
    /// Requested by a client, awaiting staff action. Initial state of every
    /// client-created turno.
    Solicitado,

    /// Confirmed by staff.
    Confirmado,

    /// Cancelled.
    Cancelado,

    /// The session took place.
    Completado,
}

impl EstadoTurno {
    /// Every state, in lifecycle order.
    pub const ALL: [EstadoTurno; 4] = [
        EstadoTurno::Solicitado,
        EstadoTurno::Confirmado,
        EstadoTurno::Cancelado,
        EstadoTurno::Completado,
    ];

    /// Human-facing label shown in state selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EstadoTurno::Solicitado => "Solicitado",
            EstadoTurno::Confirmado => "Confirmado",
            EstadoTurno::Cancelado => "Cancelado",
            EstadoTurno::Completado => "Completado",
        }
    }

    /// Whether the turno still represents upcoming work.
    #[must_use]
    pub const fn is_activo(self) -> bool {
        matches!(self, EstadoTurno::Solicitado | EstadoTurno::Confirmado)
    }
}

/// One scheduled tattoo session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turno {
    /// Backend-assigned identifier.
    pub id: TurnoId,

    /// The scheduled instant.
    pub fecha_hora: Timestamp,

    /// Current lifecycle state.
    pub estado: EstadoTurno,

    /// Free-text description of the requested work.
    pub descripcion: String,

    /// The client the session is for.
    pub cliente: Usuario,

    /// The staff member who performs the work.
    pub dueno: Usuario,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::fixtures;

    use super::*;

    #[test]
    fn estado_wire_tokens_match_backend_enum() -> TestResult {
        assert_eq!(
            serde_json::to_string(&EstadoTurno::Solicitado)?,
            "\"SOLICITADO\""
        );
        assert_eq!(
            serde_json::from_str::<EstadoTurno>("\"COMPLETADO\"")?,
            EstadoTurno::Completado
        );

        Ok(())
    }

    #[test]
    fn active_states_are_solicitado_and_confirmado() {
        assert!(EstadoTurno::Solicitado.is_activo());
        assert!(EstadoTurno::Confirmado.is_activo());
        assert!(!EstadoTurno::Cancelado.is_activo());
        assert!(!EstadoTurno::Completado.is_activo());
    }

    #[test]
    fn fecha_hora_serialises_camel_case() -> TestResult {
        let now: Timestamp = "2024-08-13T10:00:00Z".parse()?;
        let turno = fixtures::turno_solicitado(TurnoId(1), now);

        let json = serde_json::to_string(&turno)?;

        assert!(json.contains("\"fechaHora\":\"2024-08-15T10:00:00Z\""));
        assert!(!json.contains("fecha_hora"));

        let back: Turno = serde_json::from_str(&json)?;
        assert_eq!(back, turno);

        Ok(())
    }

    #[test]
    fn deserialises_backend_payload_with_offset() -> TestResult {
        let dueno = serde_json::to_string(&fixtures::dueno())?;
        let cliente = serde_json::to_string(&fixtures::cliente())?;
        let json = format!(
            "{{\"id\":7,\"fechaHora\":\"2024-08-15T10:00:00-03:00\",\"estado\":\"CONFIRMADO\",\
             \"descripcion\":\"Lobo aullando en el antebrazo\",\"cliente\":{cliente},\"dueno\":{dueno}}}"
        );

        let turno: Turno = serde_json::from_str(&json)?;

        assert_eq!(turno.id, TurnoId(7));
        assert_eq!(turno.estado, EstadoTurno::Confirmado);
        assert_eq!(turno.fecha_hora, "2024-08-15T13:00:00Z".parse::<Timestamp>()?);

        Ok(())
    }
}
