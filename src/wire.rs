//! Bodies exchanged with the studio backend.
//!
//! This crate never talks to the network itself; the consuming layer issues
//! the HTTP calls and uses these types to build and read the JSON. Field and
//! token spellings follow the backend exactly.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    session::Session,
    turno::EstadoTurno,
    usuario::{Role, Usuario, UsuarioId},
};

/// `POST /auth/login` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,

    /// Plain-text password; the backend hashes it.
    pub password: String,
}

/// `POST /auth/register` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// First name.
    pub nombre: String,

    /// Surname.
    pub apellido: String,

    /// Contact phone number.
    pub celular: String,

    /// Login handle.
    pub username: String,

    /// Contact email, unique per user.
    pub email: String,

    /// Plain-text password; the backend hashes it.
    pub password: String,

    /// Requested role.
    pub role: Role,
}

impl RegisterRequest {
    /// Self-service registration: the public form always creates clients.
    #[must_use]
    pub fn cliente(
        nombre: String,
        apellido: String,
        celular: String,
        username: String,
        email: String,
        password: String,
    ) -> Self {
        RegisterRequest {
            nombre,
            apellido,
            celular,
            username,
            email,
            password,
            role: Role::Cliente,
        }
    }
}

/// `POST /auth/login` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent calls.
    pub token: String,

    /// The authenticated user.
    pub user: Usuario,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session {
            token: response.token,
            user: response.user,
        }
    }
}

/// Reference to a user by id, as mutation payloads embed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioRef {
    /// The referenced user's id.
    pub id: UsuarioId,
}

impl From<&Usuario> for UsuarioRef {
    fn from(usuario: &Usuario) -> Self {
        UsuarioRef { id: usuario.id }
    }
}

/// `POST /turnos` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevoTurno {
    /// The requested instant.
    pub fecha_hora: Timestamp,

    /// Free-text description of the requested work.
    pub descripcion: String,

    /// Initial lifecycle state.
    pub estado: EstadoTurno,

    /// The client the session is for.
    pub cliente: UsuarioRef,

    /// The staff member who performs the work.
    pub dueno: UsuarioRef,
}

impl NuevoTurno {
    /// A client-initiated request: always starts out `SOLICITADO`, owned by
    /// the requesting client and assigned to the studio's single staff
    /// identity.
    #[must_use]
    pub fn solicitado(
        cliente: UsuarioId,
        dueno: UsuarioId,
        fecha_hora: Timestamp,
        descripcion: String,
    ) -> Self {
        NuevoTurno {
            fecha_hora,
            descripcion,
            estado: EstadoTurno::Solicitado,
            cliente: UsuarioRef { id: cliente },
            dueno: UsuarioRef { id: dueno },
        }
    }
}

/// `PATCH /turnos/{id}` request body. Fields left `None` are omitted from
/// the JSON and the backend leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoPatch {
    /// New scheduled instant, if rescheduling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora: Option<Timestamp>,

    /// New lifecycle state, if staff is moving it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoTurno>,

    /// New work description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,

    /// Reassigned client (staff only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<UsuarioRef>,

    /// Reassigned staff member (staff only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dueno: Option<UsuarioRef>,
}

impl TurnoPatch {
    /// The edit a client may make to their own turno: time and description,
    /// never the state or the parties.
    #[must_use]
    pub fn cliente_edit(fecha_hora: Timestamp, descripcion: String) -> Self {
        TurnoPatch {
            fecha_hora: Some(fecha_hora),
            descripcion: Some(descripcion),
            ..TurnoPatch::default()
        }
    }
}
