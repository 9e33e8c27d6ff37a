//! Studio users and actors.

use serde::{Deserialize, Serialize};

/// Identifier of a registered user, as assigned by the studio backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsuarioId(pub i64);

/// Role attached to every registered user.
///
/// Roles are mutually exclusive per user; there is no multi-role composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// A customer requesting turnos.
    Cliente,

    /// The studio owner, the single staff identity who performs the work.
    Dueno,

    /// An administrator with the same unrestricted rights as the owner.
    Admin,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Cliente, Role::Dueno, Role::Admin];

    /// Whether this role belongs to studio staff.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Role::Dueno | Role::Admin)
    }

    /// The wire token for this role, as the backend serialises it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Cliente => "CLIENTE",
            Role::Dueno => "DUENO",
            Role::Admin => "ADMIN",
        }
    }
}

/// A registered user record, as returned by the studio backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    /// Backend-assigned identifier.
    pub id: UsuarioId,

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

    /// The user's single role.
    pub role: Role,
}

impl Usuario {
    /// The actor this user acts as.
    #[must_use]
    pub fn actor(&self) -> Actor {
        Actor::from(self)
    }

    /// Display name, surname last.
    #[must_use]
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// The authenticated party a decision is being made for.
///
/// Staff actors carry no identity because their rights never depend on which
/// turno is theirs; a client actor always carries one, so an unidentified
/// client is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// A customer, acting on turnos they own.
    Cliente(UsuarioId),

    /// The studio owner.
    Dueno,

    /// An administrator.
    Admin,
}

impl Actor {
    /// The role this actor holds.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Actor::Cliente(_) => Role::Cliente,
            Actor::Dueno => Role::Dueno,
            Actor::Admin => Role::Admin,
        }
    }

    /// Whether the actor is studio staff.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        self.role().is_staff()
    }

    /// The client identity, when the actor is a client.
    #[must_use]
    pub const fn cliente_id(self) -> Option<UsuarioId> {
        match self {
            Actor::Cliente(id) => Some(id),
            Actor::Dueno | Actor::Admin => None,
        }
    }
}

impl From<&Usuario> for Actor {
    fn from(usuario: &Usuario) -> Self {
        match usuario.role {
            Role::Cliente => Actor::Cliente(usuario.id),
            Role::Dueno => Actor::Dueno,
            Role::Admin => Actor::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::fixtures;

    use super::*;

    #[test]
    fn role_wire_tokens_are_uppercase_spanish() -> TestResult {
        assert_eq!(serde_json::to_string(&Role::Cliente)?, "\"CLIENTE\"");
        assert_eq!(serde_json::to_string(&Role::Dueno)?, "\"DUENO\"");
        assert_eq!(serde_json::to_string(&Role::Admin)?, "\"ADMIN\"");

        for role in Role::ALL {
            let token = format!("\"{}\"", role.as_str());
            assert_eq!(serde_json::from_str::<Role>(&token)?, role);
        }

        Ok(())
    }

    #[test]
    fn staff_is_dueno_or_admin() {
        assert!(Role::Dueno.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(!Role::Cliente.is_staff());
    }

    #[test]
    fn actor_for_cliente_carries_identity() {
        let cliente = fixtures::cliente();

        assert_eq!(cliente.actor(), Actor::Cliente(cliente.id));
        assert_eq!(cliente.actor().cliente_id(), Some(cliente.id));
    }

    #[test]
    fn actor_for_staff_has_no_identity() {
        assert_eq!(fixtures::dueno().actor(), Actor::Dueno);
        assert_eq!(Actor::Dueno.cliente_id(), None);
        assert_eq!(Actor::Admin.role(), Role::Admin);
    }

    #[test]
    fn usuario_round_trips_through_json() -> TestResult {
        let cliente = fixtures::cliente();
        let json = serde_json::to_string(&cliente)?;
        let back: Usuario = serde_json::from_str(&json)?;

        assert_eq!(back, cliente);

        Ok(())
    }
}
