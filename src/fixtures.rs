//! Deterministic sample studio data.
//!
//! Mirrors the records a freshly seeded studio holds: the owner, a couple of
//! clients and one requested turno. Times are derived from a caller-supplied
//! reference instant, never from the system clock.

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;

use crate::{
    turno::{EstadoTurno, Turno, TurnoId},
    usuario::{Role, Usuario, UsuarioId},
};

/// The studio owner.
#[must_use]
pub fn dueno() -> Usuario {
    Usuario {
        id: UsuarioId(1),
        nombre: "Carlos".to_owned(),
        apellido: "Gómez".to_owned(),
        celular: "1122334455".to_owned(),
        username: "tattoo_master".to_owned(),
        email: "carlos@tinta.studio".to_owned(),
        role: Role::Dueno,
    }
}

/// A registered client.
#[must_use]
pub fn cliente() -> Usuario {
    Usuario {
        id: UsuarioId(2),
        nombre: "Juan".to_owned(),
        apellido: "Pérez".to_owned(),
        celular: "1199887766".to_owned(),
        username: "juanito".to_owned(),
        email: "juan.perez@example.com".to_owned(),
        role: Role::Cliente,
    }
}

/// A second client, for non-owner scenarios.
#[must_use]
pub fn otro_cliente() -> Usuario {
    Usuario {
        id: UsuarioId(3),
        nombre: "María".to_owned(),
        apellido: "García".to_owned(),
        celular: "4445556666".to_owned(),
        username: "mgarcia".to_owned(),
        email: "maria.garcia@example.com".to_owned(),
        role: Role::Cliente,
    }
}

/// Every sample user, keyed by id.
#[must_use]
pub fn usuarios() -> FxHashMap<UsuarioId, Usuario> {
    [dueno(), cliente(), otro_cliente()]
        .into_iter()
        .map(|usuario| (usuario.id, usuario))
        .collect()
}

/// A turno owned by `cliente` at an explicit instant, in the requested state.
#[must_use]
pub fn turno_at(id: TurnoId, cliente: &Usuario, fecha_hora: Timestamp) -> Turno {
    Turno {
        id,
        fecha_hora,
        estado: EstadoTurno::Solicitado,
        descripcion: "Tatuaje de dragón en el brazo".to_owned(),
        cliente: cliente.clone(),
        dueno: dueno(),
    }
}

/// The seeded sample turno: requested by [`cliente`], exactly two days after
/// the reference instant.
#[must_use]
pub fn turno_solicitado(id: TurnoId, reference: Timestamp) -> Turno {
    let fecha_hora = reference
        .saturating_add(SignedDuration::from_hours(48))
        .unwrap_or(Timestamp::MAX);

    turno_at(id, &cliente(), fecha_hora)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sample_users_have_distinct_ids_and_expected_roles() {
        let directory = usuarios();

        assert_eq!(directory.len(), 3);
        assert_eq!(directory.get(&UsuarioId(1)).map(|u| u.role), Some(Role::Dueno));
        assert_eq!(
            directory
                .values()
                .filter(|usuario| usuario.role == Role::Cliente)
                .count(),
            2
        );
    }

    #[test]
    fn seeded_turno_sits_on_the_notice_boundary() -> TestResult {
        let reference: Timestamp = "2024-08-13T10:00:00Z".parse()?;
        let turno = turno_solicitado(TurnoId(1), reference);

        assert_eq!(turno.estado, EstadoTurno::Solicitado);
        assert_eq!(turno.fecha_hora, "2024-08-15T10:00:00Z".parse::<Timestamp>()?);
        assert_eq!(turno.cliente.id, cliente().id);
        assert_eq!(turno.dueno.id, dueno().id);

        Ok(())
    }
}
