//! Consolidación del historial de servicios
//!
//! Al guardar un servicio (nuevo o editado) el historial debe quedar ordenado
//! ascendente por kilometraje y el kilometraje actual del vehículo nunca
//! puede bajar respecto de lo registrado. Este módulo no muta sus entradas:
//! devuelve siempre un historial nuevo.

use crate::models::service_record::ServiceRecord;

/// Resultado de consolidar un servicio dentro del historial
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledHistory {
    pub history: Vec<ServiceRecord>,
    pub current_km: u32,
}

/// Consolidar un servicio dentro del historial de un vehículo.
///
/// Con `is_edit` se reemplaza el registro cuyo id coincide con el candidato;
/// si el id no existe se agrega igual al final. El historial resultante queda
/// ordenado por kilometraje, con orden estable para empates, y el kilometraje
/// actual es el máximo entre el valor previo y todo lo registrado.
pub fn reconcile(
    history: &[ServiceRecord],
    current_km: u32,
    candidate: ServiceRecord,
    is_edit: bool,
) -> ReconciledHistory {
    let mut updated: Vec<ServiceRecord> = Vec::with_capacity(history.len() + 1);

    if is_edit {
        let mut replaced = false;
        for record in history {
            if record.id == candidate.id {
                updated.push(candidate.clone());
                replaced = true;
            } else {
                updated.push(record.clone());
            }
        }
        if !replaced {
            log::warn!(
                "Se editó el servicio {} pero no existe en el historial; se agrega como nuevo",
                candidate.id
            );
            updated.push(candidate);
        }
    } else {
        updated.extend(history.iter().cloned());
        updated.push(candidate);
    }

    // sort_by_key es estable: los empates de kilometraje conservan el orden
    // de inserción
    updated.sort_by_key(|record| record.kilometers);

    let max_history_km = updated
        .iter()
        .map(|record| record.kilometers)
        .max()
        .unwrap_or(0);

    ReconciledHistory {
        history: updated,
        current_km: current_km.max(max_history_km),
    }
}
