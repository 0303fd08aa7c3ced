//! Modelo de ítems de mantenimiento
//!
//! Este módulo contiene la configuración de frecuencia de cada ítem
//! y los ítems estándar con los que se da de alta un vehículo.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ítem de mantenimiento configurado para un vehículo
///
/// La frecuencia indica cada cuántos km corresponde repetir el trabajo
/// después de un servicio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceConfig {
    pub id: Uuid,
    pub name: String,
    pub interval_km: u32,
}

/// Datos de un ítem antes de asignarle identidad (alta de vehículo)
#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceConfigInput {
    pub name: String,
    pub interval_km: u32,
}

/// Ítems estándar de un vehículo nuevo con su frecuencia promedio en km
pub const DEFAULT_MAINTENANCE_ITEMS: [(&str, u32); 7] = [
    ("Aceite motor", 10_000),
    ("Filtro de aceite motor", 30_000),
    ("Filtro de aire", 20_000),
    ("Filtro de combustible", 30_000),
    ("Aceite de caja", 30_000),
    ("Aceite diferenciales y transferencia", 30_000),
    ("Alineación, balanceo y rotación", 10_000),
];

impl MaintenanceConfigInput {
    /// Ítems por defecto, listos para pasar al alta de un vehículo
    pub fn defaults() -> Vec<Self> {
        DEFAULT_MAINTENANCE_ITEMS
            .iter()
            .map(|(name, interval_km)| Self {
                name: (*name).to_string(),
                interval_km: *interval_km,
            })
            .collect()
    }
}
