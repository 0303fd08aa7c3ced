//! Derivación del estado de mantenimiento
//!
//! Para cada ítem configurado se busca el último servicio que lo incluyó y se
//! calcula el próximo vencimiento y la urgencia contra el kilometraje actual.
//! Todas las funciones son puras: mismos datos, mismo resultado.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::maintenance::MaintenanceConfig;
use crate::models::service_record::ServiceRecord;
use crate::models::vehicle::Vehicle;

/// Banda de aviso: a menos de esta distancia del vencimiento el ítem pasa a
/// "Pronto". Es una política fija de la aplicación, no configurable.
pub const DUE_SOON_BAND_KM: i64 = 1_000;

/// Urgencia de un ítem de mantenimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceTier {
    Ok,
    DueSoon,
    Overdue,
}

impl MaintenanceTier {
    /// Etiqueta corta para pantalla
    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceTier::Ok => "OK",
            MaintenanceTier::DueSoon => "Pronto",
            MaintenanceTier::Overdue => "Vencido",
        }
    }
}

/// Estado calculado de un ítem contra el kilometraje actual
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceStatus {
    pub last_service_km: u32,
    pub next_service_km: u32,
    pub remaining: i64,
    pub tier: MaintenanceTier,
}

/// Estado de un ítem junto con su configuración, para el tablero del vehículo
#[derive(Debug, Clone, Serialize)]
pub struct ItemStatusReport {
    pub config_id: Uuid,
    pub name: String,
    pub interval_km: u32,
    pub status: MaintenanceStatus,
}

/// Evaluar un ítem contra el historial y el kilometraje actual.
///
/// El último servicio es el registro de mayor kilometraje que incluye el
/// ítem; como el historial se mantiene ordenado alcanza con recorrerlo desde
/// el final. Un ítem nunca realizado recibe un intervalo completo de gracia
/// desde el kilometraje actual, en lugar de quedar vencido de entrada.
pub fn evaluate(
    config: &MaintenanceConfig,
    history: &[ServiceRecord],
    current_km: u32,
) -> MaintenanceStatus {
    let last_service_km = history
        .iter()
        .rev()
        .find(|record| record.includes_item(config.id))
        .map(|record| record.kilometers)
        .unwrap_or(0);

    let next_service_km = if last_service_km > 0 {
        last_service_km + config.interval_km
    } else {
        current_km + config.interval_km
    };

    let remaining = i64::from(next_service_km) - i64::from(current_km);

    let tier = if remaining < 0 {
        MaintenanceTier::Overdue
    } else if remaining < DUE_SOON_BAND_KM {
        MaintenanceTier::DueSoon
    } else {
        MaintenanceTier::Ok
    };

    MaintenanceStatus {
        last_service_km,
        next_service_km,
        remaining,
        tier,
    }
}

/// Evaluar todos los ítems configurados de un vehículo
pub fn vehicle_report(vehicle: &Vehicle) -> Vec<ItemStatusReport> {
    vehicle
        .configs
        .iter()
        .map(|config| ItemStatusReport {
            config_id: config.id,
            name: config.name.clone(),
            interval_km: config.interval_km,
            status: evaluate(config, &vehicle.history, vehicle.current_km),
        })
        .collect()
}
