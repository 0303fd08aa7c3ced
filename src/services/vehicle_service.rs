//! Operaciones de mutación sobre vehículos
//!
//! Este módulo contiene las tres transiciones de estado que puede pedir un
//! caller: alta de vehículo, actualización de kilometraje y registro o
//! edición de un servicio. Cada operación valida su entrada y devuelve un
//! Vehicle nuevo completo; nunca se aplica un cambio parcial.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::MaintenanceConfig;
use crate::models::service_record::ServiceRecord;
use crate::models::vehicle::{CreateVehicleRequest, Vehicle};
use crate::services::history_service;
use crate::utils::errors::{validation_error, AppResult};

/// Dar de alta un vehículo con su configuración de mantenimiento.
///
/// Los ítems sin nombre se descartan (el formulario de alta permite filas
/// vacías); si el caller mandó ítems y ninguno sobrevive, el alta se rechaza.
pub fn create_vehicle(request: CreateVehicleRequest) -> AppResult<Vehicle> {
    request.validate()?;

    if request.name.trim().is_empty() {
        return Err(validation_error("name", "El nombre del vehículo es requerido"));
    }

    let supplied = request.configs.len();
    let configs: Vec<MaintenanceConfig> = request
        .configs
        .into_iter()
        .filter(|input| !input.name.trim().is_empty())
        .map(|input| MaintenanceConfig {
            id: Uuid::new_v4(),
            name: input.name,
            interval_km: input.interval_km,
        })
        .collect();

    if supplied > 0 && configs.is_empty() {
        return Err(validation_error(
            "configs",
            "Ningún ítem de mantenimiento tiene nombre",
        ));
    }

    if configs.iter().any(|config| config.interval_km == 0) {
        return Err(validation_error(
            "interval_km",
            "La frecuencia de cada ítem debe ser mayor a cero",
        ));
    }

    let vehicle = Vehicle {
        id: Uuid::new_v4(),
        name: request.name,
        current_km: request.current_km,
        last_updated: Utc::now(),
        configs,
        history: Vec::new(),
    };

    log::info!("Vehículo '{}' dado de alta con {} ítems", vehicle.name, vehicle.configs.len());
    Ok(vehicle)
}

/// Actualizar el kilometraje actual del vehículo.
///
/// Una carga errónea se puede corregir hacia abajo, pero nunca por debajo
/// del mayor kilometraje registrado en el historial.
pub fn update_kilometers(vehicle: &Vehicle, new_km: u32) -> AppResult<Vehicle> {
    if new_km < vehicle.max_history_km() {
        return Err(validation_error(
            "current_km",
            "El kilometraje no puede ser menor al del último servicio registrado",
        ));
    }

    let mut updated = vehicle.clone();
    updated.current_km = new_km;
    updated.last_updated = Utc::now();
    Ok(updated)
}

/// Registrar un servicio nuevo o reemplazar uno existente por id.
///
/// Valida el registro, delega la consolidación del historial y devuelve el
/// vehículo con historial y kilometraje ya actualizados.
pub fn save_service(vehicle: &Vehicle, record: ServiceRecord, is_edit: bool) -> AppResult<Vehicle> {
    let record = record.normalized();
    record.validate()?;

    let reconciled =
        history_service::reconcile(&vehicle.history, vehicle.current_km, record, is_edit);

    // la marca de "actualizado" refleja la última carga de kilometraje, no
    // el alta de servicios
    let mut updated = vehicle.clone();
    updated.history = reconciled.history;
    updated.current_km = reconciled.current_km;
    Ok(updated)
}
