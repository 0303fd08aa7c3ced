//! Estado de la aplicación
//!
//! Este módulo mantiene la colección de vehículos cargada en memoria y la
//! sincroniza con el repositorio después de cada mutación. Las mutaciones en
//! sí son puras; acá solo se reemplaza el valor viejo por el nuevo.

use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Máximo de vehículos que maneja la aplicación
pub const MAX_VEHICLES: usize = 3;

pub struct AppState {
    pub vehicles: Vec<Vehicle>,
    repository: VehicleRepository,
}

impl AppState {
    /// Cargar el estado desde el archivo de datos configurado
    pub fn load(config: &EnvironmentConfig) -> AppResult<Self> {
        let repository = VehicleRepository::new(&config.data_file);
        let vehicles = repository.load()?;
        log::info!(
            "Se cargaron {} vehículos desde {}",
            vehicles.len(),
            repository.path().display()
        );
        Ok(Self { vehicles, repository })
    }

    /// Estado en memoria sin respaldo en disco, para pruebas
    #[cfg(test)]
    pub fn in_memory(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            vehicles: Vec::new(),
            repository: VehicleRepository::new(path),
        }
    }

    /// Buscar un vehículo por id
    pub fn find_vehicle(&self, id: Uuid) -> AppResult<&Vehicle> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.id == id)
            .ok_or_else(|| not_found_error("Vehículo", &id.to_string()))
    }

    /// Buscar un vehículo por nombre, sin distinguir mayúsculas.
    /// La CLI identifica vehículos por nombre, no por id.
    pub fn find_by_name(&self, name: &str) -> AppResult<&Vehicle> {
        let wanted = name.trim().to_lowercase();
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.name.to_lowercase() == wanted)
            .ok_or_else(|| not_found_error("Vehículo", name))
    }

    /// Insertar o reemplazar un vehículo por id y persistir la colección
    pub fn apply(&mut self, vehicle: Vehicle) -> AppResult<()> {
        match self.vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(existing) => *existing = vehicle,
            None => {
                if self.vehicles.len() >= MAX_VEHICLES {
                    return Err(AppError::Conflict(format!(
                        "Máximo de {} vehículos alcanzado",
                        MAX_VEHICLES
                    )));
                }
                self.vehicles.push(vehicle);
            }
        }
        self.repository.save(&self.vehicles)
    }
}
