//! Persistencia de la colección de vehículos
//!
//! La colección completa se guarda como un único documento JSON en disco.
//! Los servicios nunca llaman acá: el host carga los vehículos, aplica
//! mutaciones puras y vuelve a guardar.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

pub struct VehicleRepository {
    path: PathBuf,
}

impl VehicleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cargar la colección; un archivo inexistente o vacío equivale a una
    /// colección sin vehículos
    pub fn load(&self) -> AppResult<Vec<Vehicle>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let vehicles = serde_json::from_str(&contents)?;
        Ok(vehicles)
    }

    /// Guardar la colección completa, creando el directorio si hace falta
    pub fn save(&self, vehicles: &[Vehicle]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(vehicles)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::maintenance::MaintenanceConfigInput;
    use crate::models::vehicle::CreateVehicleRequest;
    use crate::services::vehicle_service;

    fn sample_vehicle() -> Vehicle {
        vehicle_service::create_vehicle(CreateVehicleRequest {
            name: "Ford Ranger".to_string(),
            current_km: 50_000,
            configs: MaintenanceConfigInput::defaults(),
        })
        .unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let repository = VehicleRepository::new(dir.path().join("autocontrol.json"));

        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repository = VehicleRepository::new(dir.path().join("autocontrol.json"));
        let vehicles = vec![sample_vehicle(), sample_vehicle()];

        repository.save(&vehicles).unwrap();
        let loaded = repository.load().unwrap();

        assert_eq!(loaded, vehicles);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let repository = VehicleRepository::new(dir.path().join("datos/autocontrol.json"));

        repository.save(&[sample_vehicle()]).unwrap();
        assert_eq!(repository.load().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupted_file_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autocontrol.json");
        fs::write(&path, "{esto no es json").unwrap();

        let repository = VehicleRepository::new(path);
        assert!(repository.load().is_err());
    }
}
