//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y el request de alta con su
//! validación. El vehículo es el agregado raíz: configuración de
//! mantenimiento e historial de servicios viven adentro.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{MaintenanceConfig, MaintenanceConfigInput};
use crate::models::service_record::ServiceRecord;

/// Vehículo con su configuración de mantenimiento e historial de servicios
///
/// Invariante: `current_km` nunca queda por debajo del mayor kilometraje
/// registrado en el historial. Las mutaciones pasan por los servicios, que
/// devuelven siempre un vehículo nuevo completo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub current_km: u32,
    pub last_updated: DateTime<Utc>,
    pub configs: Vec<MaintenanceConfig>,
    pub history: Vec<ServiceRecord>,
}

impl Vehicle {
    /// Mayor kilometraje registrado en el historial (0 si está vacío)
    pub fn max_history_km(&self) -> u32 {
        self.history
            .iter()
            .map(|record| record.kilometers)
            .max()
            .unwrap_or(0)
    }

    /// Buscar un servicio del historial por id
    pub fn find_service(&self, id: Uuid) -> Option<&ServiceRecord> {
        self.history.iter().find(|record| record.id == id)
    }

    /// Buscar una configuración de ítem por id
    pub fn find_config(&self, id: Uuid) -> Option<&MaintenanceConfig> {
        self.configs.iter().find(|config| config.id == id)
    }

    /// Buscar una configuración de ítem por nombre, sin distinguir mayúsculas
    pub fn find_config_by_name(&self, name: &str) -> Option<&MaintenanceConfig> {
        let wanted = name.trim().to_lowercase();
        self.configs
            .iter()
            .find(|config| config.name.to_lowercase() == wanted)
    }
}

/// Request para dar de alta un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: String,

    pub current_km: u32,

    pub configs: Vec<MaintenanceConfigInput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn vehicle_with_history(kms: &[u32]) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            name: "Ford Ranger".to_string(),
            current_km: kms.iter().copied().max().unwrap_or(0),
            last_updated: Utc::now(),
            configs: Vec::new(),
            history: kms
                .iter()
                .map(|km| ServiceRecord {
                    id: Uuid::new_v4(),
                    date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    kilometers: *km,
                    items: Vec::new(),
                    special_work: Some("Trabajo".to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn test_max_history_km() {
        assert_eq!(vehicle_with_history(&[]).max_history_km(), 0);
        assert_eq!(vehicle_with_history(&[12_000, 9_000, 15_000]).max_history_km(), 15_000);
    }

    #[test]
    fn test_find_config_by_name_ignores_case() {
        let mut vehicle = vehicle_with_history(&[]);
        vehicle.configs.push(MaintenanceConfig {
            id: Uuid::new_v4(),
            name: "Aceite motor".to_string(),
            interval_km: 10_000,
        });

        assert!(vehicle.find_config_by_name("aceite MOTOR").is_some());
        assert!(vehicle.find_config_by_name(" Aceite motor ").is_some());
        assert!(vehicle.find_config_by_name("Filtro de aire").is_none());
    }
}
