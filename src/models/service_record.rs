//! Modelo de servicio realizado
//!
//! Un servicio agrupa los ítems de mantenimiento efectivamente realizados en
//! una visita al taller, con la fecha y el kilometraje del momento. Solo se
//! guardan los ítems realizados; lo no realizado no deja registro.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::errors::{validation_error, AppResult};

/// Ítem realizado dentro de un servicio
///
/// `item_id` referencia la configuración vigente al momento del servicio.
/// El nombre se guarda desnormalizado para que el historial siga siendo
/// legible si la configuración se renombra o se elimina después.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceItem {
    pub item_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub observation: String,
}

/// Servicio registrado en el historial de un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kilometers: u32,
    pub items: Vec<ServiceItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_work: Option<String>,
}

impl ServiceRecord {
    /// Un servicio sin ítems y sin trabajo especial no se puede guardar
    pub fn validate(&self) -> AppResult<()> {
        let special = self.special_work.as_deref().unwrap_or("").trim();
        if self.items.is_empty() && special.is_empty() {
            return Err(validation_error(
                "service",
                "Debe incluir al menos un ítem o un trabajo especial",
            ));
        }
        Ok(())
    }

    /// Normalizar el trabajo especial: un texto en blanco no se guarda
    pub fn normalized(mut self) -> Self {
        self.special_work = self
            .special_work
            .map(|work| work.trim().to_string())
            .filter(|work| !work.is_empty());
        self
    }

    /// Verificar si el servicio incluyó un ítem de configuración dado
    pub fn includes_item(&self, item_id: Uuid) -> bool {
        self.items.iter().any(|item| item.item_id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(items: Vec<ServiceItem>, special_work: Option<&str>) -> ServiceRecord {
        ServiceRecord {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            kilometers: 12_000,
            items,
            special_work: special_work.map(str::to_string),
        }
    }

    fn item(name: &str) -> ServiceItem {
        ServiceItem {
            item_id: Uuid::new_v4(),
            name: name.to_string(),
            observation: String::new(),
        }
    }

    #[test]
    fn test_vacuous_record_is_rejected() {
        assert!(record(vec![], None).validate().is_err());
        assert!(record(vec![], Some("   ")).validate().is_err());
    }

    #[test]
    fn test_record_with_item_is_valid() {
        assert!(record(vec![item("Aceite motor")], None).validate().is_ok());
    }

    #[test]
    fn test_record_with_special_work_only_is_valid() {
        assert!(record(vec![], Some("Cambio de amortiguadores")).validate().is_ok());
    }

    #[test]
    fn test_normalized_discards_blank_special_work() {
        let normalized = record(vec![item("Aceite motor")], Some("  ")).normalized();
        assert_eq!(normalized.special_work, None);

        let kept = record(vec![], Some("  Frenos nuevos ")).normalized();
        assert_eq!(kept.special_work.as_deref(), Some("Frenos nuevos"));
    }

    #[test]
    fn test_includes_item_matches_by_config_id() {
        let performed = item("Filtro de aire");
        let config_id = performed.item_id;
        let saved = record(vec![performed], None);

        assert!(saved.includes_item(config_id));
        assert!(!saved.includes_item(Uuid::new_v4()));
    }
}
