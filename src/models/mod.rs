//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos de la aplicación: vehículos,
//! configuración de ítems de mantenimiento y servicios realizados.

pub mod maintenance;
pub mod service_record;
pub mod vehicle;
