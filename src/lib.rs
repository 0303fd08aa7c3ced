//! AutoControl: seguimiento de mantenimiento preventivo por vehículo.
//!
//! La lógica central (modelos, consolidación del historial y derivación del
//! estado de mantenimiento) es pura y opera sobre valores en memoria. La
//! persistencia y la CLI viven en los bordes y nunca se mezclan con ella.

pub mod cli;
pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;
