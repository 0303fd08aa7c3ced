//! Interfaz de línea de comandos
//!
//! Reemplaza las pantallas de la aplicación: selector de vehículos, alta,
//! tablero de estado, registro de servicios e historial. Acá termina todo el
//! formateo para pantalla; los servicios trabajan con valores planos.

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::maintenance::MaintenanceConfigInput;
use crate::models::service_record::{ServiceItem, ServiceRecord};
use crate::models::vehicle::{CreateVehicleRequest, Vehicle};
use crate::services::{status_service, vehicle_service};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, validation_error, AppResult};
use crate::utils::format::{format_date, format_km, parse_km_input};
use crate::utils::validation::{validate_date, validate_positive};

/// AutoControl - Gestión de mantenimiento vehicular
#[derive(Parser, Debug)]
#[command(name = "autocontrol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listar vehículos registrados
    #[command(alias = "ls")]
    List,

    /// Dar de alta un vehículo
    AddVehicle(AddVehicleArgs),

    /// Tablero de estado de mantenimiento de un vehículo
    Status {
        /// Nombre del vehículo
        vehicle: String,
    },

    /// Actualizar el kilometraje actual
    SetKm {
        /// Nombre del vehículo
        vehicle: String,
        /// Kilometraje nuevo (se admiten puntos de miles)
        km: String,
    },

    /// Registrar o editar un servicio realizado
    AddService(AddServiceArgs),

    /// Ver el historial de servicios
    History {
        /// Nombre del vehículo
        vehicle: String,
    },
}

#[derive(Args, Debug)]
pub struct AddVehicleArgs {
    /// Nombre del vehículo (ej. Ford Ranger)
    #[arg(long)]
    pub name: String,

    /// Kilometraje actual
    #[arg(long)]
    pub km: String,

    /// Ítem de mantenimiento "nombre:frecuencia_km" (repetible; si no se
    /// indica ninguno se usan los ítems estándar)
    #[arg(long = "item")]
    pub items: Vec<String>,
}

#[derive(Args, Debug)]
pub struct AddServiceArgs {
    /// Nombre del vehículo
    pub vehicle: String,

    /// Fecha del servicio (YYYY-MM-DD, por defecto hoy)
    #[arg(long)]
    pub date: Option<String>,

    /// Kilometraje al momento del servicio
    #[arg(long)]
    pub km: String,

    /// Ítem realizado "nombre[:observación]" (repetible)
    #[arg(long = "item")]
    pub items: Vec<String>,

    /// Descripción de trabajos especiales realizados
    #[arg(long)]
    pub special_work: Option<String>,

    /// Id del servicio a editar (reemplaza el registro completo)
    #[arg(long)]
    pub edit: Option<Uuid>,
}

/// Ejecutar el comando pedido contra el estado cargado
pub fn run(cli: Cli, config: &EnvironmentConfig) -> AppResult<()> {
    let mut state = AppState::load(config)?;

    match cli.command {
        Commands::List => list_vehicles(&state),
        Commands::AddVehicle(args) => add_vehicle(&mut state, args),
        Commands::Status { vehicle } => show_status(&state, &vehicle),
        Commands::SetKm { vehicle, km } => set_km(&mut state, &vehicle, &km),
        Commands::AddService(args) => add_service(&mut state, args),
        Commands::History { vehicle } => show_history(&state, &vehicle),
    }
}

fn list_vehicles(state: &AppState) -> AppResult<()> {
    if state.vehicles.is_empty() {
        println!("No hay vehículos registrados. Use 'autocontrol add-vehicle'.");
        return Ok(());
    }

    for vehicle in &state.vehicles {
        println!(
            "{}  -  {} km  ({} servicios registrados)",
            vehicle.name,
            format_km(i64::from(vehicle.current_km)),
            vehicle.history.len()
        );
    }
    Ok(())
}

fn add_vehicle(state: &mut AppState, args: AddVehicleArgs) -> AppResult<()> {
    let configs = if args.items.is_empty() {
        MaintenanceConfigInput::defaults()
    } else {
        args.items
            .iter()
            .map(|raw| parse_config_input(raw))
            .collect::<AppResult<Vec<_>>>()?
    };

    let vehicle = vehicle_service::create_vehicle(CreateVehicleRequest {
        name: args.name,
        current_km: parse_km_input(&args.km),
        configs,
    })?;

    println!(
        "Vehículo '{}' dado de alta con {} ítems de mantenimiento.",
        vehicle.name,
        vehicle.configs.len()
    );
    state.apply(vehicle)
}

fn show_status(state: &AppState, name: &str) -> AppResult<()> {
    let vehicle = state.find_by_name(name)?;

    println!(
        "{} - {} km (actualizado {})",
        vehicle.name,
        format_km(i64::from(vehicle.current_km)),
        format_date(&vehicle.last_updated.date_naive())
    );

    let report = status_service::vehicle_report(vehicle);
    if report.is_empty() {
        println!("Sin ítems de mantenimiento configurados.");
        return Ok(());
    }

    println!(
        "{:<40} {:>10} {:>10} {:>10}  {}",
        "ÍTEM", "ÚLTIMO", "PRÓXIMO", "FALTAN", "ESTADO"
    );
    for item in report {
        let last = if item.status.last_service_km > 0 {
            format_km(i64::from(item.status.last_service_km))
        } else {
            "-".to_string()
        };
        println!(
            "{:<40} {:>10} {:>10} {:>10}  {}",
            item.name,
            last,
            format_km(i64::from(item.status.next_service_km)),
            format_km(item.status.remaining),
            item.status.tier.label()
        );
    }
    Ok(())
}

fn set_km(state: &mut AppState, name: &str, km: &str) -> AppResult<()> {
    let vehicle = state.find_by_name(name)?;
    let updated = vehicle_service::update_kilometers(vehicle, parse_km_input(km))?;

    println!(
        "Kilometraje de '{}' actualizado a {} km.",
        updated.name,
        format_km(i64::from(updated.current_km))
    );
    state.apply(updated)
}

fn add_service(state: &mut AppState, args: AddServiceArgs) -> AppResult<()> {
    let vehicle = state.find_by_name(&args.vehicle)?;

    let date = match &args.date {
        Some(raw) => validate_date(raw)
            .map_err(|_| validation_error("date", "La fecha debe tener formato YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let items = args
        .items
        .iter()
        .map(|raw| parse_service_item(vehicle, raw))
        .collect::<AppResult<Vec<_>>>()?;

    let is_edit = args.edit.is_some();
    if let Some(service_id) = args.edit {
        // La edición reemplaza el registro completo, así que exigimos que exista
        if vehicle.find_service(service_id).is_none() {
            return Err(not_found_error("Servicio", &service_id.to_string()));
        }
    }

    let record = ServiceRecord {
        id: args.edit.unwrap_or_else(Uuid::new_v4),
        date,
        kilometers: parse_km_input(&args.km),
        items,
        special_work: args.special_work,
    };
    let record_id = record.id;

    let updated = vehicle_service::save_service(vehicle, record, is_edit)?;
    println!(
        "Servicio {} {} para '{}'.",
        record_id,
        if is_edit { "actualizado" } else { "registrado" },
        updated.name
    );
    state.apply(updated)
}

fn show_history(state: &AppState, name: &str) -> AppResult<()> {
    let vehicle = state.find_by_name(name)?;

    if vehicle.history.is_empty() {
        println!("No hay servicios registrados.");
        return Ok(());
    }

    for record in &vehicle.history {
        println!(
            "{}  {} km  [{}]",
            format_date(&record.date),
            format_km(i64::from(record.kilometers)),
            record.id
        );
        for item in &record.items {
            if item.observation.is_empty() {
                println!("    ✓ {}", item.name);
            } else {
                println!("    ✓ {} ({})", item.name, item.observation);
            }
        }
        if let Some(work) = &record.special_work {
            println!("    Trabajo especial: {}", work);
        }
    }
    Ok(())
}

/// Parsear "nombre:frecuencia_km" de la línea de comandos
fn parse_config_input(raw: &str) -> AppResult<MaintenanceConfigInput> {
    let (name, interval) = raw
        .rsplit_once(':')
        .ok_or_else(|| bad_request_error("Cada ítem debe tener el formato 'nombre:frecuencia_km'"))?;

    let interval_km = parse_km_input(interval);
    validate_positive(interval_km)
        .map_err(|_| validation_error("interval_km", "La frecuencia debe ser mayor a cero"))?;

    Ok(MaintenanceConfigInput {
        name: name.to_string(),
        interval_km,
    })
}

/// Parsear "nombre[:observación]" resolviendo el ítem configurado del vehículo
fn parse_service_item(vehicle: &Vehicle, raw: &str) -> AppResult<ServiceItem> {
    let (name, observation) = match raw.split_once(':') {
        Some((name, observation)) => (name, observation.trim().to_string()),
        None => (raw, String::new()),
    };

    let config = vehicle
        .find_config_by_name(name)
        .ok_or_else(|| not_found_error("Ítem de mantenimiento", name))?;

    Ok(ServiceItem {
        item_id: config.id,
        // se copia el nombre configurado para que el historial quede legible
        // aunque el ítem se renombre o se elimine
        name: config.name.clone(),
        observation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_input() {
        let input = parse_config_input("Correa de distribución:60.000").unwrap();
        assert_eq!(input.name, "Correa de distribución");
        assert_eq!(input.interval_km, 60_000);

        assert!(parse_config_input("sin frecuencia").is_err());
        assert!(parse_config_input("Correa:0").is_err());
    }

    #[test]
    fn test_parse_config_input_keeps_colons_in_name() {
        // rsplit_once: solo el último ':' separa la frecuencia
        let input = parse_config_input("Chequeo: luces y bocina:15000").unwrap();
        assert_eq!(input.name, "Chequeo: luces y bocina");
        assert_eq!(input.interval_km, 15_000);
    }
}
