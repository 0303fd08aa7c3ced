//! Utilidades de formato
//!
//! Conversión entre kilometrajes numéricos y texto con separador de miles
//! (estilo es-AR) y formato de fechas para pantalla. Estas funciones se usan
//! solo en el borde de la CLI, nunca dentro de los servicios.

use chrono::NaiveDate;

/// Formatear un kilometraje con punto como separador de miles
pub fn format_km(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

/// Parsear entrada de usuario: descarta separadores y cualquier carácter que
/// no sea dígito; devuelve 0 si no queda nada parseable
pub fn parse_km_input(value: &str) -> u32 {
    let clean: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    clean.parse().unwrap_or(0)
}

/// Fecha en formato DD/MM/YYYY para pantalla
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
