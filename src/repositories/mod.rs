//! Repositorios de persistencia
//!
//! Este módulo contiene el acceso a almacenamiento. El único repositorio de
//! la aplicación guarda la colección de vehículos como documento JSON.

pub mod vehicle_repository;
