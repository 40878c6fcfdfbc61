//! Molecules composed from the atoms.

pub mod kpi_card;

pub use kpi_card::{KpiCard, KpiCardProps};
