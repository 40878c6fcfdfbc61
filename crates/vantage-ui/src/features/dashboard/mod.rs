//! Dashboard landing feature.

mod stats_cards;

pub use stats_cards::{DashboardStatsCards, DashboardStatsCardsProps};
