#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Vantage dashboard UI kit.
//! Presentational Yew components for KPI display plus a small demo shell
//! that arranges the cards into a dashboard grid.

pub mod components;
pub mod features;
pub mod logic;
pub mod models;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::logic::change_row;
    use crate::models::ChangeTone;

    #[test]
    fn default_tone_is_neutral_and_rowless() {
        assert_eq!(ChangeTone::default(), ChangeTone::Neutral);
        assert!(change_row(None, ChangeTone::default()).is_none());
        assert!(change_row(Some(""), ChangeTone::default()).is_none());
    }
}
