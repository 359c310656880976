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
//! FraudGuard dashboard page behaviors.
//! Scroll reveal, prediction modal dismissal and prediction form clearing, written
//! against the [`page::Page`] surface so they run in the browser and in native tests.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod modal;
pub mod page;
pub mod reveal;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use dashboard::Dashboard;
pub use error::{UiError, UiResult};

#[cfg(target_arch = "wasm32")]
pub use web::run_dashboard;
