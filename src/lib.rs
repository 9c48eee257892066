//! Library entry for fa-catalogue exposing the catalogue engine for the CLI and integration tests.

pub mod catalog;
pub mod images;
pub mod logic;
pub mod qa;
pub mod rfq;
pub mod settings;
pub mod sizechart;
pub mod state;
pub mod util;
pub mod validation;
