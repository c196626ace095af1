//! sparc-evolution: charts and summary export for the SPARC milestone dataset.
//!
//! The crate loads the milestone JSON document, renders the timeline,
//! feature-maturity, adoption-trend, impact and dashboard figures as Plotly
//! HTML, and writes the narrative analysis JSON consumed by presentation
//! tooling. Chart labels and scores come from the fixed milestone catalog;
//! the loaded document only feeds the analysis export.
pub mod analysis;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod generator;
pub mod report;
pub mod simulation;

pub use generator::{ArtifactPaths, ReportGenerator};
