//! Command line front end for the SPARC evolution report.
pub mod cli;
pub mod input;
pub mod run;
