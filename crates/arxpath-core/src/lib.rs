pub mod config;
pub mod logging;

// Resolver pipeline, leaf to root.
pub mod category;
pub mod convert;
pub mod date;
pub mod error;
pub mod gcs_path;
pub mod ident;
