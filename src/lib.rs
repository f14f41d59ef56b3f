//! Commodore - render cluster inventories and compile components
//!
//! This crate derives the class lists and parameter trees an external Kapitan
//! compiler evaluates, for whole clusters as well as for single components
//! compiled against a synthetic test cluster.

pub mod api;
pub mod cli;
pub mod cluster;
pub mod component;
pub mod config;
pub mod error;
pub mod files;
pub mod inventory;
pub mod tools;

pub use cluster::{render_params, render_target, Cluster, Target};
pub use config::Config;
pub use error::{CommodoreError, Result};
pub use inventory::Inventory;
