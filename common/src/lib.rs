//! Shared models for the Companion services workspace.
//!
//! * [`services`]: the static catalog of service descriptors.
//! * [`boards`]: serial board identification table.
//! * [`metadata`]: results produced by the service scanner.
//! * [`network`]: listening socket discovery helpers.

pub mod boards;
pub mod config;
pub mod metadata;
pub mod network;
pub mod services;
