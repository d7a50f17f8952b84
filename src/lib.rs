//! Venue Clock - Company-timezone wall-clock normalization
//!
//! Converts form values typed in the company's zone into absolute instants
//! and back, and classifies schedulable entities into lifecycle status tags
//! against the company's civil calendar.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
