//! Salary Statistics Engine
//!
//! This crate computes monthly salaries for employees across subsidiary
//! companies (base pay plus an overtime premium, projected over a month)
//! and aggregates min/average/max salary statistics per subsidiary and
//! across the whole company. Thin adapters load rosters from JSON, print a
//! console report, export CSV, and serve the results over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod report;
