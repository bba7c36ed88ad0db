//! famplan - Terminal-based family budget planning dashboard
//!
//! This library provides the core functionality for the famplan budgeting
//! dashboard: enter yearly income sources, get a suggested 50/30/20
//! needs/wants/savings split, track the month's expenses by category, and
//! ask a remote service for a naive next-month expense prediction.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (income sources, plans, expenses)
//! - `services`: Business logic layer (allocator, ledger, session)
//! - `predict`: HTTP client and background worker for the prediction service
//! - `display`: Terminal output formatting for one-shot commands
//! - `cli`: CLI command handlers
//! - `tui`: The interactive dashboard
//!
//! All budget state is session-scoped and in-memory; only settings are
//! persisted.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod predict;
pub mod services;
pub mod tui;

pub use error::{PlannerError, PlannerResult};
