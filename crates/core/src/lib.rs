//! Atelier Core - Shared domain types for the storefront admin.
//!
//! This crate provides the records exchanged with the storefront REST API and
//! the small data transformations the admin views need. It is shared by:
//! - `atelier-admin` - Server-rendered administration panel
//! - `atelier-cli` - Command-line tools for scripted admin operations
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no templates. Everything here can be unit tested in isolation.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, statuses and timestamps
//! - [`catalog`] - Products and the add/edit product forms
//! - [`orders`] - Orders, line item quantity derivation and calendar grouping
//! - [`invoices`] - Invoices and the customer search filter
//! - [`users`] - Registered storefront customers
//! - [`analytics`] - Aggregated sales metrics for charting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod catalog;
pub mod invoices;
pub mod orders;
pub mod types;
pub mod users;

pub use types::*;
