//! Domain logic for the MovieHub catalog.
//!
//! Pure functions and types shared by the database and API crates: form
//! validation and mapping, admin filtering, pagination, dashboard stats, and
//! upload rules. Nothing in here touches the network or the database.

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod form;
pub mod pagination;
pub mod types;
pub mod upload;
