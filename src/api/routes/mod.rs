//! API Routes
//!
//! Route handlers organized by functionality.

pub mod callback;
pub mod charts;
pub mod dashboard;
pub mod health;
