//! Attendance prediction service: a pre-trained regressor behind one HTTP endpoint.

pub mod config;
pub mod error;
pub mod inference;
pub mod models;
pub mod routes;
