//! # Wire Models
//!
//! Request and response types for the six backing services. All wire field
//! names are camelCase per the platform's JSON conventions; responses are
//! deserialized leniently because the services own their own schemas and this
//! client only ever reads a handful of fields from each.

pub mod analytics;
pub mod appointment;
pub mod billing;
pub mod doctor;
pub mod id;
pub mod notification;
pub mod patient;

pub use id::EntityId;
