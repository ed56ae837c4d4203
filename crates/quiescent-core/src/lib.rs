//! Core data model for the Quiescent bias designer.
//!
//! This crate provides the request/result structures exchanged between the
//! presentation layer and the solver pipeline, the topology table mapping a
//! gain target onto a stage count, and the shared error taxonomy. It
//! contains no solving logic.

pub mod error;
pub mod request;
pub mod result;
pub mod topology;
pub mod units;

pub use error::{Error, Result};
pub use request::{DesignRequest, Supply};
pub use result::{DesignResult, FollowerStage, Stage};
pub use topology::Topology;
