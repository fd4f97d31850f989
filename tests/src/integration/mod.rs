//! # Cross-Subsystem Integration Scenarios

pub mod auth_flows;
pub mod loyalty_flows;
pub mod redemption_flows;
