//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer,
//! translating path input into repository calls and repository results into domain
//! outcomes.

pub mod exercise;
