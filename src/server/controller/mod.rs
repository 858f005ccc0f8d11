//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into parameter types, call the service
//! layer, and convert domain models back into DTOs for the response.

pub mod exercise;

#[cfg(test)]
mod test;
