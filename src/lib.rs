//! Markgate - Rate-Limited Registry Submission Gateway
//!
//! This crate implements a submission gateway for the product marking
//! registry. Outbound document submissions pass through a shared permit
//! pool that admits a fixed number of requests per time unit, replenished
//! by an independent periodic reset.

pub mod config;
pub mod error;
pub mod ratelimit;
pub mod registry;
