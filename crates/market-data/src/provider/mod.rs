//! Settlement-rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all backends implement
//! - The Mastercard settlement-rate API implementation

mod traits;

pub mod mastercard;

pub use traits::RateProvider;
