//! Core library for the CleanSlate task client
//!
//! This crate contains the domain layer, including:
//! - The `Task` record shared by every layer
//! - The repository port implemented by the data layer
//! - Use-cases validating input before it reaches the repository

pub mod clock;
pub mod error;
pub mod task;
pub mod usecase;

pub use clock::{system_clock, SharedClock};
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
