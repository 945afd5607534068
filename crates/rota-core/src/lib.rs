pub mod clock;
pub mod config;
pub mod error;
pub mod io;
pub mod schedule;
pub mod service;
pub mod snapshot;
pub mod store;
pub mod users;

pub use error::{Result, RotaError};
pub use schedule::{Assignment, Schedule};
