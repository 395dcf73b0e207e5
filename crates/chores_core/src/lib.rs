pub mod catalog;
pub mod command;
pub mod error;
pub mod identity;
pub mod model;
pub mod schedule;
pub mod sync;
