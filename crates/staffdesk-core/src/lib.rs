//! Core types and logic for the Staffdesk employee directory.
//!
//! This crate is free of I/O and async-runtime dependencies. It owns the
//! domain records, the in-memory [`directory::Directory`], the derived views
//! the dashboard renders, and the [`slot::SessionSlot`] abstraction that the
//! session store persists through.

pub mod department;
pub mod directory;
pub mod employee;
pub mod error;
pub mod role;
pub mod salary;
pub mod seed;
pub mod slot;
pub mod user;
pub mod validate;
pub mod views;

pub use error::{Error, Result};
