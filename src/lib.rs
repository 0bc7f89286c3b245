//! # Announcer - A Counting Demo Library
//!
//! Rules out every unsigned integer below the answer, one line at a time,
//! then announces the answer itself.
//!
//! ## Output Shape
//!
//! ```text
//! 0 is not the answer
//! 1 is not the answer
//!     ...
//! 41 is not the answer
//! it's 42
//! ```
//!
//! ## Usage as a Library
//!
//! ```
//! use announcer::Announcer;
//!
//! let mut out: Vec<u8> = Vec::new();
//! Announcer::new(3).announce(&mut out)?;
//! assert_eq!(out, b"0 is not the answer\n1 is not the answer\n2 is not the answer\nit's 3\n");
//! # Ok::<(), announcer::AnnounceError>(())
//! ```

// Core routine
pub mod announcer;

// Error layer
pub mod error;

// Stderr logger for the binary
pub mod logging;

pub use announcer::{Announcer, ANSWER};
pub use error::{AnnounceError, Result};
