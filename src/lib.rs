//! Run fallible closures under named error-handling policies.
//! A failure is never returned to the caller: it is discarded, printed, logged, written to a file, or ends the process.
//!
//! # Policies
//! ### Silent
//! [`throw::silent`], [`throw::optional_silent`] and their `_or` forms, which run a recovery action
//! ### Print
//! [`throw::print_on_failure`], [`throw::print_if`], [`throw::print_if_kind`], [`throw::optional_print`]; output goes through [`bog`]
//! ### Elsewhere
//! [`throw::log_on_failure`] to a [`log::Log`], [`throw::file_on_failure`] to a file, [`throw::exit_on_failure`] out of the process
//! ### Deferred
//! [`throw::silent_deferred`] and [`throw::print_deferred`] wrap without running
//! ### ThrowExt
//! The same policies applied to a `Result` already in hand
//!
//! # Additional
//! Only a failing recovery action reaches the caller, as [`caught::RecoveryError`].

pub mod bo; // Failure log files
pub mod bog; // Diagnostic output
pub mod caught;
pub mod macros;
pub mod nap; // Sleep
pub mod throw;
