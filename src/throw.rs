//! Error-handling policies for fallible closures
//!
//! Each function runs its operation immediately on the calling thread and never returns the operation's failure.
//! Only a failing recovery action (the `*_or` functions) reaches the caller, as [`RecoveryError`].

use std::{error::Error, path::Path};

use log::{Level, Log, Record};

use crate::{
    bo,
    bog::Bogger,
    caught::{Caught, RecoveryError, Thrown, catch},
};

// ----------- RESULT -----------------

/// # Example
/// ```rust
/// use throwable::throw::ThrowExt;
///
/// fn fallible_result() -> Result<i32, std::num::ParseIntError> {
///     "42".parse()
/// }
///
/// if let Some(x) = fallible_result().or_print() {
///     assert_eq!(x, 42);
/// }
/// ```
#[easy_ext::ext(ThrowExt)]
pub impl<T, E: Into<Thrown>> Result<T, E> {
    fn caught(self) -> Result<T, Caught> {
        self.map_err(Caught::new)
    }

    /// Discard the error
    fn silently(self) -> Option<T> {
        self.ok()
    }

    /// Print the error to the diagnostic output
    fn or_print(self) -> Option<T> {
        self.or_print_if(true)
    }

    fn or_print_if(self, condition: bool) -> Option<T> {
        match self.caught() {
            Ok(val) => Some(val),
            Err(caught) => {
                if condition {
                    Bogger::bog(&caught);
                }
                None
            }
        }
    }

    /// Print only if the error is a `K`
    fn or_print_if_kind<K: Error + 'static>(self) -> Option<T> {
        match self.caught() {
            Ok(val) => Some(val),
            Err(caught) => {
                if caught.is::<K>() {
                    Bogger::bog(&caught);
                }
                None
            }
        }
    }

    /// Hand the error message to `logger` at [`Level::Error`]
    fn or_log(self, logger: &dyn Log) -> Option<T> {
        match self.caught() {
            Ok(val) => Some(val),
            Err(caught) => {
                logger.log(
                    &Record::builder()
                        .level(Level::Error)
                        .target(env!("CARGO_PKG_NAME"))
                        .args(format_args!("{}", caught.message()))
                        .build(),
                );
                None
            }
        }
    }

    /// Write the error to a new log file in `dir`; nothing is printed, even if that fails
    fn or_file_in(self, dir: impl AsRef<Path>) -> Option<T> {
        match self.caught() {
            Ok(val) => Some(val),
            Err(caught) => {
                let _ = bo::write_caught(dir, &caught);
                None
            }
        }
    }

    fn or_file(self) -> Option<T> {
        self.or_file_in("")
    }

    /// Unwrap or exit the process with `code`
    fn or_exit(self, code: i32) -> T {
        match self.caught() {
            Ok(val) => val,
            Err(caught) => {
                log::debug!("Exiting with {code} on {}: {caught}", caught.kind());
                std::process::exit(code);
            }
        }
    }
}

fn recover<R: Into<Thrown>>(
    recovery: impl FnOnce() -> Result<(), R>,
) -> Result<(), RecoveryError> {
    catch(recovery).map_err(RecoveryError::from)
}

// ----------- POLICIES -----------------

pub fn silent<E: Into<Thrown>>(op: impl FnOnce() -> Result<(), E>) {
    op().silently();
}

/// Run `recovery` if `op` fails
pub fn silent_or<E: Into<Thrown>, R: Into<Thrown>>(
    op: impl FnOnce() -> Result<(), E>,
    recovery: impl FnOnce() -> Result<(), R>,
) -> Result<(), RecoveryError> {
    match op() {
        Ok(()) => Ok(()),
        Err(_) => recover(recovery),
    }
}

pub fn exit_on_failure<T, E: Into<Thrown>>(op: impl FnOnce() -> Result<T, E>, code: i32) -> T {
    op().or_exit(code)
}

pub fn print_on_failure<E: Into<Thrown>>(op: impl FnOnce() -> Result<(), E>) {
    op().or_print();
}

pub fn log_on_failure<E: Into<Thrown>>(op: impl FnOnce() -> Result<(), E>, logger: &dyn Log) {
    op().or_log(logger);
}

/// Log through the global `log` logger under `target`
pub fn log_on_failure_to<E: Into<Thrown>>(op: impl FnOnce() -> Result<(), E>, target: &str) {
    if let Err(caught) = catch(op) {
        log::error!(target: target, "{}", caught.message());
    }
}

/// Print if the failure is a `K`. An error that merely wraps a `K` as its source is not a `K`;
/// use [`print_if_matches`] with [`Caught::chain`] for that.
///
/// # Example
/// ```rust
/// use throwable::throw::print_if_kind;
///
/// // not an io::Error, so nothing is printed
/// print_if_kind::<std::io::Error, _>(|| "x".parse::<i32>().map(drop));
/// ```
pub fn print_if_kind<K: Error + 'static, E: Into<Thrown>>(op: impl FnOnce() -> Result<(), E>) {
    op().or_print_if_kind::<K>();
}

pub fn print_if_matches<E: Into<Thrown>>(
    op: impl FnOnce() -> Result<(), E>,
    predicate: impl FnOnce(&Caught) -> bool,
) {
    if let Err(caught) = catch(op) {
        if predicate(&caught) {
            Bogger::bog(&caught);
        }
    }
}

pub fn print_if<E: Into<Thrown>>(op: impl FnOnce() -> Result<(), E>, condition: bool) {
    op().or_print_if(condition);
}

/// Print the failure, then run `recovery`
pub fn print_or<E: Into<Thrown>, R: Into<Thrown>>(
    op: impl FnOnce() -> Result<(), E>,
    recovery: impl FnOnce() -> Result<(), R>,
) -> Result<(), RecoveryError> {
    match op().or_print() {
        Some(()) => Ok(()),
        None => recover(recovery),
    }
}

/// Record the failure in `throw-<kind>-<millis>.log` in the working directory
pub fn file_on_failure<E: Into<Thrown>>(op: impl FnOnce() -> Result<(), E>) {
    op().or_file();
}

pub fn file_on_failure_in<E: Into<Thrown>>(
    op: impl FnOnce() -> Result<(), E>,
    dir: impl AsRef<Path>,
) {
    op().or_file_in(dir);
}

pub fn optional_silent<T, E: Into<Thrown>>(op: impl FnOnce() -> Result<T, E>) -> Option<T> {
    op().silently()
}

pub fn optional_silent_or<T, E: Into<Thrown>, R: Into<Thrown>>(
    op: impl FnOnce() -> Result<T, E>,
    recovery: impl FnOnce() -> Result<(), R>,
) -> Result<Option<T>, RecoveryError> {
    match op() {
        Ok(val) => Ok(Some(val)),
        Err(_) => recover(recovery).map(|()| None),
    }
}

pub fn optional_print<T, E: Into<Thrown>>(op: impl FnOnce() -> Result<T, E>) -> Option<T> {
    op().or_print()
}

// ----------- DEFERRED -----------------

/// Wrap `op` into an action that discards its failure each time it is run.
/// The action is `Send` whenever `op` is.
pub fn silent_deferred<E: Into<Thrown>>(
    mut op: impl FnMut() -> Result<(), E>,
) -> impl FnMut() {
    move || silent(&mut op)
}

/// Wrap `op` into an action that prints its failure each time it is run
pub fn print_deferred<E: Into<Thrown>>(mut op: impl FnMut() -> Result<(), E>) -> impl FnMut() {
    move || print_on_failure(&mut op)
}
