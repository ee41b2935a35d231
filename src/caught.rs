//! Failure descriptor shared by every policy

use std::{
    error::Error,
    fmt::{self, Display, Write},
};

/// Anything a wrapped operation may fail with, once boxed.
pub type Thrown = Box<dyn Error + Send + Sync + 'static>;

/// A failure taken out of a wrapped operation, together with the name of the type it was thrown as.
#[derive(Debug)]
pub struct Caught {
    kind: String,
    error: Thrown,
}

impl Caught {
    pub fn new<E: Into<Thrown>>(error: E) -> Self {
        Self {
            kind: kind_name::<E>(),
            error: error.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// The `Display` text of the failure
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// `Debug` of the failure, then one `Caused by:` line per source
    pub fn description(&self) -> String {
        let mut s = format!("{:?}", self.error);
        for source in self.chain().skip(1) {
            let _ = write!(s, "\nCaused by: {source}");
        }
        s
    }

    /// The failure followed by its `source()` chain
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(Some(self.error.as_ref() as &(dyn Error + 'static)), |&e| {
            e.source()
        })
    }

    /// True if the failure itself is a `K`. Wrapped sources are not considered.
    pub fn is<K: Error + 'static>(&self) -> bool {
        self.error.downcast_ref::<K>().is_some()
    }

    pub fn into_inner(self) -> Thrown {
        self.error
    }
}

impl Display for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

/// Run `op`, boxing its failure
pub fn catch<T, E: Into<Thrown>>(op: impl FnOnce() -> Result<T, E>) -> Result<T, Caught> {
    op().map_err(Caught::new)
}

/// File-safe name of `E`: `std::io::Error` becomes `std.io.error.Error`
pub fn kind_name<E>() -> String {
    let full = std::any::type_name::<E>();
    let path = full.split('<').next().unwrap_or(full).trim_start_matches('&');

    path.replace("::", ".")
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}

/// A recovery action failed after the primary operation had already failed.
#[derive(Debug, thiserror::Error)]
#[error("Recovery action failed ({kind}): {source}")]
pub struct RecoveryError {
    kind: String,
    #[source]
    source: Thrown,
}

impl RecoveryError {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn into_inner(self) -> Thrown {
        self.source
    }
}

impl From<Caught> for RecoveryError {
    fn from(caught: Caught) -> Self {
        Self {
            kind: caught.kind,
            source: caught.error,
        }
    }
}
