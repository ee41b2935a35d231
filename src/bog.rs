//! Diagnostic output for printed failures
//! Every "print" policy ends up in [`Bogger::bog`]. Until configured, output is plain text on stderr.

use std::{
    io::{Write, stderr, stdout},
    sync::{Arc, Mutex},
};

use crate::caught::Caught;

pub trait BogFmter {
    fn begin_tag(&self) -> &'static str;
    fn end_tag(&self) -> &'static str {
        "]"
    }

    /// `[ERRO: <kind>] <message>`, then the full description
    fn format(&self, caught: &Caught) -> String {
        let mut s = String::from(self.begin_tag());
        s.push_str(caught.kind());
        s.push_str(self.end_tag());

        let msg = caught.message();
        if !msg.is_empty() {
            s.push(' ');
            s.push_str(&msg);
        }
        s.push('\n');
        s.push_str(&caught.description());
        s.push('\n');

        s
    }
}

pub struct Plain {}
impl BogFmter for Plain {
    fn begin_tag(&self) -> &'static str {
        "[ERRO: "
    }
}

pub struct Fg {}
impl BogFmter for Fg {
    fn begin_tag(&self) -> &'static str {
        "\x1b[31m[ERRO: " // red foreground
    }
    fn end_tag(&self) -> &'static str {
        "]\x1b[0m"
    }
}

pub type BogWriter = Box<dyn Write + Send + Sync>;

// --------  GLOBAL  ----------

#[allow(non_camel_case_types)]
struct GLOBAL_BOGGER_STRUCT {
    formatter: Arc<dyn BogFmter + Send + Sync>,
    writer: BogWriter,
}

impl GLOBAL_BOGGER_STRUCT {
    fn fallback() -> Self {
        Self {
            formatter: Arc::new(Plain {}),
            writer: Box::new(stderr()),
        }
    }

    // one write per failure
    fn write(&mut self, formatted: &str) {
        let _ = self.writer.write_all(formatted.as_bytes());
        let _ = self.writer.flush();
    }
}

fn formatter() -> Option<Arc<dyn BogFmter + Send + Sync>> {
    let mut guard = GLOBAL_BOGGER.lock().ok()?;
    Some(
        guard
            .get_or_insert_with(GLOBAL_BOGGER_STRUCT::fallback)
            .formatter
            .clone(),
    )
}

// puts the previous writer back, even on unwind
struct RestoreWriter(Option<BogWriter>);

impl Drop for RestoreWriter {
    fn drop(&mut self) {
        if let Some(prev) = self.0.take() {
            Bogger::redirect(prev);
        }
    }
}

static GLOBAL_BOGGER: Mutex<Option<GLOBAL_BOGGER_STRUCT>> = Mutex::new(None);

pub struct Bogger {}

// organize under namespace
impl Bogger {
    // don't panic
    // the failure's Display/Debug runs unlocked, so it may print too
    #[inline]
    pub fn bog(caught: &Caught) {
        let Some(formatter) = formatter() else {
            return;
        };
        let formatted = formatter.format(caught);

        if let Ok(mut guard) = GLOBAL_BOGGER.lock() {
            guard
                .get_or_insert_with(GLOBAL_BOGGER_STRUCT::fallback)
                .write(&formatted);
        }
    }

    /// Swap in a new writer, returning the one it replaces.
    /// Returns `None` only if the lock is poisoned, in which case nothing changes.
    pub fn redirect(writer: BogWriter) -> Option<BogWriter> {
        let mut guard = GLOBAL_BOGGER.lock().ok()?;
        let b = guard.get_or_insert_with(GLOBAL_BOGGER_STRUCT::fallback);
        Some(std::mem::replace(&mut b.writer, writer))
    }

    /// Send diagnostics to `writer` while `f` runs.
    /// The previous writer is restored even if `f` panics.
    pub fn with_writer<T>(writer: BogWriter, f: impl FnOnce() -> T) -> T {
        let _restore = RestoreWriter(Bogger::redirect(writer));
        f()
    }

    fn init_global(formatter: Arc<dyn BogFmter + Send + Sync>, writer: BogWriter) {
        if let Ok(mut guard) = GLOBAL_BOGGER.lock() {
            *guard = Some(GLOBAL_BOGGER_STRUCT { formatter, writer });
        }
    }
}

// ----------- PUBLIC -------------
pub fn init_bogger(fg: bool, output_stderr: bool) {
    let writer: BogWriter = if output_stderr {
        Box::new(stderr())
    } else {
        Box::new(stdout())
    };

    if fg {
        Bogger::init_global(Arc::new(Fg {}), writer);
    } else {
        Bogger::init_global(Arc::new(Plain {}), writer);
    }
}
