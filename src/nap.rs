//! Blocking pause that reports interruption

use std::{io, time::Duration};

use cfg_if::cfg_if;

use crate::{bog::Bogger, caught::Caught};

/// Block the calling thread for `millis` milliseconds.
/// On unix a signal delivered to this thread ends the pause early, and the interruption is printed.
pub fn sleep(millis: u64) {
    if let Err(e) = pause(Duration::from_millis(millis)) {
        Bogger::bog(&Caught::new(e));
    }
}

/// Pause for `duration`; `Err` of kind `Interrupted` if a signal cut it short
pub fn pause(duration: Duration) -> io::Result<()> {
    cfg_if! {
        if #[cfg(unix)] {
            // SAFETY: timespec is plain data; zeroing covers platform padding fields
            let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
            ts.tv_sec = duration.as_secs() as libc::time_t;
            ts.tv_nsec = duration.subsec_nanos() as _;

            // SAFETY: ts is a valid timespec and the remainder pointer may be null
            match unsafe { libc::nanosleep(&ts, std::ptr::null_mut()) } {
                0 => Ok(()),
                _ => Err(io::Error::last_os_error()),
            }
        } else {
            std::thread::sleep(duration);
            Ok(())
        }
    }
}
