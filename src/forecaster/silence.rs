//! Deep suppression of stdout/stderr during model fitting.
//!
//! Numerical backends can emit diagnostics from native code beneath the
//! `tracing` layer, so log-level filtering cannot intercept them. The guard
//! redirects file descriptors 1 and 2 to `/dev/null` for its lifetime and
//! restores them on drop, success or failure alike.
//!
//! The redirection touches process-wide descriptors, which is unsafe under
//! concurrent fits: two overlapping swaps can leave the process with its
//! streams pointing at the wrong place. A process-wide lock therefore
//! serializes every fit that asks for suppression.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

static REDIRECT_LOCK: Mutex<()> = Mutex::new(());

#[cfg(unix)]
pub struct StdioSilencer {
    saved: [libc::c_int; 2],
    nulls: [libc::c_int; 2],
    _serial: MutexGuard<'static, ()>,
}

#[cfg(unix)]
impl StdioSilencer {
    /// Redirects fds 1 and 2 to `/dev/null` until the guard is dropped.
    /// Blocks while another fit holds the redirection.
    pub fn acquire() -> io::Result<Self> {
        let serial = REDIRECT_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Flush userspace buffers so pending application output is not
        // swallowed by the swap.
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();

        unsafe {
            let null_out = libc::open(c"/dev/null".as_ptr(), libc::O_RDWR);
            if null_out < 0 {
                return Err(io::Error::last_os_error());
            }
            let null_err = libc::open(c"/dev/null".as_ptr(), libc::O_RDWR);
            if null_err < 0 {
                let err = io::Error::last_os_error();
                libc::close(null_out);
                return Err(err);
            }

            let saved_out = libc::dup(1);
            let saved_err = libc::dup(2);
            if saved_out < 0 || saved_err < 0 {
                let err = io::Error::last_os_error();
                if saved_out >= 0 {
                    libc::close(saved_out);
                }
                libc::close(null_out);
                libc::close(null_err);
                return Err(err);
            }

            libc::dup2(null_out, 1);
            libc::dup2(null_err, 2);

            Ok(Self {
                saved: [saved_out, saved_err],
                nulls: [null_out, null_err],
                _serial: serial,
            })
        }
    }
}

#[cfg(unix)]
impl Drop for StdioSilencer {
    fn drop(&mut self) {
        unsafe {
            libc::dup2(self.saved[0], 1);
            libc::dup2(self.saved[1], 2);
            libc::close(self.saved[0]);
            libc::close(self.saved[1]);
            libc::close(self.nulls[0]);
            libc::close(self.nulls[1]);
        }
    }
}

/// No-op stand-in on platforms without POSIX descriptors; the lock still
/// serializes fits.
#[cfg(not(unix))]
pub struct StdioSilencer {
    _serial: MutexGuard<'static, ()>,
}

#[cfg(not(unix))]
impl StdioSilencer {
    pub fn acquire() -> io::Result<Self> {
        let serial = REDIRECT_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(Self { _serial: serial })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_restore_round_trips() {
        for _ in 0..3 {
            let guard = StdioSilencer::acquire().unwrap();
            drop(guard);
            // The streams must be writable again once the guard is gone.
            assert!(writeln!(io::stdout(), "visible again").is_ok());
        }
    }

    #[test]
    fn test_concurrent_acquires_serialize() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let _guard = StdioSilencer::acquire().unwrap();
                    std::thread::sleep(std::time::Duration::from_millis(5));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(writeln!(io::stderr(), "streams intact").is_ok());
    }
}
