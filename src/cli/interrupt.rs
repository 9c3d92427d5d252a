//! Ctrl-C handling.
//!
//! The first SIGINT trips the run's [`CancelToken`] so the series stops at
//! the next gap boundary; the handler then restores the default action, so
//! a second SIGINT terminates the process.

use std::sync::OnceLock;

use crate::gaps::CancelToken;

static INTERRUPT: OnceLock<CancelToken> = OnceLock::new();

/// Trip `token` when the process receives SIGINT.
///
/// Only the first registered token is wired up; later calls are ignored.
pub fn cancel_on_interrupt(token: &CancelToken) {
    if INTERRUPT.set(token.clone()).is_ok() {
        install();
    }
}

#[cfg(unix)]
extern "C" fn on_sigint(_signal: libc::c_int) {
    if let Some(token) = INTERRUPT.get() {
        token.cancel();
    }
    // SAFETY: signal() is async-signal-safe.
    unsafe {
        libc::signal(libc::SIGINT, libc::SIG_DFL);
    }
}

#[cfg(unix)]
fn install() {
    let handler = on_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t;
    // SAFETY: the handler only performs an atomic store and a signal() call.
    unsafe {
        libc::signal(libc::SIGINT, handler);
    }
}

#[cfg(not(unix))]
fn install() {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn sigint_cancels_registered_token() {
        let token = CancelToken::new();
        cancel_on_interrupt(&token);
        assert!(!token.is_cancelled());

        // SAFETY: the handler installed above catches this SIGINT.
        unsafe {
            libc::raise(libc::SIGINT);
        }
        assert!(token.is_cancelled());
    }
}
