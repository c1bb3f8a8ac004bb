//! # Error handling
//!
//! Two disjoint channels:
//!
//! - An exec failure code reported by a child is ordinary data.  It travels through the handshake
//!   pipe and comes back as the return value of `Handshake::finish`.
//! - Failures of steps that cannot fail in a consistent environment (creating the pipe, marking it
//!   close-on-exec, closing a descriptor we know is open, reading or writing it for any reason
//!   other than EINTR) abort the process.  There is no caller that could meaningfully recover.
//!
//! The abort path has to work in a freshly forked child of a multi-threaded parent, so it only
//! issues raw system calls: it never allocates, takes locks, or unwinds.
//!
//! Our print machinery does not support typical Rust `{}`-formatting.  Instead, messages are
//! assembled from `Print` pieces.

use crate::os::*;
use crate::types::*;

pub type Errno = syscalls::Errno;

/// Exit status used if SIGABRT does not terminate us, matching what a shell reports for a process
/// killed by SIGABRT.
pub const ABORT_EXIT_STATUS: c_int = 128 + Signal::SIGABRT.as_raw();

/// Raise SIGABRT on the current process.  If it is blocked or ignored, exit instead.
pub fn abort() -> ! {
    let _ = kill(getpid(), Signal::SIGABRT);
    exit(ABORT_EXIT_STATUS)
}

pub fn abort_with_msg(msg: &str) -> ! {
    report(msg, None);
    abort()
}

fn report<M: Print>(msg: M, errno: Option<Errno>) {
    if !cfg!(feature = "diagnostics") {
        return;
    }

    eprint("ERROR: ");
    eprint(msg);
    if let Some(e) = errno {
        eprint(": ");
        eprint(e);
    }
    eprint(b"\n");
}

pub trait OrAbortResult<T> {
    fn or_abort<M: Print>(self, msg: M) -> T;
}

impl<T> OrAbortResult<T> for Result<T, Errno> {
    fn or_abort<M: Print>(self, msg: M) -> T {
        match self {
            Ok(t) => t,
            Err(e) => {
                report(msg, Some(e));
                abort();
            }
        }
    }
}

pub trait OrAbortOption<T> {
    fn or_abort<M: Print>(self, msg: M) -> T;
}

impl<T> OrAbortOption<T> for Option<T> {
    fn or_abort<M: Print>(self, msg: M) -> T {
        if let Some(t) = self {
            return t;
        };

        report(msg, None);
        abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_exit_status_matches_shell_convention() {
        assert_eq!(ABORT_EXIT_STATUS, 134);
    }

    #[test]
    fn test_or_abort_passes_through_ok() {
        let value: Result<u8, Errno> = Ok(7);
        assert_eq!(value.or_abort("unreachable"), 7);
    }

    #[test]
    fn test_or_abort_passes_through_some() {
        assert_eq!(Some(3usize).or_abort("unreachable"), 3);
    }

    #[test]
    fn test_or_abort_aborts_child_on_err() {
        let pid = match fork().expect("fork") {
            ForkResult::Child => {
                let failed: Result<(), Errno> = Err(Errno::EBADF);
                failed.or_abort("expected failure in test child");
                exit(0);
            }
            ForkResult::Parent(pid) => pid,
        };

        let (_, status) = waitpid(pid, WaitPidOptions::empty()).expect("waitpid");
        assert!(wifsignaled(status));
        assert_eq!(wtermsig(status), Signal::SIGABRT.as_raw());
    }

    #[test]
    fn test_or_abort_aborts_child_on_none() {
        let pid = match fork().expect("fork") {
            ForkResult::Child => {
                let missing: Option<()> = None;
                missing.or_abort("expected missing value in test child");
                exit(0);
            }
            ForkResult::Parent(pid) => pid,
        };

        let (_, status) = waitpid(pid, WaitPidOptions::empty()).expect("waitpid");
        assert!(wifsignaled(status));
        assert_eq!(wtermsig(status), Signal::SIGABRT.as_raw());
    }
}
