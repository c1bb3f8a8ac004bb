//! Fork and exec in one call, reporting exec failures precisely.
//!
//! These wrap the `Handshake` protocol around fork() and execve().  Neither waits for the child:
//! reaping it, on success or failure, stays with the caller.

use crate::err::*;
use crate::handshake::Handshake;
use crate::os::*;
use crate::types::*;

/// Exit status of a child whose exec failed
pub const EXEC_FAILED_STATUS: c_int = 127;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnError {
    /// fork() failed; no child exists.
    Fork(Errno),
    /// The child could not exec.  It exits with `EXEC_FAILED_STATUS` and still needs reaping.
    Exec { pid: pid_t, errno: Errno },
}

impl SpawnError {
    pub fn errno(self) -> Errno {
        match self {
            SpawnError::Fork(errno) | SpawnError::Exec { errno, .. } => errno,
        }
    }
}

/// Fork and exec `path` with `argv[0]` set to `path` and an empty environment.
///
/// Returns the child's PID once the exec has succeeded.
pub fn fork_exec(path: &CStr) -> Result<pid_t, SpawnError> {
    spawn_with(|| exec_filepath(path))
}

/// Fork and exec `path` with caller-provided argument and environment vectors.
///
/// Returns the child's PID once the exec has succeeded.
///
/// # Safety
///
/// `argv` and `envp` must each be null or point to a null-terminated array of pointers to
/// null-terminated C strings, valid until this returns.  The caller must also uphold
/// `os::fork`'s requirements.
pub unsafe fn fork_execve(
    path: &CStr,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> Result<pid_t, SpawnError> {
    // SAFETY: The caller has guaranteed the safety preconditions
    spawn_with(|| unsafe { execve(path, argv, envp) })
}

/// `exec` only returns on failure.
fn spawn_with<F: FnOnce() -> Errno>(exec: F) -> Result<pid_t, SpawnError> {
    let handshake = Handshake::create();

    let pid = match fork() {
        Ok(ForkResult::Parent(pid)) => pid,
        Ok(ForkResult::Child) => {
            let child = handshake.begin_child();
            child.report_failure(exec());
            exit(EXEC_FAILED_STATUS);
        }
        Err(errno) => {
            // No child holds the write end, so this returns immediately.
            let _ = handshake.finish();
            return Err(SpawnError::Fork(errno));
        }
    };

    match handshake.finish() {
        0 => Ok(pid),
        code => Err(SpawnError::Exec {
            pid,
            errno: Errno::new(code),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reap(pid: pid_t) -> c_int {
        let (reaped, status) = waitpid(pid, WaitPidOptions::empty()).expect("waitpid");
        assert_eq!(reaped, pid);
        status
    }

    #[test]
    fn test_fork_exec_success() {
        let pid = fork_exec(c"/bin/true").expect("spawn /bin/true");

        let status = reap(pid);
        assert!(wifexited(status));
        assert_eq!(wexitstatus(status), 0);
    }

    #[test]
    fn test_fork_exec_missing_binary() {
        let err = fork_exec(c"/nonexistent/forkexec-handshake/spawn").unwrap_err();

        let SpawnError::Exec { pid, errno } = err else {
            panic!("expected exec failure, got {err:?}");
        };
        assert_eq!(errno, Errno::ENOENT);
        assert_eq!(err.errno(), Errno::ENOENT);

        let status = reap(pid);
        assert!(wifexited(status));
        assert_eq!(wexitstatus(status), EXEC_FAILED_STATUS);
    }

    #[test]
    fn test_fork_exec_not_executable() {
        // A directory can never be exec'd.
        let err = fork_exec(c"/").unwrap_err();

        let SpawnError::Exec { pid, errno } = err else {
            panic!("expected exec failure, got {err:?}");
        };
        assert_eq!(errno, Errno::EACCES);
        reap(pid);
    }

    #[test]
    fn test_fork_execve_passes_argv() {
        let argv: [*const c_char; 4] = [
            c"sh".as_ptr(),
            c"-c".as_ptr(),
            c"exit 42".as_ptr(),
            core::ptr::null(),
        ];
        let envp: [*const c_char; 1] = [core::ptr::null()];

        // SAFETY: both vectors are null-terminated and outlive the call
        let pid = unsafe { fork_execve(c"/bin/sh", argv.as_ptr(), envp.as_ptr()) }
            .expect("spawn /bin/sh");

        let status = reap(pid);
        assert!(wifexited(status));
        assert_eq!(wexitstatus(status), 42);
    }

    #[test]
    fn test_spawn_error_errno() {
        assert_eq!(SpawnError::Fork(Errno::EAGAIN).errno(), Errno::EAGAIN);
        assert_eq!(
            SpawnError::Exec {
                pid: 1,
                errno: Errno::E2BIG
            }
            .errno(),
            Errno::E2BIG
        );
    }
}
