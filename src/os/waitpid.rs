use crate::err::*;
use crate::types::*;
use crate::util::retry_on_interrupt;

pub use crate::syscall::WaitPidOptions;

/// Wait for a child process to change state, retrying on EINTR
///
/// Returns (pid, status) of the child that changed state.  Reaping the child of a fork is the
/// caller's business; the handshake never waits.
pub fn waitpid(pid: pid_t, options: WaitPidOptions) -> Result<(pid_t, c_int), Errno> {
    // SAFETY: waitpid only writes the status word we own
    retry_on_interrupt(|| unsafe { crate::syscall::waitpid(pid, options) })
}

/// Extract exit status from wait status
pub const fn wexitstatus(status: c_int) -> c_int {
    crate::syscall::wexitstatus(status)
}

/// Check if process exited normally
pub const fn wifexited(status: c_int) -> bool {
    crate::syscall::wifexited(status)
}

/// Check if process was terminated by signal
pub const fn wifsignaled(status: c_int) -> bool {
    crate::syscall::wifsignaled(status)
}

/// Extract termination signal from wait status
pub const fn wtermsig(status: c_int) -> c_int {
    crate::syscall::wtermsig(status)
}
