use crate::err::*;
use crate::types::c_int;
use syscalls::{Sysno, syscall};

/// Flags accepted by `pipe2()`
#[derive(Clone, Copy)]
pub struct PipeFlags(c_int);

impl PipeFlags {
    pub const O_CLOEXEC: Self = Self(0o2000000);

    pub const fn bits(self) -> c_int {
        self.0
    }
}

/// Writes of at most this many bytes to a pipe are atomic.
///
/// `man 7 pipe`: "POSIX.1 requires PIPE_BUF to be at least 512 bytes.  (On Linux, PIPE_BUF is 4096
/// bytes.)"
pub const PIPE_BUF: usize = 4096;

// `man 2 pipe2`:
//
// SYNOPSIS
//
//        int pipe2(int pipefd[2], int flags);
//
// RETURN VALUE
//        On success, zero is returned.  On error, -1 is returned, errno is set to indicate the
//        error, and pipefd is left unchanged.
pub unsafe fn pipe2(pipefd: &mut [c_int; 2], flags: PipeFlags) -> Result<(), Errno> {
    syscall!(Sysno::pipe2, pipefd.as_mut_ptr(), flags.bits()).map(|_| ())
}
