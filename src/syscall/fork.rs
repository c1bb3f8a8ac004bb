use crate::err::*;
use crate::types::pid_t;
use syscalls::{Sysno, syscall};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForkResult {
    /// In parent process with child PID
    Parent(pid_t),
    /// In child process
    Child,
}

// `man 2 fork`:
//
// SYNOPSIS
//        pid_t fork(void);
//
// RETURN VALUE
//        On success, the PID of the child process is returned in the parent, and 0 is returned in
//        the child.  On failure, -1 is returned in the parent, no child process is created, and
//        errno is set to indicate the error.
//
// This is the bare system call: no pthread_atfork handlers run, and libc's cached state is not
// refreshed in the child.
pub unsafe fn fork() -> Result<ForkResult, Errno> {
    let pid = syscall!(Sysno::fork)? as pid_t;
    if pid == 0 {
        Ok(ForkResult::Child)
    } else {
        Ok(ForkResult::Parent(pid))
    }
}
