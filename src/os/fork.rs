use crate::err::Errno;

pub type ForkResult = crate::syscall::ForkResult;

/// Fork the current process
///
/// # Safety
///
/// fork() is hazardous in multithreaded programs: the child is a copy of the calling thread only,
/// and any lock another thread held at the time of the fork stays held forever in the child.
///
/// In the child, restrict yourself to async-signal-safe work until exec or exit.  Everything the
/// handshake does in the child (`begin_child`, `report_failure`) and `exec_filepath`, `execve`,
/// `exit` here are raw system calls and qualify.
pub fn fork() -> Result<ForkResult, Errno> {
    // SAFETY: fork itself touches no memory; see above for what the child may do afterward
    unsafe { crate::syscall::fork() }
}
