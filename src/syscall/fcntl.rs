use crate::err::*;
use crate::types::c_int;
use syscalls::{Sysno, syscall};

#[allow(non_camel_case_types)]
#[repr(C)]
pub enum FcntlCmd {
    F_GETFD = 1,
    F_GETFL = 3,
}

/// Descriptor flag reported by F_GETFD.  The only one Linux defines.
pub const FD_CLOEXEC: c_int = 1;

// `man 2 fcntl`:
//
// SYNOPSIS
//        int fcntl(int fd, int cmd, ... /* arg */ );
//
// RETURN VALUE
//        For a successful call, the return value depends on the operation:
//
//        F_GETFD
//               Value of file descriptor flags.
//
//        F_GETFL
//               Value of file status flags.
//
//        All other commands
//               Zero.
//
//        On error, -1 is returned, and errno is set to indicate the error.
pub unsafe fn fcntl_flags(fd: c_int, cmd: FcntlCmd, flags: c_int) -> Result<c_int, Errno> {
    syscall!(Sysno::fcntl, fd, cmd, flags).map(|ret| ret as c_int)
}
