use crate::err::*;
use core::ffi::{CStr, c_char};
use syscalls::{Sysno, syscall};

// `man 2 execve`:
//
// SYNOPSIS
//       int execve(const char *pathname, char *const _Nullable argv[],
//                  char *const _Nullable envp[]);
//
// RETURN VALUE
//        On success, execve() does not return, on error -1 is returned, and errno is set to
//        indicate the error.
//
// execve() only returns on failure, so only the error is handed back.
pub unsafe fn execve(
    pathname: &CStr,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> Errno {
    match syscall!(
        Sysno::execve,
        pathname.as_ptr() as usize,
        argv as usize,
        envp as usize
    ) {
        Ok(_) => unsafe { core::hint::unreachable_unchecked() },
        Err(e) => e,
    }
}
