use crate::types::c_int;
use syscalls::{Sysno, syscall};

// `man 2 exit_group`:
//
// SYNOPSIS
//       [[noreturn]] void syscall(SYS_exit_group, int status);
//
// DESCRIPTION
//       This system call terminates all threads in the calling process's thread group.
//
// RETURN VALUE
//      This system call does not return.
//
// Plain `exit` would only end the calling thread, which leaves the process alive if the caller
// is multi-threaded.
pub unsafe fn exit_group(status: c_int) -> ! {
    let _ = syscall!(Sysno::exit_group, status);
    // Inform the compiler that this function does not return
    unsafe { core::hint::unreachable_unchecked() };
}
