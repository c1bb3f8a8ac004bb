use crate::err::Errno;
use crate::types::{CStr, c_char};

/// Exec `path` with `argv[0]` set to `path` and an empty environment.
///
/// Only returns on failure.
pub fn exec_filepath(path: &CStr) -> Errno {
    // Provide an argv[0] so that /proc/<pid>/cmdline shows the binary name
    let argv: [*const c_char; 2] = [path.as_ptr(), core::ptr::null()];

    // SAFETY: argv is a properly null-terminated array of null-terminated C strings
    unsafe { crate::syscall::execve(path, argv.as_ptr(), core::ptr::null()) }
}

/// Exec `path` with caller-provided argument and environment vectors.
///
/// Only returns on failure.
///
/// # Safety
///
/// `argv` and `envp` must each be null or point to a null-terminated array of pointers to
/// null-terminated C strings, all valid for the duration of the call.
pub unsafe fn execve(
    path: &CStr,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> Errno {
    // SAFETY: The caller has guaranteed the safety preconditions
    unsafe { crate::syscall::execve(path, argv, envp) }
}
