use crate::types::c_int;

/// Terminate the whole process immediately.
///
/// No destructors, atexit handlers, or stdio flushes run, which makes this the right way out of a
/// forked child whose exec failed.
#[inline]
pub fn exit(status: c_int) -> ! {
    unsafe { crate::syscall::exit_group(status) }
}
