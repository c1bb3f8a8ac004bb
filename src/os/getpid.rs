use crate::types::pid_t;

#[inline]
pub fn getpid() -> pid_t {
    // SAFETY: getpid cannot fail and touches no memory
    unsafe { crate::syscall::getpid() }
}
