//! System call types that are strongly associated with specific system calls are defined in the
//! corresponding system call file.  Those shared across many are defined here.

#[allow(non_camel_case_types)]
pub type pid_t = i32;

#[allow(non_camel_case_types)]
pub type c_int = core::ffi::c_int;

#[allow(non_camel_case_types)]
pub type c_char = core::ffi::c_char;

pub type CStr = core::ffi::CStr;

#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct timespec {
    pub tv_sec: i64,
    pub tv_nsec: i64,
}
const _: () = assert!(core::mem::size_of::<timespec>() == 16);

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u32)]
// Only implementing the ones we care about to make matches simpler
pub enum Signal {
    // SIGHUP = 1,
    // SIGINT = 2,
    // SIGQUIT = 3,
    // SIGILL = 4,
    // SIGTRAP = 5,
    SIGABRT = 6,
    // SIGBUS = 7,
    // SIGFPE = 8,
    SIGKILL = 9,
    // SIGUSR1 = 10,
    // SIGSEGV = 11,
    // SIGUSR2 = 12,
    // SIGPIPE = 13,
    // SIGALRM = 14,
    // SIGTERM = 15,
}

impl Signal {
    pub const fn as_raw(self) -> c_int {
        self as c_int
    }
}
