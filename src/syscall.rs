//! Raw Linux system calls
//!
//! Thin, `unsafe` wrappers over `syscalls::syscall!`.  Errors come back in-band as `Errno`; libc's
//! thread-local `errno` is never read or written.  Safe wrappers live in `crate::os`.

mod close;
mod exec;
mod exit;
mod fcntl;
mod fork;
mod getpid;
mod kill;
mod nanosleep;
mod pipe;
mod read;
mod waitpid;
mod write;

pub use close::*;
pub use exec::*;
pub use exit::*;
pub use fcntl::*;
pub use fork::*;
pub use getpid::*;
pub use kill::*;
pub use nanosleep::*;
pub use pipe::*;
pub use read::*;
pub use waitpid::*;
pub use write::*;
