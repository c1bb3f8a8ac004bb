//! Safe wrappers over `crate::syscall`

mod exec;
mod exit;
mod fd;
mod fork;
mod getpid;
mod kill;
mod print;
mod sleep;
mod waitpid;

pub use exec::*;
pub use exit::*;
pub use fd::*;
pub use fork::*;
pub use getpid::*;
pub use kill::*;
pub use print::*;
pub use sleep::*;
pub use waitpid::*;
