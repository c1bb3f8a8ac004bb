#![cfg_attr(not(test), no_std)]

//! Learn why a forked child's exec failed, without vfork().
//!
//! See `handshake` for the protocol and `spawn` for a packaged fork + exec.

pub mod err;
pub mod handshake;
pub mod os;
pub mod spawn;
pub mod syscall;
pub mod types;
pub mod util;
