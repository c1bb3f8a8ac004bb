//! # Fork/exec handshake
//!
//! Without vfork(), a parent cannot see why its child's exec failed: all it gets is an exit
//! status.  `Handshake` carries the child's exec error back to the parent over a pipe whose write
//! end is close-on-exec:
//!
//! - If the child's exec succeeds, the kernel closes the write end and the parent reads EOF.
//! - If the child's exec fails, the child writes the errno as one native-endian `c_int` record.
//! - If the fork itself failed, the parent holds the only write end, closes it, and reads EOF.
//!
//! ```no_run
//! use forkexec_handshake::handshake::Handshake;
//! use forkexec_handshake::os::*;
//!
//! let handshake = Handshake::create();
//! match fork() {
//!     Err(e) => {
//!         // No child exists.  Always returns 0 here.
//!         let _ = handshake.finish();
//!         // ... handle fork failure `e` ...
//!     }
//!     Ok(ForkResult::Child) => {
//!         let child = handshake.begin_child();
//!         let err = exec_filepath(c"/bin/true");
//!         child.report_failure(err);
//!         exit(127);
//!     }
//!     Ok(ForkResult::Parent(pid)) => {
//!         match handshake.finish() {
//!             0 => { /* exec succeeded */ }
//!             code => { /* exec failed with errno `code` */ }
//!         }
//!         let _ = waitpid(pid, WaitPidOptions::empty());
//!     }
//! }
//! ```
//!
//! If the child execs without calling `begin_child`, its copy of the read end stays open and
//! `finish` may block forever.  That is a contract violation, not something handled here.
//!
//! `finish` blocks until the child execs, reports, or dies.  There is no timeout.

use crate::err::*;
use crate::os::*;
use crate::types::*;
use crate::util::retry_on_interrupt;

/// Size of the one record that can cross the pipe
pub const RECORD_SIZE: usize = core::mem::size_of::<c_int>();

// The kernel only guarantees atomic pipe writes up to PIPE_BUF bytes.
const _: () = assert!(RECORD_SIZE <= crate::syscall::PIPE_BUF);

/// Parent-side handle, created before the fork.
///
/// Both processes hold a copy after the fork.  The parent consumes its copy with `finish` (or
/// `finish_result`); the child consumes its copy with `begin_child`.
#[must_use = "a Handshake must be consumed by finish() in the parent or begin_child() in the child"]
#[derive(Debug)]
pub struct Handshake {
    read_end: Fd,
    write_end: Fd,
}

/// Child-side handle, returned by `Handshake::begin_child`.  Owns only the write end.
#[must_use = "a ChildHandshake exists to report an exec failure"]
#[derive(Debug)]
pub struct ChildHandshake {
    write_end: Fd,
}

impl Handshake {
    /// Create the pipe with both ends close-on-exec.
    ///
    /// The flag is set atomically by pipe2(), so an exec racing on another thread can never
    /// inherit the write end.  Aborts on failure; there is nothing sensible to recover before a
    /// fork.
    pub fn create() -> Self {
        let (read_end, write_end) = Fd::new_pipe(PipeFlags::O_CLOEXEC)
            .or_abort("Unable to create fork/exec handshake pipe");

        Self {
            read_end,
            write_end,
        }
    }

    /// Call in the child, right after fork() returns `ForkResult::Child`.
    ///
    /// Closes the child's copy of the read end.
    pub fn begin_child(self) -> ChildHandshake {
        let Self {
            read_end,
            write_end,
        } = self;

        read_end
            .close()
            .or_abort("Unable to close fork/exec handshake read end in child");

        ChildHandshake { write_end }
    }

    /// Call in the parent once fork() has returned, whether or not it succeeded.
    ///
    /// Returns 0 if the child exec'd, exited without reporting, or never existed.  Otherwise
    /// returns the code the child passed to `report_failure`.
    ///
    /// Neither reads nor writes the calling thread's `errno`.
    pub fn finish(self) -> c_int {
        let Self {
            read_end,
            write_end,
        } = self;

        // Otherwise our own copy keeps the pipe open and the read below never sees EOF.
        write_end
            .close()
            .or_abort("Unable to close fork/exec handshake write end in parent");

        let mut record = [0u8; RECORD_SIZE];
        let len = retry_on_interrupt(|| read_end.read(&mut record))
            .or_abort("Unable to read fork/exec handshake pipe");

        let code = match len {
            RECORD_SIZE => c_int::from_ne_bytes(record),
            0 => 0,
            _ => abort_with_msg("Short read on fork/exec handshake pipe"),
        };

        read_end
            .close()
            .or_abort("Unable to close fork/exec handshake read end in parent");

        code
    }

    /// `finish`, with 0 mapped to `Ok(())` and any reported code to `Err`.
    pub fn finish_result(self) -> Result<(), Errno> {
        match self.finish() {
            0 => Ok(()),
            code => Err(Errno::new(code)),
        }
    }
}

impl ChildHandshake {
    /// Hand `err` to the parent.  Call after exec failed, then exit.
    ///
    /// The write end is left open; process exit closes it.
    pub fn report_failure(self, err: Errno) {
        send_record(&self.write_end, err.into_raw());
    }
}

/// Write one full record, restarting on EINTR and resuming after short writes.
fn send_record(fd: &Fd, code: c_int) {
    let record = code.to_ne_bytes();
    let mut remaining: &[u8] = &record;

    while !remaining.is_empty() {
        let written = retry_on_interrupt(|| fd.write(remaining))
            .or_abort("Unable to write fork/exec handshake pipe");

        if written == 0 {
            abort_with_msg("fork/exec handshake pipe accepted no bytes");
        }

        remaining = remaining
            .get(written..)
            .or_abort("fork/exec handshake pipe wrote more than requested");
    }
}
