use crate::err::*;
use crate::syscall::*;
use crate::types::*;

pub const STDERR: Fd = Fd(2);

pub use crate::syscall::PipeFlags;

/// File descriptor
///
/// Not `Clone`: closing consumes the value, so one `Fd` cannot be closed twice.
#[derive(Debug, PartialEq, Eq)]
pub struct Fd(c_int);

impl Fd {
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, Errno> {
        unsafe { read(self.0, buf) }
    }

    pub fn write(&self, buf: &[u8]) -> Result<usize, Errno> {
        unsafe { write(self.0, buf) }
    }

    pub fn close(self) -> Result<(), Errno> {
        unsafe { close(self.0) }
    }

    /// Whether a successful execve() will close this descriptor
    pub fn is_cloexec(&self) -> Result<bool, Errno> {
        let flags = unsafe { fcntl_flags(self.0, FcntlCmd::F_GETFD, 0) }?;
        Ok(flags & FD_CLOEXEC != 0)
    }

    pub fn is_valid(&self) -> bool {
        // fcntl F_GETFL returns EBADF for invalid FDs; works for all FD types including pipes
        unsafe { fcntl_flags(self.0, FcntlCmd::F_GETFL, 0) }.is_ok()
    }

    pub fn from_raw(fd: c_int) -> Self {
        Self(fd)
    }

    pub fn as_raw(&self) -> c_int {
        self.0
    }

    /// Returns (read end, write end)
    pub fn new_pipe(flags: PipeFlags) -> Result<(Self, Self), Errno> {
        let mut fds: [c_int; 2] = [0, 0];
        unsafe { pipe2(&mut fds, flags)? };
        Ok((Self::from_raw(fds[0]), Self::from_raw(fds[1])))
    }
}

// Naively, one might expect us to close an Fd on drop.  However, we don't actually want this.
// After a fork both processes hold a bitwise copy of every `Fd`, and which copy gets closed, and
// when, is exactly what the handshake protocol controls.  Closing is always explicit.
//
// impl Drop for Fd {
//     fn drop(&mut self) {
//         self.close();
//     }
// }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pipe_round_trips_bytes() {
        let (read_end, write_end) = Fd::new_pipe(PipeFlags::O_CLOEXEC).expect("pipe");

        assert_eq!(write_end.write(b"abc"), Ok(3));
        let mut buf = [0u8; 8];
        assert_eq!(read_end.read(&mut buf), Ok(3));
        assert_eq!(&buf[..3], b"abc");

        write_end.close().expect("close write end");
        assert_eq!(read_end.read(&mut buf), Ok(0));
        read_end.close().expect("close read end");
    }

    #[test]
    fn test_pipe_flags_cloexec() {
        let (read_end, write_end) = Fd::new_pipe(PipeFlags::O_CLOEXEC).expect("pipe");

        assert_eq!(read_end.is_cloexec(), Ok(true));
        assert_eq!(write_end.is_cloexec(), Ok(true));

        read_end.close().expect("close read end");
        write_end.close().expect("close write end");
    }

    #[test]
    fn test_is_valid() {
        let (read_end, write_end) = Fd::new_pipe(PipeFlags::O_CLOEXEC).expect("pipe");

        assert!(write_end.is_valid());
        write_end.close().expect("close write end");

        // A closed number may be reused by a concurrently running test, so exercise the failure path
        // with a descriptor that can never be valid.
        assert!(!Fd::from_raw(-1).is_valid());
        assert_eq!(Fd::from_raw(-1).close(), Err(Errno::EBADF));
        assert_eq!(Fd::from_raw(-1).is_cloexec(), Err(Errno::EBADF));

        read_end.close().expect("close read end");
    }
}
