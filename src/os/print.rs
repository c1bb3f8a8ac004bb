//! Print framework
//!
//! Allocation-free, unbuffered output for the abort path.  Every piece is a direct `write()`, so
//! it is usable in a freshly forked child.  Short writes and write errors are ignored: there is
//! nowhere left to report them.

use crate::err::Errno;
use crate::os::{Fd, STDERR};

pub fn eprint<T: Print>(s: T) {
    s.print(&STDERR);
}

pub trait Print {
    fn print(&self, fd: &Fd);
}

impl<const N: usize> Print for &[u8; N] {
    fn print(&self, fd: &Fd) {
        let _ = fd.write(*self);
    }
}

impl Print for &str {
    fn print(&self, fd: &Fd) {
        let _ = fd.write(self.as_bytes());
    }
}

impl Print for i32 {
    fn print(&self, fd: &Fd) {
        let _ = fd.write(itoa::Buffer::new().format(*self).as_bytes());
    }
}

/// `EBADF (Bad file descriptor)`, or `errno 4242` for codes the kernel does not define.
impl Print for Errno {
    fn print(&self, fd: &Fd) {
        match (self.name(), self.description()) {
            (Some(name), Some(description)) => {
                name.print(fd);
                " (".print(fd);
                description.print(fd);
                ")".print(fd);
            }
            (Some(name), None) => name.print(fd),
            _ => {
                "errno ".print(fd);
                self.into_raw().print(fd);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::PipeFlags;

    fn printed<T: Print>(s: T) -> Vec<u8> {
        let (read_end, write_end) = Fd::new_pipe(PipeFlags::O_CLOEXEC).expect("pipe");

        s.print(&write_end);
        write_end.close().expect("close write end");

        let mut buf = [0u8; 128];
        let len = read_end.read(&mut buf).expect("read");
        read_end.close().expect("close read end");
        buf[..len].to_vec()
    }

    #[test]
    fn test_print_str_and_bytes() {
        assert_eq!(printed("ERROR: "), b"ERROR: ");
        assert_eq!(printed(b"\n"), b"\n");
    }

    #[test]
    fn test_print_integers() {
        assert_eq!(printed(17i32), b"17");
        assert_eq!(printed(i32::MIN), b"-2147483648");
    }

    #[test]
    fn test_print_errno() {
        let out = printed(Errno::ENOENT);
        assert!(out.starts_with(b"ENOENT ("));
        assert!(out.ends_with(b")"));
    }

    #[test]
    fn test_print_unknown_errno() {
        assert_eq!(printed(Errno::new(4242)), b"errno 4242");
    }
}
