use crate::err::Errno;

/// Run a blocking system call, transparently restarting it while it fails with EINTR.
///
/// Every other outcome, success or error, is returned as-is after a single attempt.
pub fn retry_on_interrupt<T, F>(mut op: F) -> Result<T, Errno>
where
    F: FnMut() -> Result<T, Errno>,
{
    loop {
        match op() {
            Err(Errno::EINTR) => continue,
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_returns_first_success() {
        let mut calls = 0;
        let result = retry_on_interrupt(|| {
            calls += 1;
            Ok::<_, Errno>(calls)
        });
        assert_eq!(result, Ok(1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_retry_restarts_on_eintr() {
        let mut calls = 0;
        let result = retry_on_interrupt(|| {
            calls += 1;
            if calls < 4 { Err(Errno::EINTR) } else { Ok(calls) }
        });
        assert_eq!(result, Ok(4));
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_retry_passes_through_other_errors() {
        let mut calls = 0;
        let result: Result<(), Errno> = retry_on_interrupt(|| {
            calls += 1;
            if calls == 1 { Err(Errno::EINTR) } else { Err(Errno::EBADF) }
        });
        assert_eq!(result, Err(Errno::EBADF));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_retry_does_not_retry_eagain() {
        let mut calls = 0;
        let result: Result<(), Errno> = retry_on_interrupt(|| {
            calls += 1;
            Err(Errno::EAGAIN)
        });
        assert_eq!(result, Err(Errno::EAGAIN));
        assert_eq!(calls, 1);
    }
}
