//! Operation outcomes
//!
//! Every operation that touches the bus returns `Result<(), Error>`.
//! [`Status`] is the flat numeric form for callers that need one code per
//! operation (C shims, logging counters).

use core::fmt;

/// Failure reported by a capability or by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Permanent failure (bus fault, pin fault, downstream transaction failure)
    Failed,
    /// Bus currently occupied
    Busy,
    /// Bus operation exceeded its bound
    Timeout,
    /// A capability slot of the contract is not populated
    MissingCapability,
}

impl Error {
    /// Whether retrying the same operation later may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Busy | Error::Timeout)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Failed => f.write_str("operation failed"),
            Error::Busy => f.write_str("bus busy"),
            Error::Timeout => f.write_str("bus timeout"),
            Error::MissingCapability => f.write_str("hardware capability not populated"),
        }
    }
}

/// Numeric operation outcome
///
/// `Ok` is zero and every failure is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    Error = 1,
    Busy = 2,
    Timeout = 3,
}

impl Status {
    /// Raw outcome code
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Convert back into a `Result` for use with `?`
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Status::Ok => Ok(()),
            Status::Error => Err(Error::Failed),
            Status::Busy => Err(Error::Busy),
            Status::Timeout => Err(Error::Timeout),
        }
    }
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::Failed | Error::MissingCapability => Status::Error,
            Error::Busy => Status::Busy,
            Error::Timeout => Status::Timeout,
        }
    }
}

impl From<Result<(), Error>> for Status {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => Status::Ok,
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::Error.code(), 1);
        assert_eq!(Status::Busy.code(), 2);
        assert_eq!(Status::Timeout.code(), 3);
    }

    #[test]
    fn test_status_from_result() {
        assert_eq!(Status::from(Ok(())), Status::Ok);
        assert_eq!(Status::from(Err(Error::Failed)), Status::Error);
        assert_eq!(Status::from(Err(Error::Busy)), Status::Busy);
        assert_eq!(Status::from(Err(Error::Timeout)), Status::Timeout);

        // Unpopulated contract is reported as a plain error
        assert_eq!(Status::from(Err(Error::MissingCapability)), Status::Error);
    }

    #[test]
    fn test_status_into_result() {
        assert_eq!(Status::Ok.into_result(), Ok(()));
        assert_eq!(Status::Error.into_result(), Err(Error::Failed));
        assert_eq!(Status::Busy.into_result(), Err(Error::Busy));
        assert_eq!(Status::Timeout.into_result(), Err(Error::Timeout));
    }

    #[test]
    fn test_transient_errors() {
        assert!(Error::Busy.is_transient());
        assert!(Error::Timeout.is_transient());
        assert!(!Error::Failed.is_transient());
        assert!(!Error::MissingCapability.is_transient());
    }
}
