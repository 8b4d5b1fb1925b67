//! When converting a `Var` or writing JSON text goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
use std::error;

use crate::value::{Kind, VarType};

/// This type represents all possible errors that can occur when converting a
/// dynamic value or stringifying a container.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `sonic_var::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Categorizes the cause of this error.
    ///
    /// - `Category::Access` - the value was empty
    /// - `Category::BadCast` - the source type never converts to the target kind
    /// - `Category::NotImplemented` - the conversion is reserved and not supported yet
    /// - `Category::Range` - the value does not fit the target kind
    /// - `Category::Syntax` - a string could not be parsed as the target kind
    /// - `Category::Io` - failure to write bytes to the output sink
    pub fn classify(&self) -> Category {
        self.err.code.classify()
    }

    /// Returns true if the conversion was attempted on an empty value.
    pub fn is_access(&self) -> bool {
        self.classify() == Category::Access
    }

    /// Returns true if the source type can never be converted to the target kind.
    pub fn is_bad_cast(&self) -> bool {
        self.classify() == Category::BadCast
    }

    /// Returns true if the conversion is reserved but not implemented, such as
    /// converting an object to a date.
    pub fn is_not_implemented(&self) -> bool {
        self.classify() == Category::NotImplemented
    }

    /// Returns true if a numeric value did not fit the target kind.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }

    /// Returns true if a string payload could not be parsed as the target kind.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a failure to write bytes to
    /// the output sink.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// The kind of conversion that failed, if this error was raised by a conversion.
    pub fn target(&self) -> Option<Kind> {
        self.err.code.target()
    }

    /// The kind reported by the underlying standard library I/O error, if this
    /// error was caused by a failure to write bytes.
    pub fn io_error_kind(&self) -> Option<std::io::ErrorKind> {
        if let ErrorCode::Io(io_error) = &self.err.code {
            Some(io_error.kind())
        } else {
            None
        }
    }
}

/// Categorizes the cause of a `sonic_var::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The value being converted was empty.
    Access,

    /// The source type is never convertible to the requested kind, such as an
    /// object to an integer.
    BadCast,

    /// The conversion is reserved for future use and must not silently coerce.
    NotImplemented,

    /// The value is out of the range of the requested kind.
    Range,

    /// A string payload was not a valid representation of the requested kind.
    Syntax,

    /// The error was caused by a failure to write bytes on an I/O stream.
    Io,
}

#[allow(clippy::fallible_impl_from)]
impl From<Error> for std::io::Error {
    /// Convert a `sonic_var::Error` into an `std::io::Error`.
    ///
    /// Conversion errors are turned into `InvalidData` I/O errors.
    fn from(j: Error) -> Self {
        if let ErrorCode::Io(err) = j.err.code {
            err
        } else {
            std::io::Error::new(std::io::ErrorKind::InvalidData, j)
        }
    }
}

impl From<std::io::Error> for Error {
    #[cold]
    fn from(error: std::io::Error) -> Self {
        Error::io(error)
    }
}

struct ErrorImpl {
    code: ErrorCode,
}

#[derive(Debug)]
pub(crate) enum ErrorCode {
    /// Some I/O error occurred while writing JSON text.
    Io(std::io::Error),

    /// Converting an empty value.
    EmptyValue(Kind),

    /// The source type never converts to the target kind.
    BadCast { from: VarType, to: Kind },

    /// The conversion is reserved and not supported.
    NotImplemented { from: VarType, to: Kind },

    /// The value does not fit the target kind.
    OutOfRange(Kind),

    /// A string payload could not be parsed as the target kind.
    InvalidSyntax(Kind),
}

impl ErrorCode {
    fn classify(&self) -> Category {
        match self {
            ErrorCode::BadCast { .. } => Category::BadCast,
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::EmptyValue(_) => Category::Access,
            ErrorCode::NotImplemented { .. } => Category::NotImplemented,
            ErrorCode::OutOfRange(_) => Category::Range,
            ErrorCode::InvalidSyntax(_) => Category::Syntax,
        }
    }

    fn target(&self) -> Option<Kind> {
        match self {
            ErrorCode::EmptyValue(to)
            | ErrorCode::BadCast { to, .. }
            | ErrorCode::NotImplemented { to, .. }
            | ErrorCode::OutOfRange(to)
            | ErrorCode::InvalidSyntax(to) => Some(*to),
            ErrorCode::Io(_) => None,
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code }),
        }
    }

    #[cold]
    pub(crate) fn empty(to: Kind) -> Self {
        Error::new(ErrorCode::EmptyValue(to))
    }

    #[cold]
    pub(crate) fn bad_cast(from: VarType, to: Kind) -> Self {
        Error::new(ErrorCode::BadCast { from, to })
    }

    #[cold]
    pub(crate) fn not_implemented(from: VarType, to: Kind) -> Self {
        Error::new(ErrorCode::NotImplemented { from, to })
    }

    #[cold]
    pub(crate) fn out_of_range(to: Kind) -> Self {
        Error::new(ErrorCode::OutOfRange(to))
    }

    #[cold]
    pub(crate) fn syntax(to: Kind) -> Self {
        Error::new(ErrorCode::InvalidSyntax(to))
    }

    #[doc(hidden)]
    #[cold]
    pub fn io(error: std::io::Error) -> Self {
        Error::new(ErrorCode::Io(error))
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Io(err) => Display::fmt(err, f),
            ErrorCode::EmptyValue(to) => write!(f, "can not convert empty value to {}", to),
            ErrorCode::BadCast { from, to } => write!(f, "bad cast: {} => {}", from, to),
            ErrorCode::NotImplemented { from, to } => {
                write!(f, "conversion not implemented: {} => {}", from, to)
            }
            ErrorCode::OutOfRange(to) => write!(f, "value out of range for {}", to),
            ErrorCode::InvalidSyntax(to) => write!(f, "string is not a valid {}", to),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Io(err) => err.source(),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, category: {:?})",
            self.err.code.to_string(),
            self.classify()
        )
    }
}
