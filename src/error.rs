//! When encoding or decoding an ordered JSON object goes wrong.

use serde::{de, ser};
use std::error;
use std::fmt::{self, Debug, Display};
use std::io;
use std::result;
use std::str::FromStr;

/// This type represents all possible errors that can occur when encoding or
/// decoding an ordered JSON object.
pub struct Error {
    /// This `Box` keeps the size of `Error` down to one word. `Result<T, Error>`
    /// is threaded through every key and value the codec touches.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `ordered_json::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Byte offset into the input at which the error was detected, if the
    /// error is tied to a position.
    ///
    /// The first byte of the input is offset 0. Structural syntax errors
    /// always carry an offset; errors raised while classifying a key type do
    /// not.
    pub fn offset(&self) -> Option<usize> {
        self.err.offset
    }

    /// The precise cause of this error.
    ///
    /// Useful when error handling needs to distinguish causes that classify
    /// into the same [`Category`].
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Io` - failure to read or write bytes on an IO stream
    /// - `Category::Syntax` - input that is not a syntactically valid flat JSON object
    /// - `Category::Data` - input data that is semantically incorrect
    /// - `Category::Eof` - unexpected end of the input data
    /// - `Category::Key` - a key type the codec cannot represent as an object key
    pub fn classify(&self) -> Category {
        match &self.err.code {
            ErrorCode::Message(_)
            | ErrorCode::InvalidType(_, _)
            | ErrorCode::InvalidValue(_, _)
            | ErrorCode::InvalidLength(_, _)
            | ErrorCode::UnknownVariant(_, _)
            | ErrorCode::UnknownField(_, _)
            | ErrorCode::MissingField(_)
            | ErrorCode::DuplicateField(_)
            | ErrorCode::FloatKeyMustBeFinite => Category::Data,
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::Json(err) => match err.classify() {
                serde_json::error::Category::Io => Category::Io,
                serde_json::error::Category::Syntax => Category::Syntax,
                serde_json::error::Category::Data => Category::Data,
                serde_json::error::Category::Eof => Category::Eof,
            },
            ErrorCode::UnclosedObject => Category::Eof,
            ErrorCode::ExpectedObjectStart
            | ErrorCode::NestedObject
            | ErrorCode::KeyMustBeAString
            | ErrorCode::ExpectedColon
            | ErrorCode::ExpectedObjectCommaOrEnd
            | ErrorCode::TrailingComma => Category::Syntax,
            ErrorCode::UnsupportedKeyType(_) => Category::Key,
        }
    }

    /// Returns true if this error was caused by a failure to read or write
    /// bytes on an IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid flat JSON object.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by input data that was
    /// semantically incorrect.
    ///
    /// For example, JSON containing a number is semantically incorrect when
    /// the type being deserialized into holds a String.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    /// Returns true if this error was caused by prematurely reaching the end
    /// of the input data.
    ///
    /// Callers that buffer partial input may be interested in retrying the
    /// decode once more data is available.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    /// Returns true if this error was caused by a key whose runtime shape the
    /// codec cannot represent as a JSON object key.
    ///
    /// This signals a schema problem in the calling program rather than bad
    /// input; retrying cannot succeed.
    pub fn is_key(&self) -> bool {
        self.classify() == Category::Key
    }
}

/// Categorizes the cause of an `ordered_json::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a failure to read or write bytes on an IO
    /// stream.
    Io,

    /// The error was caused by input that was not a syntactically valid flat
    /// JSON object.
    Syntax,

    /// The error was caused by input data that was semantically incorrect.
    ///
    /// For example, JSON containing a number is semantically incorrect when
    /// the type being deserialized into holds a String.
    Data,

    /// The error was caused by prematurely reaching the end of the input
    /// data, such as an object whose closing `}` is missing.
    Eof,

    /// The error was caused by a map key whose type has no representation as
    /// a JSON object key.
    Key,
}

#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert an `ordered_json::Error` into an `io::Error`.
    ///
    /// Syntax, data, and key errors are turned into `InvalidData` IO errors.
    /// EOF errors are turned into `UnexpectedEof` IO errors.
    fn from(j: Error) -> Self {
        match j.err.code {
            ErrorCode::Io(err) => err,
            _ => match j.classify() {
                Category::Io => io::Error::new(io::ErrorKind::Other, j),
                Category::Syntax | Category::Data | Category::Key => {
                    io::Error::new(io::ErrorKind::InvalidData, j)
                }
                Category::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, j),
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    /// Wrap an error from the value serializer or deserializer without a
    /// position of its own.
    fn from(err: serde_json::Error) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::Json(err),
                offset: None,
            }),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    offset: Option<usize>,
}

/// The precise cause of an [`Error`].
#[derive(Debug)]
pub enum ErrorCode {
    /// Catchall for error messages raised through serde's `custom`.
    Message(Box<str>),

    /// Different type than expected.
    InvalidType(Box<str>, Box<str>),

    /// Value of the right type but wrong for some other reason.
    InvalidValue(Box<str>, Box<str>),

    /// Sequence or map with too many or too few elements.
    InvalidLength(usize, Box<str>),

    /// Enum type received a variant with an unrecognized name.
    UnknownVariant(Box<str>, &'static [&'static str]),

    /// Struct type received a field with an unrecognized name.
    UnknownField(Box<str>, &'static [&'static str]),

    /// Struct type expected to receive a required field with a particular
    /// name but it was not present.
    MissingField(Box<str>),

    /// Struct type received more than one of the same field.
    DuplicateField(Box<str>),

    /// Some IO error occurred while encoding or decoding.
    Io(io::Error),

    /// A key string or value failed to parse or serialize as JSON. The inner
    /// error is passed through unchanged.
    Json(serde_json::Error),

    /// Map key of a type that has no representation as a JSON object key.
    UnsupportedKeyType(Box<str>),

    /// Map key holding a NaN or infinite float.
    FloatKeyMustBeFinite,

    /// The input does not begin with `{`.
    ExpectedObjectStart,

    /// End of input before the object's closing `}`.
    UnclosedObject,

    /// A `{` anywhere after the top-level object's own opening brace,
    /// nested inside it or trailing behind it.
    NestedObject,

    /// Object key is not a string.
    KeyMustBeAString,

    /// Expected this character to be a `':'`.
    ExpectedColon,

    /// Expected this character to be either a `','` or a `'}'`.
    ExpectedObjectCommaOrEnd,

    /// Object has a comma after its last key:value pair.
    TrailingComma,
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCode::Message(l0), ErrorCode::Message(r0)) => l0 == r0,
            (ErrorCode::InvalidType(l0, l1), ErrorCode::InvalidType(r0, r1)) => {
                l0 == r0 && l1 == r1
            }
            (ErrorCode::InvalidValue(l0, l1), ErrorCode::InvalidValue(r0, r1)) => {
                l0 == r0 && l1 == r1
            }
            (ErrorCode::InvalidLength(l0, l1), ErrorCode::InvalidLength(r0, r1)) => {
                l0 == r0 && l1 == r1
            }
            (ErrorCode::UnknownVariant(l0, l1), ErrorCode::UnknownVariant(r0, r1)) => {
                l0 == r0 && l1 == r1
            }
            (ErrorCode::UnknownField(l0, l1), ErrorCode::UnknownField(r0, r1)) => {
                l0 == r0 && l1 == r1
            }
            (ErrorCode::MissingField(l0), ErrorCode::MissingField(r0)) => l0 == r0,
            (ErrorCode::DuplicateField(l0), ErrorCode::DuplicateField(r0)) => l0 == r0,
            (ErrorCode::UnsupportedKeyType(l0), ErrorCode::UnsupportedKeyType(r0)) => l0 == r0,
            (ErrorCode::Io(_), ErrorCode::Io(_)) => true,
            (ErrorCode::Json(_), ErrorCode::Json(_)) => true,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                offset: Some(offset),
            }),
        }
    }

    #[cold]
    pub(crate) fn io(error: io::Error) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::Io(error),
                offset: None,
            }),
        }
    }

    #[cold]
    pub(crate) fn json(error: serde_json::Error, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::Json(error),
                offset: Some(offset),
            }),
        }
    }

    #[cold]
    pub(crate) fn unsupported_key_type<T: Display>(ty: T) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::UnsupportedKeyType(ty.to_string().into_boxed_str()),
                offset: None,
            }),
        }
    }

    #[cold]
    pub(crate) fn float_key_must_be_finite() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::FloatKeyMustBeFinite,
                offset: None,
            }),
        }
    }

    pub(crate) fn at_offset(mut self, offset: usize) -> Self {
        if self.err.offset.is_none() {
            self.err.offset = Some(offset);
        }
        self
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            ErrorCode::InvalidType(unexp, exp) => {
                write!(f, "invalid type: {}, expected {}", unexp, exp)
            }
            ErrorCode::InvalidValue(unexp, exp) => {
                write!(f, "invalid value: {}, expected {}", unexp, exp)
            }
            ErrorCode::InvalidLength(len, exp) => {
                write!(f, "invalid length {}, expected {}", len, exp)
            }
            ErrorCode::UnknownVariant(variant, expected) => {
                if expected.is_empty() {
                    write!(f, "unknown variant `{}`, there are no variants", variant)
                } else {
                    write!(
                        f,
                        "unknown variant `{}`, expected {}",
                        variant,
                        OneOf { names: expected }
                    )
                }
            }
            ErrorCode::UnknownField(field, expected) => {
                if expected.is_empty() {
                    write!(f, "unknown field `{}`, there are no fields", field)
                } else {
                    write!(
                        f,
                        "unknown field `{}`, expected {}",
                        field,
                        OneOf { names: expected }
                    )
                }
            }
            ErrorCode::MissingField(field) => write!(f, "missing field `{}`", field),
            ErrorCode::DuplicateField(field) => write!(f, "duplicate field `{}`", field),
            ErrorCode::Io(err) => Display::fmt(err, f),
            ErrorCode::Json(err) => Display::fmt(err, f),
            ErrorCode::UnsupportedKeyType(ty) => write!(f, "unsupported key type: {}", ty),
            ErrorCode::FloatKeyMustBeFinite => f.write_str("float key must be finite"),
            ErrorCode::ExpectedObjectStart => f.write_str("input does not start with '{'"),
            ErrorCode::UnclosedObject => f.write_str("input does not end with '}'"),
            ErrorCode::NestedObject => f.write_str("nested objects are not supported"),
            ErrorCode::KeyMustBeAString => f.write_str("key must be a string"),
            ErrorCode::ExpectedColon => f.write_str("expected `:`"),
            ErrorCode::ExpectedObjectCommaOrEnd => f.write_str("expected `,` or `}`"),
            ErrorCode::TrailingComma => f.write_str("trailing comma"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Io(err) => Some(err),
            ErrorCode::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.code, self.offset) {
            // Io and Json errors carry their own position text.
            (ErrorCode::Io(_) | ErrorCode::Json(_), _) | (_, None) => Display::fmt(&self.code, f),
            (_, Some(offset)) => write!(f, "{} at offset {}", self.code, offset),
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.err.offset {
            Some(offset) => write!(
                f,
                "Error({:?}, offset: {})",
                self.err.code.to_string(),
                offset
            ),
            None => write!(f, "Error({:?})", self.err.code.to_string()),
        }
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }

    #[cold]
    fn invalid_type(unexp: de::Unexpected, exp: &dyn de::Expected) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::InvalidType(
                    if unexp == de::Unexpected::Unit {
                        "null".into()
                    } else {
                        unexp.to_string().into_boxed_str()
                    },
                    exp.to_string().into_boxed_str(),
                ),
                offset: None,
            }),
        }
    }

    #[cold]
    fn invalid_value(unexp: de::Unexpected, exp: &dyn de::Expected) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::InvalidValue(
                    unexp.to_string().into_boxed_str(),
                    exp.to_string().into_boxed_str(),
                ),
                offset: None,
            }),
        }
    }

    #[cold]
    fn invalid_length(len: usize, exp: &dyn de::Expected) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::InvalidLength(len, exp.to_string().into_boxed_str()),
                offset: None,
            }),
        }
    }

    #[cold]
    fn unknown_variant(variant: &str, expected: &'static [&'static str]) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::UnknownVariant(variant.to_string().into_boxed_str(), expected),
                offset: None,
            }),
        }
    }

    #[cold]
    fn unknown_field(field: &str, expected: &'static [&'static str]) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::UnknownField(field.to_string().into_boxed_str(), expected),
                offset: None,
            }),
        }
    }

    #[cold]
    fn missing_field(field: &'static str) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::MissingField(field.to_string().into_boxed_str()),
                offset: None,
            }),
        }
    }

    #[cold]
    fn duplicate_field(field: &'static str) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::DuplicateField(field.to_string().into_boxed_str()),
                offset: None,
            }),
        }
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Used in error messages.
///
/// - expected `a`
/// - expected `a` or `b`
/// - expected one of `a`, `b`, `c`
///
/// The slice of names must not be empty.
struct OneOf {
    names: &'static [&'static str],
}

impl Display for OneOf {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.names.len() {
            0 => panic!(), // special case elsewhere
            1 => write!(formatter, "`{}`", self.names[0]),
            2 => write!(formatter, "`{}` or `{}`", self.names[0], self.names[1]),
            _ => {
                write!(formatter, "one of ")?;
                for (i, alt) in self.names.iter().enumerate() {
                    if i > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "`{}`", alt)?;
                }
                Ok(())
            }
        }
    }
}

// Parse our own error message that looks like "{} at offset {}" to work
// around erased-serde round-tripping the error through de::Error::custom.
fn make_error(mut msg: String) -> Error {
    let offset = parse_offset(&mut msg);
    Error {
        err: Box::new(ErrorImpl {
            code: ErrorCode::Message(msg.into_boxed_str()),
            offset,
        }),
    }
}

fn parse_offset(msg: &mut String) -> Option<usize> {
    let start_of_suffix = msg.rfind(" at offset ")?;

    let start_of_offset = start_of_suffix + " at offset ".len();
    let mut end_of_offset = start_of_offset;
    while starts_with_digit(&msg[end_of_offset..]) {
        end_of_offset += 1;
    }

    if end_of_offset == start_of_offset || end_of_offset < msg.len() {
        return None;
    }

    let offset = match usize::from_str(&msg[start_of_offset..end_of_offset]) {
        Ok(offset) => offset,
        Err(_) => return None,
    };

    msg.truncate(start_of_suffix);
    Some(offset)
}

fn starts_with_digit(slice: &str) -> bool {
    match slice.as_bytes().first() {
        None => false,
        Some(&byte) => byte.is_ascii_digit(),
    }
}
