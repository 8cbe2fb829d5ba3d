/// Broad failure classes used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Attribute,
    Capacity,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TMX file is not XML")]
    NotXml,

    #[error("TMX file is not a TMX file")]
    NotTmx,

    #[error("unexpected end of file at line {line}")]
    UnexpectedEof { line: usize },

    #[error("missing <{tag}> tag")]
    MissingTag { tag: &'static str },

    #[error("invalid <{tag}>: missing \"{name}\" property")]
    MissingAttribute { tag: &'static str, name: &'static str },

    #[error("invalid {name} value \"{value}\"")]
    InvalidNumber { name: &'static str, value: String },

    #[error("invalid width and/or height: {width}x{height} (expected {expected}x{expected})")]
    InvalidDimensions { width: String, height: String, expected: usize },

    #[error("invalid encoding \"{0}\"")]
    InvalidEncoding(String),

    #[error("invalid tile value \"{token}\" at {x},{y}")]
    InvalidTile { x: usize, y: usize, token: String },

    #[error("missing value at {x},{y}")]
    RowUnderflow { x: usize, y: usize },

    #[error("too many objects (max {max})")]
    TooManyObjects { max: usize },

    #[error("unknown object gid {gid} (local index {local}, expected 0..{max})")]
    UnknownObject { gid: i32, local: i32, max: usize },

    #[error("invalid map file: {0}")]
    InvalidMapFile(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::MissingAttribute { .. } | Self::InvalidNumber { .. } => ErrorKind::Attribute,
            Self::TooManyObjects { .. } => ErrorKind::Capacity,
            _ => ErrorKind::Format,
        }
    }

    /// Process exit code, distinct for every failure cause.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnexpectedEof { .. } => 3,
            Self::NotXml => 4,
            Self::NotTmx => 6,
            Self::MissingTag { .. } => 7,
            Self::MissingAttribute { .. } => 8,
            Self::InvalidDimensions { .. } => 9,
            Self::InvalidEncoding(_) => 13,
            Self::InvalidTile { .. } => 14,
            Self::RowUnderflow { .. } => 15,
            Self::InvalidNumber { .. } => 20,
            Self::TooManyObjects { .. } => 23,
            Self::Io(_) => 24,
            Self::UnknownObject { .. } => 25,
            Self::InvalidMapFile(_) => 26,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
