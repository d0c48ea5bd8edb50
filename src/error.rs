use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error("renderer rejected a write: {0}")]
    /// The drawing sink rejected a write. Never retried by the table engine
    Render(String),

    #[error("index {index} out of range for length {len}")]
    /// A cell or row was requested at an index that does not exist
    IndexOutOfRange { index: usize, len: usize },

    #[error("cursor advanced past the end of its sequence")]
    /// A forward-only row or table cursor was advanced past its end
    ExhaustedIterator,

    #[error("page does not belong to this document")]
    PageMissing,

    #[error("embedded font does not belong to this document")]
    FontMissing,
}
