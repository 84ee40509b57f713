use luma_ops::OpsError;
use thiserror::Error;

/// Errors surfaced by the image operations and figure endpoints.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the SVG-to-PNG rendering path.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl From<OpsError> for Error {
    fn from(e: OpsError) -> Self {
        // Both variants are caller-input problems: mismatched shapes or an
        // unsupported bit depth.
        Error::InvalidInput(e.to_string())
    }
}
