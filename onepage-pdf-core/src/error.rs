use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Invalid text instruction: {0}")]
    InvalidInstruction(String),

    #[error("Invalid page configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),

    #[error("Invalid object reference: {0} {1} R")]
    InvalidObjectReference(u32, u16),
}

pub type Result<T> = std::result::Result<T, PdfError>;
