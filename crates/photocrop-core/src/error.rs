use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("Invalid editor config: {0}")]
    InvalidConfig(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),
}

pub type Result<T> = std::result::Result<T, CropError>;
