use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid marker: {0}")]
    InvalidMarker(String),

    #[error("duplicate plugin id: {0}")]
    DuplicatePlugin(String),

    #[error("render target unavailable: {0}")]
    RenderTarget(String),
}
