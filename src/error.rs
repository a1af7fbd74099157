use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("No slides found in {0}")]
    NoSlides(String),
}

pub type Result<T> = std::result::Result<T, Error>;
