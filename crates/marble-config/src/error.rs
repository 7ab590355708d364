//! Errors raised while reading or writing `config.ron`.

/// A failure to load, save, or parse the tool's `config.ron`.
///
/// The messages name the file so a user knows which one to fix.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("cannot read config.ron: {0}")]
    ReadError(#[source] std::io::Error),
    /// The config directory or `config.ron` could not be written.
    #[error("cannot write config.ron: {0}")]
    WriteError(#[source] std::io::Error),
    /// `config.ron` is not valid RON for the current settings layout.
    #[error("config.ron is not valid RON: {0}")]
    ParseError(#[source] ron::error::SpannedError),
    /// The settings could not be rendered as RON.
    #[error("cannot encode settings as RON: {0}")]
    SerializeError(#[source] ron::Error),
}
