use thiserror::Error;

#[derive(Error, Debug)]
pub enum IswizError {
    #[error("no access token configured (set access_token under [auth] in the config file)")]
    MissingCredentials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("application template '{0}' is not supported yet")]
    UnsupportedTemplate(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, IswizError>;
