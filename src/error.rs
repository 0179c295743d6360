use thiserror::Error;

pub type BlockAgentResult<T> = Result<T, BlockAgentError>;

#[derive(Error, Debug)]
pub enum BlockAgentError {
    #[error("Backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("Config encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No plan yet. Ask the agent to plan something first")]
    NoPlan,
}

impl BlockAgentError {
    pub fn backend<T: Into<String>>(status: u16, body: T) -> Self {
        BlockAgentError::Backend {
            status,
            body: body.into(),
        }
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        BlockAgentError::Config(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        BlockAgentError::InvalidInput(msg.into())
    }
}
