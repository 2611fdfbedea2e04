use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown chart kind: `{0}`")]
    UnknownChartKind(String),

    #[error("renderer failed: {0}")]
    Render(String),

    #[error("preference persistence failed: {0}")]
    Persistence(String),

    #[error("an edit session for `{axis}` is already open")]
    SessionAlreadyOpen { axis: String },

    #[error("no edit session is open")]
    NoActiveSession,

    #[error("unknown axis element: `{0}`")]
    UnknownElement(String),
}
