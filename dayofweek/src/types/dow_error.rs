#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DowError {
    /// An argument is outside of its allowed domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The locale identifier could not be mapped onto available locale data.
    #[error("unable to resolve locale: {0}")]
    LocaleResolution(String),
    /// The label pattern is not a valid weekday pattern.
    #[error("invalid label format: {0}")]
    Format(String),
}

pub type DowResult<T> = Result<T, DowError>;

impl DowError {
    pub fn argument(msg: &str) -> DowError {
        DowError::InvalidArgument(msg.to_owned())
    }

    pub fn locale(msg: &str) -> DowError {
        DowError::LocaleResolution(msg.to_owned())
    }

    pub fn format(msg: &str) -> DowError {
        DowError::Format(msg.to_owned())
    }

    pub fn type_string(&self) -> &'static str {
        use DowError::*;

        match self {
            InvalidArgument(_) => "INVALID_ARGUMENT",
            LocaleResolution(_) => "LOCALE_RESOLUTION",
            Format(_) => "FORMAT",
        }
    }
}
