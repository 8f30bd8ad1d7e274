use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// The subscriber is already registered with this cell
    AlreadySubscribed,
    /// The subscriber is not registered with this cell
    NotSubscribed,
    /// The cell's own bookkeeping is in an unexpected state, for example a
    /// subscription record that should exist can't be found
    InternalError(String),
}

pub type CellResult<T> = Result<T, CellError>;

impl std::fmt::Display for CellError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::AlreadySubscribed => write!(f, "subscriber subscribed multiple times"),
            Self::NotSubscribed => write!(f, "subscriber is not subscribed"),
            Self::InternalError(e) => write!(f, "{}", e),
        }
    }
}

impl Error for CellError {}
