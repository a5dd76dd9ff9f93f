/// Lifecycle of one asynchronous load.
///
/// Every load starts as [`Loading`](LoadState::Loading) and resolves to
/// exactly one terminal value, either [`Ready`](LoadState::Ready) with the
/// fetched data or [`Error`](LoadState::Error) with a cause message.
/// Transitions within a single load are never reversed.
///
/// Consumers are expected to match exhaustively rather than probe with the
/// helper predicates; the helpers exist for tests and await loops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    /// The load has started but no result has arrived yet.
    Loading,

    /// The load finished and produced a value.
    Ready(T),

    /// The load failed outside its documented contract.
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// True once the load has resolved, successfully or not.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(cause) => Some(cause),
            _ => None,
        }
    }
}
