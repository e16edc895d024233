use std::cell::Cell;
use std::rc::Rc;

/// Per-surface fetch lifecycle: `Idle → Loading → (Ready | Failed)`,
/// re-entering `Loading` whenever the trigger input changes or a retry is
/// invoked. `Ready` replaces the previous snapshot wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// Generation counter shared by every request a surface issues. Starting a
/// new request invalidates all earlier tokens, so a slow response that lands
/// after a newer request cannot overwrite fresher state.
#[derive(Clone, Default)]
pub struct RequestGuard {
    generation: Rc<Cell<u64>>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a request, invalidating every outstanding token
    pub fn begin(&self) -> RequestToken {
        let id = self.generation.get() + 1;
        self.generation.set(id);
        RequestToken { generation: Rc::clone(&self.generation), id }
    }
}

/// Handle owned by one in-flight request
pub struct RequestToken {
    generation: Rc<Cell<u64>>,
    id: u64,
}

impl RequestToken {
    /// True while no newer request has started on the same guard
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.id
    }
}
