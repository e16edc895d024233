pub mod fetch;
pub mod routing;
pub mod session;

pub use fetch::{FetchState, RequestGuard, RequestToken};
pub use routing::{decide_route, GuardDecision};
pub use session::{init_session, session, SessionContext};
