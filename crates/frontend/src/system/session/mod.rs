pub mod context;

pub use context::{demo_identity, do_logout, use_session, SessionProvider, SessionState};
