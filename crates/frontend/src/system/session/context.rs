//! In-memory session: the identity the dashboard is rendered for.
//!
//! Stand-in for the real auth collaborator. Nothing is stored across reloads.

use contracts::system::auth::{Identity, Role};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
}

/// Identity used when the dashboard is opened for `role`.
pub fn demo_identity(role: Role) -> Identity {
    match role {
        Role::Admin => Identity {
            role,
            user_name: "Sofia Almeida".to_string(),
            user_email: "sofia.admin@ironharbor.example".to_string(),
            user_avatar: None,
        },
        Role::PersonalTrainer => Identity {
            role,
            user_name: "Marcus Hale".to_string(),
            user_email: "marcus@ironharbor.example".to_string(),
            user_avatar: None,
        },
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(identity: Identity, children: Children) -> impl IntoView {
    log::info!("session opened for {} ({})", identity.user_name, identity.role);
    let session = RwSignal::new(SessionState {
        identity: Some(identity),
    });
    provide_context(session);

    children()
}

/// Hook to access session state
pub fn use_session() -> RwSignal<SessionState> {
    use_context::<RwSignal<SessionState>>().expect("SessionProvider not found in component tree")
}

/// Ends the session. Errors are reported to the caller, which decides what to do.
pub async fn do_logout(session: RwSignal<SessionState>) -> Result<(), String> {
    let identity = session
        .try_update(|state| state.identity.take())
        .flatten()
        .ok_or_else(|| "no active session".to_string())?;
    log::info!("session closed for {}", identity.user_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_identity_matches_role() {
        for role in Role::all() {
            let identity = demo_identity(role);
            assert_eq!(identity.role, role);
            assert!(identity.user_email.contains('@'));
        }
    }
}
