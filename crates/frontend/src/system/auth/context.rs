use leptos::prelude::*;

use super::storage;

/// Explicit session credential state. Pages read the token from here and
/// pass it to the repository clients; nothing below this context reads
/// ambient storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated {
        access_token: String,
    },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated { access_token } => Some(access_token),
        }
    }
}

/// Auth context provider component. Restores the previous session from
/// localStorage on startup; there is no endpoint to validate the stored
/// token against, so a stale one simply fails on the first API call.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = match storage::get_access_token() {
        Some(access_token) => AuthState::Authenticated { access_token },
        None => AuthState::Unauthenticated,
    };
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_two_credential_states_are_distinct() {
        let anon = AuthState::Unauthenticated;
        assert!(!anon.is_authenticated());
        assert!(anon.access_token().is_none());

        let session = AuthState::Authenticated { access_token: "abc".into() };
        assert!(session.is_authenticated());
        assert_eq!(session.access_token(), Some("abc"));
    }
}
