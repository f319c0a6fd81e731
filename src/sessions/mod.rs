//! Session gate.
//!
//! [`Session`] is the typed authentication state handed to every gated operation.
//! [`SessionStore`] binds opaque bearer tokens to user ids for the HTTP layer. Sessions never
//! expire; they end only on logout or when the bound user disappears.

use std::sync::Arc;

use dashmap::DashMap;
use rand::Rng;

use crate::error::ServiceError;

/// Authentication state of a single caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        user_id: i32,
    },
}

impl Session {
    /// Bind a user to this session, replacing any previous binding.
    pub const fn login(&mut self, user_id: i32) {
        *self = Self::Authenticated { user_id };
    }

    /// Drop the binding unconditionally.
    pub const fn logout(&mut self) {
        *self = Self::Anonymous;
    }

    #[must_use]
    pub const fn user_id(&self) -> Option<i32> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user_id } => Some(*user_id),
        }
    }

    /// The bound user id, or `Unauthorized` for anonymous callers.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Unauthorized`] when no user is bound.
    pub fn require_user(&self) -> Result<i32, ServiceError> {
        match self {
            Self::Authenticated { user_id } => Ok(*user_id),
            Self::Anonymous => Err(ServiceError::Unauthorized),
        }
    }
}

/// Token → user id bindings for all open sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    tokens: Arc<DashMap<String, i32>>,
}

impl SessionStore {
    /// Create a new empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(DashMap::new()),
        }
    }

    /// Open a session for `user_id` and return its bearer token.
    #[must_use]
    pub fn open(&self, user_id: i32) -> String {
        let token = generate_token();
        self.tokens.insert(token.clone(), user_id);
        token
    }

    /// Resolve a token to a session. Unknown tokens resolve to [`Session::Anonymous`].
    #[must_use]
    pub fn resolve(&self, token: &str) -> Session {
        self.tokens
            .get(token)
            .map_or(Session::Anonymous, |entry| Session::Authenticated {
                user_id: *entry.value(),
            })
    }

    /// Close the session behind `token`. Closing an unknown token is a no-op.
    pub fn close(&self, token: &str) {
        self.tokens.remove(token);
    }

    /// Close every session bound to `user_id`.
    pub fn close_all_for(&self, user_id: i32) {
        self.tokens.retain(|_, bound| *bound != user_id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Generate a cryptographically random 32-byte hex token.
fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 32] = rng.r#gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
