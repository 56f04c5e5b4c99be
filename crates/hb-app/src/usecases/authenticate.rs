//! Use case for the demo credential check.

use tracing::{info, info_span, warn, Instrument};

use hb_core::ports::AuthError;
use hb_core::{EntityStore, Session};

/// Validates credentials against the persisted user collection.
///
/// Comparison is exact and case-sensitive on both fields. The collection
/// is not de-duplicated by email; the first structurally matching record
/// wins. On success the password-free session is persisted, overwriting
/// any prior session, and returned.
pub struct Authenticate {
    store: EntityStore,
}

impl Authenticate {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub async fn execute(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let span = info_span!("usecase.authenticate.execute");

        async {
            let users = self
                .store
                .users()
                .await
                .map_err(|e| AuthError::Storage(e.to_string()))?
                .unwrap_or_default();

            let matched = users
                .iter()
                .find(|u| u.email == email && u.password == password);

            let user = match matched {
                Some(user) => user,
                None => {
                    warn!("login rejected: no matching user");
                    return Err(AuthError::InvalidCredentials);
                }
            };

            let session = Session::for_user(user);
            self.store
                .set_session(&session)
                .await
                .map_err(|e| AuthError::Storage(e.to_string()))?;

            info!(user_id = %session.user_id, "login succeeded");
            Ok(session)
        }
        .instrument(span)
        .await
    }
}
