//! Authentication
//!
//! Registration, sign-in, and session handling through the identity-provider
//! seam. The provider is treated as an external service; this module only
//! coordinates it with the persisted session.

pub mod provider;
pub mod session;

pub use provider::{IdentityProvider, LocalIdentityProvider};
pub use session::{Session, SessionStore};

use crate::config::paths::FintrackPaths;
use crate::error::{FintrackError, FintrackResult};
use crate::models::User;

/// Coordinates the identity provider and the persisted session
pub struct AuthService<P: IdentityProvider> {
    provider: P,
    sessions: SessionStore,
}

impl AuthService<LocalIdentityProvider> {
    /// Create an auth service with the bundled local provider
    pub fn new(paths: &FintrackPaths) -> Self {
        Self {
            provider: LocalIdentityProvider::new(paths.users_file()),
            sessions: SessionStore::new(paths.session_file()),
        }
    }
}

impl<P: IdentityProvider> AuthService<P> {
    /// Create an auth service with a specific provider
    pub fn with_provider(provider: P, sessions: SessionStore) -> Self {
        Self { provider, sessions }
    }

    /// Register a new user and start a session
    pub fn register(&self, name: &str, email: &str, password: &str) -> FintrackResult<User> {
        let user = self.provider.register(name, email, password)?;
        self.sessions.save(&Session::new(user.clone()))?;
        Ok(user)
    }

    /// Sign in and start a session
    pub fn login(&self, email: &str, password: &str) -> FintrackResult<User> {
        let user = self.provider.login(email, password)?;
        self.sessions.save(&Session::new(user.clone()))?;
        Ok(user)
    }

    /// End the active session
    pub fn logout(&self) -> FintrackResult<()> {
        self.sessions.clear()
    }

    /// The currently signed-in user, if any
    pub fn current_user(&self) -> FintrackResult<Option<User>> {
        Ok(self.sessions.load()?.map(|s| s.user))
    }

    /// The currently signed-in user, or a not-signed-in error
    pub fn require_user(&self) -> FintrackResult<User> {
        self.current_user()?.ok_or(FintrackError::NotSignedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_service() -> (TempDir, AuthService<LocalIdentityProvider>) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let service = AuthService::new(&paths);
        (temp_dir, service)
    }

    #[test]
    fn test_register_starts_session() {
        let (_temp_dir, service) = create_service();

        service
            .register("Demo User", "demo@example.com", "hunter22")
            .unwrap();

        let user = service.current_user().unwrap().unwrap();
        assert_eq!(user.email, "demo@example.com");
    }

    #[test]
    fn test_login_logout_cycle() {
        let (_temp_dir, service) = create_service();
        service
            .register("Demo User", "demo@example.com", "hunter22")
            .unwrap();
        service.logout().unwrap();
        assert!(service.current_user().unwrap().is_none());

        service.login("demo@example.com", "hunter22").unwrap();
        assert!(service.current_user().unwrap().is_some());
    }

    #[test]
    fn test_require_user_without_session() {
        let (_temp_dir, service) = create_service();
        let err = service.require_user().unwrap_err();
        assert!(matches!(err, FintrackError::NotSignedIn));
    }

    #[test]
    fn test_failed_login_leaves_no_session() {
        let (_temp_dir, service) = create_service();
        service
            .register("Demo User", "demo@example.com", "hunter22")
            .unwrap();
        service.logout().unwrap();

        assert!(service.login("demo@example.com", "wrong").is_err());
        assert!(service.current_user().unwrap().is_none());
    }
}
