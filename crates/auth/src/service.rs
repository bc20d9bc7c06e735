use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use campus_storage::KeyValueStore;

use crate::directory::UserDirectory;
use crate::error::{AuthError, Result};
use crate::guard::SessionState;
use crate::model::{Session, UserRole, UserSummary};
use crate::password;

/// Fixed storage key for the persisted session entry.
pub const SESSION_KEY: &str = "currentUser";

/// Owner of the single authenticated identity for this process.
///
/// Constructed once by the composition root and injected wherever a
/// session is read. Login, logout and restore keep the in-memory session
/// and the persisted entry in step inside one gated transition, so a
/// concurrent reader sees either the previous or the next state.
pub struct SessionManager {
    directory: Arc<UserDirectory>,
    store: Arc<dyn KeyValueStore>,
    current: RwLock<Option<Session>>,
    /// Serializes state transitions; readers go through `current` only.
    write_gate: Mutex<()>,
    restored: AtomicBool,
}

impl SessionManager {
    pub fn new(directory: Arc<UserDirectory>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory,
            store,
            current: RwLock::new(None),
            write_gate: Mutex::new(()),
            restored: AtomicBool::new(false),
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Authenticate `id` against the credential store.
    ///
    /// Checks run in a fixed order: existence, active flag, blocked flag,
    /// password, profile. A deactivated account reports as deactivated
    /// even when it is also blocked; the block check runs strictly after
    /// the active check.
    pub async fn login(&self, id: &str, password: &str) -> Result<Session> {
        let _gate = self.write_gate.lock().await;

        let credential = self
            .directory
            .find_credential(id)
            .ok_or(AuthError::UserNotFound)?;

        if !credential.is_active {
            return Err(AuthError::AccountDeactivated);
        }

        if credential.is_blocked {
            return Err(AuthError::AccountBlocked);
        }

        if !password::verify_password(password, &credential.password_hash) {
            return Err(AuthError::InvalidPassword);
        }

        let Some(profile) = self
            .directory
            .resolve_profile(credential.role, &credential.profile_id)
        else {
            // Valid fixtures never reach this; it is an integrity fault
            // between the credential store and the profile catalogs.
            warn!(
                user = %credential.id,
                profile = %credential.profile_id,
                "credential references a missing profile"
            );
            return Err(AuthError::ProfileNotFound);
        };

        let session = Session {
            id: credential.id.clone(),
            role: credential.role,
            profile,
        };

        self.persist(Some(&session)).await;
        *self.current.write() = Some(session.clone());

        info!(user = %session.id, role = %session.role, "login");
        Ok(session)
    }

    /// Clear the session everywhere. A no-op when nobody is signed in.
    pub async fn logout(&self) {
        let _gate = self.write_gate.lock().await;

        self.persist(None).await;
        let previous = self.current.write().take();

        if let Some(session) = previous {
            info!(user = %session.id, "logout");
        }
    }

    /// Pure read of the in-memory state; persistence is never consulted.
    pub fn current_session(&self) -> Option<Session> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.current
            .read()
            .as_ref()
            .map(|s| s.role == role)
            .unwrap_or(false)
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        self.current
            .read()
            .as_ref()
            .map(|s| roles.contains(&s.role))
            .unwrap_or(false)
    }

    /// Guard-facing view: `Restoring` until [`SessionManager::restore`]
    /// has run once.
    pub fn session_state(&self) -> SessionState {
        if !self.restored.load(Ordering::Acquire) {
            return SessionState::Restoring;
        }

        SessionState::Ready(self.current_session())
    }

    /// Rehydrate the session from the persisted entry; run once at startup.
    ///
    /// A missing entry means "signed out". An undecodable entry is
    /// discarded and also means "signed out" — corruption degrades to a
    /// logged-out state, never an error to the caller.
    pub async fn restore(&self) {
        let _gate = self.write_gate.lock().await;

        let session = match self.store.get(SESSION_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    debug!(user = %session.id, "session restored");
                    Some(session)
                }
                Err(e) => {
                    warn!(error = %e, "discarding undecodable session entry");
                    if let Err(e) = self.store.remove(SESSION_KEY).await {
                        warn!(error = %e, "failed to clear session entry");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "session store unreadable");
                None
            }
        };

        *self.current.write() = session;
        self.restored.store(true, Ordering::Release);
    }

    /// Re-resolve the active session's profile from the directory and
    /// persist the refreshed copy, e.g. after an administrative edit.
    pub async fn refresh_profile(&self) -> Result<Session> {
        let _gate = self.write_gate.lock().await;

        let Some(mut session) = self.current.read().clone() else {
            return Err(AuthError::UserNotFound);
        };

        let credential = self
            .directory
            .find_credential(&session.id)
            .ok_or(AuthError::UserNotFound)?;
        let profile = self
            .directory
            .resolve_profile(credential.role, &credential.profile_id)
            .ok_or(AuthError::ProfileNotFound)?;

        session.role = credential.role;
        session.profile = profile;

        self.persist(Some(&session)).await;
        *self.current.write() = Some(session.clone());

        Ok(session)
    }

    // Administrative surface. Mutations act on the directory; only
    // force_logout touches session state.

    pub fn users(&self) -> Vec<UserSummary> {
        self.directory.users()
    }

    pub fn block_user(&self, id: &str) -> Result<()> {
        self.directory.set_blocked(id, true)
    }

    pub fn unblock_user(&self, id: &str) -> Result<()> {
        self.directory.set_blocked(id, false)
    }

    pub fn change_password(&self, id: &str, new_password: &str) -> Result<()> {
        let hash = password::hash_password(new_password)?;
        self.directory.set_password_hash(id, hash)
    }

    /// End the active session iff it belongs to `id`. Returns whether a
    /// session was ended.
    pub async fn force_logout(&self, id: &str) -> bool {
        let _gate = self.write_gate.lock().await;

        let is_target = self
            .current
            .read()
            .as_ref()
            .map(|s| s.id == id)
            .unwrap_or(false);

        if is_target {
            self.persist(None).await;
            *self.current.write() = None;
            info!(user = %id, "forced logout");
        }

        is_target
    }

    /// Write or clear the persisted copy. Failures are logged and do not
    /// fail the surrounding operation; the in-memory session stays
    /// authoritative for this process.
    async fn persist(&self, session: Option<&Session>) {
        let outcome = match session {
            Some(session) => match serde_json::to_string(session) {
                Ok(raw) => self.store.set(SESSION_KEY, &raw).await,
                Err(e) => {
                    warn!(error = %e, "failed to encode session");
                    return;
                }
            },
            None => self.store.remove(SESSION_KEY).await,
        };

        if let Err(e) = outcome {
            warn!(error = %e, "failed to persist session state");
        }
    }
}
