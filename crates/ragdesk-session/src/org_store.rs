//! Organization list and selection state.

use ragdesk_api_client::{RagBackend, RequestError};
use ragdesk_core::models::Organization;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

#[derive(Default)]
struct OrgState {
    organizations: Vec<Organization>,
    selected: Option<Organization>,
    loading: bool,
}

/// Process-wide store for the organization list and the current selection.
///
/// Injected by `Arc` into the document panel and the chat session; they
/// read it but never write it, so organization selection has a single
/// writer. The lock is never held across an await.
///
/// Every selection change bumps an epoch counter. Components that fetch
/// data scoped to the selection capture the epoch at dispatch and discard
/// the response if it moved, so a slow fetch for a superseded selection
/// can never overwrite fresher state.
pub struct OrgStore {
    backend: Arc<dyn RagBackend>,
    state: RwLock<OrgState>,
    selection_epoch: AtomicU64,
}

impl OrgStore {
    pub fn new(backend: Arc<dyn RagBackend>) -> Self {
        Self {
            backend,
            state: RwLock::new(OrgState::default()),
            selection_epoch: AtomicU64::new(0),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, OrgState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, OrgState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the organization list.
    pub fn organizations(&self) -> Vec<Organization> {
        self.read().organizations.clone()
    }

    pub fn selected(&self) -> Option<Organization> {
        self.read().selected.clone()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.read().selected.as_ref().map(|org| org.id)
    }

    /// Advisory flag for disabling controls while a load is in flight.
    /// Not a lock: nothing stops a second load from being dispatched.
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// Current selection epoch. Bumped on every selection change,
    /// including auto-selection and reselection after delete.
    pub fn selection_epoch(&self) -> u64 {
        self.selection_epoch.load(Ordering::Acquire)
    }

    fn bump_epoch(&self) {
        self.selection_epoch.fetch_add(1, Ordering::Release);
    }

    /// Select an organization. Pure state assignment with no I/O; it is
    /// the trigger downstream components observe to reload their scoped
    /// data.
    pub fn select(&self, org: Organization) {
        self.write().selected = Some(org);
        self.bump_epoch();
    }

    /// Select by id from the stored list. Returns false if no stored
    /// organization has that id.
    pub fn select_by_id(&self, id: i64) -> bool {
        let mut state = self.write();
        match state.organizations.iter().find(|org| org.id == id).cloned() {
            Some(org) => {
                state.selected = Some(org);
                drop(state);
                self.bump_epoch();
                true
            }
            None => false,
        }
    }

    /// Fetch the full organization list, replacing the stored sequence.
    ///
    /// If nothing was selected and the result is non-empty, the first
    /// element is auto-selected so dependent views never sit on an empty
    /// selection next to a non-empty list. On failure the previous state
    /// is kept as-is (stale but consistent); the loading flag is cleared
    /// on every path.
    pub async fn load(&self) {
        let _loading = LoadingGuard::acquire(self);

        match self.backend.list_organizations().await {
            Ok(organizations) => {
                let auto_selected = {
                    let mut state = self.write();
                    state.organizations = organizations;
                    if state.selected.is_none() {
                        state.selected = state.organizations.first().cloned();
                        state.selected.is_some()
                    } else {
                        false
                    }
                };
                if auto_selected {
                    self.bump_epoch();
                }
            }
            Err(error) => {
                warn!(%error, "failed to load organizations");
            }
        }
    }

    /// Create an organization. A name that trims to empty is silently
    /// refused with no request issued. Backend failure propagates to the
    /// caller so the view can surface it (and avoid auto-selecting an
    /// organization that was never created).
    pub async fn create(&self, name: &str) -> Result<Option<Organization>, RequestError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let org = self.backend.create_organization(name).await?;
        self.write().organizations.push(org.clone());
        Ok(Some(org))
    }

    /// Delete an organization. The stored entry is removed only after the
    /// backend confirms. If the deleted organization was selected, the
    /// first of the remaining sequence is selected, or nothing when the
    /// list is now empty.
    pub async fn delete(&self, id: i64) -> Result<(), RequestError> {
        self.backend.delete_organization(id).await?;

        let reselected = {
            let mut state = self.write();
            state.organizations.retain(|org| org.id != id);
            if state.selected.as_ref().map(|org| org.id) == Some(id) {
                state.selected = state.organizations.first().cloned();
                true
            } else {
                false
            }
        };
        if reselected {
            self.bump_epoch();
        }
        Ok(())
    }
}

/// Scoped acquisition of the loading flag: set on construction, cleared on
/// drop, so it cannot leak past the request that set it.
struct LoadingGuard<'a> {
    store: &'a OrgStore,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(store: &'a OrgStore) -> Self {
        store.write().loading = true;
        Self { store }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.write().loading = false;
    }
}
