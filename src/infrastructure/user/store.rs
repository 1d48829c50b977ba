//! Persistent user store with race-safe registration
//!
//! The persistence medium is the single source of truth. Every registration
//! re-reads the stored collection, checks uniqueness against that snapshot,
//! writes the extended collection and only then refreshes the cached listing.
//! A stale cache can therefore never be the base of a write.

use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, info, warn};

use crate::config::DEFAULT_USERS_KEY;
use crate::domain::storage::KeyValueStore;
use crate::domain::user::{EmailPolicy, RegistrationError, User};
use crate::domain::DomainError;

#[derive(Debug)]
pub struct UserStore {
    medium: Arc<dyn KeyValueStore>,
    key: String,
    email_policy: EmailPolicy,
    /// Listing view, replaced wholesale after each successful write
    cache: RwLock<Vec<User>>,
    /// Serializes read-check-write so two registrations never share a base snapshot
    write_lock: Mutex<()>,
}

impl UserStore {
    /// Open the store under the default key and load the listing cache
    pub fn open(medium: Arc<dyn KeyValueStore>) -> Result<Self, DomainError> {
        Self::with_options(medium, DEFAULT_USERS_KEY, EmailPolicy::default())
    }

    pub fn with_options(
        medium: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        email_policy: EmailPolicy,
    ) -> Result<Self, DomainError> {
        let key = key.into();
        let snapshot = load_snapshot(medium.as_ref(), &key)?;

        debug!("Loaded {} users from '{}'", snapshot.len(), key);

        Ok(Self {
            medium,
            key,
            email_policy,
            cache: RwLock::new(snapshot),
            write_lock: Mutex::new(()),
        })
    }

    /// Look up a user in the persisted collection
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = email.trim();
        let snapshot = load_snapshot(self.medium.as_ref(), &self.key)?;

        Ok(snapshot
            .into_iter()
            .find(|u| self.email_policy.matches(u.email(), email)))
    }

    /// Register a new user.
    ///
    /// Fails with [`RegistrationError::DuplicateEmail`] without writing if the
    /// email is already stored. On success the medium holds the previous
    /// records plus exactly the returned user. Name and email are stored
    /// trimmed; the password is stored as given.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, RegistrationError> {
        let name = name.trim();
        let email = email.trim();

        // the mutex guards no data, a panic in another registration leaves nothing to repair
        let _guard = match self.write_lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut snapshot = load_snapshot(self.medium.as_ref(), &self.key)?;

        if snapshot
            .iter()
            .any(|u| self.email_policy.matches(u.email(), email))
        {
            warn!("Registration rejected, email already in use: {}", email);
            return Err(RegistrationError::duplicate_email(email));
        }

        let user = User::new(name, email, password);
        snapshot.push(user.clone());

        let encoded = serde_json::to_string(&snapshot).map_err(DomainError::from)?;
        self.medium.set(&self.key, &encoded)?;

        self.replace_cache(snapshot);

        info!("Registered user: id={}, email={}", user.id(), user.email());
        Ok(user)
    }

    /// Cached users in insertion order
    pub fn users(&self) -> Vec<User> {
        match self.cache.read() {
            Ok(cache) => cache.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.cache.read() {
            Ok(cache) => cache.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reload the listing cache from the medium, e.g. after another writer
    pub fn refresh(&self) -> Result<(), DomainError> {
        let snapshot = load_snapshot(self.medium.as_ref(), &self.key)?;
        debug!("Refreshed user cache: {} users", snapshot.len());
        self.replace_cache(snapshot);
        Ok(())
    }

    /// The cache is only ever replaced wholesale, so a poisoned lock still holds a complete snapshot
    fn replace_cache(&self, snapshot: Vec<User>) {
        match self.cache.write() {
            Ok(mut cache) => *cache = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }
}

/// Read and decode the stored collection; absent or blank means empty
fn load_snapshot(medium: &dyn KeyValueStore, key: &str) -> Result<Vec<User>, DomainError> {
    match medium.get(key)? {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw).map_err(|e| {
            DomainError::serialization(format!("Stored user collection is corrupt: {}", e))
        }),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::mock::MockKeyValueStore;
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    fn medium() -> Arc<InMemoryKeyValueStore> {
        Arc::new(InMemoryKeyValueStore::new())
    }

    fn persisted(medium: &dyn KeyValueStore) -> Vec<User> {
        load_snapshot(medium, DEFAULT_USERS_KEY).unwrap()
    }

    #[test]
    fn test_open_empty() {
        let store = UserStore::open(medium()).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.find_by_email("ana@x.com").unwrap(), None);
    }

    #[test]
    fn test_register_then_duplicate() {
        let medium = medium();
        let store = UserStore::open(medium.clone()).unwrap();

        store.register("Ana", "ana@x.com", "secret1").unwrap();
        assert_eq!(persisted(&*medium).len(), 1);

        let result = store.register("Ana Again", "ana@x.com", "other-password");
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateEmail { ref email }) if email == "ana@x.com"
        ));

        let stored = persisted(&*medium);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].password(), "secret1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_after_register_returns_same_record() {
        let store = UserStore::open(medium()).unwrap();

        let user = store.register("Ana", "ana@x.com", "secret1").unwrap();
        let found = store.find_by_email("ana@x.com").unwrap();

        assert_eq!(found, Some(user));
    }

    #[test]
    fn test_duplicate_check_follows_policy() {
        let case_insensitive =
            UserStore::with_options(medium(), DEFAULT_USERS_KEY, EmailPolicy::CaseInsensitive)
                .unwrap();
        case_insensitive.register("Ana", "ana@x.com", "secret1").unwrap();
        assert!(matches!(
            case_insensitive.register("Ana", "ANA@x.com", "secret1"),
            Err(RegistrationError::DuplicateEmail { .. })
        ));
        assert!(case_insensitive.find_by_email("Ana@X.com").unwrap().is_some());

        let exact = UserStore::open(medium()).unwrap();
        exact.register("Ana", "ana@x.com", "secret1").unwrap();
        exact.register("Ana", "ANA@x.com", "secret1").unwrap();
        assert_eq!(exact.len(), 2);
        assert!(exact.find_by_email("Ana@X.com").unwrap().is_none());
    }

    #[test]
    fn test_default_policy_treats_case_variants_as_distinct() {
        let store = UserStore::open(medium()).unwrap();

        store.register("Ana", "ana@x.com", "secret1").unwrap();
        let second = store.register("Ana", "Ana@x.com", "secret1").unwrap();

        assert_eq!(second.email(), "Ana@x.com");
        assert_eq!(store.len(), 2);
        assert!(store.find_by_email("ANA@X.COM").unwrap().is_none());
    }

    #[test]
    fn test_register_trims_name_and_email() {
        let medium = medium();
        let store = UserStore::open(medium.clone()).unwrap();

        let user = store.register(" Ana ", " ana@x.com ", " secret1 ").unwrap();

        assert_eq!(user.name(), "Ana");
        assert_eq!(user.email(), "ana@x.com");
        assert_eq!(user.password(), " secret1 ");
        assert_eq!(persisted(&*medium)[0].email(), "ana@x.com");

        assert!(matches!(
            store.register("Ana", "ana@x.com", "secret1"),
            Err(RegistrationError::DuplicateEmail { .. })
        ));
        assert_eq!(store.find_by_email(" ana@x.com").unwrap(), Some(user));
    }

    #[test]
    fn test_register_recovers_from_poisoned_write_lock() {
        let store = UserStore::open(medium()).unwrap();

        let _ = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = store.write_lock.lock().unwrap();
                    panic!("registration handler panicked");
                })
                .join()
        });
        assert!(store.write_lock.is_poisoned());

        store.register("Ana", "ana@x.com", "secret1").unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.find_by_email("ana@x.com").unwrap().is_some());
    }

    #[test]
    fn test_listing_preserves_insertion_order() {
        let store = UserStore::open(medium()).unwrap();

        for (name, email) in [("C", "c@x.com"), ("A", "a@x.com"), ("B", "b@x.com")] {
            store.register(name, email, "secret1").unwrap();
        }

        let emails: Vec<String> = store.users().iter().map(|u| u.email().to_string()).collect();
        assert_eq!(emails, vec!["c@x.com", "a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_stale_stores_do_not_lose_records() {
        let medium = medium();
        // two views opened before either has written
        let first = UserStore::open(medium.clone()).unwrap();
        let second = UserStore::open(medium.clone()).unwrap();
        assert!(first.is_empty() && second.is_empty());

        first.register("Ana", "ana@x.com", "secret1").unwrap();
        second.register("Budi", "budi@x.com", "secret2").unwrap();

        let stored = persisted(&*medium);
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().any(|u| u.email() == "ana@x.com"));
        assert!(stored.iter().any(|u| u.email() == "budi@x.com"));

        // the second store's cache came from its own write, which included Ana
        assert_eq!(second.len(), 2);
        assert_eq!(first.len(), 1);
        first.refresh().unwrap();
        assert_eq!(first.users(), second.users());
    }

    #[test]
    fn test_stale_store_still_detects_duplicate() {
        let medium = medium();
        let first = UserStore::open(medium.clone()).unwrap();
        let second = UserStore::open(medium.clone()).unwrap();

        first.register("Ana", "ana@x.com", "secret1").unwrap();
        let result = second.register("Ana", "ana@x.com", "secret2");

        assert!(matches!(result, Err(RegistrationError::DuplicateEmail { .. })));
        assert_eq!(persisted(&*medium).len(), 1);
    }

    #[test]
    fn test_concurrent_registrations_all_persist() {
        let medium = medium();
        let store = Arc::new(UserStore::open(medium.clone()).unwrap());

        std::thread::scope(|scope| {
            for i in 0..16 {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    store
                        .register(&format!("User {}", i), &format!("user{}@x.com", i), "secret1")
                        .unwrap();
                });
            }
        });

        assert_eq!(persisted(&*medium).len(), 16);
        assert_eq!(store.len(), 16);
    }

    #[test]
    fn test_concurrent_duplicates_register_once() {
        let medium = medium();
        let store = Arc::new(UserStore::open(medium.clone()).unwrap());

        let successes: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || store.register("Ana", "ana@x.com", "secret1").is_ok())
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap() as usize)
                .sum()
        });

        assert_eq!(successes, 1);
        assert_eq!(persisted(&*medium).len(), 1);
    }

    #[test]
    fn test_write_failure_leaves_cache_untouched() {
        let medium = Arc::new(MockKeyValueStore::new());
        let store = UserStore::open(medium.clone()).unwrap();

        store.register("Ana", "ana@x.com", "secret1").unwrap();

        medium.set_write_error(Some("quota exceeded".to_string()));
        let result = store.register("Budi", "budi@x.com", "secret2");

        assert!(matches!(result, Err(RegistrationError::Persistence(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(medium.write_count(), 1);
        assert!(store.find_by_email("budi@x.com").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_does_not_write() {
        let medium = Arc::new(MockKeyValueStore::new());
        let store = UserStore::open(medium.clone()).unwrap();

        store.register("Ana", "ana@x.com", "secret1").unwrap();
        let _ = store.register("Ana", "ana@x.com", "secret1");

        assert_eq!(medium.write_count(), 1);
    }

    #[test]
    fn test_read_failure_is_propagated() {
        let medium = Arc::new(MockKeyValueStore::new().with_read_error("unavailable"));

        assert!(matches!(
            UserStore::open(medium),
            Err(DomainError::Storage { .. })
        ));
    }

    #[test]
    fn test_corrupt_collection_is_persistence_failure() {
        let medium = Arc::new(MockKeyValueStore::new());
        let store = UserStore::open(medium.clone()).unwrap();

        medium.set(DEFAULT_USERS_KEY, "{not json").unwrap();
        let result = store.register("Ana", "ana@x.com", "secret1");

        assert!(matches!(
            result,
            Err(RegistrationError::Persistence(DomainError::Serialization { .. }))
        ));
        assert_eq!(
            medium.get(DEFAULT_USERS_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_blank_value_reads_as_empty() {
        let medium = Arc::new(MockKeyValueStore::new().with_value(DEFAULT_USERS_KEY, "  "));
        let store = UserStore::open(medium).unwrap();

        assert!(store.is_empty());
        store.register("Ana", "ana@x.com", "secret1").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_custom_key() {
        let medium = medium();
        let store =
            UserStore::with_options(medium.clone(), "other-users", EmailPolicy::Exact).unwrap();

        store.register("Ana", "ana@x.com", "secret1").unwrap();

        assert!(medium.get(DEFAULT_USERS_KEY).unwrap().is_none());
        assert!(medium.get("other-users").unwrap().is_some());
    }
}
