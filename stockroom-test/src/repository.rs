use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stockroom_data::{DataError, Product, ProductInput, ProductRepository};

/// A repository operation that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Fetch,
    Update,
    Delete,
    Ping,
}

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
    failing: HashSet<Operation>,
}

/// In-memory [`ProductRepository`] for handler tests.
///
/// Ids are assigned from a counter and never reused. Any operation can be
/// switched to fail with a `DataError::Database` via [`fail_on`](Self::fail_on).
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call to `operation` fail.
    pub fn fail_on(&self, operation: Operation) -> &Self {
        self.store().failing.insert(operation);
        self
    }

    pub fn recover(&self, operation: Operation) -> &Self {
        self.store().failing.remove(&operation);
        self
    }

    /// Insert a row directly, bypassing failure injection.
    pub fn seed(&self, input: ProductInput) -> Product {
        let mut store = self.store();
        store.last_id += 1;
        let product = input.into_product(store.last_id);
        store.rows.insert(product.id, product.clone());
        product
    }

    pub fn get(&self, id: i64) -> Option<Product> {
        self.store().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self, operation: Operation) -> Result<MutexGuard<'_, Store>, DataError> {
        let store = self.store();
        if store.failing.contains(&operation) {
            return Err(DataError::database(std::io::Error::other(format!(
                "injected {operation:?} failure"
            ))));
        }
        Ok(store)
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, input: &ProductInput) -> Result<i64, DataError> {
        let mut store = self.check(Operation::Insert)?;
        store.last_id += 1;
        let product = input.clone().into_product(store.last_id);
        store.rows.insert(product.id, product);
        Ok(store.last_id)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Product, DataError> {
        self.check(Operation::Fetch)?
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("product {id}")))
    }

    async fn update_by_id(&self, id: i64, input: &ProductInput) -> Result<u64, DataError> {
        let mut store = self.check(Operation::Update)?;
        match store.rows.get_mut(&id) {
            Some(row) => {
                *row = input.clone().into_product(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DataError> {
        let mut store = self.check(Operation::Delete)?;
        Ok(u64::from(store.rows.remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<(), DataError> {
        self.check(Operation::Ping).map(|_| ())
    }
}
