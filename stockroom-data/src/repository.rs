use std::future::Future;

use crate::error::DataError;
use crate::product::{Product, ProductInput};

/// Gateway contract for the `products` table.
///
/// Every operation is a single statement against the store. Implementors are
/// cheap to clone (they hold a pool handle) and shared by all requests.
///
/// Uses RPITIT (return-position `impl Trait` in traits); no `async-trait`.
pub trait ProductRepository: Clone + Send + Sync + 'static {
    /// Insert a row and return the store-assigned id.
    fn insert(&self, input: &ProductInput) -> impl Future<Output = Result<i64, DataError>> + Send;

    /// Fetch one row. Zero matching rows is `DataError::NotFound`.
    fn fetch_by_id(&self, id: i64) -> impl Future<Output = Result<Product, DataError>> + Send;

    /// Replace name, price and category of the row with `id`.
    ///
    /// Returns the number of rows affected; `0` means no such row.
    fn update_by_id(
        &self,
        id: i64,
        input: &ProductInput,
    ) -> impl Future<Output = Result<u64, DataError>> + Send;

    /// Delete the row with `id`, returning the number of rows affected.
    fn delete_by_id(&self, id: i64) -> impl Future<Output = Result<u64, DataError>> + Send;

    /// Liveness probe against the store.
    fn ping(&self) -> impl Future<Output = Result<(), DataError>> + Send;
}
