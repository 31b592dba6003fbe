/// Generates a pool-backed [`ProductRepository`](stockroom_data::ProductRepository)
/// for one sqlx database type.
///
/// One invocation per driver: `rows_affected` is inherent on each driver's
/// query result type, not reachable through `sqlx::Database`.
macro_rules! sqlx_product_repository {
    ($(#[$meta:meta])* $name:ident, $db:ty, $dialect:expr) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            pool: ::sqlx::Pool<$db>,
            queries: ::std::sync::Arc<$crate::query::EntityQueries>,
        }

        impl $name {
            pub fn new(pool: ::sqlx::Pool<$db>) -> Self {
                Self {
                    pool,
                    queries: ::std::sync::Arc::new(
                        $crate::query::EntityQueries::new::<::stockroom_data::Product>($dialect),
                    ),
                }
            }

            /// Get the underlying pool reference.
            pub fn pool(&self) -> &::sqlx::Pool<$db> {
                &self.pool
            }

            /// Create the `products` table if it does not exist yet.
            pub async fn create_schema(&self) -> $crate::SqlxResult<()> {
                ::sqlx::query($dialect.products_table_ddl())
                    .execute(&self.pool)
                    .await
                    .map_err($crate::SqlxErrorExt::into_data_error)?;
                ::tracing::debug!("products table ensured");
                Ok(())
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }

        impl ::stockroom_data::ProductRepository for $name {
            async fn insert(
                &self,
                input: &::stockroom_data::ProductInput,
            ) -> $crate::SqlxResult<i64> {
                ::sqlx::query_scalar::<_, i64>(&self.queries.insert_returning_id)
                    .bind(&input.name)
                    .bind(input.price)
                    .bind(&input.category)
                    .fetch_one(&self.pool)
                    .await
                    .map_err($crate::SqlxErrorExt::into_data_error)
            }

            async fn fetch_by_id(&self, id: i64) -> $crate::SqlxResult<::stockroom_data::Product> {
                ::sqlx::query_as::<_, ::stockroom_data::Product>(&self.queries.select_by_id)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::SqlxErrorExt::into_data_error)?
                    .ok_or_else(|| {
                        ::stockroom_data::DataError::NotFound(format!("product {id}"))
                    })
            }

            async fn update_by_id(
                &self,
                id: i64,
                input: &::stockroom_data::ProductInput,
            ) -> $crate::SqlxResult<u64> {
                let result = ::sqlx::query(&self.queries.update_by_id)
                    .bind(&input.name)
                    .bind(input.price)
                    .bind(&input.category)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err($crate::SqlxErrorExt::into_data_error)?;
                Ok(result.rows_affected())
            }

            async fn delete_by_id(&self, id: i64) -> $crate::SqlxResult<u64> {
                let result = ::sqlx::query(&self.queries.delete_by_id)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err($crate::SqlxErrorExt::into_data_error)?;
                Ok(result.rows_affected())
            }

            async fn ping(&self) -> $crate::SqlxResult<()> {
                ::sqlx::query("SELECT 1")
                    .execute(&self.pool)
                    .await
                    .map_err($crate::SqlxErrorExt::into_data_error)?;
                Ok(())
            }
        }
    };
}

pub(crate) use sqlx_product_repository;
