/// Table metadata for a database entity: table name, id column, and column list.
///
/// Gateways build their SQL from this metadata instead of repeating column
/// lists in every statement.
///
/// # Example
///
/// ```ignore
/// impl Entity for Product {
///     fn table_name() -> &'static str { "products" }
///     fn id_column() -> &'static str { "id" }
///     fn columns() -> &'static [&'static str] { &["id", "name", "price", "category"] }
///     fn integer_columns() -> &'static [&'static str] { &["id", "price"] }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    fn table_name() -> &'static str;
    fn id_column() -> &'static str;
    /// All columns, id first.
    fn columns() -> &'static [&'static str];

    /// Columns decoded as `i64`. Dialects with several integer widths widen
    /// these on read.
    fn integer_columns() -> &'static [&'static str] {
        &[]
    }

    /// Columns written by inserts and updates (everything except the id).
    fn mutable_columns() -> &'static [&'static str] {
        let columns = Self::columns();
        match columns.first() {
            Some(first) if *first == Self::id_column() => &columns[1..],
            _ => columns,
        }
    }

    fn is_integer_column(column: &str) -> bool {
        Self::integer_columns().iter().any(|c| *c == column)
    }
}
