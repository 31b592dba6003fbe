use stockroom_data::Entity;

/// SQL dialect of a backend; decides placeholder style and DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// SQLite-style `?` placeholders.
    Sqlite,
    /// Postgres-style `$1, $2, ...` placeholders.
    Postgres,
}

impl Dialect {
    fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Sqlite => "?".to_string(),
        }
    }

    /// Read expression for an integer column, widened to 64 bits.
    ///
    /// Postgres only decodes `INT8` as `i64`; a pre-existing table created
    /// with `SERIAL`/`INT` columns is read through a cast. SQLite integers
    /// are already 64-bit.
    fn integer_read(self, column: &str) -> String {
        match self {
            Dialect::Postgres => format!("{column}::int8"),
            Dialect::Sqlite => column.to_string(),
        }
    }

    fn select_column<E: Entity>(self, column: &str) -> String {
        match self {
            Dialect::Postgres if E::is_integer_column(column) => {
                format!("{} AS {column}", self.integer_read(column))
            }
            _ => column.to_string(),
        }
    }

    /// `CREATE TABLE IF NOT EXISTS` for the products table.
    pub fn products_table_ddl(self) -> &'static str {
        match self {
            Dialect::Postgres => {
                "CREATE TABLE IF NOT EXISTS products (\
                 id BIGSERIAL PRIMARY KEY, \
                 name TEXT NOT NULL CHECK (name <> ''), \
                 price BIGINT NOT NULL CHECK (price > 0), \
                 category TEXT NOT NULL CHECK (category <> ''))"
            }
            Dialect::Sqlite => {
                "CREATE TABLE IF NOT EXISTS products (\
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 name TEXT NOT NULL CHECK (name <> ''), \
                 price INTEGER NOT NULL CHECK (price > 0), \
                 category TEXT NOT NULL CHECK (category <> ''))"
            }
        }
    }
}

/// The four statements a gateway runs, rendered once per repository.
///
/// Bind order: mutable columns in [`Entity::mutable_columns`] order, then the
/// id (for update); the id alone for select and delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityQueries {
    pub insert_returning_id: String,
    pub select_by_id: String,
    pub update_by_id: String,
    pub delete_by_id: String,
}

impl EntityQueries {
    pub fn new<E: Entity>(dialect: Dialect) -> Self {
        let table = E::table_name();
        let id = E::id_column();
        let mutable = E::mutable_columns();

        let value_placeholders: Vec<String> = (1..=mutable.len())
            .map(|i| dialect.placeholder(i))
            .collect();
        let assignments: Vec<String> = mutable
            .iter()
            .zip(&value_placeholders)
            .map(|(col, placeholder)| format!("{col} = {placeholder}"))
            .collect();
        let update_id_placeholder = dialect.placeholder(mutable.len() + 1);
        let first = dialect.placeholder(1);
        let returning = if E::is_integer_column(id) {
            dialect.integer_read(id)
        } else {
            id.to_string()
        };
        let select_list: Vec<String> = E::columns()
            .iter()
            .map(|col| dialect.select_column::<E>(col))
            .collect();

        EntityQueries {
            insert_returning_id: format!(
                "INSERT INTO {table} ({}) VALUES ({}) RETURNING {returning}",
                mutable.join(", "),
                value_placeholders.join(", "),
            ),
            select_by_id: format!(
                "SELECT {} FROM {table} WHERE {id} = {first}",
                select_list.join(", "),
            ),
            update_by_id: format!(
                "UPDATE {table} SET {} WHERE {id} = {update_id_placeholder}",
                assignments.join(", "),
            ),
            delete_by_id: format!("DELETE FROM {table} WHERE {id} = {first}"),
        }
    }
}
