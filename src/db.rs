//! SQLite connection pooling.

use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Shared pool of SQLite connections. Cloning is cheap.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A connection checked out of [`DbPool`]; returned to the pool on drop.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build a connection pool for `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
