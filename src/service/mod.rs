mod decode;
mod postgres;

use std::sync::LazyLock;

use async_trait::async_trait;

use crate::core::{FnProxyError, Record, TestDataParams};

pub use postgres::PgSource;

/// Columns selected from the backing function, in response order.
pub const COLUMNS: [&str; 10] = [
    "id1",
    "foo1",
    "bar1",
    "datetime1",
    "id2",
    "foo2",
    "bar2",
    "datetime2",
    "long_foo_bar",
    "is_foobar",
];

/// Integers travel as text and are cast server-side, so out-of-range values
/// fail in the database like any other coercion error.
pub static QUERY: LazyLock<String> = LazyLock::new(|| {
    format!(
        "select {} from public.test_func_v1($1::text::integer, $2::text, $3::text::integer, $4::text::timestamp, $5::boolean)",
        COLUMNS.join(", ")
    )
});

/// Where the handler gets its rows from.
#[async_trait]
pub trait TestDataSource: Send + Sync {
    async fn fetch(&self, params: &TestDataParams) -> Result<Vec<Record>, FnProxyError>;

    /// Releases held resources. Called once, after the server has stopped.
    async fn close(&self);
}
