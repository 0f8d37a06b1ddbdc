use crate::client::Client;
use crate::types::{
    CreateTableRequest, RangeQuery, ReservedThroughput, TableDescription, TableMeta, TableOptions,
};
use crate::Result;

use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, info, warn};

pub const CREATE_TABLE_READ_CU: i64 = 5000;
pub const CREATE_TABLE_WRITE_CU: i64 = 5000;
pub const CHECK_TABLE_READY_INTERVAL: Duration = Duration::from_millis(100);

pub async fn describe_table(client: &dyn Client, table_name: &str) -> Result<TableDescription> {
    client.describe_table(table_name).await
}

/// `Ok(false)` only when the service says the table does not exist.
pub async fn check_table_exists(client: &dyn Client, table_name: &str) -> Result<bool> {
    match describe_table(client, table_name).await {
        Ok(_) => Ok(true),
        Err(err) if err.is_object_not_exist() => Ok(false),
        Err(err) => Err(err),
    }
}

pub async fn create_table(
    client: &dyn Client,
    table_meta: TableMeta,
    options: TableOptions,
) -> Result<()> {
    let table_name = table_meta.table_name.clone();
    let request = CreateTableRequest {
        table_meta,
        options,
        reserved_throughput: ReservedThroughput {
            read: CREATE_TABLE_READ_CU,
            write: CREATE_TABLE_WRITE_CU,
        },
    };

    client.create_table(request).await?;
    info!("created table {table_name}");
    Ok(())
}

/// Polls a one-row scan until it goes through. Returns `Ok(false)` if the table is
/// still reporting itself as not ready once `max_wait` has passed.
pub async fn wait_until_table_ready(
    client: &dyn Client,
    table_name: &str,
    max_wait: Duration,
) -> Result<bool> {
    let table_meta = describe_table(client, table_name).await?.table_meta;
    let query = RangeQuery::full_range(&table_meta);

    let start = Instant::now();

    while start.elapsed() < max_wait {
        match client.get_range(&query).await {
            Ok(_) => {
                info!("table {table_name} is ready");
                return Ok(true);
            }
            Err(err) if err.is_transient() => {
                debug!("table {table_name} is not ready yet: {err}");
            }
            Err(err) => return Err(err),
        }

        sleep(CHECK_TABLE_READY_INTERVAL).await;
    }

    warn!("table {table_name} is not ready after {max_wait:?}");
    Ok(false)
}
