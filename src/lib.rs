pub mod client;
mod config;
mod error;
pub mod stream;
pub mod table;
pub mod types;

pub use client::{get_client, Client, ClientProvider, DynamodbClient};
pub use config::{Config, Credentials, RetryPolicy};
pub use error::{Error, ErrorCode, Result};
pub use stream::{get_ordered_shard_list, get_stream_details};
pub use table::{
    check_table_exists, create_table, describe_table, wait_until_table_ready,
    CHECK_TABLE_READY_INTERVAL, CREATE_TABLE_READ_CU, CREATE_TABLE_WRITE_CU,
};

pub const ENV_DYNAMODB_ENDPOINT_URL: &str = "DYNAMODB_ENDPOINT_URL";
pub const ENV_CONFIG_PATH: &str = "STREAM_TABLE_CONFIG_PATH";
