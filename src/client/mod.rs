mod dynamodb;
#[cfg(test)]
mod mock;
mod provider;

use crate::types::{
    CreateTableRequest, DescribeStreamOutput, GetRangeOutput, RangeQuery, TableDescription,
};
use crate::Result;

use async_trait::async_trait;

/// Calls into the storage service. Implementations report service failures as
/// `Error::Service` with the code already decoded.
#[async_trait]
pub trait Client: Send + Sync {
    async fn describe_table(&self, table_name: &str) -> Result<TableDescription>;
    async fn describe_stream(
        &self,
        stream_id: &str,
        start_shard_id: Option<String>,
    ) -> Result<DescribeStreamOutput>;
    async fn create_table(&self, request: CreateTableRequest) -> Result<()>;
    async fn get_range(&self, query: &RangeQuery) -> Result<GetRangeOutput>;
}

pub use dynamodb::{DynamodbClient, DynamodbClientBuilder};
#[cfg(test)]
pub use mock::MockClient;
pub use provider::{get_client, ClientProvider};
