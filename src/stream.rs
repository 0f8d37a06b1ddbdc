use crate::client::Client;
use crate::types::{DescribeStreamOutput, StreamDetails, StreamShard};
use crate::Result;

use tracing::debug;

pub async fn get_stream_details(client: &dyn Client, table_name: &str) -> Result<StreamDetails> {
    let output = client.describe_table(table_name).await?;
    Ok(output.stream_details)
}

/// Lists every shard of the stream, following continuation tokens until the
/// service stops returning one. Shards keep the order the service returned them in.
pub async fn get_ordered_shard_list(
    client: &dyn Client,
    stream_id: &str,
) -> Result<Vec<StreamShard>> {
    let mut shards: Vec<StreamShard> = vec![];

    let DescribeStreamOutput {
        shards: mut _shards,
        mut next_shard_id,
    } = client.describe_stream(stream_id, None).await?;
    debug!("{} shards in first page of {stream_id}", _shards.len());
    shards.append(&mut _shards);

    while next_shard_id.is_some() {
        let output = client.describe_stream(stream_id, next_shard_id.take()).await?;

        let mut _shards = output.shards;
        debug!("{} more shards of {stream_id}", _shards.len());
        shards.append(&mut _shards);

        next_shard_id = output.next_shard_id;
    }

    Ok(shards)
}
