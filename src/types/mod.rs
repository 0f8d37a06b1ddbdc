mod range;
mod shard;
mod stream_view_type;
mod table;

pub use range::{GetRangeOutput, PrimaryKeyColumn, PrimaryKeyValue, RangeQuery};
pub use shard::{DescribeStreamOutput, StreamShard};
pub use stream_view_type::StreamViewType;
pub use table::{
    CreateTableRequest, PrimaryKeySchema, PrimaryKeyType, ReservedThroughput, StreamDetails,
    StreamOptions, TableDescription, TableMeta, TableOptions,
};
