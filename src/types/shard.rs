#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamShard {
    shard_id: String,
    parent_id: Option<String>,
}

impl StreamShard {
    pub fn new<T: Into<String>>(shard_id: &str, parent_id: Option<T>) -> Self {
        Self {
            shard_id: shard_id.into(),
            parent_id: parent_id.map(|s| s.into()),
        }
    }

    pub fn id(&self) -> &str {
        self.shard_id.as_str()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

/// One page of a describe-stream listing.
#[derive(Debug, Clone, Default)]
pub struct DescribeStreamOutput {
    pub shards: Vec<StreamShard>,
    pub next_shard_id: Option<String>,
}
