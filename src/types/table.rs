use super::StreamViewType;

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeyType {
    String,
    Integer,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeySchema {
    pub name: String,
    pub key_type: PrimaryKeyType,
}

impl PrimaryKeySchema {
    pub fn new<T: Into<String>>(name: T, key_type: PrimaryKeyType) -> Self {
        Self {
            name: name.into(),
            key_type,
        }
    }
}

/// Table name and its primary key columns, in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeta {
    pub table_name: String,
    pub primary_key: Vec<PrimaryKeySchema>,
}

impl TableMeta {
    pub fn new<T: Into<String>>(table_name: T) -> Self {
        Self {
            table_name: table_name.into(),
            primary_key: vec![],
        }
    }

    pub fn add_primary_key<T: Into<String>>(self, name: T, key_type: PrimaryKeyType) -> Self {
        let mut primary_key = self.primary_key;
        primary_key.push(PrimaryKeySchema::new(name, key_type));

        Self {
            primary_key,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamOptions {
    pub view_type: StreamViewType,
}

/// `time_to_live` is how long rows are kept; `None` keeps them forever. Backends
/// that cannot set it at creation time refuse the request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableOptions {
    pub stream: Option<StreamOptions>,
    pub time_to_live: Option<Duration>,
}

impl TableOptions {
    pub fn with_stream(view_type: StreamViewType) -> Self {
        Self {
            stream: Some(StreamOptions { view_type }),
            ..Self::default()
        }
    }

    pub fn with_time_to_live(self, time_to_live: Duration) -> Self {
        Self {
            time_to_live: Some(time_to_live),
            ..self
        }
    }
}

/// Stream configuration of a table. `stream_id` is only set while a stream exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamDetails {
    pub enabled: bool,
    pub stream_id: Option<String>,
    pub view_type: Option<StreamViewType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescription {
    pub table_meta: TableMeta,
    pub stream_details: StreamDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedThroughput {
    pub read: i64,
    pub write: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableRequest {
    pub table_meta: TableMeta,
    pub options: TableOptions,
    pub reserved_throughput: ReservedThroughput,
}
