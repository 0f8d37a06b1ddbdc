use super::Client;
use crate::types::{
    CreateTableRequest, DescribeStreamOutput, GetRangeOutput, RangeQuery, TableDescription,
};
use crate::{Error, ErrorCode, Result};

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Answers every call from queued responses and keeps the requests it saw.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    source: Arc<Mutex<MockSource>>,
}

#[derive(Debug, Default)]
struct MockSource {
    tables: VecDeque<Result<TableDescription>>,
    streams: VecDeque<Result<DescribeStreamOutput>>,
    creates: VecDeque<Result<()>>,
    ranges: VecDeque<Result<GetRangeOutput>>,
    range_fallback: Option<ErrorCode>,
    table_requests: Vec<String>,
    stream_requests: Vec<(String, Option<String>)>,
    create_requests: Vec<CreateTableRequest>,
    range_requests: Vec<RangeQuery>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_table(&self, res: Result<TableDescription>) -> &Self {
        self.source.lock().unwrap().tables.push_back(res);
        self
    }

    pub fn push_stream(&self, res: Result<DescribeStreamOutput>) -> &Self {
        self.source.lock().unwrap().streams.push_back(res);
        self
    }

    pub fn push_create(&self, res: Result<()>) -> &Self {
        self.source.lock().unwrap().creates.push_back(res);
        self
    }

    pub fn push_range(&self, res: Result<GetRangeOutput>) -> &Self {
        self.source.lock().unwrap().ranges.push_back(res);
        self
    }

    /// Once the queued ranges run out, every get_range fails with this code.
    pub fn set_range_fallback(&self, code: ErrorCode) -> &Self {
        self.source.lock().unwrap().range_fallback = Some(code);
        self
    }

    pub fn table_requests(&self) -> Vec<String> {
        self.source.lock().unwrap().table_requests.clone()
    }

    pub fn stream_requests(&self) -> Vec<(String, Option<String>)> {
        self.source.lock().unwrap().stream_requests.clone()
    }

    pub fn create_requests(&self) -> Vec<CreateTableRequest> {
        self.source.lock().unwrap().create_requests.clone()
    }

    pub fn range_requests(&self) -> Vec<RangeQuery> {
        self.source.lock().unwrap().range_requests.clone()
    }
}

#[async_trait]
impl Client for MockClient {
    async fn describe_table(&self, table_name: &str) -> Result<TableDescription> {
        let mut source = self.source.lock().unwrap();
        source.table_requests.push(table_name.into());
        source
            .tables
            .pop_front()
            .expect("no describe_table response queued")
    }

    async fn describe_stream(
        &self,
        stream_id: &str,
        start_shard_id: Option<String>,
    ) -> Result<DescribeStreamOutput> {
        let mut source = self.source.lock().unwrap();
        source
            .stream_requests
            .push((stream_id.into(), start_shard_id));
        source
            .streams
            .pop_front()
            .expect("no describe_stream response queued")
    }

    async fn create_table(&self, request: CreateTableRequest) -> Result<()> {
        let mut source = self.source.lock().unwrap();
        source.create_requests.push(request);
        source.creates.pop_front().unwrap_or(Ok(()))
    }

    async fn get_range(&self, query: &RangeQuery) -> Result<GetRangeOutput> {
        let mut source = self.source.lock().unwrap();
        source.range_requests.push(query.clone());

        match source.ranges.pop_front() {
            Some(res) => res,
            None => match source.range_fallback.clone() {
                Some(code) => Err(Error::service(code, "queued fallback")),
                None => Ok(GetRangeOutput::default()),
            },
        }
    }
}

#[test]
fn mock_client_answers_in_queue_order() {
    let client = MockClient::new();
    client
        .push_range(Err(Error::service(ErrorCode::TableNotReady, "first")))
        .push_range(Ok(GetRangeOutput { row_count: 1 }));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let query = RangeQuery {
        table_name: "T".into(),
        inclusive_start: vec![],
        exclusive_end: vec![],
        limit: 1,
        max_versions: 1,
    };

    let first = runtime.block_on(client.get_range(&query));
    assert_eq!(
        first.unwrap_err().code(),
        Some(&ErrorCode::TableNotReady)
    );

    let second = runtime.block_on(client.get_range(&query)).unwrap();
    assert_eq!(second.row_count, 1);

    client.set_range_fallback(ErrorCode::PartitionUnavailable);
    let third = runtime.block_on(client.get_range(&query));
    assert!(third.unwrap_err().is_transient());

    assert_eq!(client.range_requests().len(), 3);
}
