use super::Client;
use crate::types::{
    CreateTableRequest, DescribeStreamOutput, GetRangeOutput, PrimaryKeySchema, PrimaryKeyType,
    RangeQuery, ReservedThroughput, StreamDetails, StreamShard, StreamViewType, TableDescription,
    TableMeta, TableOptions,
};
use crate::{Config, Error, ErrorCode, Result};

use async_trait::async_trait;
use aws_sdk_dynamodb::{
    config::{Builder as DbConfigBuilder, Credentials, Region},
    error::{ProvideErrorMetadata, SdkError},
    types::{
        AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ProvisionedThroughput,
        ScalarAttributeType, StreamSpecification, TableDescription as SdkTableDescription,
    },
    Client as DbClient,
};
use aws_sdk_dynamodbstreams::{
    config::Builder as StreamConfigBuilder, types::StreamDescription, Client as StreamClient,
};
use tracing::debug;

const CREDENTIALS_PROVIDER: &str = "stream-table-static";

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    db_client: DbClient,
    stream_client: StreamClient,
}

impl DynamodbClient {
    pub async fn builder(config: &Config) -> DynamodbClientBuilder {
        DynamodbClientBuilder::new(config).await
    }
}

#[derive(Debug)]
pub struct DynamodbClientBuilder {
    db_builder: DbConfigBuilder,
    stream_builder: StreamConfigBuilder,
}

impl DynamodbClientBuilder {
    pub async fn new(config: &Config) -> Self {
        let mut loader =
            aws_config::from_env().retry_config(config.retry_policy().to_retry_config());

        if let Some(region) = config.instance_name() {
            loader = loader.region(Region::new(region));
        }

        if let Some(credentials) = config.credentials() {
            loader = loader.credentials_provider(Credentials::new(
                credentials.access_id.as_str(),
                credentials.access_key.as_str(),
                None,
                None,
                CREDENTIALS_PROVIDER,
            ));
        }

        let sdk_config = loader.load().await;
        let db_builder = DbConfigBuilder::from(&sdk_config);
        let stream_builder = StreamConfigBuilder::from(&sdk_config);

        Self {
            db_builder,
            stream_builder,
        }
        .endpoint_url(config.endpoint_url())
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => {
                let db_builder = self.db_builder.endpoint_url(&url);
                let stream_builder = self.stream_builder.endpoint_url(&url);
                Self {
                    db_builder,
                    stream_builder,
                }
            }
            None => self,
        }
    }

    pub fn build(self) -> DynamodbClient {
        let db_config = self.db_builder.build();
        let db_client = DbClient::from_conf(db_config);

        let stream_config = self.stream_builder.build();
        let stream_client = StreamClient::from_conf(stream_config);

        DynamodbClient {
            db_client,
            stream_client,
        }
    }
}

#[async_trait]
impl Client for DynamodbClient {
    async fn describe_table(&self, table_name: &str) -> Result<TableDescription> {
        let table = self
            .db_client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(from_sdk_err)?
            .table
            .ok_or(anyhow::anyhow!("`table` is None in `DescribeTableOutput`"))?;

        into_table_description(table, table_name)
    }

    // DynamoDB treats the start shard id as exclusive. Handing back the last evaluated
    // shard id still continues the listing right after the previous page.
    async fn describe_stream(
        &self,
        stream_id: &str,
        start_shard_id: Option<String>,
    ) -> Result<DescribeStreamOutput> {
        self.stream_client
            .describe_stream()
            .stream_arn(stream_id)
            .set_exclusive_start_shard_id(start_shard_id)
            .send()
            .await
            .map_err(from_sdk_err)?
            .stream_description
            .map(into_describe_stream_output)
            .ok_or(
                anyhow::anyhow!("`stream_description` is None in `DescribeStreamOutput`")
                    .into(),
            )
    }

    async fn create_table(&self, request: CreateTableRequest) -> Result<()> {
        let CreateTableRequest {
            table_meta,
            options,
            reserved_throughput,
        } = request;

        let (attributes, key_schema) = key_definitions(&table_meta)?;
        let stream = stream_specification(&options)?;

        self.db_client
            .create_table()
            .table_name(table_meta.table_name.as_str())
            .billing_mode(BillingMode::Provisioned)
            .provisioned_throughput(provisioned_throughput(reserved_throughput)?)
            .set_attribute_definitions(Some(attributes))
            .set_key_schema(Some(key_schema))
            .set_stream_specification(stream)
            .send()
            .await
            .map_err(from_sdk_err)?;

        Ok(())
    }

    async fn get_range(&self, query: &RangeQuery) -> Result<GetRangeOutput> {
        let limit = scan_limit(query)?;

        let res = self
            .db_client
            .scan()
            .table_name(query.table_name.as_str())
            .limit(limit)
            .send()
            .await
            .map_err(from_sdk_err);

        let output = match res {
            Ok(output) => output,
            Err(err) if err.is_object_not_exist() => {
                let lookup = self
                    .db_client
                    .describe_table()
                    .table_name(query.table_name.as_str())
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(from_sdk_err);
                return Err(not_ready_on_read(err, lookup));
            }
            Err(err) => return Err(err),
        };

        let row_count = output.items.map(|items| items.len()).unwrap_or_default();
        debug!("scanned {row_count} rows from `{}`", query.table_name);

        Ok(GetRangeOutput { row_count })
    }
}

fn into_table_description(
    table: SdkTableDescription,
    table_name: &str,
) -> Result<TableDescription> {
    let attributes = table.attribute_definitions.unwrap_or_default();
    let mut key_schema = table.key_schema.unwrap_or_default();
    key_schema.sort_by_key(|key| key.key_type != KeyType::Hash);

    let primary_key = key_schema
        .into_iter()
        .map(|key| -> Result<PrimaryKeySchema> {
            let key_type = attributes
                .iter()
                .find(|attr| attr.attribute_name == key.attribute_name)
                .map(|attr| into_key_type(&attr.attribute_type))
                .ok_or(anyhow::anyhow!(
                    "no attribute definition for key `{}`",
                    key.attribute_name
                ))??;

            Ok(PrimaryKeySchema::new(key.attribute_name, key_type))
        })
        .collect::<Result<Vec<_>>>()?;

    let stream_details = table
        .stream_specification
        .map(|spec| StreamDetails {
            enabled: spec.stream_enabled,
            stream_id: None,
            view_type: spec.stream_view_type.as_ref().and_then(StreamViewType::from_sdk),
        })
        .unwrap_or_default();

    // The stream arn outlives a disabled stream, only report it while enabled.
    let stream_details = StreamDetails {
        stream_id: table
            .latest_stream_arn
            .filter(|_| stream_details.enabled),
        ..stream_details
    };

    Ok(TableDescription {
        table_meta: TableMeta {
            table_name: table.table_name.unwrap_or_else(|| table_name.into()),
            primary_key,
        },
        stream_details,
    })
}

fn into_describe_stream_output(description: StreamDescription) -> DescribeStreamOutput {
    let shards = description
        .shards
        .unwrap_or_default()
        .into_iter()
        .filter_map(|s| {
            let parent = s.parent_shard_id;
            s.shard_id.map(|id| StreamShard::new(id.as_str(), parent))
        })
        .collect::<Vec<StreamShard>>();

    DescribeStreamOutput {
        shards,
        next_shard_id: description.last_evaluated_shard_id,
    }
}

/// First key column is the partition (HASH) key, the second one the sort (RANGE) key.
fn key_definitions(
    table_meta: &TableMeta,
) -> Result<(Vec<AttributeDefinition>, Vec<KeySchemaElement>)> {
    if table_meta.primary_key.is_empty() || table_meta.primary_key.len() > 2 {
        return Err(anyhow::anyhow!(
            "DynamoDB tables take one or two primary key columns, got {}",
            table_meta.primary_key.len()
        )
        .into());
    }

    let mut attributes: Vec<AttributeDefinition> = vec![];
    let mut key_schema: Vec<KeySchemaElement> = vec![];

    for (i, pk) in table_meta.primary_key.iter().enumerate() {
        let key_type = if i == 0 { KeyType::Hash } else { KeyType::Range };

        let attribute = AttributeDefinition::builder()
            .attribute_name(pk.name.as_str())
            .attribute_type(into_scalar_type(pk.key_type))
            .build()
            .map_err(anyhow::Error::from)?;
        let key = KeySchemaElement::builder()
            .attribute_name(pk.name.as_str())
            .key_type(key_type)
            .build()
            .map_err(anyhow::Error::from)?;

        attributes.push(attribute);
        key_schema.push(key);
    }

    Ok((attributes, key_schema))
}

fn provisioned_throughput(reserved: ReservedThroughput) -> Result<ProvisionedThroughput> {
    let throughput = ProvisionedThroughput::builder()
        .read_capacity_units(reserved.read)
        .write_capacity_units(reserved.write)
        .build()
        .map_err(anyhow::Error::from)?;

    Ok(throughput)
}

// DynamoDB expires items through a per-item attribute set up after creation.
fn stream_specification(options: &TableOptions) -> Result<Option<StreamSpecification>> {
    if let Some(time_to_live) = options.time_to_live {
        return Err(anyhow::anyhow!(
            "DynamoDB cannot set a time to live ({time_to_live:?}) when creating a table"
        )
        .into());
    }

    options
        .stream
        .map(|stream| {
            StreamSpecification::builder()
                .stream_enabled(true)
                .stream_view_type(stream.view_type.into())
                .build()
                .map_err(|err| Error::from(anyhow::Error::from(err)))
        })
        .transpose()
}

// DynamoDB keeps a single version per item, max_versions has nothing to map to.
fn scan_limit(query: &RangeQuery) -> Result<i32> {
    if !query.is_full_range() {
        return Err(anyhow::anyhow!(
            "only full-range queries are supported against DynamoDB, table `{}`",
            query.table_name
        )
        .into());
    }

    Ok(query.limit)
}

fn into_key_type(value: &ScalarAttributeType) -> Result<PrimaryKeyType> {
    match value {
        ScalarAttributeType::S => Ok(PrimaryKeyType::String),
        ScalarAttributeType::N => Ok(PrimaryKeyType::Integer),
        ScalarAttributeType::B => Ok(PrimaryKeyType::Binary),
        other => Err(anyhow::anyhow!("unsupported attribute type `{}`", other.as_str()).into()),
    }
}

fn into_scalar_type(value: PrimaryKeyType) -> ScalarAttributeType {
    match value {
        PrimaryKeyType::String => ScalarAttributeType::S,
        PrimaryKeyType::Integer => ScalarAttributeType::N,
        PrimaryKeyType::Binary => ScalarAttributeType::B,
    }
}

fn from_sdk_err<E>(err: SdkError<E>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(e) => {
            let e = e.into_err();
            let code = e.code().map(ErrorCode::from);
            let message = e.message().unwrap_or_default().to_string();

            match code {
                Some(code) => Error::Service { code, message },
                None => Error::from(anyhow::Error::from(e)),
            }
        }
        _ => Error::from(anyhow::Error::from(err)),
    }
}

// Reads against a table that is still being created come back as not found, while
// describing it succeeds. `lookup` is that describe call.
fn not_ready_on_read(err: Error, lookup: Result<()>) -> Error {
    match (err, lookup) {
        (
            Error::Service {
                code: ErrorCode::ObjectNotExist,
                message,
            },
            Ok(()),
        ) => Error::Service {
            code: ErrorCode::TableNotReady,
            message,
        },
        (_, Err(lookup_err)) => lookup_err,
        (err, Ok(())) => err,
    }
}
