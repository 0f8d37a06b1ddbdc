use std::env;
use std::process;
use std::time::Duration;
use stream_table::{
    check_table_exists, create_table, get_client,
    types::{PrimaryKeyType, StreamViewType, TableMeta, TableOptions},
    wait_until_table_ready, Config,
};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

const MAX_WAIT: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut args = env::args().skip(1);
    let table = args.next().unwrap_or_else(|| {
        error!("usage: create_table <table> [primary key...]");
        process::exit(2);
    });
    let mut keys: Vec<String> = args.collect();
    if keys.is_empty() {
        keys.push("Id".into());
    }

    let meta = keys
        .into_iter()
        .fold(TableMeta::new(table.as_str()), |meta, key| {
            meta.add_primary_key(key, PrimaryKeyType::String)
        });

    let config = Config::new();
    let client = match get_client(&config).await {
        Ok(client) => client,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };

    match check_table_exists(client.as_ref(), &table).await {
        Ok(true) => info!("table {table} already exists"),
        Ok(false) => {
            let options = TableOptions::with_stream(StreamViewType::NewImage);
            if let Err(err) = create_table(client.as_ref(), meta, options).await {
                error!("{:#?}", err);
                process::exit(1);
            }
        }
        Err(err) => {
            error!("{:#?}", err);
            process::exit(1);
        }
    }

    match wait_until_table_ready(client.as_ref(), &table, MAX_WAIT).await {
        Ok(true) => {}
        Ok(false) => {
            error!("table {table} did not become ready within {MAX_WAIT:?}");
            process::exit(1);
        }
        Err(err) => {
            error!("{:#?}", err);
            process::exit(1);
        }
    }
}
