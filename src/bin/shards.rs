use std::env;
use std::process;
use stream_table::{get_client, get_ordered_shard_list, get_stream_details, Config};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let table = env::args().nth(1).unwrap_or_else(|| {
        error!("usage: shards <table>");
        process::exit(2);
    });

    let config = Config::new();
    let client = match get_client(&config).await {
        Ok(client) => client,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };

    let details = match get_stream_details(client.as_ref(), &table).await {
        Ok(details) => details,
        Err(err) => {
            error!("{:#?}", err);
            process::exit(1);
        }
    };
    info!("{:?}", details);

    let Some(stream_id) = details.stream_id else {
        error!("table {table} has no enabled stream");
        process::exit(1);
    };

    match get_ordered_shard_list(client.as_ref(), &stream_id).await {
        Ok(shards) => {
            for shard in shards {
                info!(
                    "shard: {} (parent: {})",
                    shard.id(),
                    shard.parent().unwrap_or("-")
                );
            }
        }
        Err(err) => {
            error!("{:#?}", err);
            process::exit(1);
        }
    }
}
