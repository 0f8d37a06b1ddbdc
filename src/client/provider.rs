use super::{Client, DynamodbClient};
use crate::{Config, Result};

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Something that can hand out a client handle.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    async fn client(&self) -> Result<Arc<dyn Client>>;
}

/// An already built handle is handed out as is.
#[async_trait]
impl ClientProvider for Arc<dyn Client> {
    async fn client(&self) -> Result<Arc<dyn Client>> {
        Ok(Arc::clone(self))
    }
}

#[async_trait]
impl ClientProvider for Config {
    async fn client(&self) -> Result<Arc<dyn Client>> {
        debug!(
            "building client (endpoint: {:?}, instance: {:?})",
            self.endpoint_url(),
            self.instance_name()
        );
        let client = DynamodbClient::builder(self).await.build();
        Ok(Arc::new(client))
    }
}

pub async fn get_client(provider: &dyn ClientProvider) -> Result<Arc<dyn Client>> {
    provider.client().await
}
