use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use strata_provider_aws_core::{
    config::AwsServiceConfig,
    datasource::{DataSource, Diagnostic, Schema},
};
use tokio::sync::{Mutex, RwLock};

use crate::{
    config::CloudFrontProviderConfig,
    resource::{DistributionView, distribution_schema},
};

pub mod read;

/// Read-only lookup of existing CloudFront distributions. One instance per
/// provider prefix; concurrent reads share nothing but the cached client.
#[derive(Default)]
pub struct DistributionLookup {
    client: Mutex<Option<Arc<aws_sdk_cloudfront::Client>>>,
    config: RwLock<CloudFrontProviderConfig>,
    prefix: PathBuf,
}

impl DistributionLookup {
    pub fn new(prefix: &Path) -> Self {
        DistributionLookup {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// CloudFront is a global service: one client per lookup, built on first
    /// use from the loaded provider config.
    pub async fn get_or_init_client(&self) -> anyhow::Result<Arc<aws_sdk_cloudfront::Client>> {
        let mut client = self.client.lock().await;

        if client.is_none() {
            let config = self.config.read().await;
            let region = RegionProviderChain::first_try(Region::new(config.sts_region.clone()));

            let mut loader = aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .timeout_config(config.timeout_config.clone().unwrap_or_default().to_sdk());
            if let Some(endpoint_url) = &config.endpoint_url {
                loader = loader.endpoint_url(endpoint_url);
            }

            let sdk_config = loader.load().await;
            *client = Some(Arc::new(aws_sdk_cloudfront::Client::new(&sdk_config)));
        }

        match client.as_ref() {
            Some(client) => Ok(client.clone()),
            None => anyhow::bail!("Failed to initialize CloudFront client"),
        }
    }
}

#[async_trait]
impl DataSource for DistributionLookup {
    type View = DistributionView;

    fn schema(&self) -> Schema {
        distribution_schema()
    }

    async fn init(&self) -> anyhow::Result<()> {
        let config = CloudFrontProviderConfig::try_load(&self.prefix).await?;

        let account_id = config.verify_sts().await?;
        tracing::info!("CloudFront distribution lookup ready for account {}", account_id);

        *self.client.lock().await = None;
        *self.config.write().await = config;
        Ok(())
    }

    async fn read(&self, id: &str) -> Result<DistributionView, Diagnostic> {
        self.do_read(id)
            .await
            .map_err(|err| Diagnostic::error(format!("{err:#}")))
    }
}
