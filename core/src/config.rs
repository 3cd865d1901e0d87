use std::{path::Path, time::Duration};

use anyhow::bail;
use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use serde::{Deserialize, Serialize};

use crate::util::RON;

/// Per-operation timeouts, in seconds. Unset fields fall back to 30s.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TimeoutConfig {
    pub connect_secs:           Option<u64>,
    pub operation_secs:         Option<u64>,
    pub operation_attempt_secs: Option<u64>,
    pub read_secs:              Option<u64>,
}

impl TimeoutConfig {
    pub fn to_sdk(&self) -> aws_config::timeout::TimeoutConfig {
        aws_config::timeout::TimeoutConfig::builder()
            .connect_timeout(Duration::from_secs(self.connect_secs.unwrap_or(30)))
            .operation_timeout(Duration::from_secs(self.operation_secs.unwrap_or(30)))
            .operation_attempt_timeout(Duration::from_secs(self.operation_attempt_secs.unwrap_or(30)))
            .read_timeout(Duration::from_secs(self.read_secs.unwrap_or(30)))
            .build()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AwsProviderConfig {
    pub account_id:      Option<String>,
    pub endpoint_url:    Option<String>,
    pub timeout_config:  Option<TimeoutConfig>,
    pub sts_region:      String,
    pub enabled_regions: Vec<String>,
}

impl Default for AwsProviderConfig {
    fn default() -> Self {
        Self {
            account_id:      Default::default(),
            endpoint_url:    Default::default(),
            timeout_config:  Default::default(),
            sts_region:      String::from("us-east-1"),
            enabled_regions: vec![
                "eu-west-1",
                "eu-west-2",
                "us-east-1",
                "us-east-2",
                "us-west-1",
                "us-west-2",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl AwsProviderConfig {
    pub fn try_load(prefix: &Path) -> anyhow::Result<AwsProviderConfig> {
        let config_path = prefix.join("aws/config.ron");
        if config_path.is_file() {
            tracing::info!("Loading AwsProvider config file at {:?}", config_path);
            let config: AwsProviderConfig = RON.from_str(&std::fs::read_to_string(config_path)?)?;
            Ok(config)
        } else {
            tracing::info!("AwsProvider config file at {:?} not present, skipping.", config_path);
            Ok(AwsProviderConfig::default())
        }
    }
}

pub async fn verify_sts_account_id(sts_region: String, account_id: Option<String>) -> anyhow::Result<String> {
    let sts_config = aws_config::defaults(BehaviorVersion::latest())
        .region(RegionProviderChain::first_try(Region::new(sts_region)))
        .load()
        .await;

    let sts_client = aws_sdk_sts::Client::new(&sts_config);
    let caller_identity = sts_client.get_caller_identity().send().await;

    match caller_identity {
        Ok(caller_identity) => {
            let Some(caller_account_id) = caller_identity.account else {
                bail!("Failed to get current account ID!");
            };

            if let Some(account_id) = account_id
                && caller_account_id != account_id {
                    bail!(
                        "AWS: Account ID mismatch. Configured to use account ID {account_id}, \nbut credentials provided are for account ID {caller_account_id}."
                    )
                }
            Ok(caller_account_id)
        }
        Err(e) => {
            tracing::error!("Failed to call sts:GetCallerIdentity: {}", e);
            Err(e.into())
        }
    }
}

pub trait AwsServiceConfig: From<AwsProviderConfig> {
    async fn try_load(prefix: &Path) -> anyhow::Result<Self>;
    async fn verify_sts(&self) -> anyhow::Result<String>;
}

#[macro_export]
macro_rules! impl_aws_config {
    ($type:ty, $path:expr) => {
        impl From<AwsProviderConfig> for $type {
            fn from(value: AwsProviderConfig) -> Self {
                Self {
                    account_id:      value.account_id,
                    endpoint_url:    value.endpoint_url,
                    timeout_config:  value.timeout_config,
                    sts_region:      value.sts_region,
                    enabled_regions: value.enabled_regions,
                }
            }
        }

        impl Default for $type {
            fn default() -> Self {
                Self::from(AwsProviderConfig::default())
            }
        }

        impl AwsServiceConfig for $type {
            async fn try_load(prefix: &Path) -> anyhow::Result<Self> {
                let config_path = prefix.join($path);
                if config_path.is_file() {
                    let config: $type = RON.from_str(&std::fs::read_to_string(config_path)?)?;
                    Ok(config)
                } else {
                    Ok(<$type>::from(AwsProviderConfig::try_load(prefix)?))
                }
            }

            async fn verify_sts(&self) -> anyhow::Result<String> {
                verify_sts_account_id(self.sts_region.clone(), self.account_id.clone()).await
            }
        }
    };
}
