use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_provider_aws_core::{
    config::{AwsProviderConfig, AwsServiceConfig, TimeoutConfig, verify_sts_account_id},
    impl_aws_config,
    util::RON,
};

#[derive(Serialize, Deserialize, Debug)]
pub struct CloudFrontProviderConfig {
    pub account_id:      Option<String>,
    pub endpoint_url:    Option<String>,
    pub timeout_config:  Option<TimeoutConfig>,
    pub sts_region:      String,
    pub enabled_regions: Vec<String>,
}

impl_aws_config!(CloudFrontProviderConfig, "aws/cloudfront/config.ron");
