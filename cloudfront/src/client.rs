use async_trait::async_trait;
use aws_sdk_cloudfront::operation::get_distribution::GetDistributionOutput;

use crate::{
    error::LookupError,
    tags::{self, Tags},
};

/// The two CloudFront operations a distribution read consumes. Implemented
/// by the SDK client in production and by in-memory fakes in tests.
#[async_trait]
pub trait DistributionApi: Send + Sync {
    async fn describe_distribution(&self, id: &str) -> Result<GetDistributionOutput, LookupError>;

    async fn list_tags(&self, arn: &str) -> Result<Tags, LookupError>;
}

#[async_trait]
impl DistributionApi for aws_sdk_cloudfront::Client {
    async fn describe_distribution(&self, id: &str) -> Result<GetDistributionOutput, LookupError> {
        self.get_distribution().id(id).send().await.map_err(|err| {
            if err.as_service_error().is_some_and(|err| err.is_no_such_distribution()) {
                LookupError::NotFound
            } else {
                LookupError::api(err)
            }
        })
    }

    async fn list_tags(&self, arn: &str) -> Result<Tags, LookupError> {
        let tag_list = self
            .list_tags_for_resource()
            .resource(arn)
            .send()
            .await
            .map_err(LookupError::api)?;

        Ok(tags::from_tag_items(tag_list.tags))
    }
}
