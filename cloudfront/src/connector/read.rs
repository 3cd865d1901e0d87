use std::collections::BTreeSet;

use crate::{client::DistributionApi, error::ReadError, resource::DistributionView, util::distribution_hosted_zone_id};

use super::DistributionLookup;

impl DistributionLookup {
    pub async fn do_read(&self, id: &str) -> anyhow::Result<DistributionView> {
        let client = self.get_or_init_client().await?;
        let region = self.config.read().await.sts_region.clone();

        let view = read_distribution(client.as_ref(), distribution_hosted_zone_id(&region), id).await?;
        Ok(view)
    }
}

/// Projects one describe response and its tag set onto the output view.
/// Exactly one describe call and one tag-fetch call per invocation.
pub async fn read_distribution(
    api: &dyn DistributionApi,
    hosted_zone_id: &str,
    id: &str,
) -> Result<DistributionView, ReadError> {
    let output = api
        .describe_distribution(id)
        .await
        .map_err(|source| ReadError::Describe { id: id.to_owned(), source })?;

    let etag = output.e_tag.unwrap_or_default();
    let Some(distribution) = output.distribution else {
        return Err(ReadError::MissingDistribution { id: id.to_owned() });
    };
    let Some(config) = distribution.distribution_config else {
        return Err(ReadError::MissingDistribution { id: id.to_owned() });
    };

    let tags = api.list_tags(&distribution.arn).await.map_err(|source| ReadError::TagFetch {
        arn: distribution.arn.clone(),
        source,
    })?;

    // An absent alias block stays unset; an empty items list is an empty set.
    let aliases: Option<BTreeSet<String>> = config
        .aliases
        .and_then(|aliases| aliases.items)
        .map(|items| items.into_iter().collect());

    Ok(DistributionView {
        id: distribution.id,
        aliases,
        arn: distribution.arn,
        domain_name: distribution.domain_name,
        enabled: config.enabled,
        etag,
        hosted_zone_id: hosted_zone_id.to_owned(),
        in_progress_validation_batches: distribution.in_progress_invalidation_batches,
        last_modified_time: distribution.last_modified_time.to_string(),
        status: distribution.status,
        web_acl_id: config.web_acl_id.unwrap_or_default(),
        tags,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use async_trait::async_trait;
    use aws_sdk_cloudfront::{
        operation::get_distribution::GetDistributionOutput,
        types::{Aliases, Distribution, DistributionConfig},
    };
    use aws_smithy_types::DateTime;

    use super::read_distribution;
    use crate::{
        client::DistributionApi,
        error::{LookupError, ReadError},
        tags::Tags,
    };

    const HOSTED_ZONE_ID: &str = "Z2FDTNDATAQYW2";
    const ARN: &str = "arn:aws:cloudfront::123456789012:distribution/E123";

    fn deployed_distribution(aliases: Option<Vec<&str>>) -> GetDistributionOutput {
        let mut config = DistributionConfig::builder()
            .caller_reference("distribution-lookup-test")
            .comment("")
            .enabled(true)
            .web_acl_id("");
        if let Some(aliases) = aliases {
            config = config.aliases(
                Aliases::builder()
                    .quantity(aliases.len() as i32)
                    .set_items(Some(aliases.iter().map(|a| a.to_string()).collect()))
                    .build()
                    .unwrap(),
            );
        }

        let distribution = Distribution::builder()
            .id("E123")
            .arn(ARN)
            .status("Deployed")
            .last_modified_time(DateTime::from_secs(1_700_000_000))
            .in_progress_invalidation_batches(0)
            .domain_name("d123.cloudfront.net")
            .distribution_config(config.build().unwrap())
            .build()
            .unwrap();

        GetDistributionOutput::builder()
            .distribution(distribution)
            .e_tag("E2QWRUHAPOMQZL")
            .build()
    }

    struct FakeApi {
        output:    GetDistributionOutput,
        tags:      Tags,
        fail_tags: bool,
    }

    #[async_trait]
    impl DistributionApi for FakeApi {
        async fn describe_distribution(&self, _id: &str) -> Result<GetDistributionOutput, LookupError> {
            Ok(self.output.clone())
        }

        async fn list_tags(&self, arn: &str) -> Result<Tags, LookupError> {
            assert_eq!(arn, ARN, "tag fetch must be keyed by the distribution ARN");
            if self.fail_tags {
                Err(LookupError::Api("throttled".into()))
            } else {
                Ok(self.tags.clone())
            }
        }
    }

    struct NotFoundApi;

    #[async_trait]
    impl DistributionApi for NotFoundApi {
        async fn describe_distribution(&self, _id: &str) -> Result<GetDistributionOutput, LookupError> {
            Err(LookupError::NotFound)
        }

        async fn list_tags(&self, _arn: &str) -> Result<Tags, LookupError> {
            Ok(Tags::new())
        }
    }

    #[tokio::test]
    async fn read_projects_the_remote_record() {
        let api = FakeApi {
            output:    deployed_distribution(Some(vec!["a.example.com", "b.example.com"])),
            tags:      Tags::from([(String::from("Environment"), String::from("production"))]),
            fail_tags: false,
        };

        let view = read_distribution(&api, HOSTED_ZONE_ID, "E123").await.unwrap();

        assert_eq!(view.id, "E123");
        assert_eq!(view.arn, ARN);
        assert_eq!(view.domain_name, "d123.cloudfront.net");
        assert!(view.enabled);
        assert_eq!(view.etag, "E2QWRUHAPOMQZL");
        assert_eq!(view.hosted_zone_id, HOSTED_ZONE_ID);
        assert_eq!(view.in_progress_validation_batches, 0);
        assert_eq!(view.last_modified_time, DateTime::from_secs(1_700_000_000).to_string());
        assert_eq!(view.status, "Deployed");
        assert_eq!(view.web_acl_id, "");
        assert_eq!(
            view.aliases,
            Some(BTreeSet::from([
                String::from("a.example.com"),
                String::from("b.example.com")
            ]))
        );
        assert_eq!(view.tags.get("Environment").map(String::as_str), Some("production"));
    }

    #[tokio::test]
    async fn absent_aliases_stay_unset() {
        let api = FakeApi {
            output:    deployed_distribution(None),
            tags:      Tags::new(),
            fail_tags: false,
        };

        let view = read_distribution(&api, HOSTED_ZONE_ID, "E123").await.unwrap();

        assert!(view.aliases.is_none());
    }

    #[tokio::test]
    async fn empty_alias_list_is_an_empty_set() {
        let api = FakeApi {
            output:    deployed_distribution(Some(vec![])),
            tags:      Tags::new(),
            fail_tags: false,
        };

        let view = read_distribution(&api, HOSTED_ZONE_ID, "E123").await.unwrap();

        assert_eq!(view.aliases, Some(BTreeSet::new()));
    }

    #[tokio::test]
    async fn view_carries_the_canonical_id() {
        let api = FakeApi {
            output:    deployed_distribution(None),
            tags:      Tags::new(),
            fail_tags: false,
        };

        let view = read_distribution(&api, HOSTED_ZONE_ID, "e123").await.unwrap();

        assert_eq!(view.id, "E123");
    }

    #[tokio::test]
    async fn repeated_reads_return_identical_views() {
        let api = FakeApi {
            output:    deployed_distribution(Some(vec!["a.example.com"])),
            tags:      Tags::from([(String::from("Team"), String::from("edge"))]),
            fail_tags: false,
        };

        let first = read_distribution(&api, HOSTED_ZONE_ID, "E123").await.unwrap();
        let second = read_distribution(&api, HOSTED_ZONE_ID, "E123").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_distribution_is_terminal_and_names_the_id() {
        let err = read_distribution(&NotFoundApi, HOSTED_ZONE_ID, "E404").await.unwrap_err();

        assert!(matches!(err, ReadError::Describe { .. }));
        let rendered = format!("{:#}", anyhow::Error::from(err));
        assert!(rendered.contains("E404"));
        assert_eq!(rendered, "reading Distribution (E404): distribution not found");
    }

    #[tokio::test]
    async fn tag_fetch_failure_is_a_distinct_error() {
        let api = FakeApi {
            output:    deployed_distribution(None),
            tags:      Tags::new(),
            fail_tags: true,
        };

        let err = read_distribution(&api, HOSTED_ZONE_ID, "E123").await.unwrap_err();

        assert!(matches!(err, ReadError::TagFetch { .. }));
        assert!(err.to_string().contains(ARN));
    }

    #[tokio::test]
    async fn empty_describe_response_is_an_error() {
        struct EmptyApi;

        #[async_trait]
        impl DistributionApi for EmptyApi {
            async fn describe_distribution(&self, _id: &str) -> Result<GetDistributionOutput, LookupError> {
                Ok(GetDistributionOutput::builder().build())
            }

            async fn list_tags(&self, _arn: &str) -> Result<Tags, LookupError> {
                Ok(Tags::new())
            }
        }

        let err = read_distribution(&EmptyApi, HOSTED_ZONE_ID, "E123").await.unwrap_err();

        assert!(matches!(err, ReadError::MissingDistribution { .. }));
        assert!(err.to_string().contains("E123"));
    }
}
