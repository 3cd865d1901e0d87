use std::collections::BTreeSet;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use strata_provider_aws_core::{
    datasource::{AttrMode, AttrType, Schema},
    util::RON,
};

use crate::tags::Tags;

/// Read-only projection of a CloudFront distribution. Rebuilt whole on every
/// read, never partially updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionView {
    /// Canonical distribution id as returned by the API. May differ in form
    /// from the id the lookup was invoked with.
    pub id: String,
    /// Alternate domain names (CNAMEs). Stays unset when the remote config
    /// carries no alias block, as opposed to an empty configured set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BTreeSet<String>>,
    pub arn: String,
    /// Domain name CloudFront assigned to the distribution.
    pub domain_name: String,
    pub enabled: bool,
    /// Opaque version token, used by the API for optimistic concurrency.
    pub etag: String,
    /// Route53 hosted zone id of the CloudFront edge network. Constant per
    /// partition; not part of the API response.
    pub hosted_zone_id: String,
    pub in_progress_validation_batches: i32,
    /// Last modification timestamp in its canonical string form.
    pub last_modified_time: String,
    pub status: String,
    /// Id of the attached web ACL; empty when none is attached.
    pub web_acl_id: String,
    pub tags: Tags,
}

impl DistributionView {
    pub fn to_ron_string(&self) -> anyhow::Result<String> {
        let pretty_config = PrettyConfig::default().struct_names(true);
        Ok(RON.to_string_pretty(self, pretty_config)?)
    }
}

/// Attribute schema for the distribution data source: `id` is the lookup
/// key, everything else is computed from the remote record.
pub fn distribution_schema() -> Schema {
    Schema::default()
        .attr("id", AttrType::String, AttrMode::Required)
        .attr("aliases", AttrType::StringSet, AttrMode::Computed)
        .attr("arn", AttrType::String, AttrMode::Computed)
        .attr("domain_name", AttrType::String, AttrMode::Computed)
        .attr("enabled", AttrType::Bool, AttrMode::Computed)
        .attr("etag", AttrType::String, AttrMode::Computed)
        .attr("hosted_zone_id", AttrType::String, AttrMode::Computed)
        .attr("in_progress_validation_batches", AttrType::Int, AttrMode::Computed)
        .attr("last_modified_time", AttrType::String, AttrMode::Computed)
        .attr("status", AttrType::String, AttrMode::Computed)
        .attr("web_acl_id", AttrType::String, AttrMode::Computed)
        .attr("tags", AttrType::StringMap, AttrMode::Computed)
}
