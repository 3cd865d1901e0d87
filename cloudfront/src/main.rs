use std::path::Path;

use anyhow::bail;
use strata_provider_aws_cloudfront::DistributionLookup;
use strata_provider_aws_core::datasource::DataSource;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(distribution_id) = std::env::args().nth(1) else {
        bail!("usage: strata-provider-aws-cloudfront <distribution-id>");
    };

    let lookup = DistributionLookup::new(Path::new("."));
    lookup.init().await?;

    match lookup.read(&distribution_id).await {
        Ok(view) => {
            println!("{}", view.to_ron_string()?);
            Ok(())
        }
        Err(diag) => bail!("{diag}"),
    }
}
