//! Read-only lookup of existing CloudFront distributions for the Strata
//! provider: one "describe by id" call, one "list tags by ARN" call, and a
//! field-by-field projection onto a flat view.

pub mod client;
pub mod config;
pub mod connector;
pub mod error;
pub mod resource;
pub mod tags;
pub mod util;

pub use connector::DistributionLookup;
pub use resource::DistributionView;
