use std::collections::HashMap;

pub type Tags = HashMap<String, String>;

/// Flattens the API's tag list shape into a plain string map. Tags without a
/// value are skipped.
pub fn from_tag_items(tags: Option<aws_sdk_cloudfront::types::Tags>) -> Tags {
    let mut out = Tags::new();
    if let Some(items) = tags.and_then(|t| t.items) {
        for tag in items {
            if let Some(value) = tag.value {
                out.insert(tag.key, value);
            }
        }
    }
    out
}
