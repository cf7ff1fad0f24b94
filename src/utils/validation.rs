use crate::domain::model::IdSelector;
use crate::utils::error::{ClientError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Structural check applied to every selector before it is posted.
///
/// Kind and scope are enums and therefore valid by construction; the only
/// thing the wire shape cannot enforce is a sensible entity id.
pub fn check_is_id_selector(selector: &IdSelector) -> Result<()> {
    if selector.entity_reference.id <= 0 {
        return Err(ClientError::ValidationError {
            field: "entity_reference.id".to_string(),
            value: selector.entity_reference.id.to_string(),
            reason: "Entity id must be positive".to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClientError::ValidationError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::ValidationError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClientError::ValidationError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}
