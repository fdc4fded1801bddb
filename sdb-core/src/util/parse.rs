use crate::entities::Url;

// Empty and blank form parameters are treated as absent.
pub fn parse_url_param(param: &str) -> Result<Option<Url>, url::ParseError> {
    let trimmed = param.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Url::parse(trimmed).map(Some)
    }
}

pub fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
