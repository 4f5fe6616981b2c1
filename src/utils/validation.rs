use crate::utils::error::{AggError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn config_error(field: &str, value: &str, reason: impl Into<String>) -> AggError {
    AggError::Config {
        message: format!("{field} = {value:?}: {}", reason.into()),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(config_error(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(config_error(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(config_error(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_keyword(field_name: &str, keyword: &str) -> Result<()> {
    if keyword.trim().is_empty() {
        return Err(config_error(
            field_name,
            keyword,
            "Search keyword cannot be empty",
        ));
    }
    if !keyword.chars().any(|c| c.is_alphanumeric()) {
        return Err(config_error(
            field_name,
            keyword,
            "Search keyword must contain at least one alphanumeric character",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min: u32) -> Result<()> {
    if value < min {
        return Err(config_error(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min),
        ));
    }
    Ok(())
}
