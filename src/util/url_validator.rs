use url::Url;

/// Validate an entry link before handing it to the system browser.
///
/// Only the scheme matters here: `open::that` with a `file:` or custom
/// scheme could launch arbitrary handlers.
pub fn validate_url_for_open(url_str: &str) -> Result<Url, String> {
    let url = Url::parse(url_str).map_err(|e| format!("Refusing to open link: {}", e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!(
            "Refusing to open link: unsupported scheme '{}'",
            scheme
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_allows_only_http() {
        assert!(validate_url_for_open("https://example.com/post").is_ok());
        assert!(validate_url_for_open("http://localhost:8000/post").is_ok());
        assert!(validate_url_for_open("javascript:alert(1)").is_err());
        assert!(validate_url_for_open("file:///tmp/x").is_err());
        assert!(validate_url_for_open("htttp://thisistest.com/").is_err());
    }

    #[test]
    fn test_unparsable_link_rejected() {
        let err = validate_url_for_open("not a url").unwrap_err();
        assert!(err.starts_with("Refusing to open link"));
    }
}
