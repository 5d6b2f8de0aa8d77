/// Build an absolute URL from a base URL and a path
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("mailto:") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return format!("{}/", base);
    }
    format!("{}/{}", base, trimmed)
}

/// Directory-style path of a generated page: `["changelog", "2"]` -> `/changelog/2/`.
pub fn page_path(segments: &[&str]) -> String {
    let mut out = String::from("/");
    for seg in segments.iter().map(|s| s.trim_matches('/')).filter(|s| !s.is_empty()) {
        out.push_str(seg);
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("https://example.com", "/pricing/"), "https://example.com/pricing/");
        assert_eq!(absolute_url("https://example.com/", "pricing/"), "https://example.com/pricing/");
        assert_eq!(absolute_url("https://example.com", "/"), "https://example.com/");
        assert_eq!(absolute_url("https://example.com", "https://other.io/x"), "https://other.io/x");
    }

    #[test]
    fn test_page_path() {
        assert_eq!(page_path(&[]), "/");
        assert_eq!(page_path(&["changelog", "2"]), "/changelog/2/");
        assert_eq!(page_path(&["/cms/", "jekyll"]), "/cms/jekyll/");
    }
}
