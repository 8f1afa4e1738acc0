//! Links back into the DNSimple app.

use std::fmt::Display;

/// Builds app URLs from a single configured base URL.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Renders `template` against the base URL.
    ///
    /// Each `{}` in the template is replaced, in order, by the next argument,
    /// percent-encoded as a path segment. Placeholders without an argument
    /// render empty; surplus arguments are ignored.
    pub fn build(&self, template: &str, args: &[&dyn Display]) -> String {
        build_url(&self.base, template, args)
    }
}

/// Joins `base` with `template`, interpolating percent-encoded `args`.
pub fn build_url(base: &str, template: &str, args: &[&dyn Display]) -> String {
    let mut url = String::with_capacity(base.len() + template.len() + 16);
    url.push_str(base.trim_end_matches('/'));

    let mut args = args.iter();
    let mut pieces = template.split("{}");
    if let Some(first) = pieces.next() {
        url.push_str(first);
    }
    for piece in pieces {
        if let Some(arg) = args.next() {
            url.push_str(&urlencoding::encode(&arg.to_string()));
        }
        url.push_str(piece);
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let urls = UrlBuilder::new("https://dnsimple.com");
        assert_eq!(
            urls.build("/a/{}/domains/{}", &[&"1010", &1]),
            "https://dnsimple.com/a/1010/domains/1"
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let urls = UrlBuilder::new("https://dnsimple.test/");
        assert_eq!(urls.base(), "https://dnsimple.test");
        assert_eq!(
            urls.build("/a/{}/account", &[&0]),
            "https://dnsimple.test/a/0/account"
        );
    }

    #[test]
    fn test_arguments_are_percent_encoded() {
        assert_eq!(
            build_url("https://dnsimple.com", "/a/{}/domains/{}", &[&7, &"a b/c?d"]),
            "https://dnsimple.com/a/7/domains/a%20b%2Fc%3Fd"
        );
        assert_eq!(
            build_url("https://dnsimple.com", "/a/{}/domains/{}", &[&7, &"example.com"]),
            "https://dnsimple.com/a/7/domains/example.com"
        );
    }

    #[test]
    fn test_missing_and_surplus_arguments() {
        assert_eq!(
            build_url("https://dnsimple.com", "/a/{}/domains/{}", &[&7]),
            "https://dnsimple.com/a/7/domains/"
        );
        assert_eq!(
            build_url("https://dnsimple.com", "/a/{}", &[&7, &8]),
            "https://dnsimple.com/a/7"
        );
    }
}
