//! Media type classification.

/// How a response body is handled, decided by its `Content-Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// JSON-bearing `application/*` types. Parsed and validated.
    Structured,
    /// `text/*`. Decoded as UTF-8 and never validated.
    Text,
    /// Everything else, including a missing header. Passed through as bytes.
    Binary,
}

impl ContentKind {
    /// Classifies a `Content-Type` header value.
    ///
    /// ## Examples
    ///
    /// ```
    /// use firefly_client::ContentKind;
    ///
    /// let kind = ContentKind::classify(Some("application/vnd.api+json"));
    /// assert_eq!(kind, ContentKind::Structured);
    /// assert_eq!(ContentKind::classify(Some("text/csv; charset=utf-8")), ContentKind::Text);
    /// assert_eq!(ContentKind::classify(Some("application/pdf")), ContentKind::Binary);
    /// assert_eq!(ContentKind::classify(None), ContentKind::Binary);
    /// ```
    pub fn classify(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return Self::Binary;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence.starts_with("application/") && essence.contains("json") {
            Self::Structured
        } else if essence.starts_with("text/") {
            Self::Text
        } else {
            Self::Binary
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Text => "text",
            Self::Binary => "binary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_variants_are_structured() {
        for media in [
            "application/json",
            "application/json; charset=utf-8",
            "application/vnd.api+json",
            "application/problem+json",
            "Application/JSON",
        ] {
            assert_eq!(
                ContentKind::classify(Some(media)),
                ContentKind::Structured,
                "{media}"
            );
        }
    }

    #[test]
    fn text_is_text() {
        assert_eq!(ContentKind::classify(Some("text/plain")), ContentKind::Text);
        assert_eq!(ContentKind::classify(Some("text/html")), ContentKind::Text);
        assert_eq!(ContentKind::classify(Some("text/json")), ContentKind::Text);
    }

    #[test]
    fn everything_else_is_binary() {
        for media in [
            "application/octet-stream",
            "application/x-www-form-urlencoded",
            "image/png",
            "",
        ] {
            assert_eq!(ContentKind::classify(Some(media)), ContentKind::Binary, "{media}");
        }
    }
}
