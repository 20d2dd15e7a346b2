//! `data:` URL payload extraction
//!
//! Handles the two payload encodings seen in the wild: `;base64` and plain
//! percent-encoded bytes. No I/O involved, so the data-URI loader stays
//! non-blocking.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// A parsed `data:` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Declared MIME type, if the URL carried one
    pub mime_type: Option<String>,
    /// Decoded payload bytes
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Parse a `data:` URL, returning `None` for anything malformed
    ///
    /// Shape: `data:[<mime>][;base64],<payload>`
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let rest = url.strip_prefix("data:")?;
        let (header, payload) = rest.split_once(',')?;

        let mut base64_encoded = false;
        let mut mime_type = None;
        for (index, part) in header.split(';').enumerate() {
            if part.eq_ignore_ascii_case("base64") {
                base64_encoded = true;
            } else if index == 0 && !part.is_empty() {
                mime_type = Some(part.to_ascii_lowercase());
            }
        }

        let bytes = if base64_encoded {
            STANDARD.decode(payload.trim()).ok()?
        } else {
            urlencoding::decode_binary(payload.as_bytes()).into_owned()
        };

        if bytes.is_empty() {
            return None;
        }

        Some(Self { mime_type, bytes })
    }
}

/// Whether a candidate URL embeds its own bytes
#[inline]
#[must_use]
pub fn is_data_url(url: &str) -> bool {
    url.len() > 5 && url[..5].eq_ignore_ascii_case("data:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base64_payload() {
        let encoded = STANDARD.encode(b"icon-bytes");
        let url = format!("data:image/png;base64,{encoded}");

        let parsed = DataUrl::parse(&url).expect("valid base64 data URL should parse");
        assert_eq!(parsed.mime_type.as_deref(), Some("image/png"));
        assert_eq!(parsed.bytes, b"icon-bytes");
    }

    #[test]
    fn test_parse_percent_encoded_payload() {
        let parsed = DataUrl::parse("data:text/plain,hello%20icon")
            .expect("percent-encoded data URL should parse");
        assert_eq!(parsed.mime_type.as_deref(), Some("text/plain"));
        assert_eq!(parsed.bytes, b"hello icon");
    }

    #[test]
    fn test_parse_without_mime_type() {
        let parsed = DataUrl::parse("data:,payload").expect("mimeless data URL should parse");
        assert_eq!(parsed.mime_type, None);
        assert_eq!(parsed.bytes, b"payload");
    }

    #[test]
    fn test_rejects_malformed_urls() {
        assert_eq!(DataUrl::parse("data:image/png;base64"), None); // no comma
        assert_eq!(DataUrl::parse("https://example.com/icon.png"), None);
        assert_eq!(DataUrl::parse("data:image/png;base64,!!!"), None); // bad base64
        assert_eq!(DataUrl::parse("data:,"), None); // empty payload
    }

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url("data:image/png;base64,AAAA"));
        assert!(is_data_url("DATA:,x"));
        assert!(!is_data_url("https://example.com/"));
        assert!(!is_data_url("data:"));
    }
}
