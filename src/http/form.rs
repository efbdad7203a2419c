//! Form and query string decoding module
//!
//! Parses `application/x-www-form-urlencoded` payloads: `key=value`
//! pairs joined by `&`, percent-encoded octets, and `+` as space.
//! Malformed escapes are passed through literally rather than rejected,
//! matching what browsers actually send.

use std::collections::HashMap;

/// Parse an urlencoded body or query string into a key/value map
///
/// Later duplicates of a key overwrite earlier ones. Pairs without `=`
/// are kept with an empty value.
pub fn parse(input: &str) -> HashMap<String, String> {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Decode a single urlencoded component
///
/// `+` becomes space, `%XX` becomes the octet it names. A `%` not
/// followed by two hex digits is kept as-is.
pub fn decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (hex_value(bytes.get(i + 1)), hex_value(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: Option<&u8>) -> Option<u8> {
    match byte.copied() {
        Some(b @ b'0'..=b'9') => Some(b - b'0'),
        Some(b @ b'a'..=b'f') => Some(b - b'a' + 10),
        Some(b @ b'A'..=b'F') => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_form() {
        let form = parse("username=admin&password=Harbor12345&redirect_url=%2Fprojects");
        assert_eq!(form.get("username").map(String::as_str), Some("admin"));
        assert_eq!(
            form.get("password").map(String::as_str),
            Some("Harbor12345")
        );
        assert_eq!(
            form.get("redirect_url").map(String::as_str),
            Some("/projects")
        );
    }

    #[test]
    fn test_plus_decodes_to_space() {
        assert_eq!(decode_component("hello+world"), "hello world");
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(decode_component("a%26b%3Dc"), "a&b=c");
        assert_eq!(decode_component("%2F"), "/");
    }

    #[test]
    fn test_malformed_escape_passes_through() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }

    #[test]
    fn test_pair_without_value() {
        let form = parse("remember&username=admin");
        assert_eq!(form.get("remember").map(String::as_str), Some(""));
        assert_eq!(form.get("username").map(String::as_str), Some("admin"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }
}
