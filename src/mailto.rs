/// Contact form mail composition
///
/// The contact form does not send anything itself: it builds a
/// pre-filled `mailto:` URL and hands it to the system mail client.
/// The pack carries no URL crate, so the component encoder lives here.

/// Recipient used when the contact list has no `email` entry.
pub const FALLBACK_RECIPIENT: &str = "you@example.com";

/// Build the `mailto:` URL for a filled-in contact form.
pub fn compose(to: &str, name: &str, email: &str, message: &str) -> String {
    let subject = format!("[Portfolio] {name} would like to get in touch");
    let body = format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}\n");
    format!(
        "mailto:{to}?subject={}&body={}",
        encode_component(&subject),
        encode_component(&body)
    )
}

/// Percent-encode a mailto query component: RFC 3986 unreserved bytes
/// pass through, everything else (spaces, newlines, UTF-8 continuation
/// bytes) becomes `%XX`.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_spaces_and_newlines() {
        assert_eq!(encode_component("a b\nc"), "a%20b%0Ac");
    }

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode_component("Ada-99_ok.~"), "Ada-99_ok.~");
    }

    #[test]
    fn test_encode_utf8_bytewise() {
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_compose_shape() {
        let url = compose("ada@example.com", "Grace", "grace@host", "Hello there");
        assert!(url.starts_with("mailto:ada@example.com?subject="));
        assert!(url.contains("%5BPortfolio%5D%20Grace"));
        assert!(url.contains("&body=Name%3A%20Grace%0A"));
        assert!(url.contains("Hello%20there"));
        // No raw separators may survive in the query components.
        let query = url.split_once('?').unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
    }
}
