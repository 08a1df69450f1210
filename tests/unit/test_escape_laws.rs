use amender::core::catalog::{escape_html, escape_uri, unescape_html, unescape_uri};
use proptest::prelude::*;

fn printable_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![9 => proptest::char::range(' ', '~'), 1 => Just('\n')],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn html_unescape_inverts_escape(text in printable_text()) {
        prop_assert_eq!(unescape_html(&escape_html(&text)), text);
    }

    #[test]
    fn uri_decode_inverts_encode(text in printable_text()) {
        prop_assert_eq!(unescape_uri(&escape_uri(&text)), text);
    }

    #[test]
    fn html_escape_leaves_no_raw_metacharacters(text in printable_text()) {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn html_escape_keeps_line_count(text in printable_text()) {
        prop_assert_eq!(escape_html(&text).split('\n').count(), text.split('\n').count());
    }

    #[test]
    fn uri_encode_output_is_ascii(text in "\\PC{0,32}") {
        prop_assert!(escape_uri(&text).is_ascii());
        prop_assert_eq!(unescape_uri(&escape_uri(&text)), text);
    }
}

#[test]
fn test_reserved_characters_survive_encoding() {
    let url = "https://example.com/a b?q=1&r=ü#top";
    assert_eq!(escape_uri(url), "https://example.com/a%20b?q=1&r=%C3%BC#top");
}
