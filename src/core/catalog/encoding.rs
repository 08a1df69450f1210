use crate::core::transform::Transform;
use crate::core::types::Category;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Captures;

/// Characters `encodeURI` leaves untouched besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

const NBSP_ENTITY: &str = "&nbsp;";

pub(super) fn definitions() -> Vec<Transform> {
    vec![
        Transform::new("URL Encode", "url-encode", Category::Encoding, escape_uri)
            .describe("Percent-encodes text the way encodeURI does; URI delimiters are kept")
            .input_label("Text"),
        Transform::new("URL Decode", "url-decode", Category::Encoding, unescape_uri)
            .describe("Decodes percent escapes; malformed escapes or invalid UTF-8 are reported")
            .input_label("Encoded URL"),
        Transform::new("HTML Escape", "html-escape", Category::Encoding, escape_html)
            .describe(
                "Replaces & < > \" ' with entities. Leading and trailing spaces of every line \
                 become &nbsp; so they survive rendering.",
            )
            .input_label("Text"),
        Transform::new("HTML Unescape", "html-unescape", Category::Encoding, unescape_html)
            .describe("Decodes named (amp, lt, gt, quot, apos, nbsp) and numeric HTML entities")
            .input_label("HTML"),
    ]
}

/// Percent-encode everything outside the `encodeURI` safe set.
pub fn escape_uri(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Decode every `%XX` escape. The result is a diagnostic when an escape is
/// truncated or not hexadecimal, or when the decoded bytes are not UTF-8.
pub fn unescape_uri(text: &str) -> String {
    let bytes = text.as_bytes();
    for (offset, byte) in bytes.iter().enumerate() {
        if *byte != b'%' {
            continue;
        }
        let well_formed = bytes
            .get(offset + 1..offset + 3)
            .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return format!("Invalid input: malformed percent escape at offset {}", offset);
        }
    }
    match percent_decode_str(text).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => "Invalid input: decoded bytes are not valid UTF-8".to_string(),
    }
}

fn escape_html_char(ch: char, out: &mut String) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        other => out.push(other),
    }
}

fn escape_html_line(line: &str) -> String {
    let body = line.trim_matches(' ');
    if body.is_empty() {
        return NBSP_ENTITY.repeat(line.len());
    }
    let leading = line.len() - line.trim_start_matches(' ').len();
    let trailing = line.len() - line.trim_end_matches(' ').len();
    let mut out = NBSP_ENTITY.repeat(leading);
    for ch in body.chars() {
        escape_html_char(ch, &mut out);
    }
    out.push_str(&NBSP_ENTITY.repeat(trailing));
    out
}

/// Entity-encode HTML metacharacters, line by line.
pub fn escape_html(text: &str) -> String {
    text.split('\n')
        .map(escape_html_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single pass entity decoder. Unknown or out-of-range entities are kept
/// verbatim.
pub fn unescape_html(text: &str) -> String {
    static_regex!(r"&(#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z]+);")
        .replace_all(text, |caps: &Captures<'_>| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                numeric if numeric.starts_with("#x") || numeric.starts_with("#X") => {
                    u32::from_str_radix(&numeric[2..], 16)
                        .ok()
                        .and_then(char::from_u32)
                }
                numeric if numeric.starts_with('#') => {
                    numeric[1..].parse::<u32>().ok().and_then(char::from_u32)
                }
                _ => None,
            };
            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
