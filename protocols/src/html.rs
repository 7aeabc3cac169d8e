use std::sync::OnceLock;

use regex::{Captures, Regex};

static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static ENTITY_RE: OnceLock<Regex> = OnceLock::new();

fn title_regex() -> &'static Regex {
    // An unclosed element runs to the end of the page.
    TITLE_RE.get_or_init(|| {
        Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)(?:</title\s*>|$)").expect("title pattern is valid")
    })
}

fn entity_regex() -> &'static Regex {
    ENTITY_RE.get_or_init(|| {
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("entity pattern is valid")
    })
}

/// Text of the first `<title>` element of a page, character references
/// decoded and whitespace kept as the page wrote it.
pub fn extract_title(html: &str) -> Option<String> {
    let captures = title_regex().captures(html)?;
    Some(decode_entities(captures.get(1)?.as_str()))
}

/// Decodes numeric references and the common named ones in a single pass,
/// so `&amp;lt;` becomes `&lt;`. Anything unknown is left as written.
fn decode_entities(text: &str) -> String {
    entity_regex()
        .replace_all(text, |caps: &Captures| {
            let reference = &caps[1];
            let decoded = match reference.strip_prefix('#') {
                Some(number) => numeric_reference(number),
                None => named_reference(reference),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_reference(number: &str) -> Option<char> {
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => number.parse().ok()?,
    };
    char::from_u32(code)
}

fn named_reference(name: &str) -> Option<char> {
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        _ => return None,
    };
    Some(decoded)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_title() {
        let html = "<html><head><title>Commander</title></head><title>Other</title></html>";
        assert_eq!(extract_title(html).as_deref(), Some("Commander"));
    }

    #[test]
    fn title_tag_is_case_insensitive_and_may_span_lines() {
        let html = "<HEAD>\n<TITLE lang=\"en\">\n  Beacon Service\n</TITLE>\n</HEAD>";
        assert_eq!(extract_title(html).as_deref(), Some("\n  Beacon Service\n"));
    }

    #[test]
    fn whitespace_around_the_title_is_kept() {
        assert_eq!(extract_title("<title>  Helper </title>").as_deref(), Some("  Helper "));
        assert_eq!(extract_title("<title></title>").as_deref(), Some(""));
    }

    #[test]
    fn unclosed_title_runs_to_the_end() {
        assert_eq!(extract_title("<title>Half a page").as_deref(), Some("Half a page"));
    }

    #[test]
    fn named_entities_are_decoded_once() {
        let html = "<title>Tom &amp; Jerry &lt;3 &amp;lt;</title>";
        assert_eq!(extract_title(html).as_deref(), Some("Tom & Jerry <3 &lt;"));
    }

    #[test]
    fn numeric_references_are_decoded() {
        let html = "<title>Bob&#x27;s &#8211; &#X41;PI&#39;s</title>";
        assert_eq!(extract_title(html).as_deref(), Some("Bob's \u{2013} API's"));
    }

    #[test]
    fn unknown_or_invalid_references_stay_as_written() {
        let html = "<title>&bogus; &#xD800; &#1114112; & alone</title>";
        assert_eq!(
            extract_title(html).as_deref(),
            Some("&bogus; &#xD800; &#1114112; & alone")
        );
    }

    #[test]
    fn missing_title_is_none() {
        assert_eq!(extract_title("<html><body>hi</body></html>"), None);
        assert_eq!(extract_title("<titlebar>x</titlebar>"), None);
        assert_eq!(extract_title(""), None);
    }
}
