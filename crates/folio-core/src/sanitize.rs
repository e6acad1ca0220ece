//! Best-effort stripping of script blocks and inline event handlers.
//!
//! This is client-side hygiene only. Anything that reaches a server must be
//! encoded or sanitized there again; nothing here is an XSS boundary.

use once_cell::sync::Lazy;
use regex::Regex;

// `<script ...>` through the nearest `</script>`, across newlines
static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

// on<word>="..." attributes; `\w` kept ASCII
static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)on[0-9A-Za-z_]+="[^"]*""#).unwrap());

/// Strips script blocks and `on*="..."` attributes, then trims.
///
/// Removal repeats until neither pattern matches, so a removal that splices
/// a new `<script>` block together is caught as well and
/// `sanitize(&sanitize(s)) == sanitize(s)` holds for every input.
pub fn sanitize(raw: &str) -> String {
    let mut current = raw.to_string();
    while let Some(next) = strip_once(&current) {
        current = next;
    }
    trim(&current).to_string()
}

/// Trim the way browsers do: Unicode whitespace plus the byte-order mark
pub fn trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn strip_once(value: &str) -> Option<String> {
    if !SCRIPT_BLOCK.is_match(value) && !EVENT_HANDLER.is_match(value) {
        return None;
    }
    let without_scripts = SCRIPT_BLOCK.replace_all(value, "");
    Some(EVENT_HANDLER.replace_all(&without_scripts, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_plain_text_is_only_trimmed() {
        assert_eq!(sanitize("  Ada Lovelace \n"), "Ada Lovelace");
        assert_eq!(sanitize("hello"), "hello");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_script_blocks_removed() {
        assert_eq!(sanitize("hi <script>alert(1)</script> there"), "hi  there");
        assert_eq!(
            sanitize("a<SCRIPT type=\"text/javascript\">\nevil()\n</ScRiPt>b"),
            "ab"
        );
    }

    #[test]
    fn test_script_removal_is_lazy() {
        // Text between two separate blocks survives.
        assert_eq!(
            sanitize("<script>x</script>keep<script>y</script>"),
            "keep"
        );
    }

    #[test]
    fn test_unclosed_script_is_left_alone() {
        assert_eq!(sanitize("<script>never closed"), "<script>never closed");
    }

    #[test]
    fn test_event_handlers_removed() {
        assert_eq!(
            sanitize(r#"<img src="x" onerror="steal()">"#),
            r#"<img src="x" >"#
        );
        assert_eq!(sanitize(r#"<b OnClick="go()">hi</b>"#), "<b >hi</b>");
    }

    #[test]
    fn test_unquoted_handler_is_not_matched() {
        assert_eq!(sanitize("onclick=go()"), "onclick=go()");
    }

    #[test]
    fn test_spliced_script_block_is_caught() {
        let raw = "<scr<script>x</script>ipt>alert(1)</script>done";
        assert_eq!(sanitize(raw), "done");
        let raw = r#"<scrionx="1"pt>bad()</script>ok"#;
        assert_eq!(sanitize(raw), "ok");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(sanitize("\u{FEFF}Ada Lovelace"), "Ada Lovelace");
        assert_eq!(sanitize(" \u{FEFF}hi\u{FEFF}\n"), "hi");
        assert_eq!(trim("\u{FEFF}"), "");
    }

    proptest! {
        #[test]
        fn prop_sanitize_is_idempotent(s in r#"(<script>|</script>|<scr|ipt>|on[a-z]{1,3}="[a-z ]{0,4}"|[a-z <>="]{0,6}|\s){0,12}"#) {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn prop_markup_free_text_only_trimmed(s in "[a-zA-Z0-9 .,'!?-]{0,40}") {
            prop_assert_eq!(sanitize(&s), s.trim());
        }

        #[test]
        fn prop_kept_segments_stay_in_order(
            parts in proptest::collection::vec(
                ("[a-z0-9 .,!?]{0,8}", prop_oneof![
                    Just("<script>alert(1)</script>".to_string()),
                    Just("<SCRIPT src=\"x\">\nsteal()\n</script>".to_string()),
                    "on[a-z]{1,6}=\"[a-z() ]{0,6}\"",
                ]),
                0..6,
            ),
            tail in "[a-z0-9 .,!?]{0,8}",
        ) {
            let mut raw = String::new();
            let mut kept = String::new();
            // A space keeps text letters from running into an `on...` attribute
            for (text, markup) in &parts {
                raw.push_str(text);
                raw.push(' ');
                raw.push_str(markup);
                kept.push_str(text);
                kept.push(' ');
            }
            raw.push_str(&tail);
            kept.push_str(&tail);
            prop_assert_eq!(sanitize(&raw), kept.trim());
        }

        #[test]
        fn prop_output_has_no_script_block(s in "(<script>|</script>|[a-z<>/ ]{0,5}){0,10}") {
            prop_assert!(!SCRIPT_BLOCK.is_match(&sanitize(&s)));
        }
    }
}
