/// Neutralize markup in user-supplied text before it leaves the API.
///
/// Angle brackets are escaped so tags render as inert text; everything else
/// (ampersands, quotes, non-ASCII) is returned untouched so ordinary names
/// survive unchanged.
pub fn sanitize_text(input: &str) -> String {
    if !input.contains(['<', '>']) {
        return input.to_string();
    }
    input.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(sanitize_text("Test new folder"), "Test new folder");
        assert_eq!(sanitize_text("Tom & Jerry's \"notes\""), "Tom & Jerry's \"notes\"");
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn script_tags_are_escaped() {
        assert_eq!(
            sanitize_text(r#"Naughty naughty very naughty <script>alert("xss");</script>"#),
            r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
        );
    }

    #[test]
    fn attribute_payloads_are_inert() {
        let out = sanitize_text(r#"<img src="x" onerror="alert(document.cookie);">Bad"#);
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(out.ends_with("Bad"));
    }
}
