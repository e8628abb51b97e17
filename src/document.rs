//! The HTML document shell around the formatted blocks.
//!
//! The shell carries a title, charset and viewport metadata, and a small
//! script with two reader controls that grow or shrink the body font size
//! in steps of `0.1em`. The formatted blocks go into the last `<div>` of
//! the body.

use memchr::{memchr, memchr_iter};

use crate::render::HtmlWriter;

const HEAD_START: &str = "<!DOCTYPE HTML>\n<HTML>\n<HEAD>\n    <TITLE>";

const HEAD_END: &str = r#"</TITLE>
    <meta http-equiv="content-type" content="text/html;charset=UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1">
    <script>
        function resizeText(multiplier) {
            if (document.body.style.fontSize == "") {
                document.body.style.fontSize = "1.0em";
            }
            document.body.style.fontSize = parseFloat(document.body.style.fontSize) + (multiplier * 0.1) + "em";
        }
    </script>
</HEAD>
<BODY>
    <div class="wrap">
        <ul class="reader_tools noselect">
            <li><button class="inc_fontsize" onclick="resizeText(1)">A+</button></li>
            <li><button class="dec_fontsize" onclick="resizeText(-1)">A-</button></li>
        </ul>
    </div>
    <div>
"#;

const DOCUMENT_END: &str = "    </div>\n</BODY>\n\n</HTML>";

/// Write everything up to and including the opening of the content region.
pub fn write_document_start(writer: &mut HtmlWriter, title: &str) {
    writer.write_str(HEAD_START);
    writer.write_escaped_attr(title);
    writer.write_str(HEAD_END);
}

/// Close the content region and the document.
pub fn write_document_end(writer: &mut HtmlWriter) {
    writer.write_str(DOCUMENT_END);
}

/// Content between the opening `<BODY ...>` tag and the next `</BODY>`.
///
/// Tag names match ASCII case-insensitively and the opening tag may carry
/// attributes. Returns `None` when either tag is missing.
///
/// # Example
/// ```
/// use linemark::extract_body;
///
/// let doc = "<html><body class=\"x\"><p>Hi</p></body></html>";
/// assert_eq!(extract_body(doc), Some("<p>Hi</p>"));
/// assert_eq!(extract_body("<p>no body</p>"), None);
/// ```
pub fn extract_body(document: &str) -> Option<&str> {
    let bytes = document.as_bytes();
    let open = find_ignore_ascii_case(bytes, 0, b"<body")?;
    let content_start = open + memchr(b'>', &bytes[open..])? + 1;
    let close = find_ignore_ascii_case(bytes, content_start, b"</body>")?;
    Some(&document[content_start..close])
}

/// Position of the first `needle` at or after `from`, ignoring ASCII case.
/// `needle` must start with `<`.
fn find_ignore_ascii_case(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    debug_assert_eq!(needle.first(), Some(&b'<'));
    memchr_iter(b'<', &haystack[from..])
        .map(|pos| from + pos)
        .find(|&pos| {
            haystack
                .get(pos..pos + needle.len())
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(needle))
        })
}
