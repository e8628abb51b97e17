use linemark::{Options, format, format_body};
use proptest::prelude::*;

/// Lines drawn from the shapes the formatter distinguishes.
fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "[a-zA-Z][a-zA-Z ,.!?]{0,70}",
        "[0-9]{1,3}\\.? ?[a-zA-Z][a-z ]{0,20}",
    ]
}

fn document() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line(), 1..30)
}

proptest! {
    #[test]
    fn whitespace_only_input_is_empty(input in "[ \t\r\n]{0,40}") {
        prop_assert_eq!(format(&input), "");
    }

    #[test]
    fn formatting_is_deterministic(lines in document()) {
        let input = lines.join("\n");
        prop_assert_eq!(format(&input), format(&input));
    }

    #[test]
    fn one_break_per_blank_line(lines in document()) {
        let input = lines.join("\n");
        prop_assume!(!input.trim().is_empty());
        let blanks = lines.iter().filter(|l| l.trim().is_empty()).count();
        let html = format_body(&input, &Options::default());
        prop_assert_eq!(html.matches("<br>").count(), blanks);
    }

    #[test]
    fn lists_are_balanced(lines in document()) {
        let input = lines.join("\n");
        let html = format_body(&input, &Options::default());
        prop_assert_eq!(html.matches("<ol").count(), html.matches("</ol>").count());
        prop_assert_eq!(html.matches("<li>").count(), html.matches("</li>").count());
    }

    #[test]
    fn every_line_contributes_one_block_or_item(lines in document()) {
        let input = lines.join("\n");
        prop_assume!(!input.trim().is_empty());
        let html = format_body(&input, &Options::default());
        let emitted = html.matches("<h2>").count()
            + html.matches("<p>").count()
            + html.matches("<li>").count()
            + html.matches("<br>").count();
        prop_assert_eq!(emitted, lines.len());
    }

    #[test]
    fn heading_only_from_short_unnumbered_first_line(lines in document()) {
        let input = lines.join("\n");
        prop_assume!(!input.trim().is_empty());
        let first = lines[0].trim();
        let numbered_period = first
            .find(|c: char| !c.is_ascii_digit())
            .is_some_and(|i| i > 0 && first[i..].starts_with('.'));
        let expect_title = !first.is_empty() && first.encode_utf16().count() < 50 && !numbered_period;
        let html = format_body(&input, &Options::default());
        prop_assert_eq!(html.starts_with("        <h2>"), expect_title);
        prop_assert!(html.matches("<h2>").count() <= 1);
    }
}
