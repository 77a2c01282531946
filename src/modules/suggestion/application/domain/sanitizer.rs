use std::sync::OnceLock;

use regex::Regex;

//
// ──────────────────────────────────────────────────────────
// Markers
// ──────────────────────────────────────────────────────────
//

const SUGGESTIONS_OPEN: &str = r#"<div class="suggestions">"#;
const SUGGESTIONS_CLOSE: &str = "</div>";
const WARNING_OPEN: &str = r#"<div class="warning">"#;

/// Marker the generation prompt asks the model to end every response with.
/// A response without it was cut off by the output token ceiling.
const END_SENTINEL: &str = "<!--END-->";

/// Notice appended when the sentinel is missing from a raw response.
const TRUNCATION_NOTICE: &str =
    "⚠️ Note: This is a limited overview due to the topic's scope and enforced limits.";

/// Phrasings the model uses when it announces a token-limit cut in prose
/// instead of a warning element. Each is lifted out of the main content and
/// wrapped. All patterns tolerate line breaks inside the phrase.
const TRUNCATION_PATTERNS: [&str; 5] = [
    r"(?s)⚠️.*?GEMINI_TOKEN_LIMIT.*?\.",
    r"(?s)Warning:.*?GEMINI_TOKEN_LIMIT.*?\.",
    r"(?s)Note:.*?token.*?limit.*?reached.*?\.",
    r"(?s)Warning:.*?token.*?limit.*?reached.*?\.",
    r"(?s)⚠️.*?token.*?limit.*?reached.*?\.",
];

fn warning_div_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<div class="warning">.*?</div>"#)
            .expect("warning element pattern must compile")
    })
}

fn truncation_res() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        TRUNCATION_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("truncation pattern must compile"))
            .collect()
    })
}

//
// ──────────────────────────────────────────────────────────
// Public API
// ──────────────────────────────────────────────────────────
//

/// True when the text already uses the HTML template vocabulary. Decides
/// which sanitizer variant the generation service applies.
pub fn has_template_markup(raw: &str) -> bool {
    const MARKUP: [&str; 5] = ["<div", "<ul", "<li", "<strong", "<h3"];
    MARKUP.iter().any(|tag| raw.contains(tag))
}

/// Cleans a raw model response that follows the HTML template: strips code
/// fences, relocates every warning to the end, flags truncated responses and
/// wraps the result in the suggestions container.
///
/// Running the output through again returns it unchanged. Input that is
/// already sanitized (wrapped, sentinel-free) is unwrapped and reprocessed
/// instead of being wrapped a second time, and no truncation notice is added
/// to it.
pub fn sanitize_html(raw: &str) -> String {
    let text = strip_code_fences(raw);

    if let Some(inner) = unwrap_sanitized(&text) {
        let (main, warnings) = lift_warnings(inner);
        return assemble(&main, &warnings);
    }

    let complete = text.contains(END_SENTINEL);
    let body = text.replace(END_SENTINEL, "");

    let (main, mut warnings) = lift_warnings(&body);
    if !complete {
        warnings.push(format!("{WARNING_OPEN}{TRUNCATION_NOTICE}{SUGGESTIONS_CLOSE}"));
    }

    assemble(&main, &warnings)
}

/// Variant for responses that ignored the HTML template and came back as
/// prose or markdown. Normalizes whitespace, promotes minimal markdown to
/// HTML, then applies the same warning relocation and wrapping as
/// [`sanitize_html`]. Idempotent under the same rules.
pub fn sanitize_plain(raw: &str) -> String {
    let text = strip_code_fences(raw);

    // Already-sanitized input skips the line transforms; the newlines that
    // separate relocated warnings must not turn into <br> on a second run.
    if let Some(inner) = unwrap_sanitized(&text) {
        let (main, warnings) = lift_warnings(inner);
        return assemble(&main, &warnings);
    }

    let complete = text.contains(END_SENTINEL);
    let body = text.replace(END_SENTINEL, "");
    let body = promote_markdown(&normalize_whitespace(&body));

    let (main, mut warnings) = lift_warnings(&body);
    if !complete {
        warnings.push(format!("{WARNING_OPEN}{TRUNCATION_NOTICE}{SUGGESTIONS_CLOSE}"));
    }

    assemble(&main, &warnings)
}

//
// ──────────────────────────────────────────────────────────
// Pipeline steps
// ──────────────────────────────────────────────────────────
//

fn strip_code_fences(text: &str) -> String {
    // Language-tagged fences first, otherwise the bare pass leaves the tag.
    text.replace("```html", "")
        .replace("```markdown", "")
        .replace("```", "")
}

/// Detects sanitizer output: trimmed, wrapped in the suggestions container
/// and sentinel-free. Raw template responses still carry the sentinel, so
/// they never match. Returns the content between the container tags.
fn unwrap_sanitized(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.contains(END_SENTINEL) {
        return None;
    }
    trimmed
        .strip_prefix(SUGGESTIONS_OPEN)?
        .strip_suffix(SUGGESTIONS_CLOSE)
}

/// Moves every warning out of the body: well-formed warning elements first,
/// then bare truncation phrases (wrapped on the way out), then dangling
/// warning open tags the model never closed. Removing a match can splice the
/// surrounding text into a fresh match, so the passes repeat until the body
/// is stable. The returned main content contains no warning markup at all.
fn lift_warnings(body: &str) -> (String, Vec<String>) {
    let mut main = body.to_string();
    let mut warnings = Vec::new();

    loop {
        let mut changed = false;

        while let Some(range) = warning_div_re().find(&main).map(|m| m.range()) {
            warnings.push(main[range.clone()].to_string());
            main.replace_range(range, "");
            changed = true;
        }

        for re in truncation_res() {
            while let Some(range) = re.find(&main).map(|m| m.range()) {
                let phrase = main[range.clone()].to_string();
                warnings.push(format!("{WARNING_OPEN}{phrase}{SUGGESTIONS_CLOSE}"));
                main.replace_range(range, "");
                changed = true;
            }
        }

        // An open tag left over here has no matching close anywhere, or the
        // element pass would have taken it. Dropped so a later run cannot
        // pair it with a relocated warning.
        if main.contains(WARNING_OPEN) {
            main = main.replace(WARNING_OPEN, "");
            changed = true;
        }

        if !changed {
            break;
        }
    }

    (main.trim().to_string(), warnings)
}

fn assemble(main: &str, warnings: &[String]) -> String {
    if warnings.is_empty() {
        format!("{SUGGESTIONS_OPEN}{main}{SUGGESTIONS_CLOSE}")
    } else {
        format!(
            "{SUGGESTIONS_OPEN}{main}\n{}{SUGGESTIONS_CLOSE}",
            warnings.join("\n")
        )
    }
}

//
// ──────────────────────────────────────────────────────────
// Plain-text transforms
// ──────────────────────────────────────────────────────────
//

fn blank_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n\s*\n+").expect("blank run pattern must compile"))
}

fn horizontal_ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").expect("whitespace pattern must compile"))
}

fn trailing_ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)[ \t]+$").expect("trailing space pattern must compile"))
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern must compile"))
}

fn italic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("italic pattern must compile"))
}

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^- (.*)$").expect("bullet pattern must compile"))
}

fn normalize_whitespace(text: &str) -> String {
    let text = blank_run_re().replace_all(text.trim(), "\n\n");
    let text = horizontal_ws_re().replace_all(&text, " ");
    trailing_ws_re().replace_all(&text, "").into_owned()
}

fn promote_markdown(text: &str) -> String {
    let text = bold_re().replace_all(text, "<strong>$1</strong>");
    let text = italic_re().replace_all(&text, "<em>$1</em>");
    let text = bullet_re().replace_all(&text, "<li>$1</li>");
    // Adjacent list items join directly so the <br> pass below does not put
    // a break between them.
    let text = text.replace("</li>\n<li>", "</li><li>");
    text.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(main: &str) -> String {
        format!("{SUGGESTIONS_OPEN}{main}{SUGGESTIONS_CLOSE}")
    }

    // ============================================================
    // HTML variant
    // ============================================================

    #[test]
    fn test_complete_response_is_wrapped_without_notice() {
        let raw = "<h3>Key Points to Cover</h3>\n<ul class=\"detailed-list\">\n<li><strong>Intro:</strong> overview.</li>\n</ul>\n<!--END-->";

        let out = sanitize_html(raw);

        assert_eq!(
            out,
            wrapped("<h3>Key Points to Cover</h3>\n<ul class=\"detailed-list\">\n<li><strong>Intro:</strong> overview.</li>\n</ul>")
        );
    }

    #[test]
    fn test_missing_sentinel_appends_truncation_notice() {
        let raw = "<ul><li><strong>Intro:</strong> cut off mid";

        let out = sanitize_html(raw);

        assert!(out.contains(TRUNCATION_NOTICE));
        assert!(out.ends_with(SUGGESTIONS_CLOSE));
        assert!(!out.contains(END_SENTINEL));
    }

    #[test]
    fn test_sentinel_is_stripped_from_output() {
        let out = sanitize_html("<ul><li>done</li></ul><!--END-->");

        assert!(!out.contains(END_SENTINEL));
        assert!(!out.contains(TRUNCATION_NOTICE));
    }

    #[test]
    fn test_strips_code_fences() {
        let raw = "```html\n<ul><li>point</li></ul>\n```\n<!--END-->";

        let out = sanitize_html(raw);

        assert!(!out.contains("```"));
        assert!(out.contains("<ul><li>point</li></ul>"));
    }

    #[test]
    fn test_embedded_warning_moves_after_main_content() {
        let raw = "<ul><li>first</li><div class=\"warning\">⚠️ partial output</div><li>second</li></ul><!--END-->";

        let out = sanitize_html(raw);

        let warning_at = out.find(WARNING_OPEN).unwrap();
        let main = &out[..warning_at];
        assert!(main.contains("<li>first</li>"));
        assert!(main.contains("<li>second</li>"));
        assert!(out[warning_at..].contains("⚠️ partial output"));
    }

    #[test]
    fn test_multiple_warnings_keep_document_order() {
        let raw = "a<div class=\"warning\">one</div>b<div class=\"warning\">two</div>c<!--END-->";

        let out = sanitize_html(raw);

        let one = out.find("one").unwrap();
        let two = out.find("two").unwrap();
        assert!(one < two);
        assert_eq!(out.matches(WARNING_OPEN).count(), 2);
    }

    #[test]
    fn test_truncation_phrases_are_lifted_into_warnings() {
        let phrases = [
            "⚠️ Output shortened because GEMINI_TOKEN_LIMIT is low.",
            "Warning: increase GEMINI_TOKEN_LIMIT for the full list.",
            "Note: the token output limit was reached early.",
            "Warning: token limit reached before the last section.",
            "⚠️ The token limit was reached, so this list is partial.",
        ];

        for phrase in phrases {
            let raw = format!("<ul><li>point</li></ul> {phrase} <!--END-->");

            let out = sanitize_html(&raw);

            let warning_at = out.find(WARNING_OPEN).unwrap_or_else(|| {
                panic!("no warning produced for phrase: {phrase}");
            });
            assert!(out[warning_at..].contains(phrase));
            assert!(!out[..warning_at].contains(phrase));
        }
    }

    #[test]
    fn test_benign_token_talk_is_left_alone() {
        let raw = "<ul><li>Tokens are a limited resource in LLM APIs.</li></ul><!--END-->";

        let out = sanitize_html(raw);

        assert!(!out.contains(WARNING_OPEN));
        assert!(out.contains("Tokens are a limited resource"));
    }

    #[test]
    fn test_dangling_warning_open_is_dropped() {
        // Model got cut off inside its own warning element.
        let raw = "<ul><li>point</li></ul><div class=\"warning\">⚠️ token limit reached mid-warning.";

        let out = sanitize_html(raw);

        // Phrase rescued, unclosed tag gone, truncation notice added.
        assert!(out.contains("⚠️ token limit reached mid-warning."));
        assert!(out.contains(TRUNCATION_NOTICE));
        let inner = out
            .strip_prefix(SUGGESTIONS_OPEN)
            .and_then(|s| s.strip_suffix(SUGGESTIONS_CLOSE))
            .unwrap();
        let main = &inner[..inner.find(WARNING_OPEN).unwrap()];
        assert!(!main.contains(WARNING_OPEN));
    }

    #[test]
    fn test_empty_input_yields_container_with_notice() {
        let out = sanitize_html("");

        assert_eq!(
            out,
            format!("{SUGGESTIONS_OPEN}\n{WARNING_OPEN}{TRUNCATION_NOTICE}{SUGGESTIONS_CLOSE}{SUGGESTIONS_CLOSE}")
        );
    }

    #[test]
    fn test_sanitized_input_passes_through_unchanged() {
        let once = sanitize_html("<ul><li>stable</li></ul><!--END-->");

        assert_eq!(sanitize_html(&once), once);
    }

    #[test]
    fn test_idempotent_across_shapes() {
        let inputs = [
            "<ul><li>a</li></ul><!--END-->",
            "<ul><li>cut off",
            "plain text, no markup at all",
            "a<div class=\"warning\">w1</div>b<div class=\"warning\">w2</div><!--END-->",
            "<ul><li>x</li></ul> Warning: token limit reached here.",
            "<div class=\"suggestions\"><h3>echoed container</h3></div><!--END-->",
            "",
        ];

        for raw in inputs {
            let once = sanitize_html(raw);
            let twice = sanitize_html(&once);
            assert_eq!(twice, once, "not stable for input: {raw:?}");
        }
    }

    #[test]
    fn test_rewrapped_input_gets_no_second_notice() {
        let once = sanitize_html("<ul><li>cut off");
        assert_eq!(once.matches(TRUNCATION_NOTICE).count(), 1);

        let twice = sanitize_html(&once);

        assert_eq!(twice.matches(TRUNCATION_NOTICE).count(), 1);
        assert_eq!(twice.matches(SUGGESTIONS_OPEN).count(), 1);
    }

    // ============================================================
    // Plain variant
    // ============================================================

    #[test]
    fn test_plain_promotes_markdown() {
        let raw = "**Bold idea** and *aside*\n- item one\n- item two\n<!--END-->";

        let out = sanitize_plain(raw);

        assert!(out.contains("<strong>Bold idea</strong>"));
        assert!(out.contains("<em>aside</em>"));
        assert!(out.contains("<li>item one</li><li>item two</li>"));
    }

    #[test]
    fn test_plain_collapses_blank_runs_and_breaks_lines() {
        let raw = "first paragraph\n\n\n\nsecond    paragraph\t here\n<!--END-->";

        let out = sanitize_plain(raw);

        assert!(out.contains("first paragraph<br><br>second paragraph here"));
    }

    #[test]
    fn test_plain_flags_truncation_and_relocates_phrases() {
        let raw = "Some opening thoughts\n\nNote: the token limit was reached after two points.";

        let out = sanitize_plain(raw);

        let warning_at = out.find(WARNING_OPEN).unwrap();
        assert!(out[..warning_at].contains("Some opening thoughts"));
        assert!(out[warning_at..].contains("token limit was reached"));
        assert!(out.contains(TRUNCATION_NOTICE));
    }

    #[test]
    fn test_plain_idempotent_across_shapes() {
        let inputs = [
            "**Bold** and *thin*\n- one\n- two\n<!--END-->",
            "prose with no ending sentinel",
            "spaced   out\n\n\n\ntext<!--END-->",
            "",
        ];

        for raw in inputs {
            let once = sanitize_plain(raw);
            let twice = sanitize_plain(&once);
            assert_eq!(twice, once, "not stable for input: {raw:?}");
        }
    }

    // ============================================================
    // Variant selection
    // ============================================================

    #[test]
    fn test_template_markup_detection() {
        assert!(has_template_markup("<div class=\"suggestions\"><ul></ul></div>"));
        assert!(has_template_markup("<li><strong>Point:</strong> text</li>"));
        assert!(has_template_markup("<h3>Key Points</h3>"));
        assert!(!has_template_markup("Just a paragraph about topics."));
        assert!(!has_template_markup("- markdown list\n**bold**"));
    }
}
