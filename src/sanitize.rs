/// Cleanup of raw model completions before they are returned as source code.
///
/// Models routinely wrap generated code in conversational framing ("Here is
/// the converted Clarity code:") and markdown fences even when instructed not
/// to. This module strips both: intro phrases are removed in table order, and
/// once any fence marker is present only fenced lines are retained.
const INTRO_PHRASES: &[&str] = &[
    "Here is the converted Clarity code:",
    "Here's the converted Clarity code:",
    "The converted Clarity code is:",
    "Converted Clarity code:",
    "Here is the Clarity code:",
    "Here's the Clarity code:",
];

const FENCE: &str = "```";

/// Language tags that may follow an opening fence marker.
const FENCE_LANGUAGE_TAGS: &[&str] = &["clarity", "lisp"];

pub fn sanitize_generated_code(raw: &str) -> String {
    let mut code = raw.trim().to_string();

    // Each phrase is matched against the progressively trimmed string, so
    // stacked intros compound.
    for phrase in INTRO_PHRASES {
        if let Some(at) = find_ignore_ascii_case(&code, phrase) {
            code = code[at + phrase.len()..].trim().to_string();
        }
    }

    if code.contains(FENCE) {
        let mut kept = Vec::new();
        let mut inside_fence = false;

        for line in code.lines() {
            if is_fence_marker(line) {
                inside_fence = !inside_fence;
                continue;
            }
            if inside_fence {
                kept.push(line);
            }
        }

        code = kept.join("\n");
    }

    code.trim().to_string()
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn is_fence_marker(line: &str) -> bool {
    match line.strip_prefix(FENCE) {
        Some("") => true,
        Some(rest) => FENCE_LANGUAGE_TAGS.iter().any(|tag| {
            rest.as_bytes()
                .get(..tag.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(tag.as_bytes()))
        }),
        None => false,
    }
}
