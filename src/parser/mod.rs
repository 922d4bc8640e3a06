mod annotation;

pub use annotation::{Annotation, LocatedAnnotation, Priority, Tag};

use regex::Regex;
use std::sync::OnceLock;

static MARKER_LINE: OnceLock<Regex> = OnceLock::new();

/// `[indent] [//|#|/*] MARKER[Pn] (:|-) message [*/]`
fn marker_line() -> &'static Regex {
    MARKER_LINE.get_or_init(|| {
        Regex::new(r"^\s*(?://|#|/\*)?\s*(TODO|FIXME|@next)(?:\[P([0-3])\])?\s*[:\-]\s*(.+?)\s*$")
            .expect("valid regex")
    })
}

/// Parse a single source line into an annotation.
/// Returns `None` when the line carries no well-formed marker.
pub fn parse_line(line: &str) -> Option<Annotation> {
    let caps = marker_line().captures(line)?;

    let tag = caps.get(1)?.as_str().parse::<Tag>().ok()?;
    let priority = match caps.get(2) {
        Some(m) => Some(Priority::from_digit(m.as_str().chars().next()?)?),
        None => None,
    };

    let raw = caps.get(3)?.as_str().trim();
    let message = raw.strip_suffix("*/").unwrap_or(raw).trim();
    if message.is_empty() {
        return None;
    }

    Some(Annotation {
        tag,
        priority,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> (Tag, Option<Priority>, String) {
        let annotation = parse_line(line).unwrap_or_else(|| panic!("expected match: {line:?}"));
        (annotation.tag, annotation.priority, annotation.message)
    }

    #[test]
    fn test_simple_todo_with_colon() {
        assert_eq!(
            parsed("// TODO: something"),
            (Tag::Todo, None, "something".to_string())
        );
    }

    #[test]
    fn test_priority_suffix() {
        assert_eq!(
            parsed("// TODO[P1]: improve error handling"),
            (
                Tag::Todo,
                Some(Priority::P1),
                "improve error handling".to_string()
            )
        );
        assert_eq!(
            parsed("// FIXME[P0]: data race here"),
            (Tag::Fixme, Some(Priority::P0), "data race here".to_string())
        );
        assert_eq!(
            parsed("// TODO[P3]: low priority task"),
            (Tag::Todo, Some(Priority::P3), "low priority task".to_string())
        );
    }

    #[test]
    fn test_next_marker() {
        assert_eq!(
            parsed("// @next: refactor naming"),
            (Tag::Next, None, "refactor naming".to_string())
        );
        assert_eq!(
            parsed("// @next[P2]: cleanup naming"),
            (Tag::Next, Some(Priority::P2), "cleanup naming".to_string())
        );
    }

    #[test]
    fn test_comment_openers() {
        for line in [
            "# TODO: something",
            "/* TODO: something */",
            "TODO: something",
            "    // TODO: something",
            "\t#TODO:something",
        ] {
            assert_eq!(parsed(line), (Tag::Todo, None, "something".to_string()));
        }
    }

    #[test]
    fn test_dash_separator() {
        assert_eq!(
            parsed("// TODO - alternative separator is allowed"),
            (
                Tag::Todo,
                None,
                "alternative separator is allowed".to_string()
            )
        );
    }

    #[test]
    fn test_whitespace_before_separator_allowed() {
        assert_eq!(
            parsed("// FIXME[P1]   : spaced out"),
            (Tag::Fixme, Some(Priority::P1), "spaced out".to_string())
        );
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(
            parsed("// TODO: something   "),
            (Tag::Todo, None, "something".to_string())
        );
    }

    #[test]
    fn test_block_close_only_stripped_at_end() {
        assert_eq!(
            parsed("/* TODO: keep */ inner */"),
            (Tag::Todo, None, "keep */ inner".to_string())
        );
        assert_eq!(
            parsed("/* TODO: tight*/"),
            (Tag::Todo, None, "tight".to_string())
        );
    }

    #[test]
    fn test_rejected_lines() {
        for line in [
            "TODO something",
            "TODOS: something",
            "TODO [P1]: something",
            "// TODO:",
            "// TODO:    ",
            "/* TODO: */",
            "// todo: something",
            "// Fixme: something",
            "// TODO[P4]: something",
            "// TODO[p1]: something",
            "let x = 1; // TODO: trailing comment",
            "",
        ] {
            assert!(parse_line(line).is_none(), "should not match: {line:?}");
        }
    }

    #[test]
    fn test_reparsing_message_does_not_match() {
        for line in [
            "// TODO: something",
            "// TODO[P1]: improve error handling",
            "/* FIXME - data race here */",
            "# @next[P2]: cleanup naming",
        ] {
            let message = parse_line(line).unwrap().message;
            assert!(parse_line(&message).is_none());
        }
    }
}
