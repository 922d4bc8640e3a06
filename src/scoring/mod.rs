//! Additive scoring of located annotations.
//!
//! The score is the sum of four independent contributions (tag weight,
//! priority weight, entry-point bonus, test penalty). Levels are derived from
//! the total with inclusive lower bounds checked from the top down.

mod level;

pub use level::Level;

use crate::parser::{LocatedAnnotation, Priority, Tag};
use std::path::Path;

/// Directory component that marks command entry points
const ENTRY_POINT_DIR: &str = "cmd";
/// File stem of a program entry point (`main.go`, `main.rs`, ...)
const ENTRY_POINT_STEM: &str = "main";
/// File stem suffix identifying test files
const TEST_SUFFIX: &str = "_test";

const ENTRY_POINT_BONUS: i32 = 20;
const TEST_PENALTY: i32 = -20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAnnotation {
    pub located: LocatedAnnotation,
    pub score: i32,
    pub level: Level,
}

impl ScoredAnnotation {
    pub fn path(&self) -> &str {
        &self.located.path
    }

    pub fn line(&self) -> usize {
        self.located.line
    }
}

pub fn tag_weight(tag: Tag) -> i32 {
    match tag {
        Tag::Fixme => 100,
        Tag::Todo => 50,
        Tag::Next => 30,
    }
}

pub fn priority_weight(priority: Option<Priority>) -> i32 {
    match priority {
        Some(Priority::P0) => 100,
        Some(Priority::P1) => 70,
        Some(Priority::P2) => 40,
        Some(Priority::P3) => 10,
        None => 0,
    }
}

/// Flat bonus for files under a `cmd/` directory or named `main.<ext>`.
/// Satisfying both conditions does not stack.
pub fn path_bonus(path: &str) -> i32 {
    let mut components: Vec<&str> = path.split('/').collect();
    let file_name = components.pop().unwrap_or("");

    let in_entry_dir = components.iter().any(|c| *c == ENTRY_POINT_DIR);
    let is_entry_file = {
        let file = Path::new(file_name);
        file.extension().is_some()
            && file.file_stem().and_then(|s| s.to_str()) == Some(ENTRY_POINT_STEM)
    };

    if in_entry_dir || is_entry_file {
        ENTRY_POINT_BONUS
    } else {
        0
    }
}

pub fn test_penalty(path: &str) -> i32 {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    if stem.ends_with(TEST_SUFFIX) {
        TEST_PENALTY
    } else {
        0
    }
}

/// Score a located annotation and assign its level
pub fn score(located: LocatedAnnotation) -> ScoredAnnotation {
    let total = tag_weight(located.annotation.tag)
        + priority_weight(located.annotation.priority)
        + path_bonus(&located.path)
        + test_penalty(&located.path);

    ScoredAnnotation {
        level: Level::from_score(total),
        score: total,
        located,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Annotation;

    fn located(tag: Tag, priority: Option<Priority>, path: &str) -> LocatedAnnotation {
        Annotation {
            tag,
            priority,
            message: "msg".to_string(),
        }
        .locate(path, 1)
    }

    #[test]
    fn test_tag_weights() {
        assert_eq!(tag_weight(Tag::Fixme), 100);
        assert_eq!(tag_weight(Tag::Todo), 50);
        assert_eq!(tag_weight(Tag::Next), 30);
    }

    #[test]
    fn test_priority_weights() {
        assert_eq!(priority_weight(Some(Priority::P0)), 100);
        assert_eq!(priority_weight(Some(Priority::P1)), 70);
        assert_eq!(priority_weight(Some(Priority::P2)), 40);
        assert_eq!(priority_weight(Some(Priority::P3)), 10);
        assert_eq!(priority_weight(None), 0);
    }

    #[test]
    fn test_path_bonus() {
        assert_eq!(path_bonus("cmd/tool/run.go"), 20);
        assert_eq!(path_bonus("internal/cmd/run.go"), 20);
        assert_eq!(path_bonus("main.go"), 20);
        assert_eq!(path_bonus("src/main.rs"), 20);
        // both conditions hold, still a single bonus
        assert_eq!(path_bonus("cmd/main.go"), 20);

        assert_eq!(path_bonus("mycmd/run.go"), 0);
        assert_eq!(path_bonus("cmd"), 0);
        assert_eq!(path_bonus("src/main"), 0);
        assert_eq!(path_bonus("src/domain.rs"), 0);
        assert_eq!(path_bonus("lib.rs"), 0);
    }

    #[test]
    fn test_test_penalty() {
        assert_eq!(test_penalty("foo_test.go"), -20);
        assert_eq!(test_penalty("pkg/parse_test.go"), -20);
        assert_eq!(test_penalty("pkg/parse_test"), -20);
        assert_eq!(test_penalty("pkg/test_parse.go"), 0);
        assert_eq!(test_penalty("pkg/parse_tests.go"), 0);
        assert_eq!(test_penalty("parse_test.dir/main.go"), 0);
    }

    #[test]
    fn test_score_entry_point_fixme() {
        let scored = score(located(Tag::Fixme, Some(Priority::P0), "cmd/main.go"));
        assert_eq!(scored.score, 220);
        assert_eq!(scored.level, Level::P0);
    }

    #[test]
    fn test_score_todo_in_test_file() {
        let scored = score(located(Tag::Todo, None, "foo_test.go"));
        assert_eq!(scored.score, 30);
        assert_eq!(scored.level, Level::P3);

        let scored = score(located(Tag::Fixme, None, "foo_test.go"));
        assert_eq!(scored.score, 80);
        assert_eq!(scored.level, Level::P1);
    }

    #[test]
    fn test_score_next_in_test_file() {
        let scored = score(located(Tag::Next, None, "x_test.go"));
        assert_eq!(scored.score, 10);
        assert_eq!(scored.level, Level::P3);
    }

    #[test]
    fn test_tag_monotonicity() {
        for priority in [None, Some(Priority::P0), Some(Priority::P3)] {
            for path in ["cmd/main.go", "lib.rs", "a_test.go"] {
                let fixme = score(located(Tag::Fixme, priority, path)).score;
                let todo = score(located(Tag::Todo, priority, path)).score;
                let next = score(located(Tag::Next, priority, path)).score;
                assert!(fixme > todo && todo > next);
            }
        }
    }
}
