use crate::error::ConfigError;

/// Marker recognized at the start of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Todo,
    Fixme,
    Next,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Todo, Tag::Fixme, Tag::Next];

    /// Marker text exactly as it appears in source
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Todo => "TODO",
            Tag::Fixme => "FIXME",
            Tag::Next => "@next",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(Tag::Todo),
            "FIXME" => Ok(Tag::Fixme),
            "@next" => Ok(Tag::Next),
            _ => Err(ConfigError::UnknownTag(s.to_string())),
        }
    }
}

/// The `[Pn]` suffix written right after a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
}

impl Priority {
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Priority::P0),
            '1' => Some(Priority::P1),
            '2' => Some(Priority::P2),
            '3' => Some(Priority::P3),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::P0 => write!(f, "P0"),
            Priority::P1 => write!(f, "P1"),
            Priority::P2 => write!(f, "P2"),
            Priority::P3 => write!(f, "P3"),
        }
    }
}

/// One parsed marker line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub tag: Tag,
    pub priority: Option<Priority>,
    pub message: String,
}

impl Annotation {
    /// `TAG[Pn]` when a priority was given, otherwise just `TAG`
    pub fn label(&self) -> String {
        match self.priority {
            Some(priority) => format!("{}[{}]", self.tag, priority),
            None => self.tag.to_string(),
        }
    }

    pub fn locate(self, path: impl Into<String>, line: usize) -> LocatedAnnotation {
        LocatedAnnotation {
            annotation: self,
            path: path.into(),
            line,
        }
    }
}

/// An annotation together with where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedAnnotation {
    pub annotation: Annotation,
    /// Relative to the scan root, always `/`-separated
    pub path: String,
    /// 1-based
    pub line: usize,
}
