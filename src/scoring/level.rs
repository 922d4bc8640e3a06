/// Report tier derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    P0,
    P1,
    P2,
    P3,
}

/// Inclusive lower bounds, highest tier first
const THRESHOLDS: [(i32, Level); 3] = [(120, Level::P0), (80, Level::P1), (40, Level::P2)];

impl Level {
    /// Display order of report sections
    pub const ALL: [Level; 4] = [Level::P0, Level::P1, Level::P2, Level::P3];

    pub fn from_score(score: i32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(Level::P3)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::P0 => "P0 (Now)",
            Level::P1 => "P1 (Soon)",
            Level::P2 => "P2 (Later)",
            Level::P3 => "P3 (Cleanup)",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::P0 => write!(f, "P0"),
            Level::P1 => write!(f, "P1"),
            Level::P2 => write!(f, "P2"),
            Level::P3 => write!(f, "P3"),
        }
    }
}
