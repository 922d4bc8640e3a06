mod markdown;
mod text;

use crate::scoring::{Level, ScoredAnnotation};
use clap::ValueEnum;
use std::io::Write;
use tracing::debug;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Md,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Md => write!(f, "md"),
        }
    }
}

/// Annotations of one level, already in report order
#[derive(Debug)]
pub struct LevelGroup {
    pub level: Level,
    pub items: Vec<ScoredAnnotation>,
}

/// Sorted and grouped annotations, shared by every format
#[derive(Debug)]
pub struct Report {
    pub groups: Vec<LevelGroup>,
}

impl Report {
    /// Sort by score (desc), path, line and split into non-empty levels
    pub fn new(mut items: Vec<ScoredAnnotation>) -> Self {
        sort_items(&mut items);

        let groups = Level::ALL
            .iter()
            .filter_map(|&level| {
                let members: Vec<_> = items
                    .iter()
                    .filter(|i| i.level == level)
                    .cloned()
                    .collect();
                if members.is_empty() {
                    None
                } else {
                    Some(LevelGroup {
                        level,
                        items: members,
                    })
                }
            })
            .collect();

        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

fn sort_items(items: &mut [ScoredAnnotation]) {
    items.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.path().cmp(b.path()))
            .then_with(|| a.line().cmp(&b.line()))
    });
}

/// Render annotations to `out` in the requested format
pub fn render<W: Write>(
    out: &mut W,
    items: Vec<ScoredAnnotation>,
    format: ReportFormat,
) -> std::io::Result<()> {
    let report = Report::new(items);
    if report.is_empty() {
        debug!("Nothing to report");
    } else {
        debug!(
            "Rendering {} annotations in {} levels as {}",
            report.len(),
            report.groups.len(),
            format
        );
    }

    match format {
        ReportFormat::Text => text::write_report(out, &report),
        ReportFormat::Md => markdown::write_report(out, &report),
    }
}
