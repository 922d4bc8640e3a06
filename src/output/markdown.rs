use super::Report;
use std::io::Write;

/// Markdown: one `##` section per level, checkbox entries with a hard line break
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    for (i, group) in report.groups.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "## {}", group.level.label())?;

        for item in &group.items {
            writeln!(out, "- [ ] {}:{}  ", item.path(), item.line())?;
            writeln!(
                out,
                "  {}: {}",
                item.located.annotation.label(),
                item.located.annotation.message
            )?;
        }
    }
    Ok(())
}
