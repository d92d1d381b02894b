//! Text rendering of reports.

use std::io::{self, Write};

use crate::evaluate::{Finding, FindingGroup};

use super::theme::DoctorTheme;
use super::{Report, Section};

/// Column width of group labels; longer labels are truncated.
pub const LABEL_WIDTH: usize = 22;

/// Width of the rules framing titles.
pub const RULE_WIDTH: usize = 60;

/// Rule character framing the report title.
pub const REPORT_RULE: char = '=';

/// Rule character framing section titles.
pub const SECTION_RULE: char = '-';

/// Writes reports line by line to any output stream.
///
/// Nothing is buffered here; each line goes straight to the sink in the
/// order groups are handed over.
pub struct ReportWriter<W: Write> {
    out: W,
    theme: DoctorTheme,
}

impl<W: Write> ReportWriter<W> {
    /// Create a writer.
    pub fn new(out: W, theme: DoctorTheme) -> Self {
        Self { out, theme }
    }

    /// Write a whole report.
    pub fn write_report(&mut self, report: &Report) -> io::Result<()> {
        self.write_title(report.title())?;
        for section in report.sections() {
            self.write_section(section)?;
        }
        self.finish()
    }

    /// Write the report title framed by `=` rules.
    pub fn write_title(&mut self, title: &str) -> io::Result<()> {
        self.write_banner(title, REPORT_RULE)?;
        self.out.flush()
    }

    /// Write one section: a blank line, its framed title, then its groups.
    pub fn write_section(&mut self, section: &Section) -> io::Result<()> {
        writeln!(self.out)?;
        self.write_banner(section.title(), SECTION_RULE)?;
        for group in section.groups() {
            self.write_group(group)?;
        }
        self.out.flush()
    }

    /// Flush whatever the sink still holds.
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Write a title framed above and below by a full-width rule.
    pub fn write_banner(&mut self, title: &str, rule: char) -> io::Result<()> {
        let line = rule.to_string().repeat(RULE_WIDTH);
        let line = self.theme.rule.apply_to(line);
        writeln!(self.out, "{}", line)?;
        writeln!(self.out, "{}", self.theme.title.apply_to(title))?;
        writeln!(self.out, "{}", line)
    }

    /// Write a group: label and first value, then the rest aligned under it.
    pub fn write_group(&mut self, group: &FindingGroup) -> io::Result<()> {
        for (i, finding) in group.findings().iter().enumerate() {
            let value = self.format_finding(finding);
            if i == 0 {
                writeln!(
                    self.out,
                    "{:<width$.width$}: {}",
                    group.label(),
                    value,
                    width = LABEL_WIDTH
                )?;
            } else {
                writeln!(self.out, "{:indent$}{}", "", value, indent = LABEL_WIDTH + 2)?;
            }
        }
        Ok(())
    }

    /// Consume the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let text = match finding.note() {
            Some(note) => format!("{} ({})", finding.value(), note),
            None => finding.value().to_string(),
        };
        self.theme
            .severity(finding.severity())
            .apply_to(text)
            .to_string()
    }
}

/// Render a report to a string.
pub fn render_to_string(report: &Report, theme: DoctorTheme) -> io::Result<String> {
    let mut writer = ReportWriter::new(Vec::new(), theme);
    writer.write_report(report)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
