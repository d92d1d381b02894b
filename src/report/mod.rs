//! Report structure and rendering.
//!
//! A [`Report`] is a title and an ordered list of [`Section`]s; each
//! section holds the [`FindingGroup`]s the evaluator produced. Rendering
//! lives in [`render`], colors in [`theme`].

pub mod render;
pub mod theme;

use serde::Serialize;

use crate::evaluate::{FindingGroup, Severity};

pub use render::{render_to_string, ReportWriter, LABEL_WIDTH, RULE_WIDTH};
pub use theme::{should_use_colors, DoctorTheme};

/// A titled run of finding groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    title: String,
    groups: Vec<FindingGroup>,
}

impl Section {
    pub fn new(title: impl Into<String>, groups: Vec<FindingGroup>) -> Self {
        Self {
            title: title.into(),
            groups,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn groups(&self) -> &[FindingGroup] {
        &self.groups
    }

    /// Whether any finding in this section is Bad.
    pub fn has_problems(&self) -> bool {
        self.groups
            .iter()
            .any(|g| g.worst() == Some(Severity::Bad))
    }
}

/// A complete diagnostic report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    title: String,
    sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a group by label across all sections.
    pub fn group(&self, label: &str) -> Option<&FindingGroup> {
        self.sections
            .iter()
            .flat_map(|s| s.groups.iter())
            .find(|g| g.label() == label)
    }

    /// Whether any finding is Bad.
    pub fn has_problems(&self) -> bool {
        self.sections.iter().any(Section::has_problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Finding;

    fn sample() -> Report {
        Report::new(
            "Doctor",
            vec![
                Section::new("A", vec![FindingGroup::single("one", Finding::good("1"))]),
                Section::new("B", vec![FindingGroup::single("two", Finding::bad("2"))]),
            ],
        )
    }

    #[test]
    fn group_lookup_spans_sections() {
        let report = sample();
        assert_eq!(report.group("two").unwrap().findings()[0].value(), "2");
        assert!(report.group("three").is_none());
    }

    #[test]
    fn bad_finding_is_a_problem() {
        assert!(sample().has_problems());
        let clean = Report::new(
            "Doctor",
            vec![Section::new("A", vec![FindingGroup::single("one", Finding::good("1"))])],
        );
        assert!(!clean.has_problems());
    }
}
