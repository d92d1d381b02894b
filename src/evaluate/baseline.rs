//! Known-good Xcode versions per RubyMotion release.

use crate::version::{ReleaseVersion, SemVer};

/// One row of a compatibility baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineEntry {
    pub release: ReleaseVersion,
    pub expected: SemVer,
}

const fn entry(major: u32, minor: u32, expected: SemVer) -> BaselineEntry {
    BaselineEntry {
        release: ReleaseVersion::new(major, minor),
        expected,
    }
}

/// Maps a compiler release to the companion tool version it was built against.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityBaseline {
    entries: &'static [BaselineEntry],
}

/// RubyMotion release → Xcode version it is verified with. Oldest first.
pub static XCODE_BASELINE: CompatibilityBaseline = CompatibilityBaseline::new(&[
    entry(7, 0, SemVer::new(12, 4, 0)),
    entry(7, 5, SemVer::new(12, 5, 1)),
    entry(8, 0, SemVer::new(13, 2, 1)),
    entry(8, 5, SemVer::new(13, 4, 1)),
    entry(9, 0, SemVer::new(14, 2, 0)),
    entry(9, 4, SemVer::new(14, 3, 1)),
    entry(10, 0, SemVer::new(15, 0, 0)),
]);

impl CompatibilityBaseline {
    /// Create a baseline; `entries` must be ordered oldest release first.
    pub const fn new(entries: &'static [BaselineEntry]) -> Self {
        Self { entries }
    }

    /// Expected companion version for the newest known release.
    pub fn newest(&self) -> Option<SemVer> {
        self.entries.last().map(|e| e.expected)
    }

    /// Expected companion version for `release`.
    ///
    /// Falls back to the newest entry when the release is unknown or
    /// could not be detected.
    pub fn expected_for(&self, release: Option<ReleaseVersion>) -> Option<SemVer> {
        release
            .and_then(|r| self.entries.iter().find(|e| e.release == r))
            .map(|e| e.expected)
            .or_else(|| self.newest())
    }
}
