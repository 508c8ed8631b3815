//! Conditional section resolution.
//!
//! Templates mark ecosystem-specific regions like this:
//!
//! ```text
//! <!-- BEGIN:FLUTTER -->
//! Flutter-only guidance
//! <!-- END:FLUTTER -->
//! ```
//!
//! A region whose label matches the target ecosystem is kept with its markers
//! removed; any other region is deleted together with its content.

use regex::Regex;
use tracing::debug;

use super::compile_pattern;
use crate::core::CursorflowError;

/// Labels that count as the same ecosystem as a canonical key.
const SECTION_ALIASES: &[(&str, &[&str])] = &[
    ("react", &["react", "typescript", "tsx", "jsx"]),
    ("flutter", &["flutter", "dart"]),
    ("kotlin", &["kotlin", "android"]),
    ("swift", &["swift", "ios"]),
    ("python", &["python", "py"]),
    ("java", &["java"]),
    ("csharp", &["csharp", "c#", "dotnet"]),
    ("go", &["go", "golang"]),
    ("rust", &["rust"]),
];

/// Decide whether a section labelled `section_label` belongs in output for `target`.
///
/// Matches on equal labels, on the curated alias table in either direction,
/// and as a last resort on either string containing the other.
pub fn should_include(section_label: &str, target: &str) -> bool {
    let section = section_label.to_lowercase();
    let target = target.to_lowercase();

    if section == target {
        return true;
    }

    for (key, related) in SECTION_ALIASES {
        if target == *key && related.contains(&section.as_str()) {
            return true;
        }
        if section == *key && related.contains(&target.as_str()) {
            return true;
        }
    }

    if section.contains(target.as_str()) || target.contains(section.as_str()) {
        debug!(section = %section_label, target = %target, "section included by substring match");
        return true;
    }

    false
}

/// Strips or unwraps `BEGIN:<label>` / `END:<label>` regions.
#[derive(Debug, Clone)]
pub struct SectionResolver {
    begin: Regex,
    end: Regex,
    marker: Regex,
}

impl SectionResolver {
    /// Compile the marker patterns.
    pub fn new() -> Result<Self, CursorflowError> {
        Ok(Self {
            begin: compile_pattern(r"(?i)<!--\s*BEGIN:(\w+)\s*-->")?,
            end: compile_pattern(r"(?i)<!--\s*END:(\w+)\s*-->")?,
            marker: compile_pattern(r"(?i)<!--\s*(?:BEGIN|END):\w+\s*-->")?,
        })
    }

    /// Resolve every section in `content` against the `target` key.
    ///
    /// Each BEGIN marker pairs with the first following END marker carrying the
    /// same label (case-insensitive). A BEGIN with no matching END is left as
    /// ordinary text. Content outside sections is copied unchanged.
    pub fn resolve(&self, content: &str, target: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut copied_to = 0;
        let mut search_from = 0;

        while let Some(caps) = self.begin.captures_at(content, search_from) {
            let (Some(begin), Some(label)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            let Some(section_end) = self.find_end(content, begin.end(), label.as_str()) else {
                // Markers are ASCII, so one byte past '<' is a char boundary
                search_from = begin.start() + 1;
                continue;
            };

            out.push_str(&content[copied_to..begin.start()]);
            if should_include(label.as_str(), target) {
                let section = &content[begin.start()..section_end];
                out.push_str(&self.marker.replace_all(section, ""));
            } else {
                debug!(label = label.as_str(), target, "dropping conditional section");
            }
            copied_to = section_end;
            search_from = section_end;
        }

        out.push_str(&content[copied_to..]);
        out
    }

    /// Byte offset just past the first END marker for `label` at or after `from`.
    fn find_end(&self, content: &str, from: usize, label: &str) -> Option<usize> {
        let wanted = label.to_lowercase();
        self.end
            .captures_iter(&content[from..])
            .find(|caps| caps.get(1).is_some_and(|l| l.as_str().to_lowercase() == wanted))
            .and_then(|caps| caps.get(0))
            .map(|m| from + m.end())
    }
}
