//! Runs the three cross-component analyses over one scan's class extraction.

use super::duplicates::find_duplicates;
use super::extractable::find_extractable;
use super::types::ClassPatternReport;
use super::variants::find_variant_inconsistencies;
use crate::classes::FileClasses;

#[derive(Debug, Default, Clone, Copy)]
pub struct ClassPatternAnalyzer;

impl ClassPatternAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// `files` must be in scan order; reported file lists are sorted regardless.
    pub fn analyze(&self, files: &[FileClasses]) -> ClassPatternReport {
        let patterns_analyzed = files
            .iter()
            .map(|f| f.class_strings.len() + f.variants.len())
            .sum();
        let report = ClassPatternReport {
            duplicates: find_duplicates(files),
            inconsistencies: find_variant_inconsistencies(files),
            extractable: find_extractable(files),
            patterns_analyzed,
        };
        tracing::debug!(
            duplicates = report.duplicates.len(),
            inconsistencies = report.inconsistencies.len(),
            extractable = report.extractable.len(),
            analyzed = patterns_analyzed,
            "class pattern analysis complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::extract_file_classes;

    #[test]
    fn test_empty_input() {
        let report = ClassPatternAnalyzer::new().analyze(&[]);
        assert!(report.is_empty());
        assert_eq!(report.patterns_analyzed, 0);
    }

    #[test]
    fn test_counts_class_strings_and_variant_entries() {
        let file = extract_file_classes(
            "button.tsx",
            "const b = cva('inline-flex', { variants: { size: { sm: 'h-9', lg: 'h-11' } } })",
        );
        let report = ClassPatternAnalyzer::new().analyze(&[file]);
        assert_eq!(report.patterns_analyzed, 3 + 2);
    }
}
