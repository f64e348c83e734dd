//! Scan orchestration: discovery, bounded parallel extraction, aggregation.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use super::types::{DesignScanResult, FileOutcome, FileReport, ScanStats};
use crate::arbitrary::ArbitraryValueDetector;
use crate::cancellation::{Cancellable, CancellationToken};
use crate::classes::{extract_file_classes, FileClasses};
use crate::config::{DesignConfig, ScanRequest};
use crate::errors::ScanError;
use crate::patterns::ClassPatternAnalyzer;
use crate::scanner::{FileScanner, SourceFile, SourceKind};
use crate::semantic::{extract_semantic_usages, SemanticIndex};
use crate::styles::{audit_inline_styles, StyleNormalizer};
use crate::tokens::{TokenAggregator, TokenSourceResolver};

/// Runs one design scan over a project root.
pub struct DesignScanner {
    request: ScanRequest,
    detector: ArbitraryValueDetector,
}

impl DesignScanner {
    pub fn new(request: ScanRequest) -> Self {
        Self {
            request,
            detector: ArbitraryValueDetector::new(),
        }
    }

    pub fn config(&self) -> &DesignConfig {
        &self.request.config
    }

    /// Scan the project. Per-file failures are counted in the stats; only an
    /// invalid root, a worker pool failure, or cancellation return `Err`.
    pub fn scan(&self, cancel: &CancellationToken) -> Result<DesignScanResult, ScanError> {
        let start = Instant::now();
        let root = self.request.root.as_path();
        if !root.is_dir() {
            return Err(ScanError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }
        let config = &self.request.config;
        tracing::info!(root = %root.display(), "design scan started");

        let files = FileScanner::new(root, &config.effective_include(), &config.effective_exclude()).discover();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.effective_max_concurrency())
            .build()
            .map_err(|e| ScanError::ThreadPool(e.to_string()))?;

        let outcomes: Vec<FileOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    if cancel.is_cancelled() {
                        return Err(ScanError::Cancelled);
                    }
                    Ok(self.process_file(file))
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

        if cancel.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        let mut stats = ScanStats::default();
        let mut arbitrary = Vec::new();
        let mut inline_signals = Vec::new();
        let mut file_classes: Vec<FileClasses> = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            let report = match outcome {
                FileOutcome::Scanned(report) => report,
                FileOutcome::Failed(message) => {
                    stats.files_failed += 1;
                    errors.push(message);
                    continue;
                }
            };
            stats.files_scanned += 1;
            stats.inline_styles_found += report.inline_declarations;
            arbitrary.extend(report.arbitrary);
            inline_signals.extend(report.inline_signal);
            file_classes.extend(report.classes);
        }
        stats.arbitrary_values_found = arbitrary.len();

        let mut signals = self.detector.to_signals(&arbitrary);
        signals.extend(inline_signals);

        let semantic_tokens = config.effective_extract_semantic_tokens().then(|| {
            let mut index = SemanticIndex::new();
            for classes in &file_classes {
                index.add_file(&classes.file, extract_semantic_usages(classes));
            }
            index.finish()
        });
        stats.semantic_tokens_found = semantic_tokens.as_ref().map_or(0, Vec::len);

        let class_patterns = config
            .effective_detect_class_patterns()
            .then(|| ClassPatternAnalyzer::new().analyze(&file_classes));
        stats.patterns_analyzed = class_patterns.as_ref().map_or(0, |r| r.patterns_analyzed);

        let mut aggregator = TokenAggregator::new();
        if config.effective_extract_tokens() {
            aggregator.extend(TokenSourceResolver::new(root, &files)
                    .with_max_file_size(config.effective_max_file_size())
                    .resolve());
        }
        if let Some(semantic) = &semantic_tokens {
            aggregator.extend(semantic.iter().map(|t| t.to_design_token()));
        }
        stats.tokens_raw = aggregator.raw_count();
        stats.tokens_extracted = aggregator.len();
        let tokens = aggregator.finish();

        stats.duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            files = stats.files_scanned,
            failed = stats.files_failed,
            tokens = stats.tokens_extracted,
            signals = signals.len(),
            duration_ms = stats.duration_ms,
            "design scan finished"
        );

        Ok(DesignScanResult {
            tokens,
            signals,
            semantic_tokens,
            class_patterns,
            stats,
            errors,
        })
    }

    fn process_file(&self, file: &SourceFile) -> FileOutcome {
        let config = &self.request.config;
        let limit = config.effective_max_file_size();
        if file.size > limit {
            tracing::warn!(file = %file.relative, size = file.size, "skipping oversized file");
            return FileOutcome::Failed(format!(
                "Skipping {}: {} bytes exceeds the {limit} byte limit",
                file.relative, file.size
            ));
        }
        let content = match std::fs::read_to_string(&file.path) {
            Ok(c) => c,
            Err(source) => {
                let e = ScanError::Io {
                    path: file.path.clone(),
                    source,
                };
                tracing::warn!(file = %file.relative, error = %e, "skipping unreadable file");
                return FileOutcome::Failed(e.to_string());
            }
        };
        FileOutcome::Scanned(self.analyze_content(file, &content))
    }

    fn analyze_content(&self, file: &SourceFile, content: &str) -> FileReport {
        let config = &self.request.config;
        let is_stylesheet = file.kind() == SourceKind::Stylesheet;
        let mut report = FileReport::default();

        if config.effective_detect_arbitrary_values() {
            report.arbitrary = self.detector.detect(&file.relative, content);
        }
        if !is_stylesheet
            && (config.effective_extract_semantic_tokens() || config.effective_detect_class_patterns())
        {
            report.classes = Some(extract_file_classes(&file.relative, content));
        }
        if !is_stylesheet && config.effective_audit_inline_styles() {
            let declarations: Vec<_> = StyleNormalizer::normalize_file(Path::new(&file.relative), content)
                .iter()
                .collect();
            report.inline_declarations = declarations.len();
            report.inline_signal = audit_inline_styles(&file.relative, &declarations);
        }
        tracing::trace!(
            file = %file.relative,
            arbitrary = report.arbitrary.len(),
            inline = report.inline_declarations,
            "file analyzed"
        );
        report
    }
}
