//! End-to-end scans over small fixture projects.

use std::fs;
use std::path::Path;

use drift_design::arbitrary::ArbitraryCategory;
use drift_design::tokens::{tags, TokenCategory, TokenValue};
use drift_design::{CancellationToken, DesignScanResult, DesignScanner, ScanRequest, Severity};
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

fn scan(root: &Path) -> DesignScanResult {
    DesignScanner::new(ScanRequest::new(root))
        .scan(&CancellationToken::new())
        .unwrap()
}

fn token_names(result: &DesignScanResult) -> Vec<&str> {
    result.tokens.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_root_and_dark_theme_tokens_stay_distinct() {
    let dir = project(&[(
        "src/index.css",
        ":root { --primary: #0066cc; } .dark { --primary: oklch(0.9 0 0); }",
    )]);
    let result = scan(dir.path());

    assert_eq!(token_names(&result), vec!["primary", "primary-dark"]);
    let primary = &result.tokens[0];
    assert_eq!(primary.category, TokenCategory::Color);
    assert_eq!(primary.value, TokenValue::Color { hex: "#0066cc".to_string() });
    let dark = &result.tokens[1];
    assert!(dark.value.is_raw());
    assert!(dark.has_tag("dark"));
    assert!(dark.has_tag(tags::VARIANT));
}

#[test]
fn test_identical_definitions_collapse_on_aggregation() {
    let vars = ":root { --radius: 0.5rem; --brand: #ff6600; --gutter: 16px; }";
    let dir = project(&[
        ("src/index.css", &format!("@import './a.css';\n@import './b.css';\n{vars}")),
        ("src/a.css", vars),
        ("src/b.css", vars),
    ]);
    let result = scan(dir.path());

    assert_eq!(token_names(&result), vec!["radius", "brand", "gutter"]);
    assert_eq!(result.stats.tokens_raw, 9);
    assert_eq!(result.stats.tokens_extracted, 3);
    assert!(result.tokens.iter().all(|t| t.source.path == "src/index.css"));
}

#[test]
fn test_diverging_button_variants_report_height() {
    let dir = project(&[
        (
            "src/marketing/button.tsx",
            "export const buttonVariants = cva('inline-flex', { variants: { size: { sm: 'h-10 px-4 py-2' } } });",
        ),
        (
            "src/app/Button.tsx",
            "export const buttonVariants = cva('inline-flex', { variants: { size: { sm: 'h-9 px-4 py-2' } } });",
        ),
    ]);
    let result = scan(dir.path());
    let report = result.class_patterns.unwrap();

    assert_eq!(report.inconsistencies.len(), 1);
    let found = &report.inconsistencies[0];
    assert_eq!(found.component, "button");
    assert_eq!(found.property, "height");
    // Discovery order is lexicographic, so src/app comes first.
    assert_eq!(found.locations[0].file, "src/app/Button.tsx");
    assert_eq!(found.values, vec!["h-9 px-4 py-2", "h-10 px-4 py-2"]);
}

#[test]
fn test_arbitrary_color_reported_token_class_not() {
    let dir = project(&[("src/Alert.tsx", r#"export const Alert = () => <div className="bg-[#ff6b6b] bg-primary" />;"#)]);
    let result = scan(dir.path());

    assert_eq!(result.stats.arbitrary_values_found, 1);
    let signal = result
        .signals
        .iter()
        .find(|s| s.source.entity_type == "arbitrary-value")
        .unwrap();
    assert_eq!(signal.severity, Severity::Warning);
    assert_eq!(signal.details.examples[0].text, "bg-[#ff6b6b]");
    assert!(signal.source.entity_id.ends_with(ArbitraryCategory::Color.as_str()));

    let semantic = result.semantic_tokens.unwrap();
    assert_eq!(semantic.len(), 1);
    assert_eq!(semantic[0].name, "primary");
}

#[test]
fn test_import_chain_with_cycle_terminates() {
    let dir = project(&[
        ("src/index.css", "@import './theme/b.css';\n:root { --a: 1px; }"),
        ("src/theme/b.css", "@import \"../vendor/c.css\";\n:root { --b: 2px; }"),
        ("src/vendor/c.css", "@import '../index.css';\n:root { --c: 3px; }"),
    ]);
    let result = scan(dir.path());

    assert_eq!(token_names(&result), vec!["a", "b", "c"]);
    assert_eq!(result.tokens[2].source.path, "src/vendor/c.css");
}

#[test]
fn test_scan_is_repeatable() {
    let dir = project(&[
        ("app/globals.css", "@import \"tailwindcss\";\n@theme { --color-brand: #123456; --spacing-lg: 2rem; }"),
        ("app/page.tsx", "<main className=\"bg-brand p-[7px] text-muted-foreground\" />"),
    ]);
    let first = scan(dir.path());
    let second = scan(dir.path());

    let ids = |r: &DesignScanResult| r.tokens.iter().map(|t| (t.id.clone(), t.value.clone())).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    let signal_ids = |r: &DesignScanResult| r.signals.iter().map(|s| s.id.clone()).collect::<Vec<_>>();
    assert_eq!(signal_ids(&first), signal_ids(&second));
}
