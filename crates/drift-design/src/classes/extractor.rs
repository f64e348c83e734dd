//! Class string and variant table extraction

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use super::types::{ClassOrigin, ClassString, FileClasses, VariantEntry};
use crate::text::{find_matching, parse_object, string_literals, LineIndex, ObjectValue};

/// Class-combination helpers whose string arguments are class lists.
pub const CLASS_HELPERS: &[&str] = &["cn", "clsx", "cx", "classNames", "classnames", "twMerge", "twJoin", "cva", "tv"];

static CLASS_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<binding>(?:\bv-bind)?:class|\[ngClass\]|\[class\]|\bclass:list)\s*=\s*(?:"(?P<bq>[^"]*)"|'(?P<bs>[^']*)'|\{)|\b(?:class|className)\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|\{)"#,
    )
    .unwrap()
});

static HELPER_CALL_RE: Lazy<Regex> = Lazy::new(|| {
    let names = CLASS_HELPERS.join("|");
    Regex::new(&format!(r"\b(?:{names})\s*\(")).unwrap()
});

static VARIANTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bvariants\s*:\s*\{").unwrap());

/// Extract class strings and variant tables from one file.
pub fn extract_file_classes(file: &str, content: &str) -> FileClasses {
    let lines = LineIndex::new(content);
    let mut seen: FxHashSet<usize> = FxHashSet::default();
    let mut found: Vec<(usize, ClassString)> = Vec::new();
    let mut push = |offset: usize, text: &str, origin: ClassOrigin| {
        if text.trim().is_empty() || !seen.insert(offset) {
            return;
        }
        let (line, column) = lines.position(offset);
        found.push((
            offset,
            ClassString {
                text: text.split_whitespace().collect::<Vec<_>>().join(" "),
                line,
                column,
                origin,
            },
        ));
    };

    for caps in CLASS_ATTR_RE.captures_iter(content) {
        let quoted = ["dq", "sq", "bq", "bs"].iter().find_map(|g| caps.name(g));
        let is_binding = caps.name("binding").is_some();
        match quoted {
            Some(value) if !is_binding => push(value.start(), value.as_str(), ClassOrigin::Attribute),
            Some(value) => {
                for lit in string_literals(value.as_str()) {
                    push(value.start() + lit.offset, lit.content, ClassOrigin::Attribute);
                }
            }
            None => {
                let Some(whole) = caps.get(0) else { continue };
                let open = whole.end() - 1;
                let Some(close) = find_matching(content, open) else { continue };
                for lit in string_literals(&content[open + 1..close]) {
                    push(open + 1 + lit.offset, lit.content, ClassOrigin::Attribute);
                }
            }
        }
    }

    for m in HELPER_CALL_RE.find_iter(content) {
        let open = m.end() - 1;
        let Some(close) = find_matching(content, open) else { continue };
        for lit in string_literals(&content[open + 1..close]) {
            push(open + 1 + lit.offset, lit.content, ClassOrigin::Helper);
        }
    }

    let mut variants = Vec::new();
    for m in VARIANTS_RE.find_iter(content) {
        let open = m.end() - 1;
        let Some(close) = find_matching(content, open) else { continue };
        let body_start = open + 1;
        for lit in string_literals(&content[body_start..close]) {
            push(body_start + lit.offset, lit.content, ClassOrigin::VariantTable);
        }
        variants.extend(variant_entries(&content[body_start..close], body_start, &lines));
    }

    found.sort_by_key(|(offset, _)| *offset);
    FileClasses {
        file: file.to_string(),
        class_strings: found.into_iter().map(|(_, c)| c).collect(),
        variants,
    }
}

/// `axis: { key: 'classes' }` entries of a variant table body at `base`.
fn variant_entries(body: &str, base: usize, lines: &LineIndex<'_>) -> Vec<VariantEntry> {
    let mut entries = Vec::new();
    for axis in parse_object(body) {
        let ObjectValue::Object { body: axis_body, offset } = axis.value else {
            continue;
        };
        for entry in parse_object(axis_body) {
            let classes = match &entry.value {
                ObjectValue::Str(s) => s.to_string(),
                ObjectValue::Array(_) => entry.value.strings().join(" "),
                ObjectValue::Expr(expr) => string_literals(expr)
                    .iter()
                    .map(|l| l.content)
                    .collect::<Vec<_>>()
                    .join(" "),
                ObjectValue::Object { .. } => continue,
            };
            let classes = classes.split_whitespace().collect::<Vec<_>>().join(" ");
            entries.push(VariantEntry {
                axis: axis.key.clone(),
                key: entry.key.clone(),
                classes,
                line: lines.line(base + offset + entry.offset),
            });
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: &str = r#"import { cva } from "class-variance-authority";

export const buttonVariants = cva(
  "inline-flex items-center justify-center rounded-md",
  {
    variants: {
      size: {
        default: "h-10 px-4 py-2",
        sm: cn("h-9", "px-3"),
        icon: ["h-10", "w-10"],
      },
      variant: { ghost: "hover:bg-accent hover:text-accent-foreground" },
    },
    defaultVariants: { size: "default" },
  }
);

export function Button({ className }) {
  return <button className={cn(buttonVariants(), className, "bg-primary")} />;
}
"#;

    #[test]
    fn test_variant_entries() {
        let classes = extract_file_classes("components/ui/button.tsx", BUTTON);
        let entries: Vec<(&str, &str, &str)> = classes
            .variants
            .iter()
            .map(|v| (v.axis.as_str(), v.key.as_str(), v.classes.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("size", "default", "h-10 px-4 py-2"),
                ("size", "sm", "h-9 px-3"),
                ("size", "icon", "h-10 w-10"),
                ("variant", "ghost", "hover:bg-accent hover:text-accent-foreground"),
            ]
        );
        assert_eq!(classes.variants[1].line, 9);
    }

    #[test]
    fn test_class_strings_deduplicated_by_offset() {
        let classes = extract_file_classes("components/ui/button.tsx", BUTTON);
        let texts: Vec<&str> = classes.class_strings.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts.iter().filter(|t| **t == "bg-primary").count(), 1);
        assert!(texts.contains(&"inline-flex items-center justify-center rounded-md"));
        assert!(!texts.contains(&"class-variance-authority"));
        assert_eq!(classes.class_strings[0].origin, ClassOrigin::Helper);
    }

    #[test]
    fn test_template_attributes() {
        let html = r#"<div class="p-4  text-sm" :class="{ 'bg-muted': active }" [ngClass]="['border', 'rounded']"></div>"#;
        let classes = extract_file_classes("a.vue", html);
        let texts: Vec<&str> = classes.class_strings.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["p-4 text-sm", "bg-muted", "border", "rounded"]);
    }
}
