//! Variant table consistency across same-named components

use std::collections::BTreeMap;
use std::path::Path;

use rustc_hash::FxHashSet;

use super::types::{VariantInconsistency, VariantLocation};
use crate::classes::{class_tokens, FileClasses};

/// Class prefix to CSS property, most specific first.
const PROPERTY_PREFIXES: &[(&str, &str)] = &[
    ("min-h-", "min-height"),
    ("max-h-", "max-height"),
    ("min-w-", "min-width"),
    ("max-w-", "max-width"),
    ("h-", "height"),
    ("w-", "width"),
    ("size-", "size"),
    ("px-", "padding"),
    ("py-", "padding"),
    ("pt-", "padding"),
    ("pr-", "padding"),
    ("pb-", "padding"),
    ("pl-", "padding"),
    ("p-", "padding"),
    ("mx-", "margin"),
    ("my-", "margin"),
    ("mt-", "margin"),
    ("mr-", "margin"),
    ("mb-", "margin"),
    ("ml-", "margin"),
    ("m-", "margin"),
    ("gap-", "gap"),
    ("space-x-", "gap"),
    ("space-y-", "gap"),
    ("leading-", "line-height"),
    ("tracking-", "letter-spacing"),
    ("font-", "font-weight"),
    ("bg-", "background-color"),
    ("rounded", "border-radius"),
    ("border", "border"),
    ("ring", "outline"),
    ("shadow", "box-shadow"),
    ("opacity-", "opacity"),
];

const FONT_SIZES: &[&str] = &["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl"];

/// Suffixes stripped from file stems when inferring component names.
const STEM_SUFFIXES: &[&str] = &[".component", ".styles", ".variants", ".stories"];

/// `src/ui/Button.tsx` -> `button`; `src/card/index.tsx` -> `card`.
pub fn component_name(file: &str) -> Option<String> {
    let path = Path::new(file);
    let mut stem = path.file_stem()?.to_str()?;
    for suffix in STEM_SUFFIXES {
        if let Some(s) = stem.strip_suffix(suffix) {
            stem = s;
        }
    }
    if stem.eq_ignore_ascii_case("index") {
        stem = path.parent()?.file_name()?.to_str()?;
    }
    (!stem.is_empty()).then(|| stem.to_ascii_lowercase())
}

/// CSS property a single class token sets, if known.
pub fn property_for_class(class: &str) -> Option<&'static str> {
    let base = class.rsplit(':').next().unwrap_or(class).trim_start_matches(['!', '-']);
    if let Some(rest) = base.strip_prefix("text-") {
        let size = rest.split('/').next().unwrap_or(rest);
        return Some(if FONT_SIZES.contains(&size) { "font-size" } else { "color" });
    }
    PROPERTY_PREFIXES
        .iter()
        .find(|(prefix, _)| base.starts_with(prefix))
        .map(|(_, property)| *property)
}

/// First property among classes present in some values but not all.
fn differing_property(values: &[&str]) -> String {
    let sets: Vec<FxHashSet<&str>> = values.iter().map(|v| class_tokens(v).collect()).collect();
    values
        .iter()
        .flat_map(|v| class_tokens(v))
        .filter(|class| !sets.iter().all(|set| set.contains(class)))
        .find_map(property_for_class)
        .unwrap_or("classes")
        .to_string()
}

/// Same (component, axis, key) defined with different classes in different files.
pub fn find_variant_inconsistencies(files: &[FileClasses]) -> Vec<VariantInconsistency> {
    type Key = (String, String, String);
    let mut groups: BTreeMap<Key, Vec<VariantLocation>> = BTreeMap::new();
    for file in files {
        if file.variants.is_empty() {
            continue;
        }
        let Some(component) = component_name(&file.file) else {
            continue;
        };
        for entry in &file.variants {
            groups
                .entry((component.clone(), entry.axis.clone(), entry.key.clone()))
                .or_default()
                .push(VariantLocation {
                    file: file.file.clone(),
                    line: entry.line,
                    classes: entry.classes.clone(),
                });
        }
    }

    groups
        .into_iter()
        .filter_map(|((component, axis, key), locations)| {
            let mut values: Vec<&str> = Vec::new();
            for loc in &locations {
                if !values.contains(&loc.classes.as_str()) {
                    values.push(&loc.classes);
                }
            }
            if values.len() < 2 {
                return None;
            }
            let first_file = &locations[0].file;
            if locations.iter().all(|loc| &loc.file == first_file) {
                return None;
            }
            let property = differing_property(&values);
            tracing::debug!(component = %component, axis = %axis, key = %key, property = %property, "variant inconsistency");
            Some(VariantInconsistency {
                component,
                axis,
                key,
                property,
                values: values.into_iter().map(str::to_string).collect(),
                locations,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::extract_file_classes;

    #[test]
    fn test_component_name() {
        assert_eq!(component_name("src/ui/Button.tsx").as_deref(), Some("button"));
        assert_eq!(component_name("app/button.component.ts").as_deref(), Some("button"));
        assert_eq!(component_name("src/card/index.tsx").as_deref(), Some("card"));
    }

    #[test]
    fn test_property_for_class() {
        assert_eq!(property_for_class("h-10"), Some("height"));
        assert_eq!(property_for_class("md:max-w-lg"), Some("max-width"));
        assert_eq!(property_for_class("text-sm"), Some("font-size"));
        assert_eq!(property_for_class("text-primary"), Some("color"));
        assert_eq!(property_for_class("rounded-md"), Some("border-radius"));
        assert_eq!(property_for_class("flex"), None);
    }

    #[test]
    fn test_height_inconsistency_across_buttons() {
        let x = "const buttonVariants = cva('inline-flex', { variants: { size: { sm: 'h-10 px-4 py-2' } } })";
        let y = "const buttonVariants = cva('inline-flex', { variants: { size: { sm: \"h-9 px-4 py-2\" } } })";
        let files = vec![
            extract_file_classes("src/a/button.tsx", x),
            extract_file_classes("src/b/Button.tsx", y),
        ];
        let found = find_variant_inconsistencies(&files);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].component, "button");
        assert_eq!((found[0].axis.as_str(), found[0].key.as_str()), ("size", "sm"));
        assert_eq!(found[0].property, "height");
        assert_eq!(found[0].values, vec!["h-10 px-4 py-2", "h-9 px-4 py-2"]);
        assert_eq!(found[0].locations.len(), 2);
    }

    #[test]
    fn test_identical_values_are_consistent() {
        let src = "cva('', { variants: { size: { sm: 'h-9 px-3' } } })";
        let files = vec![
            extract_file_classes("a/button.tsx", src),
            extract_file_classes("b/button.tsx", src),
            extract_file_classes("c/badge.tsx", "cva('', { variants: { size: { sm: 'h-5' } } })"),
        ];
        assert!(find_variant_inconsistencies(&files).is_empty());
    }

    #[test]
    fn test_differences_within_one_file_are_not_reported() {
        let src = "const a = cva('', { variants: { size: { sm: 'h-9 px-3' } } })\n\
                   const b = cva('', { variants: { size: { sm: 'h-10 px-3' } } })";
        let classes = extract_file_classes("src/ui/Button.tsx", src);
        assert_eq!(classes.variants.len(), 2);
        assert!(find_variant_inconsistencies(&[classes]).is_empty());
    }
}
