use amender::core::{Category, Registry, RegistryError, Transform};

fn identity(text: &str) -> String {
    text.to_string()
}

#[test]
fn test_builtin_keys_are_unique_and_resolvable() {
    let registry = Registry::builtin().unwrap();
    assert!(registry.len() > 40);
    for transform in registry.all() {
        let found = registry.get(transform.key()).unwrap();
        assert_eq!(found.name(), transform.name());
    }
}

#[test]
fn test_builtin_resolves_former_duplicate_key() {
    let registry = Registry::builtin().unwrap();
    let quotes = registry.require("strip-quotes").unwrap();
    let this_pc = registry.require("this-pc-full-path").unwrap();
    assert_eq!(quotes.category(), Category::Strings);
    assert_eq!(this_pc.category(), Category::Paths);
    assert_eq!(quotes.apply("'x'"), "x");
    assert_eq!(this_pc.apply("Desktop"), "C:\\Users\\%USERNAME%\\Desktop");
}

#[test]
fn test_builtin_keeps_stable_catalog_keys() {
    let registry = Registry::builtin().unwrap();
    for key in ["git-bash-2", "wsl-path-2", "strip-leading-spaces", "csv-to-json-real", "align"] {
        assert!(registry.get(key).is_some(), "missing {}", key);
    }
    for renamed in ["git-bash-path", "wsl-path", "strip-lines"] {
        assert!(registry.get(renamed).is_none(), "unexpected {}", renamed);
    }
    assert_eq!(registry.require("git-bash-2").unwrap().apply("C:\\x"), "/c/x");
    assert_eq!(registry.require("wsl-path-2").unwrap().apply("C:\\x"), "/mnt/c/x");
    assert_eq!(registry.require("strip-leading-spaces").unwrap().apply(" a \n b "), "a\nb");
}

#[test]
fn test_lookup_is_exact() {
    let registry = Registry::builtin().unwrap();
    assert!(registry.get("UPPER").is_none());
    assert!(registry.get(" upper").is_none());
    assert_eq!(
        registry.require("shout").unwrap_err(),
        RegistryError::NotFound("shout".to_string())
    );
}

#[test]
fn test_by_category_covers_every_category_in_order() {
    let registry = Registry::builtin().unwrap();
    let groups = registry.by_category();

    let categories: Vec<Category> = groups.keys().copied().collect();
    assert_eq!(categories, Category::ALL.to_vec());

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, registry.len());

    for (category, transforms) in &groups {
        assert!(!transforms.is_empty(), "{} is empty", category);
        assert!(transforms.iter().all(|t| t.category() == *category));
    }

    let extensions: Vec<&str> = groups[&Category::ForceExtension]
        .iter()
        .map(|t| t.key())
        .collect();
    assert_eq!(extensions, vec!["csv-ext", "json-ext", "md-ext", "html-ext", "tex-ext"]);
}

#[test]
fn test_by_category_keeps_empty_buckets() {
    let mut builder = Registry::builder();
    builder
        .register(Transform::new("One", "one", Category::Paper, identity))
        .register(Transform::new("Two", "two", Category::Tabular, identity));
    let registry = builder.build().unwrap();

    let groups = registry.by_category();
    assert_eq!(groups.len(), Category::ALL.len());
    assert!(groups[&Category::Strings].is_empty());
    assert_eq!(groups[&Category::Paper][0].key(), "one");
    assert_eq!(groups.get_index(0).map(|(c, _)| *c), Some(Category::Tabular));
}

#[test]
fn test_duplicate_keys_are_rejected() {
    let mut builder = Registry::builder();
    builder.register_all([
        Transform::new("Strip surrounding quotes", "dup", Category::Strings, identity),
        Transform::new("This PC Folders to Full Path", "dup", Category::Paths, identity),
    ]);
    assert_eq!(
        builder.build().unwrap_err(),
        RegistryError::DuplicateKey("dup".to_string())
    );
}

#[test]
fn test_pipeline_reports_first_unknown_key() {
    let registry = Registry::builtin().unwrap();
    let err = registry.pipeline(["strip", "nope", "also-nope"]).unwrap_err();
    assert_eq!(err, RegistryError::NotFound("nope".to_string()));
}

#[test]
fn test_summaries_serialize_with_kebab_case_category() {
    let registry = Registry::builtin().unwrap();
    let summary = registry
        .summaries()
        .into_iter()
        .find(|s| s.key == "align")
        .unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["category"], "word-equations");
    assert_eq!(json["input_label"], "MS Word Stacked Math");
}
