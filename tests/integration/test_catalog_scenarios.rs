use amender::cli::commands::render_listing;
use amender::core::Registry;
use insta::assert_snapshot;

fn run(keys: &[&str], input: &str) -> String {
    let registry = Registry::builtin().unwrap();
    registry.pipeline(keys.iter().copied()).unwrap().run(input)
}

#[test]
fn test_csv_tsv_delimiter_swap() {
    assert_eq!(run(&["tsv-to-csv"], "a,b\n1,2"), "a,b\n1,2");
    assert_eq!(run(&["csv-to-tsv"], "a,b\n1,2"), "a\tb\n1\t2");
    assert_eq!(run(&["csv-to-tsv", "tsv-to-csv"], "a,b\n1,2"), "a,b\n1,2");
}

#[test]
fn test_windows_path_conversions() {
    assert_eq!(run(&["unix-path"], "C:\\Users\\a"), "C:/Users/a");
    assert_eq!(run(&["git-bash-2"], "C:\\Users\\a"), "/c/Users/a");
    assert_eq!(run(&["wsl-path-2"], "D:\\data\\x.csv"), "/mnt/d/data/x.csv");
    assert_eq!(run(&["git-bash-2", "windows-path"], "C:\\Users\\a"), "C:\\Users\\a");
}

#[test]
fn test_key_value_csv_to_json() {
    assert_eq!(run(&["csv-to-json"], "x,1\ny,true\nz,"), r#"{"x":1,"y":true,"z":null}"#);
    assert_eq!(run(&["tsv-to-json"], "x\t1\ny\ttrue\nz\t"), r#"{"x":1,"y":true,"z":null}"#);
}

#[test]
fn test_list_round_trips_through_json_and_yaml() {
    assert_eq!(run(&["list-to-json", "json-to-list"], "1\ntrue\nhello"), "1\ntrue\nhello");
    assert_eq!(run(&["list-to-yaml", "yaml-to-list"], "a\n2\nfalse"), "a\n2\nfalse");
}

#[test]
fn test_html_escape_chain_is_reversible() {
    let input = "  <b>\"fish\" & 'chips'</b>\nnext line ";
    assert_eq!(run(&["html-escape", "html-unescape"], input), input);
}

#[test]
fn test_force_extension_steps_do_not_change_text() {
    let registry = Registry::builtin().unwrap();
    let pipeline = registry
        .pipeline(["csv-ext", "csv-to-tsv", "md-ext", "tex-ext"])
        .unwrap();
    assert_eq!(pipeline.run("a,b"), "a\tb");
    assert_eq!(pipeline.resolve_extension(), "tex");
}

#[test]
fn test_every_transform_is_total_on_awkward_input() {
    let registry = Registry::builtin().unwrap();
    let inputs = [
        "",
        " ",
        "\n\n",
        "(",
        ")(",
        "[■(",
        "%",
        "%E2%82",
        "&#xFFFFFFFF;",
        "::: \n:::",
        "-\n\t\t-\n-",
        "```\nunterminated",
        "ünïcødé ± ∑,\t½",
        "{\"a\": [1, 2",
        "- [",
    ];
    for transform in registry.all() {
        for input in inputs {
            let _ = transform.apply(input);
        }
    }
}

#[test]
fn test_grouped_listing() {
    let registry = Registry::builtin().unwrap();
    let listing = render_listing(&registry, None);
    assert_snapshot!("grouped_listing", listing);
}
