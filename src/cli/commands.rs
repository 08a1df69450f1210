#![allow(clippy::result_large_err)]

use crate::{
    cli::args::{ListArgs, ListFormat, RunArgs, ShowArgs},
    core::{
        write_output, AmenderConfig, AppError, Category, ConfigLoader, ConfigValidator,
        ErrorCategory, Pipeline, Registry,
    },
    Result,
};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

/// Render the catalog grouped by category, one aligned `key  name` line per
/// transform. Empty groups are left out.
pub fn render_listing(registry: &Registry, only: Option<Category>) -> String {
    let groups = registry.by_category();
    let width = registry.all().map(|t| t.key().len()).max().unwrap_or(0);
    let mut sections = Vec::new();
    for (category, transforms) in &groups {
        if only.is_some_and(|wanted| wanted != *category) || transforms.is_empty() {
            continue;
        }
        let mut section = category.label().to_string();
        for transform in transforms {
            section.push_str(&format!(
                "\n  {:<width$}  {}",
                transform.key(),
                transform.name(),
                width = width
            ));
        }
        sections.push(section);
    }
    sections.join("\n\n")
}

/// JSON array of summaries in catalog order.
pub fn render_listing_json(
    registry: &Registry,
    only: Option<Category>,
) -> std::result::Result<String, AppError> {
    let summaries: Vec<_> = registry
        .summaries()
        .into_iter()
        .filter(|summary| only.map_or(true, |wanted| summary.category == wanted))
        .collect();
    Ok(serde_json::to_string_pretty(&summaries)?)
}

pub fn list(args: ListArgs) -> Result<()> {
    let registry = Registry::builtin().map_err(AppError::from)?;
    match args.format {
        ListFormat::Text => println!("{}", render_listing(&registry, args.category)),
        ListFormat::Json => println!("{}", render_listing_json(&registry, args.category)?),
    }
    Ok(())
}

pub fn show(args: ShowArgs) -> Result<()> {
    let registry = Registry::builtin().map_err(AppError::from)?;
    let transform = registry.require(&args.key).map_err(AppError::from)?;

    println!("{} ({})", transform.name(), transform.key());
    println!("Category: {}", transform.category());
    if let Some(hint) = transform.input_hint() {
        println!("Input: {}", hint);
    }
    if let Some(extension) = transform.forced_extension() {
        println!("Saves as: .{}", extension);
    }
    println!();
    println!("{}", transform.description());
    Ok(())
}

fn load_validated_config(
    config_path: Option<&Path>,
    registry: &Registry,
) -> std::result::Result<AmenderConfig, AppError> {
    let config = ConfigLoader::load(config_path)?;
    ConfigValidator::validate(&config, registry)?;
    Ok(config)
}

/// Preset steps first, then the positional keys, then removals in order.
fn build_pipeline(
    args: &RunArgs,
    config: &AmenderConfig,
    registry: &Registry,
) -> std::result::Result<Pipeline, AppError> {
    let mut keys: Vec<&str> = Vec::new();
    if let Some(name) = &args.preset {
        let preset = config.preset(name).ok_or_else(|| {
            let mut error = AppError::new(
                ErrorCategory::LookupError,
                format!("no preset named '{}'", name),
            )
            .with_code("AMD-LOOKUP-003")
            .with_suggestion("Run `amender presets` to see the configured presets");
            error.add_context("preset", name);
            error
        })?;
        keys.extend(preset.iter().map(String::as_str));
    }
    keys.extend(args.keys.iter().map(String::as_str));

    let mut pipeline = registry.pipeline(keys)?;
    for index in &args.remove {
        let removed = pipeline.remove_at(*index)?;
        tracing::debug!(index = *index, key = removed.key(), "removed step");
    }
    Ok(pipeline)
}

fn read_input(args: &RunArgs) -> std::result::Result<String, AppError> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return fs::read_to_string(path).map_err(|e| {
            let mut error = AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read input file {}: {}", path.display(), e),
            )
            .with_code("AMD-INPUT-001");
            error.add_context("path", &path.display().to_string());
            error
        });
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

pub fn run(args: RunArgs, config_path: Option<&Path>) -> Result<()> {
    let registry = Registry::builtin().map_err(AppError::from)?;
    let mut config = load_validated_config(config_path, &registry)?;

    let pipeline = build_pipeline(&args, &config, &registry)?;
    if pipeline.is_empty() {
        tracing::warn!("pipeline is empty; input is passed through unchanged");
    }
    tracing::debug!(steps = ?pipeline.keys(), "pipeline ready");

    let input = read_input(&args)?;
    let output = pipeline.run(&input);

    if !args.save {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    if let Some(directory) = &args.output_dir {
        config.output.directory = directory.clone();
    }
    if let Some(name) = &args.name {
        config.output.base_name = name.clone();
    }
    ConfigLoader::validate_config(&config)?;

    let path = write_output(
        &config.output.directory,
        &config.output.base_name,
        &pipeline,
        &output,
    )?;
    println!("Saved {}", path.display());
    Ok(())
}

pub fn presets(config_path: Option<&Path>) -> Result<()> {
    let registry = Registry::builtin().map_err(AppError::from)?;
    let config = load_validated_config(config_path, &registry)?;

    if config.presets.is_empty() {
        println!("No presets configured");
        return Ok(());
    }
    for (name, keys) in &config.presets {
        println!("{}: {}", name, keys.join(" -> "));
    }
    Ok(())
}
