//! Lucide CLI
//!
//! List, render and rasterize Lucide icons.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lucide_core::{AttrValue, Dimension, Element, Icon, IconProps, ThemedIcon, ThemedProps};
use lucide_icons::{aliases, custom, registry};
use lucide_svg::RasterizedIcon;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::LucideConfig;

#[derive(Parser)]
#[command(name = "lucide")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lucide icon toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./lucide.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available icons
    List {
        /// Only show names containing this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Also list aliases and custom icons
        #[arg(short, long)]
        aliases: bool,
    },

    /// Render an icon to SVG markup
    Render {
        /// Icon slug, alias or display name
        name: String,

        #[command(flatten)]
        style: StyleArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rasterize an icon to PNG
    Png {
        /// Icon slug, alias or display name
        name: String,

        /// Output width and height in pixels
        #[arg(short, long, default_value = "64")]
        pixels: u32,

        #[command(flatten)]
        style: StyleArgs,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render a custom icon with the configured theme
    Themed {
        /// Custom icon name (logo, spinner, status-dot)
        name: String,

        /// Width and height, e.g. 24 or 1.5em
        #[arg(long)]
        size: Option<String>,

        /// Icon color
        #[arg(long)]
        color: Option<String>,

        /// Extra CSS classes
        #[arg(long)]
        class: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render an external SVG file through the icon factory
    Import {
        /// SVG file to import
        file: PathBuf,

        /// Display name (defaults to the file stem in PascalCase)
        #[arg(short, long)]
        name: Option<String>,

        /// Keep the file's own root attributes (viewBox, fill) via the themed factory
        #[arg(long)]
        themed: bool,

        #[command(flatten)]
        style: StyleArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Render options shared by the icon commands
#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// Width and height, e.g. 48 or 2em
    #[arg(long)]
    size: Option<String>,

    /// Stroke color
    #[arg(long)]
    color: Option<String>,

    /// Stroke width
    #[arg(long)]
    stroke_width: Option<f32>,

    /// Keep the stroke thickness constant regardless of size (`=false` turns a configured default off)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    absolute_stroke_width: Option<bool>,

    /// Extra CSS classes
    #[arg(long)]
    class: Option<String>,

    /// Extra attribute as name=value (repeatable)
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    attrs: Vec<String>,
}

impl StyleArgs {
    fn to_props(&self) -> Result<IconProps> {
        let mut props = IconProps::new();
        if let Some(size) = &self.size {
            props = props.size(parse_dimension(size));
        }
        if let Some(color) = &self.color {
            props = props.color(color);
        }
        if let Some(width) = self.stroke_width {
            props = props.stroke_width(width);
        }
        if let Some(absolute) = self.absolute_stroke_width {
            props = props.absolute_stroke_width(absolute);
        }
        if let Some(class) = &self.class {
            props = props.class(class);
        }
        for attr in &self.attrs {
            let (name, value) = parse_attr(attr)?;
            props = props.attr(name, value);
        }
        Ok(props)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => LucideConfig::load(path)?,
        None => LucideConfig::load_from_dir(Path::new("."))?,
    };

    match cli.command {
        Commands::List { filter, aliases } => cmd_list(&config, filter.as_deref(), aliases),

        Commands::Render {
            name,
            style,
            output,
        } => cmd_render(&config, &name, &style, output.as_deref()),

        Commands::Png {
            name,
            pixels,
            style,
            output,
        } => cmd_png(&config, &name, pixels, &style, &output),

        Commands::Themed {
            name,
            size,
            color,
            class,
            output,
        } => cmd_themed(&config, &name, size, color, class, output.as_deref()),

        Commands::Import {
            file,
            name,
            themed,
            style,
            output,
        } => cmd_import(&config, &file, name, themed, &style, output.as_deref()),
    }
}

fn cmd_list(config: &LucideConfig, filter: Option<&str>, show_aliases: bool) -> Result<()> {
    let matches = |name: &str| filter.map_or(true, |f| name.contains(f));

    for name in registry::names().filter(|n| matches(n)) {
        println!("{}", name);
    }

    for icon in config.extra_icons() {
        if matches(icon.slug()) {
            println!("{} (local)", icon.slug());
        }
    }

    if show_aliases {
        for (alias, slug) in aliases::ALIASES {
            if matches(alias) {
                println!("{} -> {}", alias, slug);
            }
        }
        for icon in custom::CUSTOM_ICONS {
            let slug = lucide_core::to_kebab_case(icon.name());
            if matches(&slug) {
                println!("{} (custom)", slug);
            }
        }
    }

    Ok(())
}

fn cmd_render(
    config: &LucideConfig,
    name: &str,
    style: &StyleArgs,
    output: Option<&Path>,
) -> Result<()> {
    let icon = resolve_icon(config, name)?;
    let svg = icon.render_with(&config.defaults, &style.to_props()?);
    write_markup(&svg, output)
}

fn cmd_png(
    config: &LucideConfig,
    name: &str,
    pixels: u32,
    style: &StyleArgs,
    output: &Path,
) -> Result<()> {
    let icon = resolve_icon(config, name)?;
    let svg = icon.render_with(&config.defaults, &style.to_props()?);

    RasterizedIcon::from_element(&svg, pixels, pixels)
        .and_then(|raster| raster.save_png(output))
        .with_context(|| format!("Failed to rasterize {}", icon.slug()))?;

    info!("Wrote {}x{} PNG to {}", pixels, pixels, output.display());
    Ok(())
}

fn cmd_themed(
    config: &LucideConfig,
    name: &str,
    size: Option<String>,
    color: Option<String>,
    class: Option<String>,
    output: Option<&Path>,
) -> Result<()> {
    let svg = themed_element(config, name, themed_props(size, color, class))?;
    write_markup(&svg, output)
}

fn themed_element(config: &LucideConfig, name: &str, props: ThemedProps) -> Result<Element> {
    let icon = registry::custom(name).with_context(|| {
        let known: Vec<_> = custom::CUSTOM_ICONS.iter().map(|i| i.name()).collect();
        format!("Unknown custom icon '{}'. Available: {:?}", name, known)
    })?;

    Ok(icon.render(Some(&config.theme), &props))
}

fn cmd_import(
    config: &LucideConfig,
    file: &Path,
    name: Option<String>,
    themed: bool,
    style: &StyleArgs,
    output: Option<&Path>,
) -> Result<()> {
    let svg = import_element(config, file, name, themed, style)?;
    write_markup(&svg, output)
}

/// Parse an SVG file and render it with the configured defaults or theme
fn import_element(
    config: &LucideConfig,
    file: &Path,
    name: Option<String>,
    themed: bool,
    style: &StyleArgs,
) -> Result<Element> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let slug = file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("SVG file name is not valid UTF-8")?
        .to_string();
    let name = name.unwrap_or_else(|| lucide_core::to_pascal_case(&slug));

    let svg = if themed {
        let icon = ThemedIcon::from_svg(&name, &source)
            .with_context(|| format!("Failed to import {}", file.display()))?;
        let mut props = themed_props(style.size.clone(), style.color.clone(), style.class.clone());
        for attr in &style.attrs {
            let (attr_name, value) = parse_attr(attr)?;
            props = props.attr(attr_name, value);
        }
        icon.render(Some(&config.theme), &props)
    } else {
        let icon = Icon::from_svg(&name, &slug, &source)
            .with_context(|| format!("Failed to import {}", file.display()))?;
        debug!(name = icon.name(), shapes = icon.shape_count(), "imported icon");
        icon.render_with(&config.defaults, &style.to_props()?)
    };

    Ok(svg)
}

/// Find an icon in the configured directories first, then the bundled set
fn resolve_icon(config: &LucideConfig, name: &str) -> Result<Icon> {
    let wanted = lucide_core::to_kebab_case(name);
    if let Some(icon) = config
        .extra_icons()
        .into_iter()
        .find(|icon| icon.slug() == name || icon.slug() == wanted)
    {
        debug!(slug = icon.slug(), "using local icon");
        return Ok(icon);
    }

    Ok(registry::require(name)?.clone())
}

fn themed_props(size: Option<String>, color: Option<String>, class: Option<String>) -> ThemedProps {
    let mut props = ThemedProps::new();
    if let Some(size) = size {
        props = props.size(parse_dimension(&size));
    }
    if let Some(color) = color {
        props = props.color(color);
    }
    if let Some(class) = class {
        props = props.class(class);
    }
    props
}

fn write_markup(svg: &Element, output: Option<&Path>) -> Result<()> {
    let markup = svg.to_markup();
    match output {
        Some(path) => {
            fs::write(path, &markup)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", markup),
    }
    Ok(())
}

fn parse_dimension(value: &str) -> Dimension {
    match value.trim().parse::<f32>() {
        Ok(n) => Dimension::Number(n),
        Err(_) => Dimension::Css(value.to_string()),
    }
}

fn parse_attr(attr: &str) -> Result<(String, AttrValue)> {
    let (name, value) = attr
        .split_once('=')
        .with_context(|| format!("Invalid attribute '{}': expected NAME=VALUE", attr))?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Invalid attribute '{}': empty name", attr);
    }
    Ok((name.to_string(), AttrValue::from(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucide_core::{IconContext, IconDefaults};

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("48"), Dimension::Number(48.0));
        assert_eq!(parse_dimension("2em"), Dimension::Css("2em".into()));
    }

    #[test]
    fn test_parse_attr() {
        assert_eq!(
            parse_attr("data-x=a=b").unwrap(),
            ("data-x".to_string(), AttrValue::from("a=b"))
        );
        assert!(parse_attr("novalue").is_err());
        assert!(parse_attr("=x").is_err());
    }

    #[test]
    fn test_style_args_to_props() {
        let style = StyleArgs {
            size: Some("48".into()),
            absolute_stroke_width: Some(true),
            class: Some("big".into()),
            attrs: vec!["id=a".into()],
            ..StyleArgs::default()
        };
        let props = style.to_props().unwrap();
        assert_eq!(props.size, Some(Dimension::Number(48.0)));
        assert_eq!(props.absolute_stroke_width, Some(true));
        assert_eq!(props.attrs.get("id"), Some(&AttrValue::from("a")));

        let svg = lucide_icons::X.render(&props);
        assert_eq!(svg.get("stroke-width"), Some(&AttrValue::Number(1.0)));
    }

    #[test]
    fn test_resolve_prefers_bundled_when_no_local() {
        let config = LucideConfig::default();
        assert_eq!(resolve_icon(&config, "close").unwrap().slug(), "x");
        assert!(resolve_icon(&config, "missing-icon").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "lucide",
            "render",
            "arrow-down-a-z",
            "--size",
            "48",
            "--absolute-stroke-width",
            "--attr",
            "id=sort",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { name, style, .. } => {
                assert_eq!(name, "arrow-down-a-z");
                assert_eq!(style.absolute_stroke_width, Some(true));
                assert_eq!(style.attrs, vec!["id=sort".to_string()]);
            }
            _ => panic!("expected render"),
        }
    }

    fn parse_style(args: &[&str]) -> StyleArgs {
        let argv = ["lucide", "render", "x"].iter().chain(args).copied();
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Render { style, .. } => style,
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_absolute_stroke_width_flag_values() {
        assert_eq!(parse_style(&[]).absolute_stroke_width, None);
        assert_eq!(parse_style(&["--absolute-stroke-width"]).absolute_stroke_width, Some(true));
        assert_eq!(
            parse_style(&["--absolute-stroke-width=false"]).absolute_stroke_width,
            Some(false)
        );
        assert_eq!(
            parse_style(&["--absolute-stroke-width", "false", "--size", "48"]).absolute_stroke_width,
            Some(false)
        );
    }

    #[test]
    fn test_absolute_stroke_width_false_overrides_config() {
        let config = LucideConfig {
            defaults: IconDefaults::new().absolute_stroke_width(true),
            ..LucideConfig::default()
        };
        let icon = resolve_icon(&config, "x").unwrap();

        let scaled = parse_style(&["--size", "48"]).to_props().unwrap();
        let svg = icon.render_with(&config.defaults, &scaled);
        assert_eq!(svg.get("stroke-width").and_then(AttrValue::as_number), Some(1.0));

        let off = parse_style(&["--absolute-stroke-width", "false", "--size", "48"])
            .to_props()
            .unwrap();
        let svg = icon.render_with(&config.defaults, &off);
        assert_eq!(svg.get("stroke-width").and_then(AttrValue::as_number), Some(2.0));
    }

    const IMPORTED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512" width="512" fill="none"><rect x="32" y="32" width="448" height="448" rx="64"/><circle cx="256" cy="256" r="96"/></svg>"#;

    fn text(svg: &Element, name: &str) -> Option<String> {
        svg.get(name).map(ToString::to_string)
    }

    #[test]
    fn test_import_renders_through_factory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("badge-check.svg");
        fs::write(&file, IMPORTED).unwrap();

        let config = LucideConfig::default();
        let svg = import_element(&config, &file, None, false, &StyleArgs::default()).unwrap();

        assert_eq!(text(&svg, "viewBox").as_deref(), Some("0 0 24 24"));
        assert_eq!(text(&svg, "width").as_deref(), Some("24"));
        let class = text(&svg, "class").unwrap();
        assert!(class.split(' ').any(|c| c == "lucide-badge-check"));
        let tags: Vec<_> = svg.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, ["rect", "circle"]);
    }

    #[test]
    fn test_import_themed_keeps_root_and_applies_theme() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("badge-check.svg");
        fs::write(&file, IMPORTED).unwrap();

        let config = LucideConfig {
            theme: IconContext::new().color("tomato").size("1.5em").class("brand"),
            ..LucideConfig::default()
        };
        let style = StyleArgs {
            class: Some("wide".into()),
            attrs: vec!["role=img".into()],
            ..StyleArgs::default()
        };
        let svg = import_element(&config, &file, Some("Badge".into()), true, &style).unwrap();

        assert_eq!(text(&svg, "viewBox").as_deref(), Some("0 0 512 512"));
        assert_eq!(text(&svg, "fill").as_deref(), Some("none"));
        assert_eq!(text(&svg, "width").as_deref(), Some("1.5em"));
        assert_eq!(text(&svg, "height").as_deref(), Some("1.5em"));
        assert_eq!(text(&svg, "style").as_deref(), Some("color: tomato"));
        assert_eq!(text(&svg, "class").as_deref(), Some("brand wide"));
        assert_eq!(text(&svg, "role").as_deref(), Some("img"));
        assert_eq!(svg.children.len(), 2);
    }

    #[test]
    fn test_import_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = LucideConfig::default();

        let missing = dir.path().join("missing.svg");
        assert!(import_element(&config, &missing, None, false, &StyleArgs::default()).is_err());

        let broken = dir.path().join("broken.svg");
        fs::write(&broken, "<svg><path").unwrap();
        assert!(import_element(&config, &broken, None, true, &StyleArgs::default()).is_err());
    }

    #[test]
    fn test_themed_uses_config_theme() {
        let config = LucideConfig {
            theme: IconContext::new().color("tomato").style("vertical-align", "middle"),
            ..LucideConfig::default()
        };

        let svg = themed_element(&config, "spinner", ThemedProps::new()).unwrap();
        assert_eq!(text(&svg, "viewBox").as_deref(), Some("0 0 24 24"));
        assert_eq!(text(&svg, "width").as_deref(), Some("1em"));
        assert_eq!(
            text(&svg, "style").as_deref(),
            Some("color: tomato; vertical-align: middle")
        );

        let props = themed_props(Some("32".into()), Some("navy".into()), None);
        let svg = themed_element(&config, "Spinner", props).unwrap();
        assert_eq!(svg.get("width").and_then(AttrValue::as_number), Some(32.0));
        assert_eq!(
            text(&svg, "style").as_deref(),
            Some("color: navy; vertical-align: middle")
        );

        assert!(themed_element(&config, "no-such-icon", ThemedProps::new()).is_err());
    }

    #[test]
    fn test_write_markup_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.svg");
        let svg = lucide_icons::X.render(&IconProps::new());

        write_markup(&svg, Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), svg.to_markup());

        let unwritable = dir.path().join("missing-dir").join("x.svg");
        assert!(write_markup(&svg, Some(&unwritable)).is_err());
    }
}
