//! Lucide configuration file handling
//!
//! `lucide.toml` is optional. It holds:
//! - `[defaults]` - shared defaults for bundled icons
//! - `[theme]` - context for custom (themed) icons
//! - `[icons]` - extra directories of `*.svg` icons

use anyhow::{Context, Result};
use lucide_core::{to_pascal_case, Icon, IconContext, IconDefaults};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Default configuration file name
pub const CONFIG_FILE: &str = "lucide.toml";

/// Configuration stored in lucide.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LucideConfig {
    #[serde(default)]
    pub defaults: IconDefaults,
    #[serde(default)]
    pub theme: IconContext,
    #[serde(default)]
    pub icons: IconsConfig,
    /// Directory the configuration was loaded from; relative icon dirs resolve against it
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Extra icon sources
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct IconsConfig {
    /// Directories scanned for `*.svg` files; the file stem is the slug
    #[serde(default)]
    pub dirs: Vec<PathBuf>,
}

impl LucideConfig {
    /// Load from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: LucideConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `lucide.toml` from a directory, falling back to defaults if absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self {
                base_dir: dir.to_path_buf(),
                ..Self::default()
            })
        }
    }

    /// Load every icon from the configured directories
    ///
    /// Unreadable or malformed files are skipped with a warning.
    pub fn extra_icons(&self) -> Vec<Icon> {
        let mut icons = Vec::new();

        for dir in &self.icons.dirs {
            let dir = self.base_dir.join(dir);
            if !dir.is_dir() {
                warn!(dir = %dir.display(), "icon directory not found");
                continue;
            }

            for entry in WalkDir::new(&dir)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
            {
                let path = entry.path();
                let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };

                let loaded = fs::read_to_string(path)
                    .map_err(anyhow::Error::from)
                    .and_then(|source| {
                        Icon::from_svg(to_pascal_case(slug), slug, &source).map_err(Into::into)
                    });
                match loaded {
                    Ok(icon) => icons.push(icon),
                    Err(e) => warn!(path = %path.display(), "skipping icon: {}", e),
                }
            }
        }

        icons.sort_by(|a, b| a.slug().cmp(b.slug()));
        icons
    }
}
