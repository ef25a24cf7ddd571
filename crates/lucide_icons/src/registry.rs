//! Icon lookup by name
//!
//! Names resolve in order: exact slug, alias, then display name
//! (`ArrowDownAZ`, matched case-insensitively).

use lucide_core::{to_kebab_case, Icon, IconError, ThemedIcon};
use tracing::debug;

use crate::aliases;
use crate::custom::CUSTOM_ICONS;
use crate::icons::ICONS;

/// Look up a bundled icon by its exact slug
pub fn get(slug: &str) -> Option<&'static Icon> {
    ICONS
        .binary_search_by(|icon| icon.slug().cmp(slug))
        .ok()
        .map(|index| &ICONS[index])
}

/// Look up a bundled icon by slug, alias or display name
pub fn lookup(name: &str) -> Option<&'static Icon> {
    let found = get(name)
        .or_else(|| aliases::resolve(name).and_then(get))
        .or_else(|| get(&to_kebab_case(name)))
        .or_else(|| ICONS.iter().find(|icon| icon.name().eq_ignore_ascii_case(name)));

    if found.is_none() {
        debug!(name, "icon not found");
    }
    found
}

/// Like [`lookup`], reporting a miss as an error
pub fn require(name: &str) -> Result<&'static Icon, IconError> {
    lookup(name).ok_or_else(|| IconError::UnknownIcon(name.to_string()))
}

/// Slugs of all bundled icons, sorted
pub fn names() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|icon| icon.slug())
}

/// Look up a custom icon by display name, ignoring case and hyphens
pub fn custom(name: &str) -> Option<&'static ThemedIcon> {
    let wanted = to_kebab_case(name);
    let found = CUSTOM_ICONS
        .iter()
        .find(|icon| to_kebab_case(icon.name()) == wanted);

    if found.is_none() {
        debug!(name, "custom icon not found");
    }
    found
}
