//! Short and legacy icon names
//!
//! Every alias is also listed in [`ALIASES`] so the registry can resolve it
//! from a string.

pub use crate::icons::{
    ARROW_DOWN_A_Z as ARROW_DOWN_AZ, ARROW_UP_NARROW_WIDE as SORT_ASC, CLOCK as TIME,
    GRID_3X3 as GRID, HEART as FAVORITE, HOUSE as HOME, LOADER_CIRCLE as LOADER_2,
    LOG_OUT as SIGN_OUT, PENCIL as EDIT_2, PLUS as ADD, REFRESH_CW as RELOAD,
    TRASH_2 as DELETE, X as CLOSE,
};

/// `(alias, slug)` pairs
pub const ALIASES: &[(&str, &str)] = &[
    ("add", "plus"),
    ("arrow-down-az", "arrow-down-a-z"),
    ("close", "x"),
    ("delete", "trash-2"),
    ("edit-2", "pencil"),
    ("favorite", "heart"),
    ("grid", "grid-3x3"),
    ("home", "house"),
    ("loader-2", "loader-circle"),
    ("reload", "refresh-cw"),
    ("sign-out", "log-out"),
    ("sort-asc", "arrow-up-narrow-wide"),
    ("time", "clock"),
];

/// The slug an alias points to
pub fn resolve(alias: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, slug)| *slug)
}
