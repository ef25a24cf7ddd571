//! Lucide icons
//!
//! The bundled icon set, generated at build time from `icons/*.svg`. Each
//! icon is a `const` [`Icon`] named after its file (`arrow-down-a-z.svg`
//! becomes [`ARROW_DOWN_A_Z`]); unused icons are removed by dead code
//! elimination.
//!
//! - [`aliases`]: short and legacy names for common icons
//! - [`custom`]: hand-drawn icons rendered through the themed factory
//! - [`registry`]: lookup by slug, alias or display name
//!
//! # Example
//!
//! ```rust
//! use lucide_icons::{IconProps, ARROW_DOWN_A_Z};
//!
//! let svg = ARROW_DOWN_A_Z.render(&IconProps::new().class("sort"));
//! assert_eq!(
//!     svg.get("class").unwrap().to_string(),
//!     "lucide lucide-arrow-down-a-z sort"
//! );
//! ```

pub mod aliases;
pub mod custom;
pub mod registry;

mod icons {
    use lucide_core::{Icon, IconShape};

    include!(concat!(env!("OUT_DIR"), "/icons.rs"));
}

pub use icons::*;

pub use lucide_core::{
    Dimension, Element, Icon, IconContext, IconDefaults, IconError, IconProps, ThemedIcon,
    ThemedProps,
};
