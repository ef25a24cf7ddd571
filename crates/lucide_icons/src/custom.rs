//! Hand-drawn icons
//!
//! These do not follow the 24×24 stroke grid, so they carry their own
//! `viewBox` and fill mode and render through the themed factory.

use lucide_core::{IconShape, IconTree, ThemedIcon};

/// Application mark: a filled rounded square with a cut-out bolt
pub const LOGO: ThemedIcon = ThemedIcon::new(
    "Logo",
    IconTree::new(
        &[("viewBox", "0 0 32 32"), ("fill-rule", "evenodd")],
        &[IconShape::new(
            "path",
            &[(
                "d",
                "M8 2h16a6 6 0 0 1 6 6v16a6 6 0 0 1-6 6H8a6 6 0 0 1-6-6V8a6 6 0 0 1 6-6zm10 5-8 11h6l-2 7 8-11h-6z",
            )],
        )],
    ),
);

/// Indeterminate progress ring; the arc is stroked, the track is faded
pub const SPINNER: ThemedIcon = ThemedIcon::new(
    "Spinner",
    IconTree::new(
        &[
            ("viewBox", "0 0 24 24"),
            ("fill", "none"),
            ("stroke-width", "2.5"),
            ("stroke-linecap", "round"),
        ],
        &[
            IconShape::new(
                "circle",
                &[("cx", "12"), ("cy", "12"), ("r", "9"), ("opacity", "0.25")],
            ),
            IconShape::new("path", &[("d", "M21 12a9 9 0 0 0-9-9")]),
        ],
    ),
);

/// Presence indicator with a ring around a solid dot
pub const STATUS_DOT: ThemedIcon = ThemedIcon::new(
    "StatusDot",
    IconTree::new(
        &[("viewBox", "0 0 16 16")],
        &[IconShape::with_children(
            "g",
            &[("stroke", "none")],
            &[
                IconShape::new("circle", &[("cx", "8"), ("cy", "8"), ("r", "7"), ("opacity", "0.3")]),
                IconShape::new("circle", &[("cx", "8"), ("cy", "8"), ("r", "4")]),
            ],
        )],
    ),
);

/// Every custom icon
pub static CUSTOM_ICONS: &[ThemedIcon] = &[LOGO, SPINNER, STATUS_DOT];
