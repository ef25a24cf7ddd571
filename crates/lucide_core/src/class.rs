//! Class name helpers

/// Convert a display name to hyphenated lowercase
///
/// A hyphen goes before every uppercase letter that follows another
/// character, so runs of capitals split letter by letter:
/// `ArrowDownAZ` becomes `arrow-down-a-z`. Digits stay attached to what
/// precedes them (`Grid3x3` becomes `grid3x3`).
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_uppercase() {
            if let Some(p) = prev {
                if p != '-' && p != '_' {
                    out.push('-');
                }
            }
        }
        if c == '_' {
            out.push('-');
        } else {
            out.extend(c.to_lowercase());
        }
        prev = Some(c);
    }

    out
}

/// Convert a hyphenated slug to a display name (`arrow-down-a-z` to `ArrowDownAZ`)
pub fn to_pascal_case(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Join class lists, dropping empties and repeated names
///
/// Each part may itself hold several space-separated classes. The first
/// occurrence of a class fixes its position.
pub fn merge_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    for part in parts {
        for class in part.as_ref().split_whitespace() {
            if !seen.iter().any(|c| c == class) {
                seen.push(class.to_string());
            }
        }
    }
    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_splits_capital_runs() {
        assert_eq!(to_kebab_case("ArrowDownAZ"), "arrow-down-a-z");
        assert_eq!(to_kebab_case("LoaderCircle"), "loader-circle");
        assert_eq!(to_kebab_case("X"), "x");
        assert_eq!(to_kebab_case("Grid3x3"), "grid3x3");
        assert_eq!(to_kebab_case("Trash2"), "trash2");
    }

    #[test]
    fn test_kebab_is_idempotent_on_slugs() {
        assert_eq!(to_kebab_case("arrow-down-a-z"), "arrow-down-a-z");
        assert_eq!(to_kebab_case("log_out"), "log-out");
    }

    #[test]
    fn test_pascal_round_trips_letter_slugs() {
        assert_eq!(to_pascal_case("arrow-down-a-z"), "ArrowDownAZ");
        assert_eq!(to_pascal_case("trash-2"), "Trash2");
        assert_eq!(to_kebab_case(&to_pascal_case("arrow-up-narrow-wide")), "arrow-up-narrow-wide");
    }

    #[test]
    fn test_merge_dedupes_and_trims() {
        assert_eq!(
            merge_classes(["lucide", "  lucide-x ", "", "lucide big", "big  red"]),
            "lucide lucide-x big red"
        );
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(merge_classes(Vec::<String>::new()), "");
        assert_eq!(merge_classes(["", "   "]), "");
    }
}
