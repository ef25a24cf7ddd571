//! Generates `icons.rs` from the SVG files in `icons/`
//!
//! Every `icons/<slug>.svg` becomes `pub const <SLUG>: Icon`, with the root
//! attributes discarded (the factory supplies them) and the child shapes
//! kept in document order. `ICONS` lists every icon sorted by slug.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use roxmltree::{Document, Node};
use walkdir::WalkDir;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    let icons_dir = manifest_dir.join("icons");

    println!("cargo:rerun-if-changed=icons");

    let mut entries: Vec<(String, PathBuf)> = WalkDir::new(&icons_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .filter_map(|e| {
            let slug = e.path().file_stem()?.to_str()?.to_string();
            Some((slug, e.path().to_path_buf()))
        })
        .collect();
    entries.sort();

    let mut out = String::new();
    out.push_str("// Generated by build.rs from icons/*.svg - DO NOT EDIT\n\n");

    for (slug, path) in &entries {
        let source = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
        let doc = Document::parse(&source)
            .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e));
        let root = doc.root_element();
        assert_eq!(
            root.tag_name().name(),
            "svg",
            "{} must have an <svg> root",
            path.display()
        );

        writeln!(out, "/// {}", slug.replace('-', " ")).unwrap();
        writeln!(
            out,
            "pub const {}: Icon = Icon::new({:?}, {:?}, &[",
            const_name(slug),
            display_name(slug),
            slug
        )
        .unwrap();
        for shape in root.children().filter(Node::is_element) {
            write_shape(&mut out, shape, 1);
        }
        out.push_str("]);\n\n");
    }

    out.push_str("/// Every bundled icon, sorted by slug\npub static ICONS: &[Icon] = &[\n");
    for (slug, _) in &entries {
        writeln!(out, "    {},", const_name(slug)).unwrap();
    }
    out.push_str("];\n");

    fs::write(out_dir.join("icons.rs"), out).expect("failed to write icons.rs");
}

fn write_shape(out: &mut String, node: Node<'_, '_>, depth: usize) {
    let indent = "    ".repeat(depth);
    write!(out, "{}IconShape {{ tag: {:?}, attrs: &[", indent, node.tag_name().name()).unwrap();
    for attr in node.attributes() {
        write!(out, "({:?}, {:?}), ", attr.name(), attr.value()).unwrap();
    }
    out.push_str("], children: &[");

    let children: Vec<_> = node.children().filter(Node::is_element).collect();
    if children.is_empty() {
        out.push_str("] },\n");
    } else {
        out.push('\n');
        for child in children {
            write_shape(out, child, depth + 1);
        }
        writeln!(out, "{}] }},", indent).unwrap();
    }
}

fn const_name(slug: &str) -> String {
    slug.to_uppercase().replace('-', "_")
}

fn display_name(slug: &str) -> String {
    slug.split('-')
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
