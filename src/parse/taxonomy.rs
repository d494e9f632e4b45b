//! Parses the tab/comma-delimited flat-view taxonomy format into a [`Tree`].

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::node::Tree;
use crate::error::{PargenfsError, Result};

/// Matches a leading dotted index (`1.2.3.`) up to and including its
/// trailing dot, followed by one of the recognized separators `*`, `,`, or
/// a space. The separator itself is consumed by the match but not part of
/// the captured index.
static INDEX_PRIMARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([.\d]+)[*, ]").unwrap());

/// A comma-delimited name: a leading separator, then Unicode letters,
/// spaces, hyphens, or apostrophes, optionally followed by a trailing comma.
static NAME_PRIMARY: Lazy<Regex> = Lazy::new(|| Regex::new(r",([\p{L} '-]+),?").unwrap());

/// Fallback index pattern for lines that don't match [`INDEX_PRIMARY`]: a
/// dotted index plus one more arbitrary character, followed by a space.
static INDEX_FALLBACK: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.\d]+.?) ").unwrap());

/// Fallback name pattern: a leading space, then the same name charset.
static NAME_FALLBACK: Lazy<Regex> = Lazy::new(|| Regex::new(r" ([\p{L} '-]+),?").unwrap());

/// One (index, name) pair recognized on a taxonomy source line.
struct Entry {
    index: String,
    name: String,
}

/// Parses a taxonomy source file into a [`Tree`].
///
/// Builds the tree by walking back up the parent chain while the current
/// parent's index is not a *prefix* of the new node's index (the strict
/// reading of the original format, not a substring test). If every node
/// but the first has the first node's index as a prefix, the first node
/// becomes the root; otherwise a synthetic empty-indexed `"root"` is
/// inserted ahead of every parsed entry.
pub fn parse_taxonomy(path: impl AsRef<Path>) -> Result<Tree> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| PargenfsError::io(path, e))?;

    let entries: Vec<Entry> = contents.lines().filter_map(parse_line).collect();
    if entries.is_empty() {
        return Err(PargenfsError::taxonomy_parse(
            path,
            "no recognizable index/name pairs in source",
        ));
    }

    let root_index = entries[0].index.clone();
    let root_found = entries[1..].iter().all(|e| e.index.starts_with(&root_index));

    let (mut tree, rest): (Tree, &[Entry]) = if root_found {
        (Tree::new(entries[0].index.clone(), entries[0].name.clone()), &entries[1..])
    } else {
        (Tree::new("", "root"), &entries[..])
    };

    let mut curr_parent = tree.root();
    for entry in rest {
        loop {
            if entry.index.starts_with(&tree.node(curr_parent).index) {
                break;
            }
            match tree.parent(curr_parent) {
                Some(parent) => curr_parent = parent,
                None => {
                    return Err(PargenfsError::taxonomy_parse(
                        path,
                        format!("no ancestor found whose index prefixes `{}`", entry.index),
                    ));
                }
            }
        }
        curr_parent = tree.add_child(curr_parent, entry.index.clone(), entry.name.clone());
    }

    Ok(tree)
}

/// Recognizes one `(index, name)` pair on a line, trying the primary
/// pattern pair first and falling back to the secondary pair.
fn parse_line(line: &str) -> Option<Entry> {
    if let (Some(index_m), Some(name_m)) = (INDEX_PRIMARY.find(line), NAME_PRIMARY.find(line)) {
        return Some(Entry {
            index: strip_separator(index_m.as_str()),
            name: strip_name(name_m.as_str()).to_lowercase(),
        });
    }
    if let (Some(index_m), Some(name_m)) = (INDEX_FALLBACK.find(line), NAME_FALLBACK.find(line)) {
        return Some(Entry {
            index: strip_separator(index_m.as_str()),
            name: strip_name(name_m.as_str()).to_lowercase(),
        });
    }
    None
}

/// Drops the trailing one-character separator a regex match consumed along
/// with the dotted index.
fn strip_separator(matched: &str) -> String {
    matched[..matched.len() - 1].to_string()
}

/// Drops the leading separator character and a trailing comma if present,
/// then trims incidental whitespace — the name charset includes a space so
/// a `", name"` source separator (comma-space) would otherwise leave a
/// leading space baked into the name.
fn strip_name(matched: &str) -> &str {
    let rest = &matched[1..];
    let rest = rest.strip_suffix(',').unwrap_or(rest);
    rest.trim()
}
