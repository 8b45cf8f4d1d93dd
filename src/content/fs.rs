//! Content index over a directory of Markdown files.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;

use super::{ContentIndex, ContentNode, DEFAULT_KIND};
use crate::{debug, debug_do};
use crate::markdown::split_frontmatter;
use crate::toc::{SlugMode, slugify};

/// Index built by scanning `*.md` files under a content root.
///
/// Files are read and parsed in parallel. A file that cannot be read or
/// whose front matter does not parse is skipped.
#[derive(Debug, Clone, Default)]
pub struct FsContentIndex {
    nodes: Vec<ContentNode>,
}

impl FsContentIndex {
    pub fn scan(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            bail!("content directory not found: {}", root.display());
        }

        let files = collect_markdown_files(root);
        debug!("content"; "found {} markdown files in {}", files.len(), root.display());

        let mut nodes: Vec<ContentNode> = files
            .par_iter()
            .filter_map(|path| match load_node(root, path) {
                Ok(node) => Some(node),
                Err(err) => {
                    debug!("content"; "skipping {}: {:#}", path.display(), err);
                    None
                }
            })
            .collect();

        // Newest first; undated pages last, then by path for a stable order.
        nodes.sort_by(|a, b| {
            b.meta
                .date
                .cmp(&a.meta.date)
                .then_with(|| a.path.cmp(&b.path))
        });

        debug_do! {
            let drafts = nodes.iter().filter(|n| n.meta.draft).count();
            debug!("content"; "indexed {} nodes ({} drafts)", nodes.len(), drafts);
        }

        Ok(Self { nodes })
    }

    /// Look up a node by permalink.
    pub fn get(&self, permalink: &str) -> Option<&ContentNode> {
        self.nodes.iter().find(|n| n.permalink == permalink)
    }
}

impl ContentIndex for FsContentIndex {
    fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }
}

fn collect_markdown_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect()
}

fn load_node(root: &Path, path: &Path) -> Result<ContentNode> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let (meta, _) = split_frontmatter(&content)?;

    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    let kind = meta
        .kind
        .clone()
        .or_else(|| section_of(&relative))
        .unwrap_or_else(|| DEFAULT_KIND.to_string());

    Ok(ContentNode {
        permalink: permalink(&relative),
        path: relative,
        kind,
        meta,
    })
}

/// First directory of a relative path, if the file is not at the root.
fn section_of(relative: &Path) -> Option<String> {
    let mut components = relative.components();
    let first = components.next()?;
    components.next()?;
    match first {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

/// `/<slugified segments>` without the extension; `index.md` maps to its
/// directory.
fn permalink(relative: &Path) -> String {
    let stem = relative.with_extension("");
    let mut segments: Vec<String> = stem
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(slugify(&name.to_string_lossy(), SlugMode::Full)),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect();

    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    format!("/{}", segments.join("/"))
}
