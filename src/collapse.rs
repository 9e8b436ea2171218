//! Whitespace normalization of a hoisted tree.
//!
//! Applies the `white-space: normal` subset of the CSS text processing
//! rules: segment-break transformation and space collapsing within text
//! runs, cross-sibling collapsing between adjacent inline nodes, and a
//! final trim of collapsible whitespace at the tree root. A run of
//! whitespace spanning two sibling text nodes collapses as if it were one
//! run.

use crate::model::{ContainerNode, NodeKind, TNode};
use regex::Regex;

/// U+200B, deletes an adjoining segment break outright.
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Whitespace collapser holding the pre-compiled rewrite rules.
///
/// Construction compiles the run-shaped rules once; reuse one instance when
/// collapsing many trees.
pub struct Collapser {
    break_padding: Regex,
    break_runs: Regex,
    space_runs: Regex,
}

impl Collapser {
    /// Create a collapser.
    pub fn new() -> Self {
        Self {
            break_padding: Regex::new(r"[ \t]*\n[ \t]*").unwrap(),
            break_runs: Regex::new(r"\n+").unwrap(),
            space_runs: Regex::new(r" {2,}").unwrap(),
        }
    }

    /// Collapse a whole tree and trim its outer edges.
    ///
    /// After this call no collapsible whitespace remains at the document
    /// boundary, regardless of how deeply the first and last text nodes are
    /// nested.
    pub fn collapse_tree(&self, root: TNode) -> TNode {
        let mut root = self.collapse_node(root);
        if root.is_collapsible_left() {
            root.trim_left();
        }
        if root.is_collapsible_right() {
            root.trim_right();
        }
        root
    }

    /// Collapse one node, dispatching on its variant.
    pub fn collapse_node(&self, node: TNode) -> TNode {
        match node {
            TNode::Text(mut text) => {
                text.data = self.collapse_text(&text.data);
                TNode::Text(text)
            }
            TNode::Phrasing(container) => TNode::Phrasing(self.collapse_phrasing(container)),
            TNode::Block(container) => TNode::Block(self.collapse_block(container)),
            TNode::Empty(_) => node,
        }
    }

    /// Collapse the character data of a single text run.
    ///
    /// Rules, in order: spaces and tabs adjacent to a segment break are
    /// deleted; consecutive breaks collapse to one; each remaining break is
    /// deleted when a zero-width space adjoins it, deleted when both
    /// neighbors are space-discarding, and otherwise becomes one space;
    /// remaining tabs become spaces; space runs collapse to one space.
    /// U+00A0 and U+FEFF are not collapsible and pass through untouched.
    pub fn collapse_text(&self, data: &str) -> String {
        let trimmed = self.break_padding.replace_all(data, "\n");
        let single = self.break_runs.replace_all(&trimmed, "\n");
        let resolved = resolve_segment_breaks(&single);
        let spaced = resolved.replace('\t', " ");
        self.space_runs.replace_all(&spaced, " ").into_owned()
    }

    /// Collapse an inline container.
    ///
    /// Children collapse first; only Text and Phrasing children survive
    /// (anything else violates the containment invariant and is dropped
    /// with a warning). Adjacent pairs then collapse across the boundary:
    /// a child whose right edge meets a collapsible left edge loses its
    /// trailing space, and is dropped only if that empties it. The final
    /// child has no right neighbor here; its edge is the parent's concern.
    fn collapse_phrasing(&self, mut container: ContainerNode) -> ContainerNode {
        let collapsed = self.collapse_children(std::mem::take(&mut container.children));

        let mut kept = Vec::with_capacity(collapsed.len());
        for child in collapsed {
            match child.kind() {
                NodeKind::Text | NodeKind::Phrasing => kept.push(child),
                kind => {
                    log::warn!(
                        "dropping {kind:?} child of a phrasing node during collapse; \
                         the tree was not hoisted correctly"
                    );
                }
            }
        }

        let mut out = Vec::with_capacity(kept.len());
        let mut iter = kept.into_iter().peekable();
        while let Some(mut child) = iter.next() {
            if let Some(next) = iter.peek() {
                if child.is_collapsible_right() && next.is_collapsible_left() {
                    child.trim_right();
                    if child.is_empty() {
                        continue;
                    }
                }
            }
            out.push(child);
        }

        container.children = out;
        container
    }

    /// Collapse a block container.
    ///
    /// Inter-element whitespace children are dropped unconditionally. Each
    /// remaining child is trimmed on its collapsible edges and dropped if
    /// that leaves it empty. Both edges are trimmed when both are
    /// collapsible; a collapsed tree must re-collapse to itself.
    fn collapse_block(&self, mut container: ContainerNode) -> ContainerNode {
        let collapsed = self.collapse_children(std::mem::take(&mut container.children));

        let mut out = Vec::with_capacity(collapsed.len());
        for mut child in collapsed {
            if child.is_whitespace() {
                continue;
            }
            if child.is_collapsible_left() {
                child.trim_left();
            }
            if child.is_collapsible_right() {
                child.trim_right();
            }
            if child.is_empty() {
                continue;
            }
            out.push(child);
        }

        container.children = out;
        container
    }

    fn collapse_children(&self, children: Vec<TNode>) -> Vec<TNode> {
        children
            .into_iter()
            .map(|child| self.collapse_node(child))
            .collect()
    }
}

impl Default for Collapser {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse a whole tree with a fresh [`Collapser`].
pub fn collapse_tree(root: TNode) -> TNode {
    Collapser::new().collapse_tree(root)
}

/// Resolve each remaining segment break against its immediate neighbors.
fn resolve_segment_breaks(data: &str) -> String {
    let chars: Vec<char> = data.chars().collect();
    let mut out = String::with_capacity(data.len());

    for (i, &ch) in chars.iter().enumerate() {
        if ch != '\n' {
            out.push(ch);
            continue;
        }
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();

        if prev == Some(ZERO_WIDTH_SPACE) || next == Some(ZERO_WIDTH_SPACE) {
            continue;
        }
        if let (Some(p), Some(n)) = (prev, next) {
            if is_space_discarding(p) && is_space_discarding(n) {
                continue;
            }
        }
        out.push(' ');
    }
    out
}

/// Characters around which a segment break is discarded rather than turned
/// into a space: East Asian wide and fullwidth ranges. Hangul is excluded;
/// Korean text keeps its spaces.
fn is_space_discarding(ch: char) -> bool {
    matches!(ch as u32,
        0x2E80..=0x303E          // CJK radicals, Kangxi, CJK symbols and punctuation
        | 0x3041..=0x30FF        // hiragana, katakana
        | 0x3400..=0x4DBF        // CJK extension A
        | 0x4E00..=0x9FFF        // CJK unified ideographs
        | 0xF900..=0xFAFF        // CJK compatibility ideographs
        | 0xFF01..=0xFF60        // fullwidth forms
        | 0xFF61..=0xFF9F        // halfwidth katakana and punctuation
        | 0x20000..=0x2FA1F      // CJK extensions B..F, supplement
    )
}
