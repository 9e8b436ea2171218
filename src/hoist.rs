//! Structural normalization of a translated tree.
//!
//! Enforces the block/inline containment constraints: a Phrasing node never
//! directly contains a Block child, and every run of inline children under a
//! Block is wrapped in a synthetic Phrasing node. Anchor capability survives
//! the reshaping: when an anchor's inline content is split around a block
//! descendant, each synthesized wrapper and the promoted block carry the
//! original href.

use crate::model::{ContainerNode, TNode};

/// Hoist a node, returning its replacement.
///
/// The returned node may be a different variant than the input (a Phrasing
/// containing block content comes back as a Block); the caller replaces its
/// child slot with the result. Children are processed first, so a child that
/// becomes a Block through its own hoisting still triggers promotion here.
pub fn hoist(node: TNode) -> TNode {
    match node {
        TNode::Text(_) | TNode::Empty(_) => node,

        TNode::Phrasing(mut container) => {
            hoist_children(&mut container.children);
            if container
                .children
                .iter()
                .any(|child| matches!(child, TNode::Block(_)))
            {
                promote(container)
            } else {
                TNode::Phrasing(container)
            }
        }

        TNode::Block(mut container) => {
            hoist_children(&mut container.children);
            if !container.children.is_empty() {
                let children = std::mem::take(&mut container.children);
                container.children = group(children, None);
            }
            TNode::Block(container)
        }
    }
}

fn hoist_children(children: &mut Vec<TNode>) {
    let hoisted: Vec<TNode> = std::mem::take(children).into_iter().map(hoist).collect();
    *children = hoisted;
}

/// Promote a Phrasing node holding block content into a Block node.
///
/// The new Block copies the Phrasing's tag and attributes; the Phrasing
/// itself becomes the wrapper template for the regrouped children, so its
/// anchor payload (if any) flows into every synthesized wrapper and into
/// block children that have no anchor of their own.
fn promote(phrasing: ContainerNode) -> TNode {
    log::debug!(
        "promoting phrasing node <{}> with block content",
        phrasing.tag_name.as_deref().unwrap_or("anonymous"),
    );
    let anchor = phrasing.href;
    let grouped = group(phrasing.children, anchor.as_deref());
    TNode::Block(ContainerNode {
        tag_name: phrasing.tag_name,
        attributes: phrasing.attributes,
        children: grouped,
        href: None,
    })
}

/// Regroup a child sequence so that every run of inline children sits in a
/// synthetic Phrasing wrapper between block children.
///
/// Walks left to right with one current wrapper (a marker copy of the
/// template, carrying only its anchor payload). Inline children accumulate
/// in the wrapper; a Block child flushes the non-empty wrapper and is
/// emitted directly, inheriting the template's href when it has none.
/// Placeholders never split a run: an open run carries them along, otherwise
/// they stay direct children in position. Document order is preserved
/// exactly.
fn group(children: Vec<TNode>, anchor: Option<&str>) -> Vec<TNode> {
    let mut out = Vec::with_capacity(children.len());
    let mut run = ContainerNode::wrapper(anchor);

    for child in children {
        match child {
            TNode::Block(mut block) => {
                if !run.children.is_empty() {
                    let flushed = std::mem::replace(&mut run, ContainerNode::wrapper(anchor));
                    out.push(TNode::Phrasing(flushed));
                }
                if block.href.is_none() {
                    block.href = anchor.map(str::to_owned);
                }
                out.push(TNode::Block(block));
            }
            TNode::Empty(_) if run.children.is_empty() => out.push(child),
            inline => run.children.push(inline),
        }
    }

    if !run.children.is_empty() {
        out.push(TNode::Phrasing(run));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmptyNode, NodeKind, TextNode};

    fn text(data: &str) -> TNode {
        TNode::Text(TextNode::new(data))
    }

    fn block(tag: &str) -> TNode {
        TNode::Block(ContainerNode::new(tag, Default::default()))
    }

    fn kinds(node: &TNode) -> Vec<NodeKind> {
        node.children().iter().map(TNode::kind).collect()
    }

    #[test]
    fn test_leaves_pass_through() {
        assert_eq!(hoist(text("x")), text("x"));
        let placeholder = TNode::Empty(EmptyNode::default());
        assert_eq!(hoist(placeholder.clone()), placeholder);
    }

    #[test]
    fn test_block_wraps_inline_runs() {
        let node = TNode::Block(ContainerNode {
            tag_name: Some("p".into()),
            children: vec![text("a"), text("b"), block("img"), text("c")],
            ..ContainerNode::default()
        });

        let hoisted = hoist(node);
        assert_eq!(
            kinds(&hoisted),
            vec![NodeKind::Phrasing, NodeKind::Block, NodeKind::Phrasing]
        );
        assert_eq!(hoisted.children()[0].children().len(), 2);
        // Synthetic wrappers are anonymous and carry no anchor.
        assert_eq!(hoisted.children()[0].tag_name(), None);
        assert!(!hoisted.children()[0].is_anchor());
    }

    #[test]
    fn test_block_with_only_blocks_is_untouched() {
        let node = TNode::Block(ContainerNode {
            tag_name: Some("div".into()),
            children: vec![block("p"), block("p")],
            ..ContainerNode::default()
        });
        let hoisted = hoist(node);
        assert_eq!(kinds(&hoisted), vec![NodeKind::Block, NodeKind::Block]);
    }

    #[test]
    fn test_phrasing_without_blocks_is_untouched() {
        let node = TNode::Phrasing(ContainerNode {
            tag_name: Some("em".into()),
            children: vec![text("a"), text("b")],
            ..ContainerNode::default()
        });
        let hoisted = hoist(node);
        assert_eq!(hoisted.kind(), NodeKind::Phrasing);
        assert_eq!(hoisted.children().len(), 2);
    }

    #[test]
    fn test_phrasing_with_block_is_promoted() {
        let node = TNode::Phrasing(ContainerNode {
            tag_name: Some("span".into()),
            children: vec![text("before"), block("img"), text("after")],
            ..ContainerNode::default()
        });

        let hoisted = hoist(node);
        assert_eq!(hoisted.kind(), NodeKind::Block);
        assert_eq!(hoisted.tag_name(), Some("span"));
        assert_eq!(
            kinds(&hoisted),
            vec![NodeKind::Phrasing, NodeKind::Block, NodeKind::Phrasing]
        );
    }

    #[test]
    fn test_anchor_propagation_across_split() {
        let node = TNode::Phrasing(ContainerNode {
            tag_name: Some("a".into()),
            children: vec![text("before"), block("img"), text("after")],
            href: Some("https://x.test/".into()),
            ..ContainerNode::default()
        });

        let hoisted = hoist(node);
        // The promoted root is a plain Block; the link rides on the pieces.
        assert_eq!(hoisted.kind(), NodeKind::Block);
        assert!(!hoisted.is_anchor());
        for child in hoisted.children() {
            assert_eq!(child.href(), Some("https://x.test/"));
        }
    }

    #[test]
    fn test_nested_hoisting_bubbles_blocks_up() {
        // span > em > img: both inline ancestors become blocks.
        let inner = TNode::Phrasing(ContainerNode {
            tag_name: Some("em".into()),
            children: vec![block("img")],
            ..ContainerNode::default()
        });
        let outer = TNode::Phrasing(ContainerNode {
            tag_name: Some("span".into()),
            children: vec![inner],
            ..ContainerNode::default()
        });

        let hoisted = hoist(outer);
        assert_eq!(hoisted.kind(), NodeKind::Block);
        assert_eq!(hoisted.tag_name(), Some("span"));
        assert_eq!(kinds(&hoisted), vec![NodeKind::Block]);
        assert_eq!(hoisted.children()[0].tag_name(), Some("em"));
    }

    #[test]
    fn test_existing_anchor_is_not_overwritten() {
        let inner = TNode::Block(ContainerNode {
            tag_name: Some("img".into()),
            href: Some("https://inner.test/".into()),
            ..ContainerNode::default()
        });
        let node = TNode::Phrasing(ContainerNode {
            tag_name: Some("a".into()),
            children: vec![inner],
            href: Some("https://outer.test/".into()),
            ..ContainerNode::default()
        });

        let hoisted = hoist(node);
        assert_eq!(hoisted.children()[0].href(), Some("https://inner.test/"));
    }

    #[test]
    fn test_placeholders_ride_open_runs() {
        let node = TNode::Block(ContainerNode {
            tag_name: Some("p".into()),
            children: vec![
                text("a"),
                TNode::Empty(EmptyNode::default()),
                text("b"),
                block("img"),
                TNode::Empty(EmptyNode::default()),
            ],
            ..ContainerNode::default()
        });

        let hoisted = hoist(node);
        // [wrapper{a, placeholder, b}, img, placeholder]: the second
        // placeholder follows a flush, so no run is open and it stays put.
        assert_eq!(
            kinds(&hoisted),
            vec![NodeKind::Phrasing, NodeKind::Block, NodeKind::Empty]
        );
        assert_eq!(
            hoisted.children()[0]
                .children()
                .iter()
                .map(TNode::kind)
                .collect::<Vec<_>>(),
            vec![NodeKind::Text, NodeKind::Empty, NodeKind::Text]
        );
    }

    #[test]
    fn test_document_order_preserved() {
        let node = TNode::Block(ContainerNode {
            tag_name: Some("div".into()),
            children: vec![text("1"), block("hr"), text("2"), block("hr"), text("3")],
            ..ContainerNode::default()
        });

        let hoisted = hoist(node);
        assert_eq!(hoisted.plain_text(), "123");
        assert_eq!(
            kinds(&hoisted),
            vec![
                NodeKind::Phrasing,
                NodeKind::Block,
                NodeKind::Phrasing,
                NodeKind::Block,
                NodeKind::Phrasing
            ]
        );
    }
}
