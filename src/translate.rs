//! Translation of the input document tree into the transient tree.
//!
//! One downward pass, total and pure: every document node maps to some
//! transient node, worst case a placeholder. Unsupported content degrades
//! to not-rendered rather than erroring.

use crate::classify::{classify, ElementClass};
use crate::dom::{self, DomElement, DomNode};
use crate::error::{Error, Result};
use crate::model::{ContainerNode, EmptyNode, TNode, TextNode};
use crate::options::PipelineOptions;

/// Translate a document node (and its subtree) into a transient node.
pub fn translate(node: &DomNode) -> TNode {
    match node {
        DomNode::Text { data } => TNode::Text(TextNode::new(data.clone())),
        DomNode::Element(el) => translate_element(el),
    }
}

/// Translate with the configured guards applied.
///
/// When a depth limit is set the input is measured first (iteratively, so
/// the guard cannot itself overflow) and refused with
/// [`Error::DepthExceeded`] before any recursion happens.
pub fn translate_with_options(node: &DomNode, options: &PipelineOptions) -> Result<TNode> {
    if let Some(limit) = options.max_depth {
        let depth = dom::depth(node);
        if depth > limit {
            return Err(Error::DepthExceeded { depth, limit });
        }
    }
    Ok(translate(node))
}

fn translate_element(el: &DomElement) -> TNode {
    match classify(&el.tag_name) {
        ElementClass::Anchor => {
            let href = el.href().unwrap_or_default().to_owned();
            let mut container = ContainerNode::new(&el.tag_name, el.attributes.clone());
            container.href = Some(href);
            container.children = translate_children(el);
            TNode::Phrasing(container)
        }

        ElementClass::TextPhrasing => match el.children.as_slice() {
            // Childless inline elements become tagged empty text so later
            // passes still see their origin.
            [] => TNode::Text(TextNode {
                data: String::new(),
                tag_name: Some(el.tag_name.clone()),
                attributes: el.attributes.clone(),
            }),
            // A trivial wrapper around a single text child collapses into
            // one tagged text node.
            [DomNode::Text { data }] => TNode::Text(TextNode {
                data: data.clone(),
                tag_name: Some(el.tag_name.clone()),
                attributes: el.attributes.clone(),
            }),
            _ => {
                let mut container = ContainerNode::new(&el.tag_name, el.attributes.clone());
                container.children = translate_children(el);
                TNode::Phrasing(container)
            }
        },

        ElementClass::Embedded
        | ElementClass::Sectioning
        | ElementClass::Grouping
        | ElementClass::Tabular => {
            let mut container = ContainerNode::new(&el.tag_name, el.attributes.clone());
            container.children = translate_children(el);
            TNode::Block(container)
        }

        // Interactive content is unsupported; the subtree is dropped, not
        // translated.
        ElementClass::Interactive | ElementClass::Untranslatable => {
            log::debug!("dropping untranslatable element <{}>", el.tag_name);
            TNode::Empty(EmptyNode::new(&el.tag_name, el.attributes.clone()))
        }
    }
}

fn translate_children(el: &DomElement) -> Vec<TNode> {
    el.children.iter().map(translate).collect()
}
