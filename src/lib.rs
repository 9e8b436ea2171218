//! # undom
//!
//! Markup tree normalization for renderers.
//!
//! This library translates a generic markup document tree into an
//! intermediate, rendering-agnostic tree (the "transient tree") and
//! normalizes it in two passes, so a downstream renderer receives a tree
//! that already satisfies block/inline containment constraints and the
//! `white-space: normal` subset of CSS whitespace collapsing.
//!
//! ## Quick Start
//!
//! ```
//! use undom::{prepare, DomElement, DomNode};
//!
//! let dom: DomNode = DomElement::new("p")
//!     .with_child(DomNode::text("Hello,\n  world"))
//!     .into();
//!
//! let tree = prepare(&dom);
//! assert_eq!(tree.plain_text(), "Hello, world");
//! ```
//!
//! ## Pipeline
//!
//! - **Translate**: classify each element and map the document tree onto
//!   the transient node variants; unsupported content degrades to
//!   placeholders instead of erroring.
//! - **Hoist**: restructure so blocks never sit inside inline content,
//!   wrapping inline runs and propagating anchor capability across splits.
//! - **Collapse**: apply the whitespace rules within and across text
//!   nodes, then trim the document edges.
//!
//! Each stage is a pure function of its input tree; concurrent calls on
//! independent trees need no coordination ([`prepare_all`] uses Rayon for
//! exactly that).

pub mod classify;
pub mod collapse;
pub mod dom;
pub mod error;
pub mod hoist;
pub mod json;
pub mod model;
pub mod options;
pub mod translate;
pub mod validate;
pub mod visit;

// Re-export commonly used types
pub use classify::{classify, ElementClass};
pub use collapse::{collapse_tree, Collapser};
pub use dom::{Attributes, DomElement, DomNode};
pub use error::{Error, Result};
pub use hoist::hoist;
pub use json::{to_json, JsonFormat};
pub use model::{ContainerNode, EmptyNode, NodeKind, TNode, TextNode};
pub use options::PipelineOptions;
pub use translate::translate;

use rayon::prelude::*;

/// Prepare a document tree for rendering.
///
/// Runs the full pipeline (translate, hoist, collapse) and returns the
/// finished transient tree. Total: any well-formed input tree produces a
/// tree, with unsupported content degraded to placeholders.
pub fn prepare(dom: &DomNode) -> TNode {
    collapse::collapse_tree(hoist::hoist(translate::translate(dom)))
}

/// Prepare a document tree with the configured guards applied.
///
/// Fails with [`Error::DepthExceeded`] when a depth limit is set and
/// exceeded, or with [`Error::InvariantViolation`] when validation is
/// enabled and the hoisted tree is malformed.
pub fn prepare_with_options(dom: &DomNode, options: &PipelineOptions) -> Result<TNode> {
    let translated = translate::translate_with_options(dom, options)?;
    let hoisted = hoist::hoist(translated);
    if options.validate {
        validate::validate(&hoisted)?;
    }
    Ok(collapse::collapse_tree(hoisted))
}

/// Prepare many independent document trees in parallel.
pub fn prepare_all(doms: &[DomNode]) -> Vec<TNode> {
    doms.par_iter().map(prepare).collect()
}

/// Builder for configuring and running the prepare pipeline.
///
/// # Example
///
/// ```
/// use undom::{DomNode, Undom};
///
/// let tree = Undom::new()
///     .with_max_depth(256)
///     .with_validation(true)
///     .run(&DomNode::element("p"))?;
/// # Ok::<(), undom::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Undom {
    options: PipelineOptions,
}

impl Undom {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input nesting depth.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.options = self.options.with_max_depth(limit);
        self
    }

    /// Enable or disable post-hoist structural validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.options = self.options.with_validation(validate);
        self
    }

    /// Run the pipeline on one document tree.
    pub fn run(&self, dom: &DomNode) -> Result<TNode> {
        prepare_with_options(dom, &self.options)
    }

    /// Run the pipeline on many independent document trees in parallel.
    pub fn run_all(&self, doms: &[DomNode]) -> Result<Vec<TNode>> {
        doms.par_iter().map(|dom| self.run(dom)).collect()
    }
}
