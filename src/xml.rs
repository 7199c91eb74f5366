// ABOUTME: Generic XML tree navigation helpers over roxmltree nodes
// ABOUTME: Finds named children, warns on absent nodes, and coerces text with zero defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! XML tree navigation
//!
//! Absence and invalid content are kept apart: an absent optional node yields
//! the type's zero value, while a present node with unparseable text is an
//! error the caller must surface.

use std::str::FromStr;

use roxmltree::Node;
use tcx_core::errors::{TcxError, TcxResult};
use tracing::warn;

/// What to do when [`find_child`] does not find the requested element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnMissing {
    /// Emit a `warn!` diagnostic
    #[default]
    Warn,
    /// Stay quiet; the element is genuinely optional
    Silent,
}

/// Element children of `node`, in document order
pub fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

/// First element child of `node`, whatever its name
#[must_use]
pub fn first_child_element<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    child_elements(node).next()
}

/// First immediate element child of `node` whose tag name equals `name`
///
/// Namespaces are ignored; TCX files declare a default namespace and
/// matching on the local name keeps lookups readable.
#[must_use]
pub fn find_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
    on_missing: OnMissing,
) -> Option<Node<'a, 'input>> {
    let found = child_elements(node).find(|child| child.tag_name().name() == name);

    if found.is_none() && on_missing == OnMissing::Warn {
        warn!(
            element = name,
            parent = node.tag_name().name(),
            "Element not found"
        );
    }

    found
}

/// Like [`find_child`] with a warning, but absence is a structural error
///
/// # Errors
///
/// Returns [`TcxError::MissingElement`] if no child named `name` exists
pub fn require_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> TcxResult<Node<'a, 'input>> {
    find_child(node, name, OnMissing::Warn)
        .ok_or_else(|| TcxError::missing_element(name, node.tag_name().name()))
}

/// Trimmed text content of a required element
///
/// # Errors
///
/// Returns [`TcxError::MissingElement`] if the element has no text
pub fn require_text<'a>(node: Node<'a, '_>) -> TcxResult<&'a str> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            let parent = node
                .parent_element()
                .map_or("", |parent| parent.tag_name().name());
            TcxError::missing_element(node.tag_name().name(), parent)
        })
}

/// Parse a node's text as `T`, or return `T::default()` when the node is absent
///
/// # Errors
///
/// Returns [`TcxError::InvalidNumber`] if the node is present and its text does
/// not parse as `T`. An empty element counts as present.
pub fn coerce_or_default<T>(node: Option<Node<'_, '_>>) -> TcxResult<T>
where
    T: FromStr + Default,
{
    let Some(node) = node else {
        return Ok(T::default());
    };

    let text = node.text().map_or("", str::trim);
    text.parse::<T>()
        .map_err(|_| TcxError::invalid_number(node.tag_name().name(), text))
}

/// Parse a required node's text as `T`
///
/// # Errors
///
/// Returns [`TcxError::InvalidNumber`] if the text does not parse as `T`
pub fn coerce<T>(node: Node<'_, '_>) -> TcxResult<T>
where
    T: FromStr + Default,
{
    coerce_or_default(Some(node))
}
