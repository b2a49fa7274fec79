//! Plain text views over comrak nodes.

use comrak::arena_tree::Node;
use comrak::nodes::{Ast, AstNode, LineColumn, NodeValue};
use comrak::Arena;
use std::cell::RefCell;

/// Returns true for nodes holding an editable text literal.
pub(crate) fn has_literal(value: &NodeValue) -> bool {
    matches!(
        value,
        NodeValue::Text(_) | NodeValue::Code(_) | NodeValue::CodeBlock(_)
    )
}

/// Returns true for leaf nodes that contribute visible text.
///
/// Raw HTML blocks count with their tags stripped; line breaks count as one
/// space.
pub(crate) fn is_text_bearing(value: &NodeValue) -> bool {
    has_literal(value)
        || matches!(
            value,
            NodeValue::HtmlBlock(_) | NodeValue::SoftBreak | NodeValue::LineBreak
        )
}

/// Returns true for elements that stay visible without any text.
pub(crate) fn is_void(value: &NodeValue) -> bool {
    matches!(
        value,
        NodeValue::LineBreak
            | NodeValue::ThematicBreak
            | NodeValue::Image(_)
            | NodeValue::HtmlInline(_)
    )
}

/// Literal of a text-bearing node, empty for anything else.
pub(crate) fn literal<'a>(node: &'a AstNode<'a>) -> String {
    match &node.data.borrow().value {
        NodeValue::Text(text) => text.clone(),
        NodeValue::Code(code) => code.literal.clone(),
        NodeValue::CodeBlock(block) => block.literal.clone(),
        _ => String::new(),
    }
}

/// Visible text of a text-bearing node, empty for anything else.
pub(crate) fn visible_text<'a>(node: &'a AstNode<'a>) -> String {
    match &node.data.borrow().value {
        NodeValue::Text(text) => text.clone(),
        NodeValue::Code(code) => code.literal.clone(),
        NodeValue::CodeBlock(block) => block.literal.clone(),
        NodeValue::HtmlBlock(block) => strip_tags(&block.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => " ".to_string(),
        _ => String::new(),
    }
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text
}

/// Replaces the literal of a text-bearing node.
pub(crate) fn set_literal<'a>(node: &'a AstNode<'a>, text: String) {
    match &mut node.data.borrow_mut().value {
        NodeValue::Text(literal) => *literal = text,
        NodeValue::Code(code) => code.literal = text,
        NodeValue::CodeBlock(block) => block.literal = text,
        _ => {}
    }
}

/// Collects text-bearing descendants of `node` in document order.
///
/// Image subtrees are skipped: their children are alt text, which renders
/// as an attribute rather than visible text.
pub(crate) fn text_nodes<'a>(node: &'a AstNode<'a>) -> Vec<&'a AstNode<'a>> {
    let mut nodes = Vec::new();
    collect_text_nodes(node, &mut nodes);
    nodes
}

fn collect_text_nodes<'a>(node: &'a AstNode<'a>, out: &mut Vec<&'a AstNode<'a>>) {
    {
        let value = &node.data.borrow().value;
        if is_text_bearing(value) {
            out.push(node);
            return;
        }
        if matches!(value, NodeValue::Image(_)) {
            return;
        }
    }
    for child in node.children() {
        collect_text_nodes(child, out);
    }
}

/// Concatenated visible text of a subtree.
pub fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    text_nodes(node).into_iter().map(visible_text).collect()
}

/// Number of chars in the visible text of a subtree.
pub fn text_len<'a>(node: &'a AstNode<'a>) -> usize {
    text_nodes(node)
        .into_iter()
        .map(|n| visible_text(n).chars().count())
        .sum()
}

/// Returns true if `node` or any descendant is a void element.
pub(crate) fn has_void<'a>(node: &'a AstNode<'a>) -> bool {
    node.descendants().any(|n| is_void(&n.data.borrow().value))
}

/// Allocates a detached node holding `value`.
pub(crate) fn alloc_node<'a>(
    arena: &'a Arena<AstNode<'a>>,
    value: NodeValue,
    start: LineColumn,
) -> &'a AstNode<'a> {
    arena.alloc(Node::new(RefCell::new(Ast::new(value, start))))
}

/// Allocates an empty document node used as a section container.
pub(crate) fn container<'a>(arena: &'a Arena<AstNode<'a>>) -> &'a AstNode<'a> {
    alloc_node(arena, NodeValue::Document, LineColumn { line: 1, column: 1 })
}

/// Copies a subtree into fresh arena nodes.
pub(crate) fn deep_clone<'a>(
    arena: &'a Arena<AstNode<'a>>,
    node: &'a AstNode<'a>,
) -> &'a AstNode<'a> {
    let copy = {
        let ast = node.data.borrow();
        alloc_node(arena, ast.value.clone(), ast.sourcepos.start)
    };
    for child in node.children() {
        copy.append(deep_clone(arena, child));
    }
    copy
}
