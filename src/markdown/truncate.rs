//! Character budget truncation of section content.
//!
//! Truncation runs on a deep copy of the section so the full content stays
//! available for the modal. Text-bearing nodes of the copy are flattened
//! into a list in document order; the cut is found with a single scan over
//! that list, then everything after it is detached and emptied elements are
//! pruned.

use comrak::nodes::{AstNode, NodeValue};
use comrak::Arena;

use super::text::{
    alloc_node, container, deep_clone, has_literal, has_void, is_text_bearing, is_void, literal,
    plain_text, set_literal, text_len, text_nodes, visible_text,
};

/// Marker appended where content was cut.
pub const ELLIPSIS: &str = "...";

/// Cuts `text` to at most `remaining` chars on a natural boundary.
///
/// Prefers ending after the last sentence terminator when it lies in the
/// second half of the slice; otherwise ends before the last space so no word
/// is split. A slice with no space past its first char is kept whole. The
/// ellipsis marker is appended in every case.
pub fn cut_text(text: &str, remaining: usize) -> String {
    let slice: Vec<char> = text.chars().take(remaining).collect();

    let sentence_end = slice.iter().rposition(|c| matches!(c, '.' | '!' | '?'));
    let end = match sentence_end {
        Some(pos) if pos * 2 >= slice.len() => pos + 1,
        _ => match slice.iter().rposition(|c| *c == ' ') {
            Some(pos) if pos > 0 => pos,
            _ => slice.len(),
        },
    };

    let mut cut: String = slice[..end].iter().collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Returns a truncated copy of `body`, or `None` if it fits the budget.
///
/// The returned node is a detached document container whose plain text is
/// at most `budget` chars plus one ellipsis marker.
pub fn truncate<'a>(
    arena: &'a Arena<AstNode<'a>>,
    body: &'a AstNode<'a>,
    budget: usize,
) -> Option<&'a AstNode<'a>> {
    if text_len(body) <= budget {
        return None;
    }

    let excerpt = container(arena);
    for block in body.children() {
        excerpt.append(deep_clone(arena, block));
    }

    let texts = text_nodes(excerpt);
    let mut total = 0;
    let mut cut_index = texts.len();
    for (index, &node) in texts.iter().enumerate() {
        let len = visible_text(node).chars().count();
        if total + len > budget {
            cut_index = index;
            break;
        }
        total += len;
    }

    // Raw HTML blocks and line breaks are dropped rather than cut
    let remaining = budget.saturating_sub(total);
    let cuttable = texts
        .get(cut_index)
        .is_some_and(|node| has_literal(&node.data.borrow().value));
    let first_dropped = if remaining > 0 && cuttable {
        let node = texts[cut_index];
        let cut = cut_text(&literal(node), remaining);
        log::debug!(
            "Cutting text node {} of {} at {} chars",
            cut_index,
            texts.len(),
            cut.chars().count()
        );
        set_literal(node, cut);
        cut_index + 1
    } else {
        cut_index
    };

    for node in &texts[first_dropped..] {
        node.detach();
    }

    prune_empty(excerpt);
    close_last_paragraph(arena, excerpt);

    Some(excerpt)
}

/// Detaches elements left without visible content.
///
/// The first paragraph among its siblings is kept even when empty so the
/// excerpt keeps a stable leading block.
fn prune_empty<'a>(root: &'a AstNode<'a>) {
    let candidates: Vec<_> = root.descendants().skip(1).collect();

    for node in candidates {
        {
            let value = &node.data.borrow().value;
            if is_text_bearing(value) || is_void(value) || matches!(value, NodeValue::SoftBreak) {
                continue;
            }
        }
        if !plain_text(node).trim().is_empty() || has_void(node) {
            continue;
        }
        if is_paragraph(node) && !has_previous_paragraph(node) {
            continue;
        }
        node.detach();
    }
}

/// Appends the marker to the last paragraph unless the excerpt already ends with it.
///
/// An excerpt left with no blocks at all gets a paragraph holding just the
/// marker.
fn close_last_paragraph<'a>(arena: &'a Arena<AstNode<'a>>, root: &'a AstNode<'a>) {
    if plain_text(root).ends_with(ELLIPSIS) {
        return;
    }

    let Some(paragraph) = root.descendants().filter(|n| is_paragraph(*n)).last() else {
        if root.first_child().is_none() {
            let start = root.data.borrow().sourcepos.start;
            let paragraph = alloc_node(arena, NodeValue::Paragraph, start);
            paragraph.append(alloc_node(arena, NodeValue::Text(ELLIPSIS.to_string()), start));
            root.append(paragraph);
        }
        return;
    };
    if plain_text(paragraph).is_empty() {
        return;
    }

    let end = paragraph.data.borrow().sourcepos.end;
    paragraph.append(alloc_node(arena, NodeValue::Text(ELLIPSIS.to_string()), end));
}

fn is_paragraph<'a>(node: &'a AstNode<'a>) -> bool {
    matches!(node.data.borrow().value, NodeValue::Paragraph)
}

fn has_previous_paragraph<'a>(node: &'a AstNode<'a>) -> bool {
    node.preceding_siblings().skip(1).any(|n| is_paragraph(n))
}
