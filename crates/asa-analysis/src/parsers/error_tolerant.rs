//! Syntax error detection in tree-sitter trees.

use tree_sitter::Node;

/// Count ERROR and MISSING nodes under `root`.
///
/// Iterative; subtrees without errors are pruned.
pub fn count_errors(root: Node<'_>) -> u32 {
    let mut count = 0u32;
    let mut stack = vec![root];
    let mut cursor = root.walk();

    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            count += 1;
        }
        if !node.has_error() {
            continue;
        }
        cursor.reset(node);
        if cursor.goto_first_child() {
            loop {
                stack.push(cursor.node());
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
    }
    count
}
