use super::node::Node;

impl Node {
    /// Iterates over this subtree in pre-order: the node itself first, then
    /// every node of each child subtree before moving on to the next child.
    /// (Phylogenetics tooling often calls this order "breadth-first"; it is
    /// depth-first, root first.) Each call starts a fresh traversal.
    pub fn walk(&self) -> PreorderWalk<'_> {
        PreorderWalk { stack: vec![self] }
    }

    /// Iterates over this subtree in post-order: every node is yielded only
    /// after all of its descendants. Each call starts a fresh traversal.
    pub fn walk_postorder(&self) -> PostorderWalk<'_> {
        PostorderWalk { stack: vec![(self, 0)] }
    }
}

/// Pre-order traversal over a [Node] subtree.
///
/// Driven by an explicit stack rather than call recursion, so arbitrarily
/// deep trees walk without exhausting the call stack. The tree is never
/// mutated; the iterator is finite and can be recreated at will.
pub struct PreorderWalk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreorderWalk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        // Reversed so that the first child is popped first.
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Post-order traversal over a [Node] subtree.
///
/// Keeps a stack of nodes paired with the index of their next unvisited
/// child. A node is yielded once its index reaches the end of its child
/// list; otherwise the child at the index is pushed and the index advanced.
pub struct PostorderWalk<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for PostorderWalk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        loop {
            let (node, next_child) = self.stack.last_mut()?;
            let node: &'a Node = *node;
            if *next_child == node.child_count() {
                let _ = self.stack.pop();
                return Some(node);
            }
            let child = &node.children()[*next_child];
            *next_child += 1;
            self.stack.push((child, 0));
        }
    }
}
