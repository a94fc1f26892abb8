use klados::Node;
use klados::parse_node;

fn names<'a>(nodes: impl Iterator<Item = &'a Node>) -> Vec<Option<&'a str>> {
    nodes.map(|n| n.name()).collect()
}

#[test]
fn test_preorder_visits_root_first() {
    let tree = parse_node("(a,(b,c)d)e").unwrap();
    assert_eq!(
        names(tree.walk()),
        vec![Some("e"), Some("a"), Some("d"), Some("b"), Some("c")],
        "Pre-order should visit self, then each child subtree in order"
    );
}

#[test]
fn test_postorder_visits_descendants_first() {
    let tree = parse_node("(a,(b,c)d)e").unwrap();
    assert_eq!(
        names(tree.walk_postorder()),
        vec![Some("a"), Some("b"), Some("c"), Some("d"), Some("e")],
        "Post-order should visit every node after all of its descendants"
    );
}

#[test]
fn test_walks_are_restartable() {
    let tree = parse_node("((a,b)c,(d,e)f)g").unwrap();

    let first: Vec<_> = names(tree.walk());
    let second: Vec<_> = names(tree.walk());
    assert_eq!(first, second, "Each walk() call should start fresh");

    let first: Vec<_> = names(tree.walk_postorder());
    let second: Vec<_> = names(tree.walk_postorder());
    assert_eq!(first, second, "Each walk_postorder() call should start fresh");
}

#[test]
fn test_walk_of_single_node() {
    let tree = parse_node("a").unwrap();
    assert_eq!(names(tree.walk()), vec![Some("a")]);
    assert_eq!(names(tree.walk_postorder()), vec![Some("a")]);
}

#[test]
fn test_leaf_invariant_over_whole_tree() {
    let tree = parse_node("((a,b)c,(d,(e,f)g)h)i").unwrap();
    for node in tree.walk() {
        assert_eq!(
            node.is_leaf(),
            node.child_count() == 0,
            "is_leaf must mirror the child count exactly"
        );
    }
}

#[test]
fn test_both_orders_visit_every_node_once() {
    let tree = parse_node("((a,b)c,(d,e)f,(g,(h,i)j)k)l").unwrap();
    let pre = tree.walk().count();
    let post = tree.walk_postorder().count();
    assert_eq!(pre, 12);
    assert_eq!(post, 12);
}

// A chain far deeper than safe call recursion still walks, since both
// traversals run on explicit stacks.
#[test]
fn test_deep_chain_traversal() {
    let depth = 5_000;

    let mut node = Node::leaf(Some("tip"), None).unwrap();
    for _ in 0..depth {
        node = Node::new(None, None, vec![node]).unwrap();
    }

    assert_eq!(node.walk().count(), depth + 1);

    let mut postorder = node.walk_postorder();
    let first = postorder.next().unwrap();
    assert_eq!(first.name(), Some("tip"), "Deepest leaf should come first");
    assert_eq!(postorder.count(), depth);
}
