/// Read only view of the tree pointer events bubble through, as seen from the
/// root the listeners are attached to.
pub trait Scope {
    type Node;

    /// Closest node at or above `node` which carries tooltip text.
    fn marked(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or lies below it.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn root(&self) -> &Self::Node;
}

/// The tooltip target inside the root which an event on `node` concerns.
pub fn target<S: Scope>(scope: &S, node: &S::Node) -> Option<S::Node> {
    let target = scope.marked(node)?;
    if scope.contains(scope.root(), &target) {
        Some(target)
    } else {
        None
    }
}

/// The target entered or left when the pointer moves between `node` and
/// `related` (the other side of a mouseover or mouseout). Moving between two
/// nodes of the same target crosses nothing.
pub fn crossed<S: Scope>(scope: &S, node: &S::Node, related: Option<&S::Node>) -> Option<S::Node> {
    let target = target(scope, node)?;
    match related {
        Some(related) if scope.contains(&target, related) => None,
        _ => Some(target),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Tree {
        parents: Vec<Option<usize>>,
        marked: Vec<usize>,
        root: usize,
    }

    impl Tree {
        fn ancestors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
            std::iter::successors(Some(node), |n| self.parents[*n])
        }
    }

    impl Scope for Tree {
        type Node = usize;

        fn marked(&self, node: &usize) -> Option<usize> {
            self.ancestors(*node).find(|n| self.marked.contains(n))
        }

        fn contains(&self, ancestor: &usize, node: &usize) -> bool {
            self.ancestors(*node).any(|n| n == *ancestor)
        }

        fn root(&self) -> &usize {
            &self.root
        }
    }

    // 0 body
    // ├── 1 root
    // │   ├── 2 [tooltip]
    // │   │   ├── 3 span
    // │   │   └── 6 [tooltip]
    // │   └── 4 div
    // └── 5 [tooltip]
    fn tree() -> Tree {
        Tree {
            parents: vec![None, Some(0), Some(1), Some(2), Some(1), Some(0), Some(2)],
            marked: vec![2, 5, 6],
            root: 1,
        }
    }

    #[test]
    fn test_target() {
        let tree = tree();
        assert_eq!(target(&tree, &2), Some(2));
        assert_eq!(target(&tree, &3), Some(2));
        assert_eq!(target(&tree, &6), Some(6));
        assert_eq!(target(&tree, &4), None);

        // Marked, but outside the root.
        assert_eq!(target(&tree, &5), None);
    }

    #[test]
    fn test_marked_ancestor_of_root() {
        let tree = Tree {
            parents: vec![None, Some(0), Some(1)],
            marked: vec![0],
            root: 1,
        };
        assert_eq!(target(&tree, &2), None);
    }

    #[test]
    fn test_crossed() {
        let tree = tree();

        // Pointer arriving from outside the target, or from outside the page.
        assert_eq!(crossed(&tree, &2, Some(&4)), Some(2));
        assert_eq!(crossed(&tree, &3, Some(&0)), Some(2));
        assert_eq!(crossed(&tree, &2, None), Some(2));

        // Moving between the target and its children isn't a leave or enter.
        assert_eq!(crossed(&tree, &3, Some(&2)), None);
        assert_eq!(crossed(&tree, &2, Some(&3)), None);

        // A nested target is entered and left on its own.
        assert_eq!(crossed(&tree, &6, Some(&3)), Some(6));

        // Nothing to cross outside any target.
        assert_eq!(crossed(&tree, &4, Some(&2)), None);
    }
}
