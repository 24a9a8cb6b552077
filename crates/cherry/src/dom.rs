//! Host tree abstraction and the ancestor matcher.
//!
//! Cherry never owns elements. It borrows references from the host page and
//! only needs identity (`PartialEq`) and the parent link to reason about them.

/// A node of the containment tree.
pub trait Node: Clone + PartialEq {
    /// The containing node, or `None` at the root.
    fn parent(&self) -> Option<Self>;
}

/// An element Cherry can inspect and style.
pub trait Element: Node {
    fn tag_name(&self) -> String;

    /// Descendants with the given tag, in document order. The element itself
    /// is not included.
    fn descendants_by_tag(&self, tag: &str) -> Vec<Self>;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_style(&self, property: &str, value: &str);
}

/// The page Cherry is applied to.
pub trait Document {
    type Element: Element;

    /// Elements carrying the class, in document order.
    fn elements_by_class_name(&self, class_name: &str) -> Vec<Self::Element>;
}

/// Iterator over a node and its ancestors up to the root.
pub struct Ancestors<N> {
    next: Option<N>,
}

impl<N: Node> Iterator for Ancestors<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

/// `start`, its parent, its grandparent, ... up to the root.
pub fn ancestors<N: Node>(start: Option<N>) -> Ancestors<N> {
    Ancestors { next: start }
}

/// Nearest node in the ancestor chain of `start` (inclusive) that satisfies
/// `predicate`.
///
/// An absent start yields `None`. The chain is assumed acyclic; containment
/// trees are.
pub fn closest<N: Node>(start: Option<N>, predicate: impl Fn(&N) -> bool) -> Option<N> {
    ancestors(start).find(|node| predicate(node))
}
