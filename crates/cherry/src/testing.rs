//! In-memory DOM used by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::{Document, Element, Node};

struct FakeNode {
    tag: String,
    parent: Option<usize>,
    children: Vec<usize>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    style: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct FakeDom {
    nodes: Rc<RefCell<Vec<FakeNode>>>,
}

#[derive(Clone)]
pub struct FakeElement {
    nodes: Rc<RefCell<Vec<FakeNode>>>,
    id: usize,
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.nodes, &other.nodes) && self.id == other.id
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}#{}>", self.tag_name().to_lowercase(), self.id)
    }
}

impl FakeDom {
    /// A document with a single `html` root.
    pub fn new() -> Self {
        let dom = Self::default();
        dom.nodes.borrow_mut().push(FakeNode::new("html", None));
        dom
    }

    pub fn root(&self) -> FakeElement {
        self.element(0)
    }

    pub fn append(&self, parent: &FakeElement, tag: &str) -> FakeElement {
        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.len();
        nodes.push(FakeNode::new(tag, Some(parent.id)));
        nodes[parent.id].children.push(id);
        drop(nodes);
        self.element(id)
    }

    pub fn append_with_class(&self, parent: &FakeElement, tag: &str, class: &str) -> FakeElement {
        let element = self.append(parent, tag);
        self.nodes.borrow_mut()[element.id].classes.push(class.to_string());
        element
    }

    /// An element that is not attached to the tree.
    pub fn detached(&self, tag: &str) -> FakeElement {
        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.len();
        nodes.push(FakeNode::new(tag, None));
        drop(nodes);
        self.element(id)
    }

    fn element(&self, id: usize) -> FakeElement {
        FakeElement { nodes: self.nodes.clone(), id }
    }
}

impl FakeNode {
    fn new(tag: &str, parent: Option<usize>) -> Self {
        Self {
            tag: tag.to_uppercase(),
            parent,
            children: Vec::new(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            style: HashMap::new(),
        }
    }
}

impl FakeElement {
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.nodes.borrow_mut()[self.id]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.nodes.borrow()[self.id].style.get(property).cloned()
    }

    fn collect_descendants(&self, id: usize, tag: &str, found: &mut Vec<FakeElement>) {
        let children = self.nodes.borrow()[id].children.clone();
        for child in children {
            if self.nodes.borrow()[child].tag.eq_ignore_ascii_case(tag) {
                found.push(FakeElement { nodes: self.nodes.clone(), id: child });
            }
            self.collect_descendants(child, tag, found);
        }
    }
}

impl Node for FakeElement {
    fn parent(&self) -> Option<Self> {
        let parent = self.nodes.borrow()[self.id].parent?;
        Some(FakeElement { nodes: self.nodes.clone(), id: parent })
    }
}

impl Element for FakeElement {
    fn tag_name(&self) -> String {
        self.nodes.borrow()[self.id].tag.clone()
    }

    fn descendants_by_tag(&self, tag: &str) -> Vec<Self> {
        let mut found = Vec::new();
        self.collect_descendants(self.id, tag, &mut found);
        found
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.nodes.borrow()[self.id].attributes.get(name).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.nodes.borrow_mut()[self.id]
            .style
            .insert(property.to_string(), value.to_string());
    }
}

impl Document for FakeDom {
    type Element = FakeElement;

    fn elements_by_class_name(&self, class_name: &str) -> Vec<FakeElement> {
        // Insertion order stands in for document order.
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .filter(|&id| nodes[id].classes.iter().any(|class| class == class_name))
            .map(|id| self.element(id))
            .collect()
    }
}
