//! Link containers: elements that behave like the first link inside them.
//!
//! A `TABLE` container turns each of its rows into a proxy, a `UL` turns each
//! item into one, and any other element is a proxy itself.

use crate::dom::Element;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Table,
    List,
    Block,
}

impl ContainerKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("table") {
            ContainerKind::Table
        } else if tag.eq_ignore_ascii_case("ul") {
            ContainerKind::List
        } else {
            ContainerKind::Block
        }
    }

    /// Tag of the descendants acting as proxies, `None` when the container
    /// is its own proxy.
    pub fn proxy_tag(self) -> Option<&'static str> {
        match self {
            ContainerKind::Table => Some("tr"),
            ContainerKind::List => Some("li"),
            ContainerKind::Block => None,
        }
    }
}

/// Elements of `container` that should navigate when activated.
pub fn link_proxies<E: Element>(container: &E) -> Vec<E> {
    match ContainerKind::from_tag(&container.tag_name()).proxy_tag() {
        Some(tag) => container.descendants_by_tag(tag),
        None => vec![container.clone()],
    }
}

/// Pointer cursor on the proxy, no underline on the links inside it.
pub fn style_link_proxy<E: Element>(proxy: &E) {
    proxy.set_style("cursor", "pointer");
    for anchor in proxy.descendants_by_tag("a") {
        anchor.set_style("text-decoration", "none");
    }
}

/// `href` of the first link inside `proxy`.
pub fn link_target<E: Element>(proxy: &E) -> Option<String> {
    proxy.descendants_by_tag("a").first()?.attribute("href")
}
