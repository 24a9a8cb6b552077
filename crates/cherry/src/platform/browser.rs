//! Browser binding: `web_sys` elements, owned event listeners and the
//! page-lifetime installation.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCollection, HtmlElement};

use crate::cherry::Cherry;
use crate::config::CherryConfig;
use crate::dom::{Document, Element, Node};
use crate::error::CherryError;
use crate::link::link_target;
use crate::menu::{MenuController, MenuState, Transition};
use crate::search::{SearchHandler, SearchRequest, SearchTrigger};

/// Event that fires search triggers.
pub const SEARCH_EVENT: &str = "touchstart";

// Installed by `start`; lives as long as the page.
thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
    static INSTALLATION: RefCell<Option<Installation>> = const { RefCell::new(None) };
    static READY_LISTENER: RefCell<Option<EventListener>> = const { RefCell::new(None) };
    static SEARCH_LISTENERS: RefCell<HashMap<String, Vec<EventListener>>> =
        RefCell::new(HashMap::new());
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserElement(web_sys::Element);

impl BrowserElement {
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    pub fn as_web_sys(&self) -> &web_sys::Element {
        &self.0
    }

    /// Element an event was dispatched to. Text nodes resolve to their parent.
    pub fn from_event_target(target: Option<EventTarget>) -> Option<Self> {
        match target?.dyn_into::<web_sys::Element>() {
            Ok(element) => Some(Self(element)),
            Err(target) => target
                .dyn_into::<web_sys::Node>()
                .ok()?
                .parent_element()
                .map(Self),
        }
    }
}

impl Node for BrowserElement {
    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(Self)
    }
}

impl Element for BrowserElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn descendants_by_tag(&self, tag: &str) -> Vec<Self> {
        collect(self.0.get_elements_by_tag_name(tag))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_style(&self, property: &str, value: &str) {
        // Only HTML elements carry an inline style we can write to.
        let Some(element) = self.0.dyn_ref::<HtmlElement>() else {
            zoon::eprintln!(
                "[cherry] Cannot set `{property}: {value}` on non-HTML <{}>",
                self.0.tag_name().to_lowercase()
            );
            return;
        };
        if let Err(error) = element.style().set_property(property, value) {
            zoon::eprintln!("[cherry] Failed to set `{property}: {value}`: {error:?}");
        }
    }
}

pub struct BrowserDocument(web_sys::Document);

impl BrowserDocument {
    pub fn current() -> Result<Self, CherryError> {
        let window = web_sys::window().ok_or(CherryError::HostUnavailable("window"))?;
        let document = window
            .document()
            .ok_or(CherryError::HostUnavailable("document"))?;
        Ok(Self(document))
    }

    pub fn as_web_sys(&self) -> &web_sys::Document {
        &self.0
    }
}

impl Document for BrowserDocument {
    type Element = BrowserElement;

    fn elements_by_class_name(&self, class_name: &str) -> Vec<BrowserElement> {
        collect(self.0.get_elements_by_class_name(class_name))
    }
}

fn collect(collection: HtmlCollection) -> Vec<BrowserElement> {
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .map(BrowserElement)
        .collect()
}

/// A registered DOM listener. Dropping it unregisters the callback.
pub struct EventListener {
    target: EventTarget,
    event: String,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, CherryError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|error| CherryError::Listener(format!("`{event}`: {error:?}")))?;
        Ok(Self {
            target: target.clone(),
            event: event.to_string(),
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(&self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Cherry wired into the current page.
pub struct Installation {
    menus: Rc<RefCell<MenuController<BrowserElement>>>,
    link_proxies: Vec<BrowserElement>,
    _listeners: Vec<EventListener>,
}

impl Installation {
    pub fn link_proxies(&self) -> &[BrowserElement] {
        &self.link_proxies
    }

    pub fn menu_count(&self) -> usize {
        self.menus.borrow().len()
    }

    pub fn menu_state(&self, index: usize) -> Option<MenuState> {
        self.menus.borrow().pair(index).map(|pair| pair.state())
    }
}

/// Applies Cherry to the current document and registers its listeners.
///
/// - every link proxy navigates on `config.link_event`
/// - every menu trigger toggles its panel on `config.menu_event`
/// - one document listener runs the dismissal rule of all menus
pub fn install(config: CherryConfig) -> Result<Installation, CherryError> {
    let document = BrowserDocument::current()?;
    let (config, link_proxies, menus) = Cherry::apply(&document, config)?.into_parts();
    let menus = Rc::new(RefCell::new(menus));
    let mut listeners = Vec::new();

    for proxy in &link_proxies {
        let proxy_for_handler = proxy.clone();
        listeners.push(EventListener::new(proxy.as_web_sys(), &config.link_event, move |_| {
            if let Some(url) = link_target(&proxy_for_handler) {
                navigate(&url);
            }
        })?);
    }

    let triggers: Vec<BrowserElement> = menus
        .borrow()
        .pairs()
        .iter()
        .map(|pair| pair.trigger().clone())
        .collect();
    for (index, trigger) in triggers.iter().enumerate() {
        let menus = menus.clone();
        listeners.push(EventListener::new(trigger.as_web_sys(), &config.menu_event, move |_| {
            let transition = menus.borrow_mut().trigger_tap(index);
            log_transition(index, transition);
        })?);
    }

    if !triggers.is_empty() {
        let menus = menus.clone();
        listeners.push(EventListener::new(
            document.as_web_sys(),
            &config.menu_event,
            move |event: Event| {
                let target = BrowserElement::from_event_target(event.target());
                for index in menus.borrow_mut().document_tap(target.as_ref()) {
                    log_transition(index, Some(Transition::Closed));
                }
            },
        )?);
    }

    zoon::println!(
        "[cherry] Installed: {} link proxies, {} menus",
        link_proxies.len(),
        triggers.len()
    );

    Ok(Installation {
        menus,
        link_proxies,
        _listeners: listeners,
    })
}

/// Installs Cherry once the document is parsed and keeps it for the page
/// lifetime.
///
/// Only the first call counts, whether or not the document has finished
/// loading. Later calls are logged and ignored.
pub fn start(config: CherryConfig) -> Result<(), CherryError> {
    let document = BrowserDocument::current()?;
    if !claim_start() {
        zoon::println!("[cherry] Already installed, ignoring");
        return Ok(());
    }
    if document.as_web_sys().ready_state() != "loading" {
        install_once(config);
        return Ok(());
    }
    let mut config = Some(config);
    let listener = EventListener::new(document.as_web_sys(), "DOMContentLoaded", move |_| {
        if let Some(config) = config.take() {
            install_once(config);
        }
    })?;
    READY_LISTENER.with(|cell| *cell.borrow_mut() = Some(listener));
    Ok(())
}

/// `true` for the first caller only.
fn claim_start() -> bool {
    !STARTED.with(|started| started.replace(true))
}

fn install_once(config: CherryConfig) {
    INSTALLATION.with(|cell| {
        match install(config) {
            Ok(installation) => *cell.borrow_mut() = Some(installation),
            Err(error) => zoon::eprintln!("[cherry] Setup failed: {error}"),
        }
    });
}

/// Registers `handler` on every element with `class_name`.
///
/// The returned listeners must be kept alive for the triggers to work.
pub fn set_search_trigger<H: SearchHandler + 'static>(
    class_name: &str,
    url: &str,
    handler: H,
) -> Result<Vec<EventListener>, CherryError> {
    let document = BrowserDocument::current()?;
    let trigger = Rc::new(SearchTrigger::new(class_name, url, handler));
    document
        .elements_by_class_name(class_name)
        .iter()
        .map(|element| {
            let trigger = trigger.clone();
            EventListener::new(element.as_web_sys(), SEARCH_EVENT, move |_| trigger.fire())
        })
        .collect()
}

/// One step back in the browser history.
pub fn go_back() -> Result<(), CherryError> {
    let window = web_sys::window().ok_or(CherryError::HostUnavailable("window"))?;
    let history = window
        .history()
        .map_err(|_| CherryError::HostUnavailable("history"))?;
    history
        .back()
        .map_err(|_| CherryError::HostUnavailable("history"))
}

fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(error) = window.location().set_href(url) {
        zoon::eprintln!("[cherry] Failed to navigate to '{url}': {error:?}");
    }
}

#[cfg_attr(not(feature = "debug-menus"), allow(unused_variables))]
fn log_transition(index: usize, transition: Option<Transition>) {
    #[cfg(feature = "debug-menus")]
    zoon::println!("[cherry] Menu {index}: {transition:?}");
}

fn to_js_error(error: CherryError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[cfg(all(feature = "auto-start", target_arch = "wasm32"))]
#[wasm_bindgen(start)]
pub fn auto_start() {
    if let Err(error) = start(CherryConfig::default()) {
        zoon::eprintln!("[cherry] Setup failed: {error}");
    }
}

/// Starts Cherry with a JSON configuration; omitted fields keep their defaults.
#[wasm_bindgen]
pub fn cherry_start_with_config(json: &str) -> Result<(), JsValue> {
    let config = CherryConfig::from_json(json).map_err(to_js_error)?;
    start(config).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn cherry_go_back() -> Result<(), JsValue> {
    go_back().map_err(to_js_error)
}

/// Calls `on_search(className, url)` when an element with `class_name` is
/// touched.
///
/// Registering the same class again replaces the previous callback.
#[wasm_bindgen]
pub fn cherry_set_search_trigger(
    class_name: &str,
    url: &str,
    on_search: js_sys::Function,
) -> Result<(), JsValue> {
    let listeners = set_search_trigger(class_name, url, move |request: &SearchRequest| {
        let class_name = JsValue::from_str(&request.class_name);
        let url = JsValue::from_str(&request.url);
        if let Err(error) = on_search.call2(&JsValue::NULL, &class_name, &url) {
            zoon::eprintln!("[cherry] Search handler failed: {error:?}");
        }
    })
    .map_err(to_js_error)?;
    SEARCH_LISTENERS.with(|cell| {
        // Dropping the replaced listeners unregisters them.
        cell.borrow_mut().insert(class_name.to_string(), listeners);
    });
    Ok(())
}
