//! Floating menus: a trigger element paired with a panel element.
//!
//! Each pair is an explicit two-state machine. The trigger has one stable tap
//! handler that toggles, and a page-wide tap handler dismisses the panel when
//! the tap lands outside both elements.
//!
//! A single physical tap on the trigger reaches both handlers. The page-wide
//! handler sees the trigger as "inside" and does nothing, so the outcome does
//! not depend on which handler runs first.

use serde::{Deserialize, Serialize};

use crate::dom::{closest, Element};
use crate::error::CherryError;

/// `display` values written to a panel when it is shown or hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDisplay {
    pub shown: String,
    pub hidden: String,
}

impl Default for PanelDisplay {
    fn default() -> Self {
        Self {
            shown: "block".to_string(),
            hidden: "none".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// What an operation did to a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    /// The pair was already in the requested state. Nothing was touched.
    Unchanged,
}

/// One trigger and the panel it controls.
#[derive(Clone, Debug)]
pub struct MenuPair<E> {
    trigger: E,
    panel: E,
    state: MenuState,
}

impl<E: Element> MenuPair<E> {
    /// Starts `Closed`. The panel's current styling is left alone.
    pub fn new(trigger: E, panel: E) -> Self {
        Self {
            trigger,
            panel,
            state: MenuState::Closed,
        }
    }

    pub fn trigger(&self) -> &E {
        &self.trigger
    }

    pub fn panel(&self) -> &E {
        &self.panel
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Whether `target` is the trigger, the panel, or inside either of them.
    pub fn contains(&self, target: Option<&E>) -> bool {
        closest(target.cloned(), |element| {
            *element == self.panel || *element == self.trigger
        })
        .is_some()
    }

    pub fn open(&mut self, display: &PanelDisplay) -> Transition {
        if self.state == MenuState::Open {
            return Transition::Unchanged;
        }
        self.panel.set_style("display", &display.shown);
        self.state = MenuState::Open;
        Transition::Opened
    }

    pub fn close(&mut self, display: &PanelDisplay) -> Transition {
        if self.state == MenuState::Closed {
            return Transition::Unchanged;
        }
        self.panel.set_style("display", &display.hidden);
        self.state = MenuState::Closed;
        Transition::Closed
    }

    /// Direct tap on the trigger: opens a closed panel, closes an open one.
    pub fn trigger_tap(&mut self, display: &PanelDisplay) -> Transition {
        match self.state {
            MenuState::Closed => self.open(display),
            MenuState::Open => self.close(display),
        }
    }

    /// Tap anywhere on the page. An absent target counts as outside.
    pub fn document_tap(&mut self, target: Option<&E>, display: &PanelDisplay) -> Transition {
        if self.contains(target) {
            return Transition::Unchanged;
        }
        self.close(display)
    }
}

/// All menu pairs of a page.
#[derive(Clone, Debug)]
pub struct MenuController<E> {
    pairs: Vec<MenuPair<E>>,
    display: PanelDisplay,
}

impl<E: Element> MenuController<E> {
    /// Builds pairs from data that is already paired.
    pub fn bind(pairs: impl IntoIterator<Item = (E, E)>, display: PanelDisplay) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(trigger, panel)| MenuPair::new(trigger, panel))
                .collect(),
            display,
        }
    }

    /// Pairs the i-th trigger with the i-th panel.
    ///
    /// Both collections must have the same length; nothing is truncated.
    pub fn from_collections(
        triggers: Vec<E>,
        panels: Vec<E>,
        display: PanelDisplay,
    ) -> Result<Self, CherryError> {
        if triggers.len() != panels.len() {
            return Err(CherryError::ConfigurationMismatch {
                triggers: triggers.len(),
                panels: panels.len(),
            });
        }
        Ok(Self::bind(triggers.into_iter().zip(panels), display))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[MenuPair<E>] {
        &self.pairs
    }

    pub fn pair(&self, index: usize) -> Option<&MenuPair<E>> {
        self.pairs.get(index)
    }

    pub fn display(&self) -> &PanelDisplay {
        &self.display
    }

    pub fn open(&mut self, index: usize) -> Option<Transition> {
        let pair = self.pairs.get_mut(index)?;
        Some(pair.open(&self.display))
    }

    pub fn close(&mut self, index: usize) -> Option<Transition> {
        let pair = self.pairs.get_mut(index)?;
        Some(pair.close(&self.display))
    }

    pub fn trigger_tap(&mut self, index: usize) -> Option<Transition> {
        let pair = self.pairs.get_mut(index)?;
        Some(pair.trigger_tap(&self.display))
    }

    /// Runs the dismissal rule of every pair for one tap and returns the
    /// indices of the pairs it closed.
    pub fn document_tap(&mut self, target: Option<&E>) -> Vec<usize> {
        let display = &self.display;
        self.pairs
            .iter_mut()
            .enumerate()
            .filter_map(|(index, pair)| {
                (pair.document_tap(target, display) == Transition::Closed).then_some(index)
            })
            .collect()
    }
}
