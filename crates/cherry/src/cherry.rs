use crate::config::CherryConfig;
use crate::dom::{Document, Element};
use crate::error::CherryError;
use crate::link::{link_proxies, style_link_proxy};
use crate::menu::MenuController;

/// Cherry applied to one document.
///
/// Elements are selected once. Elements added to the page later are not
/// picked up.
pub struct Cherry<E> {
    config: CherryConfig,
    link_proxies: Vec<E>,
    menus: MenuController<E>,
}

impl<E: Element> Cherry<E> {
    /// Styles every link proxy and pairs menu triggers with panels.
    ///
    /// Fails before touching the page when the trigger and panel counts
    /// differ.
    pub fn apply<D>(document: &D, config: CherryConfig) -> Result<Self, CherryError>
    where
        D: Document<Element = E>,
    {
        let menus = MenuController::from_collections(
            document.elements_by_class_name(&config.menu_button_class),
            document.elements_by_class_name(&config.menu_class),
            config.panel_display.clone(),
        )?;

        let proxies: Vec<E> = document
            .elements_by_class_name(&config.link_class)
            .iter()
            .flat_map(link_proxies)
            .collect();
        for proxy in &proxies {
            style_link_proxy(proxy);
        }

        Ok(Self {
            config,
            link_proxies: proxies,
            menus,
        })
    }

    pub fn config(&self) -> &CherryConfig {
        &self.config
    }

    pub fn link_proxies(&self) -> &[E] {
        &self.link_proxies
    }

    pub fn menus(&self) -> &MenuController<E> {
        &self.menus
    }

    pub fn menus_mut(&mut self) -> &mut MenuController<E> {
        &mut self.menus
    }

    pub fn into_parts(self) -> (CherryConfig, Vec<E>, MenuController<E>) {
        (self.config, self.link_proxies, self.menus)
    }
}
