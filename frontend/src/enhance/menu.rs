use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::{EnhanceError, Listener};
use crate::config::EnhancerConfig;

const ARIA_EXPANDED: &str = "aria-expanded";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Anything other than `"true"`, including a missing attribute, is closed.
    pub fn from_aria(value: Option<&str>) -> Self {
        match value {
            Some("true") => MenuState::Open,
            _ => MenuState::Closed,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn aria_value(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

pub fn current_state(control: &Element) -> MenuState {
    MenuState::from_aria(control.get_attribute(ARIA_EXPANDED).as_deref())
}

fn apply(control: &Element, panel: &Element, state: MenuState, open_class: &str) -> Result<(), EnhanceError> {
    panel.class_list().toggle_with_force(open_class, state.is_open())?;
    control.set_attribute(ARIA_EXPANDED, state.aria_value())?;
    Ok(())
}

/// Flips the panel and keeps `aria-expanded` on the control in step.
pub fn toggle_menu(control: &Element, panel: &Element, open_class: &str) -> Result<MenuState, EnhanceError> {
    let next = current_state(control).toggled();
    apply(control, panel, next, open_class)?;
    Ok(next)
}

pub fn close_menu(control: &Element, panel: &Element, open_class: &str) -> Result<(), EnhanceError> {
    if current_state(control).is_open() {
        apply(control, panel, MenuState::Closed, open_class)?;
    }
    Ok(())
}

pub(crate) fn install(document: &Document, config: &EnhancerConfig) -> Result<Vec<Listener>, EnhanceError> {
    let (Some(control), Some(panel)) = (
        document.get_element_by_id(config.menu_toggle_id),
        document.get_element_by_id(config.mobile_menu_id),
    ) else {
        debug!("No mobile menu on this page");
        return Ok(Vec::new());
    };

    let open_class = config.menu_open_class;
    let mut listeners = Vec::new();

    {
        let control_ref = control.clone();
        let panel = panel.clone();
        listeners.push(Listener::new(&control, "click", move |_| {
            match toggle_menu(&control_ref, &panel, open_class) {
                Ok(state) => debug!("Mobile menu {:?}", state),
                Err(err) => warn!("Mobile menu toggle failed: {}", err),
            }
        })?);
    }

    // Picking a destination collapses the panel again.
    let links = panel.query_selector_all("a")?;
    for index in 0..links.length() {
        let Some(link) = links.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let control = control.clone();
        let panel = panel.clone();
        listeners.push(Listener::new(&link, "click", move |_| {
            if let Err(err) = close_menu(&control, &panel, open_class) {
                warn!("Closing mobile menu failed: {}", err);
            }
        })?);
    }

    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_unknown_aria_counts_as_closed() {
        assert_eq!(MenuState::from_aria(None), MenuState::Closed);
        assert_eq!(MenuState::from_aria(Some("false")), MenuState::Closed);
        assert_eq!(MenuState::from_aria(Some("TRUE")), MenuState::Closed);
        assert_eq!(MenuState::from_aria(Some("true")), MenuState::Open);
    }

    #[test]
    fn double_toggle_returns_to_start() {
        let start = MenuState::from_aria(Some("false"));
        let once = start.toggled();
        assert!(once.is_open());
        assert_eq!(once.aria_value(), "true");
        assert_eq!(once.toggled(), start);
    }

    #[test]
    fn aria_value_round_trips() {
        for state in [MenuState::Open, MenuState::Closed] {
            assert_eq!(MenuState::from_aria(Some(state.aria_value())), state);
        }
    }
}
