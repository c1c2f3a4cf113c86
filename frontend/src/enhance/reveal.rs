use js_sys::{Array, Reflect};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::EnhanceError;
use crate::config::EnhancerConfig;

// Crossing ratios are reported as floats and can land just under the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

// Spacing of the extra observer thresholds below the reveal threshold.
const THRESHOLD_STEP: f64 = 0.01;

/// Reveal state of one page section. `Revealed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

impl RevealState {
    pub fn observe(self, visible_ratio: f64, threshold: f64) -> Self {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Pending if visible_ratio + RATIO_TOLERANCE >= threshold => RevealState::Revealed,
            RevealState::Pending => RevealState::Pending,
        }
    }

    pub fn of(section: &Element, config: &EnhancerConfig) -> Self {
        if section.class_list().contains(config.revealed_class) {
            RevealState::Revealed
        } else {
            RevealState::Pending
        }
    }
}

/// How visible a section is for reveal purposes: the larger of its own
/// visible fraction and the fraction of the viewport it covers. Sections
/// taller than the viewport never reach a high own ratio.
pub fn visible_share(intersection_ratio: f64, visible_height: f64, viewport_height: Option<f64>) -> f64 {
    match viewport_height {
        Some(viewport) if viewport > 0.0 => intersection_ratio.max(visible_height / viewport),
        _ => intersection_ratio,
    }
}

/// Observer thresholds: every step from zero up to the reveal threshold, so
/// a tall section keeps reporting while it scrolls in.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let steps = (threshold / THRESHOLD_STEP).floor() as usize;
    let mut thresholds: Vec<f64> = (0..=steps).map(|step| step as f64 * THRESHOLD_STEP).collect();
    if thresholds.last().map_or(true, |last| (threshold - last).abs() > RATIO_TOLERANCE) {
        thresholds.push(threshold);
    }
    thresholds
}

fn entry_share(entry: &IntersectionObserverEntry) -> f64 {
    visible_share(
        entry.intersection_ratio(),
        entry.intersection_rect().height(),
        entry.root_bounds().map(|bounds| bounds.height()),
    )
}

pub fn observer_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Applies one visibility report to `section`, `visible_ratio` being its
/// [`visible_share`]. Returns `true` only on the pending to revealed
/// transition, which is when the section should stop being observed.
pub fn reveal_section(
    section: &Element,
    is_intersecting: bool,
    visible_ratio: f64,
    config: &EnhancerConfig,
) -> Result<bool, EnhanceError> {
    if !is_intersecting {
        return Ok(false);
    }
    let before = RevealState::of(section, config);
    if before.observe(visible_ratio, config.reveal_threshold) == before {
        return Ok(false);
    }
    section.class_list().add_1(config.revealed_class)?;
    Ok(true)
}

/// The live observer plus the callback it calls into.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        // Drain queued entries so no callback outlives the closure.
        self.observer.take_records();
        self.observer.disconnect();
    }
}

pub(crate) fn install(
    window: &Window,
    document: &Document,
    config: &EnhancerConfig,
) -> Result<Option<RevealObserver>, EnhanceError> {
    if !observer_supported(window) {
        debug!("IntersectionObserver unavailable, sections stay as rendered");
        return Ok(None);
    }
    let sections = document.query_selector_all("section")?;
    if sections.length() == 0 {
        return Ok(None);
    }

    let callback_config = *config;
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let section = entry.target();
            match reveal_section(&section, entry.is_intersecting(), entry_share(&entry), &callback_config) {
                Ok(true) => observer.unobserve(&section),
                Ok(false) => {}
                Err(err) => warn!("Section reveal failed: {}", err),
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let thresholds: Array = observer_thresholds(config.reveal_threshold)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // Owned from here on, so an early return disconnects it.
    let reveal = RevealObserver {
        observer,
        _callback: callback,
    };

    let mut tagged: Vec<Element> = Vec::with_capacity(sections.length() as usize);
    for index in 0..sections.length() {
        let Some(section) = sections.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if let Err(err) = section.class_list().add_1(config.pending_class) {
            for section in &tagged {
                let _ = section.class_list().remove_1(config.pending_class);
            }
            return Err(err.into());
        }
        reveal.observer.observe(&section);
        tagged.push(section);
    }
    debug!("Observing {} sections for reveal", tagged.len());

    Ok(Some(reveal))
}
