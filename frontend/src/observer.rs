use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Viewport-rooted observer settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin_px: f64,
}

impl ObserverOptions {
    pub fn reveal() -> Self {
        Self { threshold: config::REVEAL_THRESHOLD, root_margin_px: 0.0 }
    }

    pub fn lazy_image() -> Self {
        Self { threshold: 0.0, root_margin_px: config::LAZY_IMG_ROOT_MARGIN_PX }
    }

    /// The header stops intersecting as soon as the nav bar would cover its last visible strip.
    pub fn sticky_header(nav_height: f64) -> Self {
        Self { threshold: config::STICKY_THRESHOLD, root_margin_px: -nav_height }
    }

    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }

    fn to_init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        init.set_root_margin(&self.root_margin());
        init
    }
}

/// One-shot observers stop watching after the first intersecting callback;
/// the others stay subscribed so they report both directions.
pub fn should_unobserve(once: bool, intersecting: bool) -> bool {
    once && intersecting
}

/// A live observer. Dropping it disconnects the observer and frees the callback.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch `target` and report whether it intersects the viewport.
///
/// With `once` set the target is unobserved after its first intersecting
/// callback, so `on_change(true)` fires at most one time.
pub fn observe<F>(
    target: &Element,
    options: ObserverOptions,
    once: bool,
    mut on_change: F,
) -> Result<Observation, JsValue>
where
    F: FnMut(bool) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            // Each observer watches exactly one element
            let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() else {
                return;
            };
            let intersecting = entry.is_intersecting();
            on_change(intersecting);
            if should_unobserve(once, intersecting) {
                observer.unobserve(&entry.target());
            }
        },
    );

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options.to_init())?;
    observer.observe(target);

    Ok(Observation { observer, _callback: callback })
}

/// Observe the element behind `node` for as long as the calling component is
/// mounted. The observer is rebuilt whenever `options` change.
#[hook]
pub fn use_intersection(node: NodeRef, options: ObserverOptions, once: bool, on_change: Callback<bool>) {
    use_effect_with_deps(
        move |(node, options)| {
            let observation = match node.cast::<Element>() {
                Some(target) => {
                    debug!("observing element, margin {}", options.root_margin());
                    observe(&target, *options, once, move |hit| on_change.emit(hit))
                        .map_err(|e| error!("Failed to create intersection observer: {:?}", e))
                        .ok()
                }
                None => {
                    warn!("intersection target is not mounted");
                    None
                }
            };
            move || drop(observation)
        },
        (node, options),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_observers_stop_after_first_hit() {
        assert!(should_unobserve(true, true));
        assert!(!should_unobserve(true, false));
    }

    #[test]
    fn continuous_observers_stay_subscribed() {
        assert!(!should_unobserve(false, true));
        assert!(!should_unobserve(false, false));
    }

    #[test]
    fn sticky_margin_is_negative_nav_height() {
        assert_eq!(ObserverOptions::sticky_header(90.0).root_margin(), "-90px");
        assert_eq!(ObserverOptions::sticky_header(90.5).root_margin(), "-90.5px");
        assert_eq!(ObserverOptions::sticky_header(90.0).threshold, 0.0);
    }

    #[test]
    fn lazy_images_load_ahead_of_viewport() {
        let options = ObserverOptions::lazy_image();
        assert_eq!(options.root_margin(), "200px");
        assert_eq!(options.threshold, 0.0);
    }

    #[test]
    fn reveal_waits_for_a_quarter_of_the_section() {
        let options = ObserverOptions::reveal();
        assert_eq!(options.threshold, 0.25);
        assert_eq!(options.root_margin(), "0px");
    }
}
