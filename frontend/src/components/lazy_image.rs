use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::observer::{use_intersection, ObserverOptions};

/// Load progress of a lazily swapped image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyState {
    /// Blurred low-resolution source.
    Placeholder,
    /// Full source requested, still blurred.
    Loading,
    Loaded,
}

pub enum LazyAction {
    Intersect(bool),
    /// The `<img>` fired `load` for its current source.
    Load,
}

impl LazyState {
    pub fn on_intersect(self, intersecting: bool) -> Self {
        match self {
            LazyState::Placeholder if intersecting => LazyState::Loading,
            other => other,
        }
    }

    /// Only the full image finishing clears the blur; the placeholder's own
    /// load event is ignored.
    pub fn on_load(self) -> Self {
        match self {
            LazyState::Loading => LazyState::Loaded,
            other => other,
        }
    }

    pub fn src<'a>(&self, placeholder: &'a str, full: &'a str) -> &'a str {
        match self {
            LazyState::Placeholder => placeholder,
            LazyState::Loading | LazyState::Loaded => full,
        }
    }

    pub fn is_blurred(&self) -> bool {
        *self != LazyState::Loaded
    }
}

impl Reducible for LazyState {
    type Action = LazyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LazyAction::Intersect(hit) => self.on_intersect(hit),
            LazyAction::Load => self.on_load(),
        };
        if next == *self {
            return self;
        }
        debug!("lazy image {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// Low-resolution source shown until the image nears the viewport.
    pub src: AttrValue,
    /// Full-resolution source, rendered as `data-src`.
    pub data_src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer(|| LazyState::Placeholder);

    let on_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |hit: bool| dispatcher.dispatch(LazyAction::Intersect(hit)))
    };
    use_intersection(node.clone(), ObserverOptions::lazy_image(), true, on_change);

    let onload = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(LazyAction::Load))
    };

    let src = state.src(&props.src, &props.data_src).to_string();

    html! {
        <img
            ref={node}
            src={src}
            data-src={props.data_src.clone()}
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), state.is_blurred().then(|| "lazy-img"))}
            {onload}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_swaps_in_full_source() {
        let state = LazyState::Placeholder.on_intersect(true);
        assert_eq!(state, LazyState::Loading);
        assert_eq!(state.src("lo.jpg", "hi.jpg"), "hi.jpg");
        assert!(state.is_blurred());
    }

    #[test]
    fn blur_clears_after_full_image_loads() {
        let state = LazyState::Placeholder.on_intersect(true).on_load();
        assert_eq!(state, LazyState::Loaded);
        assert!(!state.is_blurred());
        assert_eq!(state.src("lo.jpg", "hi.jpg"), "hi.jpg");
    }

    #[test]
    fn placeholder_load_keeps_blur() {
        let state = LazyState::Placeholder.on_load();
        assert_eq!(state, LazyState::Placeholder);
        assert!(state.is_blurred());
        assert_eq!(state.src("lo.jpg", "hi.jpg"), "lo.jpg");
    }

    #[test]
    fn leaving_the_viewport_changes_nothing() {
        assert_eq!(LazyState::Placeholder.on_intersect(false), LazyState::Placeholder);
        assert_eq!(LazyState::Loaded.on_intersect(false), LazyState::Loaded);
        assert_eq!(LazyState::Loaded.on_intersect(true), LazyState::Loaded);
    }

    #[test]
    fn reducer_returns_same_state_for_noops() {
        let start = Rc::new(LazyState::Placeholder);
        let after = start.clone().reduce(LazyAction::Load);
        assert!(Rc::ptr_eq(&start, &after));
    }
}
