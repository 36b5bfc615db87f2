use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::observer::{use_intersection, ObserverOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    /// Only an intersecting callback reveals; a revealed section never hides again.
    pub fn on_intersect(self, intersecting: bool) -> Self {
        match self {
            RevealState::Hidden if intersecting => RevealState::Revealed,
            other => other,
        }
    }

    pub fn is_hidden(&self) -> bool {
        *self == RevealState::Hidden
    }
}

impl Reducible for RevealState {
    type Action = bool;

    fn reduce(self: Rc<Self>, intersecting: bool) -> Rc<Self> {
        let next = self.on_intersect(intersecting);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub description: AttrValue,
    pub header: AttrValue,
    pub children: Children,
}

/// Page section that stays hidden until a quarter of it scrolls into view.
/// Once revealed it stays revealed.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer(|| RevealState::Hidden);

    let on_change = {
        let dispatcher = state.dispatcher();
        let id = props.id.clone();
        Callback::from(move |intersecting: bool| {
            if intersecting {
                debug!("revealing {}", id);
            }
            dispatcher.dispatch(intersecting);
        })
    };
    use_intersection(node.clone(), ObserverOptions::reveal(), true, on_change);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("section", props.class.clone(), state.is_hidden().then(|| "section--hidden"))}
        >
            <div class="section__title">
                <h2 class="section__description">{props.description.clone()}</h2>
                <h3 class="section__header">{props.header.clone()}</h3>
            </div>
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_start_hidden() {
        assert!(RevealState::Hidden.is_hidden());
    }

    #[test]
    fn leaving_callbacks_do_not_reveal() {
        let state = RevealState::Hidden.on_intersect(false).on_intersect(false);
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn first_intersection_reveals_for_good() {
        let state = RevealState::Hidden.on_intersect(true);
        assert_eq!(state, RevealState::Revealed);
        assert_eq!(state.on_intersect(false), RevealState::Revealed);
    }

    #[test]
    fn reducer_keeps_state_for_noops() {
        let start = Rc::new(RevealState::Hidden);
        let after = start.clone().reduce(false);
        assert!(Rc::ptr_eq(&start, &after));

        let revealed = start.reduce(true);
        assert!(!revealed.is_hidden());
    }
}
