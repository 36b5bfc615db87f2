use std::rc::Rc;

use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Escape only dismisses a modal that is showing.
pub fn closes_on_key(key: &str, open: bool) -> bool {
    open && key == "Escape"
}

/// Whether the account modal and its overlay are showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
}

pub enum ModalAction {
    Open,
    Close,
    /// A window keydown, carrying `KeyboardEvent::key`.
    Key(String),
}

impl ModalState {
    pub fn apply(self, action: &ModalAction) -> Self {
        match action {
            ModalAction::Open => Self { open: true },
            ModalAction::Close => Self { open: false },
            ModalAction::Key(key) if closes_on_key(key, self.open) => Self { open: false },
            ModalAction::Key(_) => self,
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(&action);
        if next == *self {
            return self;
        }
        debug!("modal open: {}", next.open);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_action: Callback<ModalAction>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_action = props.on_action.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            on_action.emit(ModalAction::Key(e.key()));
        });
    }

    let close = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(ModalAction::Close);
        })
    };
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let hidden = (!props.open).then(|| "hidden");

    html! {
        <>
            <div class={classes!("modal", hidden)}>
                <button class="btn--close-modal" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal__header">
                    {"Open your bank account "}<br />
                    {"in just "}<span class="highlight">{"5 minutes"}</span>
                </h2>
                <form class="modal__form" {onsubmit}>
                    <label>{"First Name"}</label>
                    <input type="text" />
                    <label>{"Last Name"}</label>
                    <input type="text" />
                    <label>{"Email Address"}</label>
                    <input type="email" />
                    <button type="button" class="btn">{"Next step →"}</button>
                </form>
            </div>
            <div class={classes!("overlay", hidden)} onclick={close}></div>
            <style>
                {r#"
                    .modal {
                        position: fixed;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        max-width: 60rem;
                        background-color: #f3f3f3;
                        padding: 5rem 6rem;
                        box-shadow: 0 4rem 6rem rgba(0, 0, 0, 0.3);
                        z-index: 1000;
                        transition: all 0.5s;
                    }
                    .overlay {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background-color: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                        z-index: 100;
                        transition: all 0.5s;
                    }
                    .modal__header {
                        font-size: 3.25rem;
                        margin-bottom: 4.5rem;
                        line-height: 1.5;
                    }
                    .modal__form {
                        margin: 0 3rem;
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        align-items: center;
                        gap: 2.5rem;
                    }
                    .modal__form button {
                        grid-column: 1 / span 2;
                        justify-self: center;
                        margin-top: 1rem;
                    }
                    .btn--close-modal {
                        font-family: inherit;
                        color: inherit;
                        position: absolute;
                        top: 0.5rem;
                        right: 2rem;
                        font-size: 4rem;
                        cursor: pointer;
                        border: none;
                        background: none;
                    }
                    .hidden {
                        visibility: hidden;
                        opacity: 0;
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_open_modal() {
        assert!(closes_on_key("Escape", true));
    }

    #[test]
    fn escape_ignored_while_closed() {
        assert!(!closes_on_key("Escape", false));
    }

    #[test]
    fn other_keys_never_close() {
        for key in ["Enter", "ArrowLeft", "Esc", "escape"] {
            assert!(!closes_on_key(key, true), "{}", key);
        }
    }

    #[test]
    fn modal_starts_closed() {
        assert!(!ModalState::default().open);
    }

    #[test]
    fn open_and_close_toggle_the_shared_state() {
        let state = ModalState::default().apply(&ModalAction::Open);
        assert!(state.open);
        // Opening twice is harmless
        assert!(state.apply(&ModalAction::Open).open);
        assert!(!state.apply(&ModalAction::Close).open);
    }

    #[test]
    fn keys_route_through_the_escape_filter() {
        let open = ModalState { open: true };
        assert!(!open.apply(&ModalAction::Key("Escape".to_string())).open);
        assert!(open.apply(&ModalAction::Key("Enter".to_string())).open);

        let closed = ModalState::default();
        assert_eq!(closed.apply(&ModalAction::Key("Escape".to_string())), closed);
    }

    #[test]
    fn reducer_keeps_state_for_ignored_keys() {
        let start = Rc::new(ModalState { open: true });
        let after = start.clone().reduce(ModalAction::Key("ArrowRight".to_string()));
        assert!(Rc::ptr_eq(&start, &after));

        let closed = start.reduce(ModalAction::Close);
        assert!(!closed.open);
    }
}
