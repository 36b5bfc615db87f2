use log::debug;
use yew::prelude::*;

/// One tab of the operations component. `number` is the `data-tab` value and
/// names the matching content panel.
#[derive(Clone, PartialEq)]
pub struct OperationTab {
    pub number: usize,
    pub label: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
}

pub const OPERATION_TABS: [OperationTab; 3] = [
    OperationTab {
        number: 1,
        label: "Instant Transfers",
        heading: "Transfer money to anyone, instantly! No fees, no BS.",
        text: "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    },
    OperationTab {
        number: 2,
        label: "Instant Loans",
        heading: "Buy a home or make your dreams come true, with instant loans.",
        text: "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    },
    OperationTab {
        number: 3,
        label: "Instant Closing",
        heading: "No longer need your account? No problem! Close it instantly.",
        text: "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    },
];

/// Which tab is active. Tab and content panel are always activated together,
/// so a single number drives both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSet {
    count: usize,
    active: usize,
}

impl TabSet {
    pub fn new(count: usize) -> Self {
        Self { count, active: 1 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, number: usize) -> bool {
        self.active == number
    }

    /// Returns false for numbers that name no tab.
    pub fn activate(&mut self, number: usize) -> bool {
        if number == 0 || number > self.count {
            return false;
        }
        self.active = number;
        true
    }
}

#[function_component(Operations)]
pub fn operations() -> Html {
    let tabs = use_state(|| TabSet::new(OPERATION_TABS.len()));

    html! {
        <div class="operations">
            <div class="operations__tab-container">
                {
                    OPERATION_TABS.iter().map(|tab| {
                        let number = tab.number;
                        let onclick = {
                            let tabs = tabs.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = *tabs;
                                if next.activate(number) {
                                    debug!("operations tab {} active", number);
                                    tabs.set(next);
                                }
                            })
                        };
                        html! {
                            <button
                                class={classes!(
                                    "btn",
                                    "operations__tab",
                                    format!("operations__tab--{}", number),
                                    tabs.is_active(number).then(|| "operations__tab--active")
                                )}
                                data-tab={number.to_string()}
                                {onclick}
                            >
                                <span>{format!("0{}", number)}</span>{tab.label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            {
                OPERATION_TABS.iter().map(|tab| html! {
                    <div class={classes!(
                        "operations__content",
                        format!("operations__content--{}", tab.number),
                        tabs.is_active(tab.number).then(|| "operations__content--active")
                    )}>
                        <div class={classes!("operations__icon", format!("operations__icon--{}", tab.number))}></div>
                        <h5 class="operations__header">{tab.heading}</h5>
                        <p>{tab.text}</p>
                    </div>
                }).collect::<Html>()
            }
            <style>
                {r#"
                    .operations {
                        max-width: 100rem;
                        margin: 12rem auto 0 auto;
                        background-color: #fff;
                    }
                    .operations__tab-container {
                        display: flex;
                        justify-content: center;
                    }
                    .operations__tab {
                        margin-right: 2.5rem;
                        transform: translateY(-50%);
                    }
                    .operations__tab span {
                        margin-right: 1rem;
                        font-weight: 600;
                        display: inline-block;
                    }
                    .operations__tab--1 { background-color: #ffcb03; }
                    .operations__tab--3 { background-color: #ff585f; margin: 0; }
                    .operations__tab--active {
                        transform: translateY(-66%);
                    }
                    .operations__content {
                        display: none;
                        font-size: 1.7rem;
                        padding: 2.5rem 7rem 6.5rem 7rem;
                    }
                    .operations__content--active {
                        display: grid;
                        grid-template-columns: 7rem 1fr;
                        column-gap: 3rem;
                        row-gap: 0.5rem;
                    }
                    .operations__header {
                        font-size: 2.25rem;
                        font-weight: 500;
                        align-self: center;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_starts_active() {
        let tabs = TabSet::new(3);
        assert_eq!(tabs.active(), 1);
        assert!(tabs.is_active(1));
        assert!(!tabs.is_active(2));
    }

    #[test]
    fn activating_moves_the_single_active_tab() {
        let mut tabs = TabSet::new(3);
        assert!(tabs.activate(3));
        let active: Vec<usize> = (1..=3).filter(|&n| tabs.is_active(n)).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn unknown_tab_leaves_state_alone() {
        let mut tabs = TabSet::new(3);
        tabs.activate(2);
        assert!(!tabs.activate(0));
        assert!(!tabs.activate(4));
        assert_eq!(tabs.active(), 2);
    }

    #[test]
    fn tab_numbers_are_sequential() {
        for (i, tab) in OPERATION_TABS.iter().enumerate() {
            assert_eq!(tab.number, i + 1);
        }
    }
}
