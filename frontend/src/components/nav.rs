use log::error;
use yew::prelude::*;

use crate::components::scroll::{fragment_id, scroll_to_id};
use crate::config;

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Features", "#section--1"),
    ("Operations", "#section--2"),
    ("Testimonials", "#section--3"),
];

/// Opacity of link `index` while link `hovered` is under the pointer.
pub fn link_opacity(hovered: Option<usize>, index: usize) -> f64 {
    match hovered {
        Some(h) if h != index => config::FADED_LINK_OPACITY,
        _ => 1.0,
    }
}

/// The nav sticks once the header has scrolled out from under it.
pub fn is_sticky(header_intersecting: bool) -> bool {
    !header_intersecting
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub sticky: bool,
    /// Lets the page measure the bar height for the sticky observer.
    pub nav_ref: NodeRef,
    pub on_open_account: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    let hover = |index: usize| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
    };
    let unhover = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let open_account = {
        let on_open_account = props.on_open_account.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_account.emit(());
        })
    };

    let account_index = NAV_LINKS.len();

    html! {
        <nav ref={props.nav_ref.clone()} class={classes!("nav", props.sticky.then(|| "sticky"))}>
            <img src="/assets/logo.png" alt="Bankist logo" class="nav__logo" id="logo" />
            <ul class="nav__links">
                {
                    NAV_LINKS.iter().enumerate().map(|(index, (label, href))| {
                        let onclick = {
                            let href = *href;
                            Callback::from(move |e: MouseEvent| {
                                let Some(id) = fragment_id(href) else { return; };
                                e.prevent_default();
                                if let Err(e) = scroll_to_id(id) {
                                    error!("Failed to scroll to {}: {:?}", id, e);
                                }
                            })
                        };
                        html! {
                            <li class="nav__item">
                                <a
                                    class="nav__link"
                                    href={*href}
                                    style={format!("opacity: {}", link_opacity(*hovered, index))}
                                    onmouseover={hover(index)}
                                    onmouseout={unhover.clone()}
                                    {onclick}
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    }).collect::<Html>()
                }
                <li class="nav__item">
                    <a
                        class="nav__link nav__link--btn btn--show-modal"
                        href="#"
                        style={format!("opacity: {}", link_opacity(*hovered, account_index))}
                        onmouseover={hover(account_index)}
                        onmouseout={unhover}
                        onclick={open_account}
                    >
                        {"Open account"}
                    </a>
                </li>
            </ul>
            <style>
                {r#"
                    .nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        height: 9rem;
                        width: 100%;
                        padding: 0 6rem;
                        z-index: 100;
                    }
                    .nav.sticky {
                        position: fixed;
                        background-color: rgba(255, 255, 255, 0.95);
                    }
                    .nav__logo {
                        height: 4.5rem;
                        transition: all 0.3s;
                    }
                    .nav__links {
                        display: flex;
                        align-items: center;
                        list-style: none;
                    }
                    .nav__item {
                        margin-left: 4rem;
                    }
                    .nav__link:link,
                    .nav__link:visited {
                        font-size: 1.7rem;
                        font-weight: 400;
                        color: inherit;
                        text-decoration: none;
                        display: block;
                        transition: all 0.3s;
                    }
                    .nav__link--btn:link,
                    .nav__link--btn:visited {
                        padding: 0.8rem 2.5rem;
                        border-radius: 3rem;
                        background-color: #5ec576;
                        color: #222;
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hover_keeps_every_link_opaque() {
        for index in 0..=NAV_LINKS.len() {
            assert_eq!(link_opacity(None, index), 1.0);
        }
    }

    #[test]
    fn hover_fades_only_the_siblings() {
        let opacities: Vec<f64> = (0..4).map(|i| link_opacity(Some(1), i)).collect();
        assert_eq!(opacities, vec![0.5, 1.0, 0.5, 0.5]);
    }

    #[test]
    fn sticky_tracks_header_visibility() {
        assert!(is_sticky(false));
        assert!(!is_sticky(true));
    }

    #[test]
    fn sticky_toggles_both_ways_over_a_scroll() {
        // Header leaves, comes back, leaves again
        let header_intersecting = [true, false, true, false];
        let sticky: Vec<bool> = header_intersecting.iter().map(|&hit| is_sticky(hit)).collect();
        assert_eq!(sticky, vec![false, true, false, true]);
    }
}
