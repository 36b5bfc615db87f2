use log::{debug, error};
use web_sys::Element;
use yew::prelude::*;

use crate::components::{
    lazy_image::LazyImage,
    modal::{Modal, ModalAction, ModalState},
    nav::{is_sticky, Nav},
    reveal::RevealSection,
    scroll::scroll_to_id,
    slider::Slider,
    tabs::Operations,
};
use crate::config;
use crate::observer::{use_intersection, ObserverOptions};

struct Feature {
    title: &'static str,
    text: &'static str,
    image: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "100% digital bank",
        text: "Lorem ipsum dolor sit amet consectetur adipisicing elit. Unde alias sint quos? Accusantium a fugiat porro reiciendis saepe quibusdam debitis ducimus.",
        image: "digital",
    },
    Feature {
        title: "Watch your money grow",
        text: "Nesciunt quos autem dolorum voluptates cum dolores dicta fuga inventore ab? Nulla incidunt eius numquam sequi iste pariatur quibusdam!",
        image: "grow",
    },
    Feature {
        title: "Free debit card included",
        text: "Quasi, fugit in cumque cupiditate reprehenderit debitis animi enim eveniet consequatur odit quam quos possimus assumenda dicta fuga inventore ab.",
        image: "card",
    },
];

struct Testimonial {
    header: &'static str,
    text: &'static str,
    name: &'static str,
    location: &'static str,
    photo: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        header: "Best financial decision ever!",
        text: "Lorem ipsum dolor sit, amet consectetur adipisicing elit. Accusantium quas quisquam non? Quas voluptate nulla minima deleniti optio ullam nesciunt, numquam corporis et asperiores laboriosam sunt, praesentium suscipit blanditiis.",
        name: "Aarav Lynn",
        location: "San Francisco, USA",
        photo: "user-1.jpg",
    },
    Testimonial {
        header: "The last step to becoming a complete minimalist",
        text: "Quisquam itaque deserunt ullam, quia ea repellendus provident, ducimus neque ipsam modi voluptatibus doloremque, corrupti laborum. Incidunt numquam perferendis veritatis neque repellendus.",
        name: "Miyah Miles",
        location: "London, UK",
        photo: "user-2.jpg",
    },
    Testimonial {
        header: "Finally free from old-school banks",
        text: "Debitis, nihil sit minus suscipit magni aperiam vel tenetur incidunt commodi architecto numquam omnis nulla autem, necessitatibus blanditiis modi similique quidem. Odio aliquam culpa dicta beatae quod maiores ipsa minus consequatur error sunt, deleniti saepe aliquid quos inventore sequi.",
        name: "Francisco Gomes",
        location: "Lisbon, Portugal",
        photo: "user-3.jpg",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let modal = use_reducer(ModalState::default);
    let sticky = use_state(|| false);
    let nav_height = use_state(|| 0.0_f64);
    let nav_ref = use_node_ref();
    let header_ref = use_node_ref();

    // Measure the nav bar once it is mounted
    {
        let nav_ref = nav_ref.clone();
        let nav_height = nav_height.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(nav) = nav_ref.cast::<Element>() {
                    let height = nav.get_bounding_client_rect().height();
                    debug!("nav height {}px", height);
                    nav_height.set(height);
                }
                || ()
            },
            (),
        );
    }

    {
        let sticky = sticky.clone();
        let on_change = Callback::from(move |intersecting: bool| sticky.set(is_sticky(intersecting)));
        use_intersection(header_ref.clone(), ObserverOptions::sticky_header(*nav_height), false, on_change);
    }

    let open_modal = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ModalAction::Open))
    };
    let modal_action = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |action: ModalAction| dispatcher.dispatch(action))
    };
    let open_modal_click = {
        let open_modal = open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_modal.emit(());
        })
    };

    let learn_more = Callback::from(|_: MouseEvent| {
        if let Err(e) = scroll_to_id(config::SECTION_FEATURES_ID) {
            error!("Failed to scroll to features: {:?}", e);
        }
    });

    html! {
        <>
            <header class="header" ref={header_ref}>
                <Nav sticky={*sticky} nav_ref={nav_ref} on_open_account={open_modal} />
                <div class="header__title">
                    <h1>
                        {"When "}<span class="highlight">{"banking"}</span>
                        {" meets"}<br />
                        <span class="highlight">{"minimalist"}</span>
                    </h1>
                    <h4>{"A simpler banking experience for a simpler life."}</h4>
                    <button class="btn--text btn--scroll-to" onclick={learn_more}>{"Learn more ↓"}</button>
                    <img src="/assets/hero.png" class="header__img" alt="Minimalist bank items" />
                </div>
            </header>

            <RevealSection
                id={config::SECTION_FEATURES_ID}
                description="Features"
                header="Everything you need in a modern bank and more."
            >
                <div class="features">
                    {
                        FEATURES.iter().enumerate().map(|(i, feature)| {
                            let image = html! {
                                <LazyImage
                                    src={format!("/assets/{}-lazy.jpg", feature.image)}
                                    data_src={format!("/assets/{}.jpg", feature.image)}
                                    alt={feature.title}
                                    class={classes!("features__img")}
                                />
                            };
                            let text = html! {
                                <div class="features__feature">
                                    <h5 class="features__header">{feature.title}</h5>
                                    <p>{feature.text}</p>
                                </div>
                            };
                            // Images alternate sides down the section
                            if i % 2 == 0 {
                                html! { <>{image}{text}</> }
                            } else {
                                html! { <>{text}{image}</> }
                            }
                        }).collect::<Html>()
                    }
                </div>
            </RevealSection>

            <RevealSection
                id="section--2"
                description="Operations"
                header="Everything as simple as possible, but no simpler."
            >
                <Operations />
            </RevealSection>

            <RevealSection
                id="section--3"
                description="Not sure yet?"
                header="Millions of Bankists are already making their lives simpler."
            >
                <Slider>
                    {
                        for TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial">
                                <h5 class="testimonial__header">{t.header}</h5>
                                <blockquote class="testimonial__text">{t.text}</blockquote>
                                <address class="testimonial__author">
                                    <img src={format!("/assets/{}", t.photo)} alt="" class="testimonial__photo" />
                                    <h6 class="testimonial__name">{t.name}</h6>
                                    <p class="testimonial__location">{t.location}</p>
                                </address>
                            </div>
                        })
                    }
                </Slider>
            </RevealSection>

            <RevealSection
                id="section--sign-up"
                class={classes!("section--sign-up")}
                description="Join today"
                header="The best day to join Bankist was one year ago. The second best is today!"
            >
                <button class="btn btn--show-modal" onclick={open_modal_click}>{"Open your free account today!"}</button>
            </RevealSection>

            <footer class="footer">
                <img src="/assets/icon.png" alt="Logo" class="footer__logo" />
                <p class="footer__copyright">{"© Copyright by Bankist."}</p>
            </footer>

            <Modal open={modal.open} on_action={modal_action} />

            <style>
                {r#"
                    .header {
                        padding: 0 3rem;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .header__title {
                        flex: 1;
                        max-width: 115rem;
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        row-gap: 3rem;
                        align-content: center;
                        justify-content: center;
                        align-items: start;
                        justify-items: start;
                    }
                    .highlight {
                        position: relative;
                    }
                    .btn--text {
                        display: inline-block;
                        background: none;
                        font-size: 1.7rem;
                        font-family: inherit;
                        font-weight: 500;
                        color: #5ec576;
                        border: none;
                        border-bottom: 1px solid currentColor;
                        padding-bottom: 2px;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .section {
                        padding: 15rem 3rem;
                        border-top: 1px solid #ddd;
                        transition: transform 1s, opacity 1s;
                    }
                    .section--hidden {
                        opacity: 0;
                        transform: translateY(8rem);
                    }
                    .section__title {
                        max-width: 80rem;
                        margin: 0 auto 8rem auto;
                    }
                    .section__description {
                        font-size: 1.8rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        color: #5ec576;
                        margin-bottom: 1rem;
                    }
                    .section__header {
                        font-size: 4rem;
                        line-height: 1.3;
                        font-weight: 500;
                    }
                    .section--sign-up {
                        background-color: #37383d;
                        border-top: none;
                        border-bottom: 1px solid #444;
                        text-align: center;
                        padding: 10rem 3rem;
                    }
                    .features {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        margin: 0 12rem;
                    }
                    .features__img {
                        width: 100%;
                    }
                    .lazy-img {
                        filter: blur(20px);
                    }
                    .testimonial {
                        width: 65%;
                        position: relative;
                    }
                    .testimonial__header {
                        font-size: 2.25rem;
                        font-weight: 500;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial__author {
                        margin-left: 3rem;
                        font-style: normal;
                        display: grid;
                        grid-template-columns: 6.5rem 1fr;
                        column-gap: 2rem;
                    }
                    .testimonial__photo {
                        grid-row: 1 / span 2;
                        width: 6.5rem;
                        border-radius: 50%;
                    }
                    .footer {
                        padding: 10rem 3rem;
                        background-color: #37383d;
                    }
                    .footer__logo {
                        height: 5rem;
                        display: block;
                        margin: 0 auto 5rem auto;
                    }
                    .footer__copyright {
                        font-size: 1.4rem;
                        color: #aaa;
                        text-align: center;
                    }
                "#}
            </style>
        </>
    }
}
