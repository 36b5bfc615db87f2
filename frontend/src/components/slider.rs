use std::fmt;
use std::num::{NonZeroUsize, ParseIntError};
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, warn};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Position of a slide, as carried by a dot's `data-slide` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex(pub usize);

impl FromStr for SlideIndex {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(SlideIndex)
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slide position and dot state for one carousel.
///
/// Construction places slide 0 in view and marks dot 0 active, so every
/// navigation method operates on an initialized carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    current: usize,
    offsets: Vec<i128>,
    active_dot: Option<usize>,
}

impl Carousel {
    pub fn new(slide_count: NonZeroUsize) -> Self {
        let mut carousel = Self {
            current: 0,
            offsets: vec![0; slide_count.get()],
            active_dot: None,
        };
        carousel.activate_dot(0);
        carousel.go_to_slide(0);
        carousel
    }

    pub fn slide_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Horizontal offset of each slide, in percent of the slide width.
    pub fn offsets(&self) -> &[i128] {
        &self.offsets
    }

    pub fn active_dot(&self) -> Option<usize> {
        self.active_dot
    }

    /// Shift every slide so `index` sits at offset 0. Out-of-range indices are
    /// not clamped and leave every slide off screen. Offsets are kept in
    /// `i128` so that no `isize` input overflows.
    pub fn go_to_slide(&mut self, index: isize) {
        let index = index as i128;
        for (i, offset) in self.offsets.iter_mut().enumerate() {
            *offset = 100 * (i as i128 - index);
        }
    }

    pub fn activate_dot(&mut self, index: isize) {
        self.active_dot = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.slide_count());
    }

    pub fn next_slide(&mut self) {
        if self.current >= self.slide_count() - 1 {
            self.current = 0;
        } else {
            self.current += 1;
        }
        self.render();
    }

    pub fn prev_slide(&mut self) {
        if self.current == 0 {
            self.current = self.slide_count() - 1;
        } else {
            self.current -= 1;
        }
        self.render();
    }

    /// Jump straight to the slide a dot points at. Returns false and leaves
    /// the carousel untouched when the index names no slide.
    pub fn jump_to(&mut self, index: SlideIndex) -> bool {
        if index.0 >= self.slide_count() {
            return false;
        }
        self.current = index.0;
        self.render();
        true
    }

    fn render(&mut self) {
        let index = self.current as isize;
        self.go_to_slide(index);
        self.activate_dot(index);
    }
}

pub enum SliderAction {
    Prev,
    Next,
    /// A dot was clicked; carries the dot's `data-slide` value.
    Dot(AttrValue),
}

impl SliderAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(SliderAction::Prev),
            "ArrowRight" => Some(SliderAction::Next),
            _ => None,
        }
    }
}

impl Reducible for Carousel {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SliderAction::Prev => next.prev_slide(),
            SliderAction::Next => next.next_slide(),
            SliderAction::Dot(value) => match value.parse::<SlideIndex>() {
                Ok(index) => {
                    if !next.jump_to(index) {
                        warn!("dot points past the last slide: {}", index);
                        return self;
                    }
                }
                Err(e) => {
                    warn!("ignoring dot with value {:?}: {}", value, e);
                    return self;
                }
            },
        }
        debug!("slider moved to {}", next.current());
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub children: Children,
}

/// Manual slider with arrow buttons, dot indicators and arrow-key control.
/// Each child is one slide.
#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    match NonZeroUsize::new(props.children.len()) {
        Some(slide_count) => html! {
            <SliderTrack slide_count={slide_count}>
                { for props.children.iter() }
            </SliderTrack>
        },
        None => {
            warn!("slider rendered without slides");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct SliderTrackProps {
    slide_count: NonZeroUsize,
    children: Children,
}

#[function_component(SliderTrack)]
fn slider_track(props: &SliderTrackProps) -> Html {
    let slide_count = props.slide_count;
    let carousel = use_reducer(move || Carousel::new(slide_count));

    {
        let dispatcher = carousel.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = SliderAction::from_key(&e.key()) {
                dispatcher.dispatch(action);
            }
        });
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(SliderAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(SliderAction::Next))
    };

    html! {
        <div class="slider">
            {
                props.children.iter().zip(carousel.offsets().iter()).map(|(slide, offset)| html! {
                    <div class="slide" style={format!("transform: translateX({}%)", offset)}>
                        { slide }
                    </div>
                }).collect::<Html>()
            }
            <button class="slider__btn slider__btn--left" onclick={on_prev}>{"←"}</button>
            <button class="slider__btn slider__btn--right" onclick={on_next}>{"→"}</button>
            <div class="dots">
                {
                    (0..carousel.slide_count()).map(|i| {
                        let value = AttrValue::from(i.to_string());
                        let onclick = {
                            let carousel = carousel.clone();
                            let value = value.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(SliderAction::Dot(value.clone())))
                        };
                        html! {
                            <button
                                class={classes!("dots__dot", (carousel.active_dot() == Some(i)).then(|| "dots__dot--active"))}
                                data-slide={value}
                                {onclick}
                            ></button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                    .slider {
                        max-width: 100rem;
                        height: 50rem;
                        margin: 0 auto;
                        position: relative;
                        overflow: hidden;
                    }
                    .slide {
                        position: absolute;
                        top: 0;
                        width: 100%;
                        height: 50rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 1s;
                    }
                    .slider__btn {
                        position: absolute;
                        top: 50%;
                        z-index: 10;
                        border: none;
                        background: rgba(255, 255, 255, 0.7);
                        font-family: inherit;
                        color: #333;
                        border-radius: 50%;
                        height: 5.5rem;
                        width: 5.5rem;
                        font-size: 3.25rem;
                        cursor: pointer;
                    }
                    .slider__btn--left {
                        left: 6%;
                        transform: translate(-50%, -50%);
                    }
                    .slider__btn--right {
                        right: 6%;
                        transform: translate(50%, -50%);
                    }
                    .dots {
                        position: absolute;
                        bottom: 5%;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                    }
                    .dots__dot {
                        border: none;
                        background-color: #b9b9b9;
                        opacity: 0.7;
                        height: 1rem;
                        width: 1rem;
                        border-radius: 50%;
                        margin-right: 1.75rem;
                        cursor: pointer;
                        transition: all 0.5s;
                    }
                    .dots__dot:last-child {
                        margin: 0;
                    }
                    .dots__dot--active {
                        background-color: #888;
                        opacity: 1;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(n).unwrap())
    }

    fn visible(c: &Carousel) -> Vec<usize> {
        c.offsets()
            .iter()
            .enumerate()
            .filter(|&(_, &o)| o == 0)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn new_shows_first_slide_and_first_dot() {
        for n in 1..=6 {
            let c = carousel(n);
            assert_eq!(c.current(), 0);
            assert_eq!(visible(&c), vec![0]);
            assert_eq!(c.active_dot(), Some(0));
            assert_eq!(c.slide_count(), n);
        }
    }

    #[test]
    fn next_cycles_back_to_start() {
        for n in 1..=5 {
            let mut c = carousel(n);
            for _ in 0..n {
                c.next_slide();
            }
            assert_eq!(c.current(), 0);
            assert_eq!(visible(&c), vec![0]);
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut c = carousel(4);
        c.prev_slide();
        assert_eq!(c.current(), 3);
        assert_eq!(visible(&c), vec![3]);
        assert_eq!(c.active_dot(), Some(3));
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = carousel(1);
        c.next_slide();
        assert_eq!(c.current(), 0);
        c.prev_slide();
        assert_eq!(c.current(), 0);
        assert_eq!(c.offsets(), &[0]);
    }

    #[test]
    fn go_to_slide_offsets_follow_distance() {
        let mut c = carousel(5);
        for index in 0..5isize {
            c.go_to_slide(index);
            assert_eq!(visible(&c), vec![index as usize]);
            for (i, &offset) in c.offsets().iter().enumerate() {
                assert_eq!(offset, 100 * (i as i128 - index as i128));
            }
        }
    }

    #[test]
    fn go_to_slide_out_of_range_hides_everything() {
        let mut c = carousel(3);
        c.go_to_slide(3);
        assert_eq!(c.offsets(), &[-300, -200, -100]);
        assert!(visible(&c).is_empty());

        c.go_to_slide(-1);
        assert_eq!(c.offsets(), &[100, 200, 300]);
        assert!(visible(&c).is_empty());
    }

    #[test]
    fn go_to_slide_handles_extreme_indices() {
        let mut c = carousel(3);
        for index in [isize::MAX, isize::MAX / 50, isize::MIN, isize::MIN / 50] {
            c.go_to_slide(index);
            assert!(visible(&c).is_empty(), "index {}", index);
        }

        c.go_to_slide(isize::MAX);
        assert_eq!(c.offsets()[0], -100 * isize::MAX as i128);
        c.go_to_slide(isize::MIN);
        assert_eq!(c.offsets()[2], 100 * (2 - isize::MIN as i128));

        // Still navigable afterwards
        c.next_slide();
        assert_eq!(visible(&c), vec![1]);
    }

    #[test]
    fn activate_dot_matches_at_most_one() {
        let mut c = carousel(3);
        c.activate_dot(2);
        assert_eq!(c.active_dot(), Some(2));
        c.activate_dot(3);
        assert_eq!(c.active_dot(), None);
        c.activate_dot(-1);
        assert_eq!(c.active_dot(), None);
    }

    #[test]
    fn next_from_first_of_three() {
        let mut c = carousel(3);
        c.next_slide();
        assert_eq!(c.current(), 1);
        assert_eq!(c.offsets(), &[-100, 0, 100]);
        assert_eq!(c.active_dot(), Some(1));
    }

    #[test]
    fn next_from_last_of_three_wraps() {
        let mut c = carousel(3);
        c.next_slide();
        c.next_slide();
        assert_eq!(c.current(), 2);
        c.next_slide();
        assert_eq!(c.current(), 0);
        assert_eq!(c.offsets(), &[0, 100, 200]);
    }

    #[test]
    fn prev_from_first_of_three_wraps() {
        let mut c = carousel(3);
        c.prev_slide();
        assert_eq!(c.current(), 2);
        assert_eq!(c.offsets(), &[-200, -100, 0]);
    }

    #[test]
    fn dot_value_jumps_directly() {
        let c = Rc::new(carousel(3));
        let c = c.reduce(SliderAction::Dot(AttrValue::from("2")));
        assert_eq!(c.current(), 2);
        assert_eq!(visible(&c), vec![2]);
        assert_eq!(c.active_dot(), Some(2));

        // Navigation continues from the jumped-to slide
        let c = c.reduce(SliderAction::Next);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn bad_dot_values_are_ignored() {
        let start = Rc::new(carousel(3));
        for value in ["", "two", "-1", "3", "1.5"] {
            let after = start.clone().reduce(SliderAction::Dot(AttrValue::from(value)));
            assert_eq!(*after, *start, "value {:?}", value);
        }
    }

    #[test]
    fn slide_index_parses_attribute_text() {
        assert_eq!("0".parse::<SlideIndex>(), Ok(SlideIndex(0)));
        assert_eq!(" 7 ".parse::<SlideIndex>(), Ok(SlideIndex(7)));
        assert!("x".parse::<SlideIndex>().is_err());
        assert_eq!(SlideIndex(4).to_string(), "4");
    }

    #[test]
    fn only_arrow_keys_drive_the_slider() {
        assert!(matches!(SliderAction::from_key("ArrowLeft"), Some(SliderAction::Prev)));
        assert!(matches!(SliderAction::from_key("ArrowRight"), Some(SliderAction::Next)));
        assert!(SliderAction::from_key("ArrowUp").is_none());
        assert!(SliderAction::from_key("Escape").is_none());
    }
}
