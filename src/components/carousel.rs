use std::rc::Rc;

use web_sys::TouchEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::Testimonial;
use crate::utils::cycle::{swipe_direction, Cycle, SwipeDirection};

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    cycle: Cycle,
    hovered: bool,
    focused: bool,
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    HoverStart,
    HoverEnd,
    FocusIn,
    FocusOut,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { cycle: Cycle::new(len), hovered: false, focused: false }
    }

    pub fn index(&self) -> usize {
        self.cycle.index()
    }

    /// Paused while either the pointer or keyboard focus is inside.
    pub fn is_paused(&self) -> bool {
        self.hovered || self.focused
    }

    /// Single-slide carousels never rotate.
    pub fn auto_advances(&self) -> bool {
        !self.is_paused() && self.cycle.len() > 1
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let cycle = self.cycle;
        let next = match action {
            CarouselAction::Next => Self { cycle: cycle.next(), ..(*self).clone() },
            CarouselAction::Prev => Self { cycle: cycle.prev(), ..(*self).clone() },
            CarouselAction::GoTo(i) => Self { cycle: cycle.go_to(i), ..(*self).clone() },
            CarouselAction::HoverStart => Self { hovered: true, ..(*self).clone() },
            CarouselAction::HoverEnd => Self { hovered: false, ..(*self).clone() },
            CarouselAction::FocusIn => Self { focused: true, ..(*self).clone() },
            CarouselAction::FocusOut => Self { focused: false, ..(*self).clone() },
        };
        Rc::new(next)
    }
}

fn dispatch_on<E: 'static>(state: &UseReducerHandle<CarouselState>, action: fn() -> CarouselAction) -> Callback<E> {
    let state = state.clone();
    Callback::from(move |_: E| state.dispatch(action()))
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub testimonials: Vec<Testimonial>,
    #[prop_or(config::CAROUSEL_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &CarouselProps) -> Html {
    let state = use_reducer_eq({
        let len = props.testimonials.len();
        move || CarouselState::new(len)
    });
    let touch_start = use_mut_ref(|| None::<i32>);

    {
        let state = state.clone();
        // 0 stops the interval
        let millis = if state.auto_advances() { props.interval_ms } else { 0 };
        use_interval(move || state.dispatch(CarouselAction::Next), millis);
    }

    if props.testimonials.is_empty() {
        return html! {};
    }

    let onmouseenter: Callback<MouseEvent> = dispatch_on(&state, || CarouselAction::HoverStart);
    let onmouseleave: Callback<MouseEvent> = dispatch_on(&state, || CarouselAction::HoverEnd);
    let onfocusin: Callback<FocusEvent> = dispatch_on(&state, || CarouselAction::FocusIn);
    let onfocusout: Callback<FocusEvent> = dispatch_on(&state, || CarouselAction::FocusOut);
    let on_prev: Callback<MouseEvent> = dispatch_on(&state, || CarouselAction::Prev);
    let on_next: Callback<MouseEvent> = dispatch_on(&state, || CarouselAction::Next);

    let ontouchstart = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            *touch_start.borrow_mut() = e.touches().get(0).map(|t| t.client_x());
        })
    };
    let ontouchend = {
        let state = state.clone();
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            let start = touch_start.borrow_mut().take();
            let end = e.changed_touches().get(0).map(|t| t.client_x());
            if let (Some(start), Some(end)) = (start, end) {
                match swipe_direction(start, end, config::SWIPE_THRESHOLD_PX) {
                    Some(SwipeDirection::Next) => state.dispatch(CarouselAction::Next),
                    Some(SwipeDirection::Prev) => state.dispatch(CarouselAction::Prev),
                    None => {}
                }
            }
        })
    };

    let current = state.index();
    let slides = props.testimonials.iter().enumerate().map(|(i, t)| {
        html! {
            <figure class={classes!("carousel-slide", (i == current).then(|| "active"))} aria-hidden={(i != current).to_string()}>
                <blockquote>{ format!("“{}”", t.quote) }</blockquote>
                <figcaption>
                    <strong>{ t.author }</strong>
                    <span>{ t.role }</span>
                </figcaption>
            </figure>
        }
    });
    let indicators = (0..props.testimonials.len()).map(|i| {
        let state = state.clone();
        let onclick = Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(i)));
        html! {
            <button
                class={classes!("carousel-dot", (i == current).then(|| "active"))}
                aria-label={format!("Show testimonial {}", i + 1)}
                {onclick}
            />
        }
    });

    html! {
        <div
            class="carousel"
            {onmouseenter}
            {onmouseleave}
            {onfocusin}
            {onfocusout}
            {ontouchstart}
            {ontouchend}
        >
            <div class="carousel-track">
                { for slides }
            </div>
            <button class="carousel-control prev" aria-label="Previous testimonial" onclick={on_prev}>{"‹"}</button>
            <button class="carousel-control next" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
            <div class="carousel-indicators">
                { for indicators }
            </div>
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 2rem 3.5rem;
                        text-align: center;
                    }
                    .carousel-track {
                        display: grid;
                    }
                    .carousel-slide {
                        grid-area: 1 / 1;
                        margin: 0;
                        opacity: 0;
                        transform: translateX(24px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                        pointer-events: none;
                    }
                    .carousel-slide.active {
                        opacity: 1;
                        transform: none;
                        pointer-events: auto;
                    }
                    .carousel-slide blockquote {
                        font-size: 1.35rem;
                        line-height: 1.6;
                        color: #eee;
                        margin: 0 0 1.25rem;
                    }
                    .carousel-slide figcaption span {
                        display: block;
                        color: #999;
                        font-size: 0.9rem;
                    }
                    .carousel-control {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: none;
                        border: none;
                        color: #7EB2FF;
                        font-size: 2.5rem;
                        cursor: pointer;
                    }
                    .carousel-control.prev { left: 0; }
                    .carousel-control.next { right: 0; }
                    .carousel-indicators {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .carousel-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                    }
                    .carousel-dot.active {
                        background: #7EB2FF;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(len: usize, actions: Vec<CarouselAction>) -> CarouselState {
        let mut state = Rc::new(CarouselState::new(len));
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn advances_and_wraps() {
        use CarouselAction::*;
        assert_eq!(run(3, vec![Next, Next]).index(), 2);
        assert_eq!(run(3, vec![Next, Next, Next]).index(), 0);
        assert_eq!(run(3, vec![Prev]).index(), 2);
    }

    #[test]
    fn indicator_jumps() {
        use CarouselAction::*;
        assert_eq!(run(4, vec![GoTo(3)]).index(), 3);
        assert_eq!(run(4, vec![GoTo(1), GoTo(10)]).index(), 1);
    }

    #[test]
    fn pause_stops_auto_advance() {
        use CarouselAction::*;
        assert!(run(3, vec![]).auto_advances());
        assert!(!run(3, vec![HoverStart]).auto_advances());
        assert!(run(3, vec![HoverStart, HoverEnd]).auto_advances());
        assert!(!run(3, vec![FocusIn]).auto_advances());
        assert!(run(3, vec![FocusIn, FocusOut]).auto_advances());
        // manual navigation still works while paused
        assert_eq!(run(3, vec![HoverStart, Next]).index(), 1);
    }

    #[test]
    fn pointer_leaving_keeps_focus_pause() {
        use CarouselAction::*;
        let state = run(3, vec![HoverStart, FocusIn, HoverEnd]);
        assert!(state.is_paused());
        assert!(!state.auto_advances());
        assert!(run(3, vec![HoverStart, FocusIn, HoverEnd, FocusOut]).auto_advances());
        assert!(!run(3, vec![FocusIn, HoverStart, FocusOut]).auto_advances());
    }

    #[test]
    fn single_slide_does_not_rotate() {
        assert!(!run(1, vec![]).auto_advances());
        assert!(!run(0, vec![]).auto_advances());
    }
}
