use std::rc::Rc;

use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::GalleryImage;
use crate::utils::cycle::Cycle;
use crate::utils::dom::set_body_class;

#[derive(Clone, Debug, PartialEq)]
pub struct LightboxState {
    cycle: Cycle,
    open: bool,
}

pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Prev,
}

impl LightboxState {
    pub fn new(len: usize) -> Self {
        Self { cycle: Cycle::new(len), open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the image on screen, if any.
    pub fn current(&self) -> Option<usize> {
        self.open.then(|| self.cycle.index())
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LightboxAction::Open(i) if i < self.cycle.len() => Self { cycle: self.cycle.go_to(i), open: true },
            LightboxAction::Open(_) => return self,
            LightboxAction::Close => Self { open: false, ..(*self).clone() },
            // Arrow keys do nothing while closed.
            LightboxAction::Next if self.open => Self { cycle: self.cycle.next(), ..(*self).clone() },
            LightboxAction::Prev if self.open => Self { cycle: self.cycle.prev(), ..(*self).clone() },
            LightboxAction::Next | LightboxAction::Prev => return self,
        };
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

/// Thumbnail grid; clicking one opens it enlarged in an overlay.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let state = use_reducer_eq({
        let len = props.images.len();
        move || LightboxState::new(len)
    });

    {
        let state = state.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !state.is_open() {
                return;
            }
            match e.key().as_str() {
                "Escape" => state.dispatch(LightboxAction::Close),
                "ArrowRight" => state.dispatch(LightboxAction::Next),
                "ArrowLeft" => state.dispatch(LightboxAction::Prev),
                _ => {}
            }
        });
    }

    {
        use_effect_with_deps(
            |open| {
                set_body_class("lightbox-open", *open);
                || set_body_class("lightbox-open", false)
            },
            state.is_open(),
        );
    }

    let thumbs = props.images.iter().enumerate().map(|(i, image)| {
        let onclick = {
            let state = state.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                state.dispatch(LightboxAction::Open(i));
            })
        };
        html! {
            <a class="gallery-item" href={image.src} title={image.caption} {onclick}>
                <img src={image.thumb} alt={image.caption} loading="lazy" />
            </a>
        }
    });

    let overlay = match state.current().and_then(|i| props.images.get(i).map(|img| (i, img))) {
        Some((i, image)) => {
            let close = {
                let state = state.clone();
                Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Close))
            };
            let next = {
                let state = state.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    state.dispatch(LightboxAction::Next);
                })
            };
            let prev = {
                let state = state.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    state.dispatch(LightboxAction::Prev);
                })
            };
            let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

            html! {
                <div class="lightbox" role="dialog" aria-modal="true" onclick={close.clone()}>
                    <button class="lightbox-close" aria-label="Close" onclick={close}>{"✕"}</button>
                    <button class="lightbox-nav prev" aria-label="Previous image" onclick={prev}>{"‹"}</button>
                    <figure class="lightbox-figure" onclick={keep_open}>
                        <img src={image.src} alt={image.caption} />
                        <figcaption>
                            <span>{ image.caption }</span>
                            <span class="lightbox-count">{ format!("{} / {}", i + 1, props.images.len()) }</span>
                        </figcaption>
                    </figure>
                    <button class="lightbox-nav next" aria-label="Next image" onclick={next}>{"›"}</button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <>
            <div class="gallery-grid">
                { for thumbs }
            </div>
            { overlay }
            <style>
                {r#"
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1rem;
                    }
                    .gallery-item img {
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        object-fit: cover;
                        border-radius: 12px;
                        transition: transform 0.3s ease;
                    }
                    .gallery-item:hover img {
                        transform: scale(1.03);
                    }
                    body.lightbox-open {
                        overflow: hidden;
                    }
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        background: rgba(10, 10, 10, 0.92);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1000;
                        animation: lightboxIn 0.25s ease-out;
                    }
                    @keyframes lightboxIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .lightbox-figure {
                        max-width: 90vw;
                        max-height: 85vh;
                        margin: 0;
                    }
                    .lightbox-figure img {
                        max-width: 100%;
                        max-height: 78vh;
                        display: block;
                        margin: 0 auto;
                    }
                    .lightbox-figure figcaption {
                        display: flex;
                        justify-content: space-between;
                        color: #ddd;
                        padding-top: 0.75rem;
                    }
                    .lightbox-close, .lightbox-nav {
                        position: absolute;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2.5rem;
                        cursor: pointer;
                    }
                    .lightbox-close { top: 1rem; right: 1.5rem; font-size: 2rem; }
                    .lightbox-nav.prev { left: 1.5rem; }
                    .lightbox-nav.next { right: 1.5rem; }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: LightboxState, action: LightboxAction) -> LightboxState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn opens_at_clicked_image() {
        let s = reduce(LightboxState::new(5), LightboxAction::Open(3));
        assert_eq!(s.current(), Some(3));
    }

    #[test]
    fn navigation_wraps() {
        let s = reduce(LightboxState::new(3), LightboxAction::Open(2));
        let s = reduce(s, LightboxAction::Next);
        assert_eq!(s.current(), Some(0));
        let s = reduce(s, LightboxAction::Prev);
        assert_eq!(s.current(), Some(2));
    }

    #[test]
    fn closed_lightbox_ignores_arrows() {
        let s = reduce(LightboxState::new(3), LightboxAction::Next);
        assert_eq!(s.current(), None);
        assert_eq!(s, LightboxState::new(3));
    }

    #[test]
    fn close_hides_overlay() {
        let s = reduce(LightboxState::new(3), LightboxAction::Open(1));
        let s = reduce(s, LightboxAction::Close);
        assert!(!s.is_open());
        assert_eq!(s.current(), None);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let s = reduce(LightboxState::new(2), LightboxAction::Open(7));
        assert!(!s.is_open());
    }
}
