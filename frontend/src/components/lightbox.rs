use std::rc::Rc;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{step_back, step_forward};
use crate::components::media::log_on_error;
use crate::content::gallery::asset_src;

/// Which image, if any, the full-screen viewer shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LightboxState {
    len: usize,
    current: Option<usize>,
}

pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Prev,
}

impl LightboxState {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn apply(&mut self, action: LightboxAction) {
        self.current = match (action, self.current) {
            (LightboxAction::Open(_), _) if self.len == 0 => None,
            (LightboxAction::Open(i), _) => Some(i % self.len),
            (LightboxAction::Close, _) => None,
            (LightboxAction::Next, Some(i)) => Some(step_forward(i, self.len)),
            (LightboxAction::Prev, Some(i)) => Some(step_back(i, self.len)),
            (_, None) => None,
        };
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub images: Rc<Vec<&'static str>>,
    pub index: usize,
    pub on_close: Callback<()>,
    pub on_next: Callback<()>,
    pub on_prev: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let on_next = props.on_next.clone();
        let on_prev = props.on_prev.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => on_close.emit(()),
            "ArrowLeft" => on_prev.emit(()),
            "ArrowRight" => on_next.emit(()),
            _ => {}
        });
    }

    let Some(path) = props.images.get(props.index).copied() else {
        return html! {};
    };
    let click = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="lightbox" role="dialog" aria-modal="true">
            <button class="lightbox-close" aria-label="Close" onclick={click(&props.on_close)}>{"✕"}</button>
            <button class="lightbox-prev" aria-label="Previous" onclick={click(&props.on_prev)}>{"‹"}</button>
            <div class="lightbox-frame">
                <img
                    src={asset_src(path)}
                    alt={format!("Gallery image {}", props.index + 1)}
                    onerror={log_on_error("Lightbox image", path)}
                />
            </div>
            <button class="lightbox-next" aria-label="Next" onclick={click(&props.on_next)}>{"›"}</button>
            <div class="lightbox-counter">
                {format!("{} / {}", props.index + 1, props.images.len())}
            </div>
            <style>
                {r#"
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    background: rgba(0, 0, 0, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .lightbox-frame {
                    max-width: 80rem;
                    max-height: 90vh;
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .lightbox-frame img {
                    max-width: 100%;
                    max-height: 90vh;
                    object-fit: contain;
                }
                .lightbox button {
                    position: absolute;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .lightbox button:hover {
                    color: #FAD1E7;
                }
                .lightbox-close { top: 1rem; right: 1rem; font-size: 2rem; }
                .lightbox-prev { left: 1rem; font-size: 3.5rem; }
                .lightbox-next { right: 1rem; font-size: 3.5rem; }
                .lightbox-counter {
                    position: absolute;
                    bottom: 1rem;
                    color: #fff;
                    font-size: 0.9rem;
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
    fn opens_closed_and_wraps_both_ways() {
        let mut state = LightboxState::new(3);
        assert_eq!(state.current(), None);

        state.apply(LightboxAction::Open(2));
        state.apply(LightboxAction::Next);
        assert_eq!(state.current(), Some(0));
        state.apply(LightboxAction::Prev);
        assert_eq!(state.current(), Some(2));

        state.apply(LightboxAction::Close);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn navigation_while_closed_is_ignored() {
        let mut state = LightboxState::new(5);
        state.apply(LightboxAction::Next);
        state.apply(LightboxAction::Prev);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut state = LightboxState::new(0);
        state.apply(LightboxAction::Open(0));
        assert_eq!(state.current(), None);
    }
}
