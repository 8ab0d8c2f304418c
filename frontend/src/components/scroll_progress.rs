use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::scroll_spy::progress;

fn current_progress() -> f64 {
    progress(dom::scroll_y(), dom::document_height(), dom::viewport_height())
}

/// Thin bar along the top edge showing how much of the page has been read.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let percent = use_state_eq(|| 0.0_f64);

    {
        let percent = percent.clone();
        use_effect_with_deps(
            move |_| {
                percent.set(current_progress());
                || ()
            },
            (),
        );
    }

    {
        let percent = percent.clone();
        use_event_with_window("scroll", move |_: Event| percent.set(current_progress()));
    }

    html! {
        <div class="scroll-progress">
            <div class="scroll-progress-fill" style={format!("width: {:.2}%;", *percent)}></div>
            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 0.25rem;
                    z-index: 110;
                    background: rgba(229, 231, 235, 0.2);
                }
                .scroll-progress-fill {
                    height: 100%;
                    background: linear-gradient(90deg, #f472b6, #60a5fa, #f472b6);
                    transition: width 0.15s ease-out;
                    transform: translate3d(0, 0, 0);
                }
                "#}
            </style>
        </div>
    }
}
