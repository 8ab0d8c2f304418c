use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::{Rotation, RotationAction};
use crate::config::TESTIMONIAL_INTERVAL_MS;
use crate::content::testimonials::TESTIMONIALS;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    #[prop_or_default]
    pub revealed: bool,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let rotation = use_reducer(|| Rotation::new(TESTIMONIALS.len()));

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(TESTIMONIAL_INTERVAL_MS, move || {
                    dispatcher.dispatch(RotationAction::Tick);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let Some(current) = TESTIMONIALS.get(rotation.index()) else {
        return html! {};
    };

    html! {
        <section id="testimonials" class={classes!("testimonials", props.revealed.then(|| "revealed"))}>
            <div class="testimonials-bg">
                <img src="/assets/client%20testimonials%20bg.jpg" alt="Testimonials Background" />
            </div>
            <div class="section-inner">
                <h2>{"Client "}<span class="text-gradient-sky">{"Testimonials"}</span></h2>
                <div class="section-rule"></div>
                <p class="section-lead light">{"Hear what our satisfied clients have to say"}</p>

                // Keyed on the index so the card re-runs its entry animation
                <div key={rotation.index()} class="testimonial-card">
                    <div class="testimonial-quote-mark">{"❝"}</div>
                    <div class="testimonial-stars" aria-label={format!("{} out of 5", current.rating)}>
                        {current.stars()}
                    </div>
                    <p class="testimonial-text">{current.text}</p>
                    <div class="testimonial-author">
                        <p class="testimonial-name">{current.name}</p>
                        <p class="testimonial-event">{current.event}</p>
                    </div>
                </div>

                <div class="testimonial-dots">
                    { (0..TESTIMONIALS.len()).map(|i| {
                        let dispatcher = rotation.dispatcher();
                        html! {
                            <button
                                key={i}
                                class={classes!("testimonial-dot", (i == rotation.index()).then(|| "active"))}
                                aria-label={format!("Show testimonial {}", i + 1)}
                                onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotationAction::Select(i)))}
                            />
                        }
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                .testimonials {
                    position: relative;
                    padding: 3rem 1rem;
                    color: #fff;
                    overflow: hidden;
                }
                .testimonials-bg {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .testimonials-bg img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: slowZoom 20s ease-in-out infinite;
                }
                .testimonials-bg::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(15, 61, 86, 0.25) 0%, rgba(15, 61, 86, 0.15) 30%, rgba(255, 255, 255, 0.1) 70%, rgba(255, 255, 255, 0.15) 100%);
                }
                .testimonials .section-inner {
                    position: relative;
                    z-index: 2;
                    max-width: 56rem;
                }
                .testimonial-card {
                    position: relative;
                    margin-top: 1.5rem;
                    padding: 3rem;
                    border-radius: 1rem;
                    border: 2px solid rgba(250, 209, 231, 0.5);
                    background: rgba(15, 61, 86, 0.85);
                    backdrop-filter: blur(12px);
                    animation: cardIn 0.6s ease-out both;
                }
                .testimonial-quote-mark {
                    position: absolute;
                    top: 1rem;
                    left: 1.5rem;
                    font-size: 3rem;
                    opacity: 0.3;
                }
                .testimonial-stars {
                    color: #FFD700;
                    font-size: 1.5rem;
                    letter-spacing: 0.2rem;
                    margin-bottom: 1rem;
                }
                .testimonial-text {
                    font-size: 1.15rem;
                    line-height: 1.7;
                    font-style: italic;
                }
                .testimonial-name {
                    font-weight: 700;
                    font-size: 1.2rem;
                    margin: 1.5rem 0 0;
                }
                .testimonial-event {
                    color: #FAD1E7;
                    margin: 0.25rem 0 0;
                }
                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .testimonial-dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    border: none;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.4);
                    cursor: pointer;
                    transition: width 0.3s ease;
                }
                .testimonial-dot.active {
                    width: 2rem;
                    background: #FAD1E7;
                }
                @keyframes cardIn {
                    from { opacity: 0; transform: scale(0.9) rotateY(-10deg); }
                    to { opacity: 1; transform: scale(1) rotateY(0); }
                }
                @keyframes slowZoom {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.02); }
                }
                @media (max-width: 768px) {
                    .testimonial-card { padding: 2rem 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
