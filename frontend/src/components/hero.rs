use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::carousel::{Rotation, RotationAction};
use crate::components::media::log_on_error;
use crate::config::{HERO_INTERVAL_MS, MANUAL_PAUSE_MS};
use crate::content::about::LEGACY_STATS;
use crate::content::contact::{whatsapp_link, WHATSAPP_NUMBER};
use crate::content::gallery::{asset_src, HERO_IMAGES};

/// Full-bleed slideshow on the landing view. Rotates every
/// [`HERO_INTERVAL_MS`], pauses while hovered, and pauses for
/// [`MANUAL_PAUSE_MS`] after an arrow or dot is clicked.
#[function_component(Hero)]
pub fn hero() -> Html {
    let rotation = use_reducer(|| Rotation::new(HERO_IMAGES.len()));
    let resume_timeout = use_mut_ref(|| None::<Timeout>);

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |paused| {
                let interval = (!*paused).then(|| {
                    Interval::new(HERO_INTERVAL_MS, move || {
                        dispatcher.dispatch(RotationAction::Tick);
                    })
                });
                move || drop(interval)
            },
            rotation.is_paused(),
        );
    }

    // Drop a pending resume when the hero unmounts
    {
        let resume_timeout = resume_timeout.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    resume_timeout.borrow_mut().take();
                }
            },
            (),
        );
    }

    let manual = {
        let dispatcher = rotation.dispatcher();
        let resume_timeout = resume_timeout.clone();
        move |action: RotationAction| {
            let dispatcher = dispatcher.clone();
            let resume_timeout = resume_timeout.clone();
            Callback::from(move |_: MouseEvent| {
                dispatcher.dispatch(RotationAction::Pause);
                dispatcher.dispatch(action);
                let resume = dispatcher.clone();
                // Replacing the handle cancels an earlier resume
                *resume_timeout.borrow_mut() = Some(Timeout::new(MANUAL_PAUSE_MS, move || {
                    resume.dispatch(RotationAction::Resume);
                }));
            })
        }
    };

    let onmouseenter = {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotationAction::Pause))
    };
    let onmouseleave = {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotationAction::Resume))
    };

    let active = rotation.index();
    let total = HERO_IMAGES.len();

    html! {
        <section id="home" class="hero" {onmouseenter} {onmouseleave}>
            <div class="hero-slides">
                { HERO_IMAGES.iter().enumerate().map(|(i, path)| {
                    html! {
                        <div key={*path} class={classes!("hero-slide", (i == active).then(|| "active"))}>
                            <img
                                src={asset_src(path)}
                                alt={format!("Slideshow Image {} of {}", i + 1, total)}
                                loading={if i < 3 { "eager" } else { "lazy" }}
                                onerror={log_on_error("Slideshow image", path)}
                            />
                        </div>
                    }
                }).collect::<Html>() }
            </div>
            <div class="hero-overlay"></div>

            <button class="hero-arrow left" aria-label="Previous slide" onclick={manual(RotationAction::Prev)}>{"‹"}</button>
            <button class="hero-arrow right" aria-label="Next slide" onclick={manual(RotationAction::Next)}>{"›"}</button>

            <div class="hero-content">
                <div class="hero-card">
                    <h1>{"Nandini Decorations"}</h1>
                    <p class="hero-subtitle">
                        {"Crafting moments with love since 1993."}
                        <br />
                        <span>{"Where every celebration blooms into a memory."}</span>
                    </p>
                    <a class="hero-cta" href={whatsapp_link(WHATSAPP_NUMBER)} target="_blank" rel="noopener noreferrer">
                        {"💬 Book Your Event"}
                    </a>
                    <div class="hero-stats">
                        { LEGACY_STATS.iter().map(|stat| html! {
                            <div key={stat.value} class="hero-stat">
                                <p class="hero-stat-value">{stat.value}</p>
                                <p class="hero-stat-label">{stat.label}</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>

            <div class="hero-dots">
                { (0..total).map(|i| html! {
                    <button
                        key={i}
                        class={classes!("hero-dot", (i == active).then(|| "active"))}
                        aria-label={format!("Go to slide {}", i + 1)}
                        onclick={manual(RotationAction::Select(i))}
                    />
                }).collect::<Html>() }
            </div>
            <div class="hero-counter">{format!("{} / {}", active + 1, total)}</div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-slides, .hero-slide, .hero-overlay {
                    position: absolute;
                    inset: 0;
                }
                .hero-slide {
                    opacity: 0;
                    transition: opacity 1s ease-in-out;
                    will-change: opacity;
                }
                .hero-slide.active {
                    opacity: 1;
                    z-index: 1;
                }
                .hero-slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-overlay {
                    z-index: 2;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.15) 0%, rgba(0, 0, 0, 0.2) 50%, rgba(0, 0, 0, 0.25) 100%);
                }
                .hero-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 30;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(8px);
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                }
                .hero-arrow.left { left: 1rem; }
                .hero-arrow.right { right: 1rem; }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    padding: 0 1rem;
                }
                .hero-card {
                    max-width: 64rem;
                    width: 100%;
                    padding: 3rem 2rem;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.18);
                    border: 1px solid rgba(255, 255, 255, 0.45);
                    border-radius: 1.5rem;
                    backdrop-filter: blur(12px);
                    color: #fff;
                    animation: heroFadeIn 0.8s ease-out both;
                }
                .hero-card h1 {
                    font-family: "Playfair Display", serif;
                    font-size: clamp(2.5rem, 6vw, 5rem);
                    margin: 0 0 1rem;
                    text-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                }
                .hero-subtitle span {
                    font-size: 1.6rem;
                    font-weight: 600;
                }
                .hero-cta {
                    display: inline-flex;
                    gap: 0.5rem;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: linear-gradient(135deg, #FAD1E7 0%, #BCE1F1 100%);
                    color: #0F3D56;
                    font-weight: 700;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-2px);
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    margin-top: 2.5rem;
                }
                .hero-stat-value {
                    font-size: clamp(1.25rem, 3vw, 3rem);
                    font-weight: 700;
                    margin: 0;
                }
                .hero-stat-label {
                    font-size: 0.85rem;
                    margin: 0.25rem 0 0;
                }
                .hero-dots {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 20;
                    display: flex;
                    gap: 0.5rem;
                }
                .hero-dot {
                    width: 0.4rem;
                    height: 0.4rem;
                    border: none;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.4);
                    cursor: pointer;
                    transition: width 0.3s ease;
                }
                .hero-dot.active {
                    width: 2rem;
                    background: #fff;
                }
                .hero-counter {
                    position: absolute;
                    top: 1.5rem;
                    right: 1rem;
                    z-index: 20;
                    padding: 0.3rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(0, 0, 0, 0.25);
                    color: #fff;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                @keyframes heroFadeIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .hero-card { padding: 2rem 1rem; }
                    .hero-stat-label { font-size: 0.7rem; }
                }
                "#}
            </style>
        </section>
    }
}
