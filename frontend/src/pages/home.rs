use std::collections::HashSet;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact::{Contact, Footer, WhatsAppButton};
use crate::components::founders::Founders;
use crate::components::hero::Hero;
use crate::components::lightbox::{Lightbox, LightboxAction, LightboxState};
use crate::components::media::log_on_error;
use crate::components::navbar::Navbar;
use crate::components::portfolio::Portfolio;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;
use crate::content::about::{BUSINESS_HIGHLIGHTS, LEGACY_STATS, STORY, TRIBUTE_OFFER};
use crate::content::gallery::{all_images, asset_src, DEFAULT_FILTER};
use crate::dom;
use crate::scroll_spy::{self, Section, SECTION_JUMP_OFFSET_PX};

const PORTFOLIO_RESCROLL_MS: [u32; 2] = [150, 400];

/// Sections that have crossed into view, merged into what was already shown.
fn revealed_sections(already: &HashSet<Section>) -> HashSet<Section> {
    let viewport = dom::viewport_height();
    let mut next = already.clone();
    for &section in Section::ALL.iter() {
        if next.contains(&section) {
            continue;
        }
        if let Some(top) = dom::section_rect_top(section) {
            if scroll_spy::is_revealed(top, viewport) {
                next.insert(section);
            }
        }
    }
    next
}

fn render_tribute(revealed: bool) -> Html {
    let offer = &TRIBUTE_OFFER;
    html! {
        <section id="tribute" class={classes!("tribute", revealed.then(|| "revealed"))}>
            <div class="section-inner tribute-card">
                <div class="tribute-photo">
                    <img
                        src={asset_src(offer.image)}
                        alt="Puneeth Rajkumar"
                        loading="lazy"
                        onerror={log_on_error("Tribute image", offer.image)}
                    />
                </div>
                <div class="tribute-body">
                    <p class="section-pill">{"🌟 Special Offer"}</p>
                    <h2>{offer.title}</h2>
                    <p class="tribute-detail">{offer.detail}</p>
                    <blockquote>{offer.thought}</blockquote>
                    <p class="tribute-date">{offer.birth_date}</p>
                </div>
            </div>
        </section>
    }
}

fn render_about(revealed: bool) -> Html {
    html! {
        <section id="about" class={classes!("about", revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <h2>{"About "}<span class="text-gradient-sky">{"Us"}</span></h2>
                <div class="section-rule"></div>
                { STORY.iter().map(|paragraph| html! {
                    <p class="section-lead">{*paragraph}</p>
                }).collect::<Html>() }
                <div class="highlights-grid">
                    { BUSINESS_HIGHLIGHTS.iter().map(|h| html! {
                        <div key={h.title} class="highlight-card">
                            <h3>{h.title}</h3>
                            <p>{h.detail}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

fn render_legacy(revealed: bool) -> Html {
    html! {
        <section id="legacy" class={classes!("legacy", revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <h2>{"Our Legacy"}</h2>
                <p class="section-lead light">{"Three decades of celebrations across Mysuru and Karnataka."}</p>
                <div class="legacy-grid">
                    { LEGACY_STATS.iter().map(|stat| html! {
                        <div key={stat.value} class="legacy-stat">
                            <p class="legacy-value">{stat.value}</p>
                            <p class="legacy-label">{stat.label}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let filter = use_state(|| AttrValue::from(DEFAULT_FILTER));
    let images = use_memo(|_| all_images(), ());
    let lightbox = {
        let len = images.len();
        use_reducer(move || LightboxState::new(len))
    };
    let revealed = use_state_eq(HashSet::<Section>::new);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                revealed.set(revealed_sections(&HashSet::new()));
                || ()
            },
            (),
        );
    }

    {
        let revealed = revealed.clone();
        use_event_with_window("scroll", move |_: Event| {
            revealed.set(revealed_sections(&revealed));
        });
    }

    let on_select = {
        let filter = filter.clone();
        Callback::from(move |category: AttrValue| filter.set(category))
    };

    // A service card picks its category and brings the gallery into view.
    // Later scrolls land after the grid has re-rendered and images sized.
    let on_pick = {
        let filter = filter.clone();
        Callback::from(move |category: AttrValue| {
            filter.set(category);
            dom::scroll_to_section(Section::Portfolio, SECTION_JUMP_OFFSET_PX);
            for delay in PORTFOLIO_RESCROLL_MS {
                Timeout::new(delay, || {
                    dom::scroll_to_section(Section::Portfolio, SECTION_JUMP_OFFSET_PX)
                })
                .forget();
            }
        })
    };

    let on_navigate = Callback::from(|section: Section| {
        dom::scroll_to_section(section, SECTION_JUMP_OFFSET_PX);
    });

    let on_open = {
        let lightbox = lightbox.dispatcher();
        Callback::from(move |index: usize| lightbox.dispatch(LightboxAction::Open(index)))
    };
    let lightbox_action = |action: fn() -> LightboxAction| {
        let lightbox = lightbox.dispatcher();
        Callback::from(move |_: ()| lightbox.dispatch(action()))
    };

    let is_revealed = |section: Section| revealed.contains(&section);

    html! {
        <div class="landing">
            <ScrollProgress />
            <Navbar />
            <Hero />
            <Services {on_pick} revealed={is_revealed(Section::Services)} />
            <Portfolio
                selected={(*filter).clone()}
                {on_select}
                {on_open}
                revealed={is_revealed(Section::Portfolio)}
            />
            <Testimonials revealed={is_revealed(Section::Testimonials)} />
            { render_tribute(is_revealed(Section::Tribute)) }
            { render_about(is_revealed(Section::About)) }
            { render_legacy(is_revealed(Section::Legacy)) }
            <Founders revealed={is_revealed(Section::Founder)} />
            <Contact revealed={is_revealed(Section::Contact)} />
            <Footer {on_navigate} />
            <WhatsAppButton />
            if let Some(index) = lightbox.current() {
                <Lightbox
                    images={images.clone()}
                    {index}
                    on_close={lightbox_action(|| LightboxAction::Close)}
                    on_next={lightbox_action(|| LightboxAction::Next)}
                    on_prev={lightbox_action(|| LightboxAction::Prev)}
                />
            }
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: "Poppins", "Segoe UI", sans-serif;
                    background: #F7FCFF;
                    color: #0F3D56;
                }
                .landing {
                    overflow-x: hidden;
                }
                .landing section {
                    opacity: 0.001;
                    transform: translateY(24px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .landing section#home,
                .landing section.revealed {
                    opacity: 1;
                    transform: none;
                }
                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .section-inner h2 {
                    font-family: "Playfair Display", serif;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    margin: 0 0 1rem;
                }
                .section-rule {
                    width: 6rem;
                    height: 0.25rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #FAD1E7, #82C8E5);
                }
                .section-lead {
                    max-width: 48rem;
                    margin: 0 auto 1rem;
                    font-size: 1.15rem;
                    line-height: 1.7;
                    color: #3A6E8F;
                }
                .section-lead.light {
                    color: rgba(255, 255, 255, 0.85);
                }
                .section-pill {
                    display: inline-block;
                    padding: 0.35rem 1rem;
                    border-radius: 999px;
                    background: rgba(250, 209, 231, 0.45);
                    color: #A43E77;
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .text-gradient-sky {
                    background: linear-gradient(90deg, #2A6F97, #82C8E5);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                @keyframes tileIn {
                    from { opacity: 0; transform: translateY(20px) scale(0.96); }
                    to { opacity: 1; transform: none; }
                }

                .tribute {
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #FFF8E6 0%, #FFF4F9 100%);
                }
                .tribute-card {
                    display: grid;
                    grid-template-columns: minmax(14rem, 22rem) 1fr;
                    gap: 2.5rem;
                    align-items: center;
                    text-align: left;
                    padding: 2rem;
                    border-radius: 2rem;
                    background: rgba(255, 255, 255, 0.9);
                    border: 2px solid rgba(255, 215, 0, 0.4);
                    box-shadow: 0 30px 60px rgba(164, 62, 119, 0.15);
                }
                .tribute-photo img {
                    width: 100%;
                    border-radius: 1.5rem;
                    object-fit: cover;
                }
                .tribute-detail {
                    font-size: 1.2rem;
                    line-height: 1.6;
                }
                .tribute-body blockquote {
                    margin: 1rem 0;
                    font-style: italic;
                    color: #A43E77;
                }
                .tribute-date {
                    font-size: 0.85rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #3A6E8F;
                }

                .about {
                    padding: 4rem 1rem;
                    background: #FFFFFF;
                }
                .highlights-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }
                .highlight-card {
                    padding: 1.75rem;
                    border-radius: 1.5rem;
                    background: linear-gradient(135deg, #E0F2FF 0%, #FFF4F9 100%);
                    box-shadow: 0 15px 35px rgba(15, 61, 86, 0.1);
                }
                .highlight-card h3 {
                    margin: 0 0 0.5rem;
                    color: #0F3D56;
                }
                .highlight-card p {
                    margin: 0;
                    color: #3A6E8F;
                    line-height: 1.6;
                }

                .legacy {
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #0F3D56 0%, #2A6F97 100%);
                    color: #fff;
                }
                .legacy-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }
                .legacy-stat {
                    padding: 2rem 1rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(250, 209, 231, 0.3);
                }
                .legacy-value {
                    margin: 0;
                    font-family: "Playfair Display", serif;
                    font-size: 2.5rem;
                    color: #FAD1E7;
                }
                .legacy-label {
                    margin: 0.5rem 0 0;
                    color: rgba(255, 255, 255, 0.8);
                }

                @media (max-width: 900px) {
                    .tribute-card { grid-template-columns: 1fr; text-align: center; }
                    .highlights-grid, .legacy-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
