use yew::prelude::*;

use crate::components::media::{failed_src, report_broken};
use crate::content::about::{fallback_src, Founder, FOUNDERS};
use crate::content::contact::tel_href;
use crate::content::gallery::asset_src;

#[derive(Properties, PartialEq)]
struct FounderCardProps {
    founder: Founder,
}

#[function_component(FounderCard)]
fn founder_card(props: &FounderCardProps) -> Html {
    let founder = &props.founder;
    let portrait_failed = use_state(|| false);

    // Walk the extension chain before giving up on the portrait
    let onerror = {
        let portrait_failed = portrait_failed.clone();
        let original = founder.image;
        Callback::from(move |e: Event| {
            let Some((img, src)) = failed_src(&e) else {
                return;
            };
            match fallback_src(&src) {
                Some(next) => img.set_src(&next),
                None => {
                    report_broken("Founder portrait", original);
                    portrait_failed.set(true);
                }
            }
        })
    };

    html! {
        <div class="founder-card">
            <div class="founder-portrait">
                {
                    if *portrait_failed {
                        html! { <div class="founder-initial">{founder.initial()}</div> }
                    } else {
                        html! { <img src={asset_src(founder.image)} alt={founder.name} {onerror} /> }
                    }
                }
            </div>
            <div class="founder-body">
                <p class="founder-lineage">{"Since 1993 · Mysuru Lineage"}</p>
                <h3>{founder.name}</h3>
                <p class="founder-role">{founder.role}</p>
                <p class="founder-note">{founder.note}</p>
                <span class="founder-badge">{founder.badge}</span>
                <blockquote>{founder.quote}</blockquote>
                <p class="founder-stat">{founder.stat}</p>
                <a class="founder-call" href={tel_href(founder.phone)}>{format!("📞 {}", founder.phone)}</a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FoundersProps {
    #[prop_or_default]
    pub revealed: bool,
}

#[function_component(Founders)]
pub fn founders(props: &FoundersProps) -> Html {
    html! {
        <section id="founder" class={classes!("founders", props.revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <p class="section-pill">{"💗 Founded by family · Rooted in Mysuru"}</p>
                <h2>{"About the Founders"}</h2>
                <p class="section-lead">
                    {"Chandrashekar P (Founder) and Chandan C (Managing Director) personally blueprint each celebration with unmatched care and availability."}
                </p>
                <div class="founders-grid">
                    { FOUNDERS.iter().map(|founder| html! {
                        <FounderCard key={founder.name} founder={founder.clone()} />
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                .founders {
                    padding: 4rem 1rem;
                    background: linear-gradient(180deg, #FFF4F9 0%, #E0F2FF 100%);
                }
                .founders-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 3rem auto 0;
                }
                .founder-card {
                    display: grid;
                    grid-template-columns: minmax(14rem, 20rem) 1fr;
                    gap: 2rem;
                    align-items: center;
                    padding: 2rem;
                    border-radius: 2.4rem;
                    background: rgba(255, 255, 255, 0.92);
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    box-shadow: 0 35px 65px rgba(15, 61, 86, 0.18);
                    transition: transform 0.35s ease;
                }
                .founder-card:hover {
                    transform: translateY(-10px);
                }
                .founder-portrait {
                    position: relative;
                    min-height: 21rem;
                    border-radius: 2rem;
                    overflow: hidden;
                }
                .founder-portrait img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(1.08) contrast(1.12);
                }
                .founder-initial {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #82C8E5, #3b82f6);
                    color: #fff;
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .founder-lineage {
                    font-size: 0.75rem;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    color: #3A6E8F;
                }
                .founder-body h3 {
                    font-family: "Playfair Display", serif;
                    font-size: 2.25rem;
                    color: #0F3D56;
                    margin: 0;
                }
                .founder-role {
                    color: #1f4b66;
                    font-weight: 600;
                    font-size: 1.1rem;
                }
                .founder-note {
                    color: #214961;
                    line-height: 1.6;
                }
                .founder-badge {
                    display: inline-block;
                    padding: 0.3rem 0.9rem;
                    border-radius: 999px;
                    background: #BCE1F1;
                    color: #0F3D56;
                    font-weight: 600;
                    font-size: 0.85rem;
                }
                .founder-body blockquote {
                    margin: 1rem 0;
                    font-style: italic;
                    color: #2A6F97;
                }
                .founder-stat {
                    font-weight: 700;
                    color: #0F3D56;
                }
                .founder-call {
                    display: inline-block;
                    margin-top: 0.5rem;
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    background: #0F3D56;
                    color: #fff;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .founders-grid { grid-template-columns: 1fr; }
                }
                @media (max-width: 640px) {
                    .founder-card { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
