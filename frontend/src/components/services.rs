use yew::prelude::*;

use crate::components::media::log_on_error;
use crate::content::gallery::asset_src;
use crate::content::services::SERVICES;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    /// Receives the portfolio category of the clicked card.
    pub on_pick: Callback<AttrValue>,
    #[prop_or_default]
    pub revealed: bool,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class={classes!("services", props.revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <h2>{"Our "}<span class="text-gradient-sky">{"Services"}</span></h2>
                <div class="section-rule"></div>
                <p class="section-lead">
                    {"From intimate rituals to grand receptions, every setup is designed, built and styled in-house."}
                </p>
                <div class="services-grid">
                    { SERVICES.iter().enumerate().map(|(i, service)| {
                        let on_pick = props.on_pick.clone();
                        let category = service.portfolio;
                        html! {
                            <div
                                key={service.title}
                                class={service.variant.class()}
                                style={format!("animation-delay: {:.2}s", i as f64 * 0.05)}
                                onclick={Callback::from(move |_: MouseEvent| on_pick.emit(AttrValue::from(category)))}
                            >
                                <div class="service-image">
                                    <img
                                        src={asset_src(service.image)}
                                        alt={service.title}
                                        loading={if i < 3 { "eager" } else { "lazy" }}
                                        onerror={log_on_error("Service image", service.image)}
                                    />
                                    <div class="service-icon">{service.icon.glyph()}</div>
                                </div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <span class="service-link">{"View portfolio →"}</span>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    padding: 4rem 1rem;
                    background: linear-gradient(180deg, #F7FCFF 0%, #FFF4F9 100%);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                    gap: 1.5rem;
                    max-width: 80rem;
                    margin: 3rem auto 0;
                }
                .service-card {
                    padding: 1.25rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.95);
                    border: 2px solid rgba(250, 209, 231, 0.35);
                    box-shadow: 0 20px 45px rgba(15, 61, 86, 0.12);
                    cursor: pointer;
                    animation: tileIn 0.6s ease-out both;
                    transition: transform 0.35s ease, box-shadow 0.35s ease;
                }
                .service-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 30px 60px rgba(15, 61, 86, 0.2);
                }
                .service-card.birthday {
                    border-color: rgba(188, 225, 241, 0.6);
                }
                .service-card.highlight {
                    border-color: rgba(255, 215, 0, 0.6);
                    background: linear-gradient(135deg, #FFFDF5 0%, #FFF4E6 100%);
                }
                .service-image {
                    position: relative;
                    height: 14rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    margin-bottom: 1.25rem;
                }
                .service-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .service-card:hover .service-image img {
                    transform: scale(1.15);
                }
                .service-icon {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.95);
                    font-size: 1.4rem;
                }
                .service-card h3 {
                    color: #0F3D56;
                    font-size: 1.35rem;
                    margin: 0 0 0.5rem;
                }
                .service-card p {
                    color: #3A6E8F;
                    line-height: 1.6;
                }
                .service-link {
                    color: #2A6F97;
                    font-weight: 600;
                }
                "#}
            </style>
        </section>
    }
}
