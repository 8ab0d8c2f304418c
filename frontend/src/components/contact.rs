use chrono::Datelike;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content::contact::{
    contact_entries, is_open_now, mailto_href, tel_href, whatsapp_link, BUSINESS_NAME, EMAIL,
    FOUNDER_NUMBER, LOCATION_LINK, MAP_EMBED_URL, WHATSAPP_NUMBER,
};
use crate::content::services::SERVICES;
use crate::scroll_spy::Section;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub revealed: bool,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let open_now = use_state_eq(is_open_now);

    {
        let open_now = open_now.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(60_000, move || open_now.set(is_open_now()));
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section id="contact" class={classes!("contact", props.revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <h2>{"Get In "}<span class="text-gradient-sky">{"Touch"}</span></h2>
                <div class="section-rule"></div>
                <p class="section-lead">{"Ready to create something extraordinary? Contact us today!"}</p>

                <div class="contact-grid">
                    <div class="contact-entries">
                        <p class={classes!("open-status", (*open_now).then(|| "open"))}>
                            {if *open_now { "● Open now" } else { "● Closed now" }}
                        </p>
                        { contact_entries().into_iter().map(|entry| html! {
                            <div key={entry.title} class="contact-entry">
                                <span class="contact-icon">{entry.icon}</span>
                                <div>
                                    <p class="contact-title">{entry.title}</p>
                                    {
                                        match entry.href {
                                            Some(href) => html! { <a class="contact-value" {href}>{entry.value}</a> },
                                            None => html! { <p class="contact-value">{entry.value}</p> },
                                        }
                                    }
                                    if !entry.note.is_empty() {
                                        <p class="contact-note">{entry.note}</p>
                                    }
                                </div>
                            </div>
                        }).collect::<Html>() }
                        <div class="contact-actions">
                            <a class="contact-button maps" href={LOCATION_LINK} target="_blank" rel="noopener noreferrer">
                                {"📍 Open Google Maps"}
                            </a>
                            <a class="contact-button call" href={tel_href(FOUNDER_NUMBER)}>
                                {"📞 Call Founder"}
                            </a>
                            <a class="contact-button whatsapp" href={whatsapp_link(WHATSAPP_NUMBER)} target="_blank" rel="noopener noreferrer">
                                {"💬 WhatsApp Us"}
                            </a>
                        </div>
                    </div>
                    <div class="contact-map">
                        <iframe
                            src={MAP_EMBED_URL}
                            title="Nandini Lightings and Decorators location"
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                        ></iframe>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    padding: 4rem 1rem;
                    background: linear-gradient(180deg, #E0F2FF 0%, #FFFFFF 100%);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 3rem auto 0;
                }
                .open-status {
                    font-weight: 700;
                    color: #b91c1c;
                }
                .open-status.open {
                    color: #15803d;
                }
                .contact-entry {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem 1.25rem;
                    margin-bottom: 1rem;
                    border-radius: 1rem;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(15, 61, 86, 0.08);
                }
                .contact-icon {
                    font-size: 1.5rem;
                }
                .contact-title {
                    margin: 0;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #2A6F97;
                    font-weight: 600;
                }
                .contact-value {
                    display: block;
                    margin: 0.25rem 0 0;
                    font-size: 1.2rem;
                    font-weight: 700;
                    color: #0F3D56;
                    text-decoration: none;
                    word-break: break-word;
                }
                .contact-note {
                    margin: 0.25rem 0 0;
                    font-size: 0.85rem;
                    color: #4A7C9F;
                }
                .contact-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .contact-button {
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                }
                .contact-button.maps { background: #0F3D56; }
                .contact-button.call { background: #2A6F97; }
                .contact-button.whatsapp { background: #22c55e; }
                .contact-map iframe {
                    width: 100%;
                    height: 100%;
                    min-height: 24rem;
                    border: 0;
                    border-radius: 1.5rem;
                }
                @media (max-width: 900px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Utc::now().year();
    let links = [
        ("Home", Section::Home),
        ("About Us", Section::About),
        ("Services", Section::Services),
        ("Gallery", Section::Portfolio),
        ("Testimonials", Section::Testimonials),
        ("Contact", Section::Contact),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{BUSINESS_NAME}</h3>
                    <p>{"Creating Royal Celebrations Since 1993"}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { links.iter().map(|&(label, section)| {
                            let on_navigate = props.on_navigate.clone();
                            html! {
                                <li key={label}>
                                    <a
                                        href={format!("#{}", section.id())}
                                        onclick={Callback::from(move |e: MouseEvent| {
                                            e.prevent_default();
                                            on_navigate.emit(section);
                                        })}
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        }).collect::<Html>() }
                    </ul>
                </div>
                <div>
                    <h4>{"Our Services"}</h4>
                    <ul>
                        { SERVICES.iter().take(6).map(|s| html! { <li key={s.title}>{s.title}</li> }).collect::<Html>() }
                    </ul>
                </div>
                <div>
                    <h4>{"Get In Touch"}</h4>
                    <ul>
                        <li><a href={tel_href(WHATSAPP_NUMBER)}>{WHATSAPP_NUMBER}</a></li>
                        <li><a href={mailto_href(EMAIL)}>{EMAIL}</a></li>
                        <li>{"Mysuru, Karnataka"}</li>
                    </ul>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} {}. All rights reserved.", year, BUSINESS_NAME)}</p>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem 1.5rem;
                    background: #0F3D56;
                    color: rgba(255, 255, 255, 0.8);
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .site-footer h3 {
                    font-family: "Playfair Display", serif;
                    color: #fff;
                    font-size: 1.6rem;
                    margin: 0 0 0.5rem;
                }
                .site-footer h4 {
                    color: #FAD1E7;
                    margin: 0 0 0.75rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .site-footer li {
                    margin-bottom: 0.4rem;
                }
                .site-footer a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #FFD700;
                }
                .footer-copy {
                    text-align: center;
                    margin-top: 2rem;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                @media (max-width: 900px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </footer>
    }
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    html! {
        <a
            class="whatsapp-fab"
            href={whatsapp_link(WHATSAPP_NUMBER)}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Contact on WhatsApp"
        >
            {"💬"}
            <style>
                {r#"
                .whatsapp-fab {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 50;
                    width: 3.75rem;
                    height: 3.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #22c55e;
                    color: #fff;
                    font-size: 1.75rem;
                    text-decoration: none;
                    animation: fabGlow 2s ease-in-out infinite;
                    transition: transform 0.2s ease;
                }
                .whatsapp-fab:hover {
                    transform: scale(1.1) rotate(5deg);
                }
                @keyframes fabGlow {
                    0%, 100% { box-shadow: 0 0 20px rgba(34, 197, 94, 0.5); }
                    50% { box-shadow: 0 0 40px rgba(34, 197, 94, 0.8); }
                }
                "#}
            </style>
        </a>
    }
}
