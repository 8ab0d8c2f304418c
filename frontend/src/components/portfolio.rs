use yew::prelude::*;

use crate::components::media::hide_on_error;
use crate::content::gallery::{asset_src, filters, flat_index, images_for};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub selected: AttrValue,
    pub on_select: Callback<AttrValue>,
    /// Opens the lightbox at an index into the flattened gallery.
    pub on_open: Callback<usize>,
    #[prop_or_default]
    pub revealed: bool,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let images = images_for(props.selected.as_str());

    html! {
        <section id="portfolio" class={classes!("portfolio", props.revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <h2><span class="text-gradient-sky">{"Portfolio"}</span></h2>
                <div class="section-rule"></div>
                <p class="section-lead">{"Explore our stunning transformations and creative event decorations"}</p>

                <div class="portfolio-filters">
                    { filters().map(|filter| {
                        let on_select = props.on_select.clone();
                        html! {
                            <button
                                key={filter}
                                class={classes!("portfolio-filter", (props.selected.as_str() == filter).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(AttrValue::from(filter)))}
                            >
                                {filter}
                            </button>
                        }
                    }).collect::<Html>() }
                </div>

                <div class="portfolio-grid">
                    { images.iter().enumerate().map(|(i, path)| {
                        let on_open = props.on_open.clone();
                        let path: &'static str = path;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_open.emit(flat_index(path).unwrap_or(i));
                        });
                        html! {
                            <div key={path} class="portfolio-tile" style={format!("animation-delay: {:.2}s", i as f64 * 0.06)} {onclick}>
                                <img
                                    src={asset_src(path)}
                                    alt={format!("Portfolio image {}", i + 1)}
                                    loading="lazy"
                                    onerror={hide_on_error("Portfolio image", path)}
                                />
                                <div class="portfolio-tile-overlay"><span>{"View"}</span></div>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                .portfolio {
                    position: relative;
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, rgba(15, 61, 86, 0.15) 0%, rgba(15, 61, 86, 0.08) 30%, rgba(255, 255, 255, 0.05) 70%, rgba(255, 255, 255, 0.1) 100%);
                }
                .portfolio-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin: 2rem 0 3rem;
                }
                .portfolio-filter {
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    border: 2px solid rgba(250, 209, 231, 0.3);
                    background: #fff;
                    color: #3A6E8F;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .portfolio-filter:hover {
                    transform: scale(1.05);
                    border-color: rgba(250, 209, 231, 0.6);
                }
                .portfolio-filter.active {
                    color: #0F3D56;
                    background: linear-gradient(135deg, rgba(250, 209, 231, 0.9) 0%, rgba(188, 225, 241, 0.9) 100%);
                    border-color: rgba(250, 209, 231, 0.5);
                    box-shadow: 0 8px 20px rgba(15, 61, 86, 0.15);
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .portfolio-tile {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    box-shadow: 0 10px 30px rgba(15, 61, 86, 0.15);
                    animation: tileIn 0.6s cubic-bezier(0.25, 0.1, 0.25, 1) both;
                    transition: transform 0.4s ease;
                }
                .portfolio-tile:hover {
                    transform: translateY(-5px) scale(1.05);
                    z-index: 10;
                }
                .portfolio-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease-out;
                }
                .portfolio-tile:hover img {
                    transform: scale(1.25);
                }
                .portfolio-tile-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    justify-content: center;
                    padding-bottom: 1rem;
                    background: linear-gradient(to top, rgba(15, 61, 86, 0.8), rgba(15, 61, 86, 0.4), transparent);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    color: #fff;
                    font-weight: 600;
                    font-size: 1.1rem;
                }
                .portfolio-tile:hover .portfolio-tile-overlay {
                    opacity: 1;
                }
                @keyframes tileIn {
                    from { opacity: 0; transform: translateY(30px) scale(0.95); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                @media (max-width: 1024px) {
                    .portfolio-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (max-width: 640px) {
                    .portfolio-grid { grid-template-columns: repeat(2, 1fr); gap: 0.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
