use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <p class="not-found-code">{"404"}</p>
            <h1>{"This page wandered off"}</h1>
            <p>{"The page you are looking for doesn't exist or has been moved."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 2rem;
                    text-align: center;
                    background: linear-gradient(135deg, #E0F2FF 0%, #FFF4F9 100%);
                    color: #0F3D56;
                }
                .not-found-code {
                    margin: 0;
                    font-family: "Playfair Display", serif;
                    font-size: 6rem;
                    font-weight: 700;
                    color: #82C8E5;
                }
                .not-found h1 {
                    margin: 0;
                }
                .not-found-home {
                    margin-top: 1.5rem;
                    padding: 0.8rem 2rem;
                    border-radius: 999px;
                    background: #0F3D56;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .not-found-home:hover {
                    background: #2A6F97;
                }
                "#}
            </style>
        </div>
    }
}
