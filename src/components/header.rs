//! Header Component
//!
//! Logo, title and the register button.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Header(
    #[prop(into)] title: String,
    #[prop(into)] tagline: String,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="header">
            <div class="max-width-container">
                <div class="header-content">
                    <div class="logo-section">
                        <div class="logo-icon">
                            <span>"💎"</span>
                        </div>
                        <div class="logo-text">
                            <h1>{title}</h1>
                            <p>{tagline}</p>
                        </div>
                    </div>
                    <button class="btn-primary" on:click=move |_| ctx.open_register()>
                        <span class="btn-icon">"+"</span>
                        <span>"분실물 등록"</span>
                    </button>
                </div>
            </div>
        </header>
    }
}
