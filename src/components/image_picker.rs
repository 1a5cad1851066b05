//! Image Picker Component
//!
//! File input for the registration form with a live preview of the draft image.

use leptos::prelude::*;

use crate::browser;
use crate::context::use_app_context;

#[component]
pub fn ImagePicker() -> impl IntoView {
    let ctx = use_app_context();
    let preview = move || ctx.session.with(|s| s.form().preview().map(str::to_owned));

    view! {
        <div class="image-upload-wrapper">
            <input
                type="file"
                id="imageUpload"
                accept="image/*"
                class="image-upload-input"
                on:change=move |ev| {
                    if let Some(file) = browser::take_selected_file(&ev) {
                        ctx.attach_image(file);
                    }
                }
            />
            <label for="imageUpload" class="image-upload-label">
                <span>"⬆"</span>
                <span>"이미지 선택"</span>
            </label>
            {move || preview().map(|src| view! {
                <div class="image-preview">
                    <img src=src alt="Preview" />
                </div>
            })}
        </div>
    }
}
