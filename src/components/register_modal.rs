//! Register Modal Component
//!
//! Form for registering a new item. Name and location are required; the
//! submit handler alerts when either is blank and keeps the form open.

use leptos::prelude::*;
use lost_found_core::{Category, Modal, Status};

use crate::components::ImagePicker;
use crate::context::use_app_context;
use crate::display;

#[component]
pub fn RegisterModal() -> impl IntoView {
    let ctx = use_app_context();

    let is_open = move || ctx.session.with(|s| s.modal() == Modal::Register);
    let name = move || ctx.session.with(|s| s.form().draft().name.clone());
    let description = move || ctx.session.with(|s| s.form().draft().description.clone());
    let location = move || ctx.session.with(|s| s.form().draft().location.clone());
    let draft_status = move || ctx.session.with(|s| s.form().draft().status);
    let draft_category = move || ctx.session.with(|s| s.form().draft().category);

    let on_status_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<Status>() {
            Ok(status) => ctx.edit_draft(move |d| d.status = status),
            Err(err) => log::warn!("[REGISTER] {}", err),
        }
    };

    let on_category_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<Category>() {
            Ok(category) => ctx.edit_draft(move |d| d.category = category),
            Err(err) => log::warn!("[REGISTER] {}", err),
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-overlay">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2 class="modal-title">
                            <span>"💎"</span>
                            "분실물 등록하기"
                        </h2>
                        <button class="modal-close" on:click=move |_| ctx.cancel_register()>"×"</button>
                    </div>

                    <div class="modal-body">
                        <div class="form-group">
                            <label class="form-label">"이미지"</label>
                            <ImagePicker />
                        </div>

                        <div class="form-group">
                            <label class="form-label">"분실물 상태"</label>
                            <select class="form-select" on:change=on_status_change>
                                {Status::ALL.into_iter().map(|status| view! {
                                    <option
                                        value=status.as_str()
                                        prop:selected=move || draft_status() == status
                                    >
                                        {status.form_label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label class="form-label">"카테고리"</label>
                            <select class="form-select" on:change=on_category_change>
                                {Category::DISPLAY_ORDER.into_iter().map(|category| view! {
                                    <option
                                        value=category.as_str()
                                        prop:selected=move || draft_category() == category
                                    >
                                        {display::option_text(category.glyph(), category.label())}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label class="form-label">"분실물 이름 *"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="예: 에어팟, 신용카드, 자동차 키"
                                prop:value=name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.edit_draft(move |d| d.name = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label class="form-label">"설명"</label>
                            <textarea
                                class="form-textarea"
                                rows="3"
                                placeholder="분실물에 대한 자세한 설명을 입력하세요"
                                prop:value=description
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.edit_draft(move |d| d.description = value);
                                }
                            ></textarea>
                        </div>

                        <div class="form-group">
                            <label class="form-label">"위치 *"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="예: 중앙도서관 3층, 학생식당"
                                prop:value=location
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.edit_draft(move |d| d.location = value);
                                }
                            />
                        </div>
                    </div>

                    <div class="form-actions">
                        <button class="btn-secondary" on:click=move |_| ctx.cancel_register()>"취소"</button>
                        <button class="btn-primary" on:click=move |_| ctx.submit_register()>"✨ 등록하기"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
