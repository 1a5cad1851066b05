//! Detail Modal Component
//!
//! Full view of the selected item with the status toggle. The item is looked
//! up from the live catalog each render.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::display;

#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_app_context();
    let selected = Memo::new(move |_| ctx.session.with(|s| s.selected_item().cloned()));

    view! {
        {move || selected.get().map(|item| {
            let image = item.image.clone().map(|src| view! {
                <img src=src alt=item.name.clone() class="detail-modal-image" />
            });
            let description = display::description_or_placeholder(&item.description).to_string();

            view! {
                <div class="modal-overlay">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h2 class="modal-title">
                                <span>"🔍"</span>
                                "분실물 상세정보"
                            </h2>
                            <button class="modal-close" on:click=move |_| ctx.close_detail()>"×"</button>
                        </div>

                        {image}

                        <div class="detail-header">
                            <span class="detail-icon">{item.category.glyph()}</span>
                            <div class="detail-info">
                                <div class="detail-title">{item.name}</div>
                                <StatusBadge status=item.status />
                            </div>
                        </div>

                        <div class="detail-content">
                            <div class="detail-item">
                                <div class="detail-label">"📝 설명"</div>
                                <div class="detail-value">{description}</div>
                            </div>
                            <div class="detail-item">
                                <div class="detail-label">"📍 위치"</div>
                                <div class="detail-value">{item.location}</div>
                            </div>
                            <div class="detail-item">
                                <div class="detail-label">"📅 날짜"</div>
                                <div class="detail-value">{item.date.to_string()}</div>
                            </div>
                        </div>

                        <div class="form-actions">
                            <button class="btn-secondary" on:click=move |_| ctx.toggle_selected()>
                                {item.status.toggle_action_label()}
                            </button>
                            <button class="btn-primary" on:click=move |_| ctx.close_detail()>"닫기"</button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
