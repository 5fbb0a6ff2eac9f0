//! Sidebar listing the dashboard sections the current user may open

use contracts::system::permissions::{ActionType, ResourceType};
use leptos::prelude::*;

use crate::system::permissions::context::use_permissions;

#[component]
pub fn Sidebar(active: RwSignal<Option<ResourceType>>) -> impl IntoView {
    let permissions = use_permissions();

    // Sections with view access; recomputed whenever permissions change
    let sections = move || permissions.accessible_resources(ActionType::View);

    view! {
        <div class="app-sidebar__content">
            <Show
                when=move || permissions.permissions().is_some()
                fallback=|| view! { <div class="app-sidebar__empty">"Not signed in"</div> }
            >
                {move || {
                    sections()
                        .into_iter()
                        .map(|resource| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || active.get() == Some(resource)
                                    on:click=move |_| active.set(Some(resource))
                                >
                                    <div class="app-sidebar__item-content">
                                        <span>{resource.display_name()}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </Show>
        </div>
    }
}
