use contracts::system::permissions::ResourceType;
use leptos::prelude::*;

use crate::system::permissions::context::use_permissions;
use crate::system::permissions::guard::RequirePermission;

/// Center area: the selected section behind a view-permission guard
#[component]
pub fn SectionView(active: RwSignal<Option<ResourceType>>) -> impl IntoView {
    move || {
        active.get().map(|resource| {
            view! {
                <RequirePermission resource=resource>
                    <h2>{resource.display_name()}</h2>
                    <ActionBar resource=resource />
                </RequirePermission>
            }
        })
    }
}

/// Buttons for every action available on the section
#[component]
fn ActionBar(resource: ResourceType) -> impl IntoView {
    let permissions = use_permissions();

    view! {
        <div class="section-actions">
            {move || {
                permissions
                    .available_actions(resource)
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button class="button" data-action=action.code()>
                                {action.display_name()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
