use contracts::system::permissions::{ActionType, Conditions, ResourceType};
use leptos::prelude::*;

use super::context::use_permissions;

/// Component that requires `action` (view by default) on `resource`
/// Shows fallback while loading or if the current user lacks it
#[component]
pub fn RequirePermission(
    resource: ResourceType,
    #[prop(optional)] action: ActionType,
    #[prop(optional)] conditions: Option<Conditions>,
    children: ChildrenFn,
) -> impl IntoView {
    let permissions = use_permissions();

    let allowed = move || {
        !permissions.is_loading()
            && permissions.has_permission(resource, action, conditions.as_ref())
    };

    view! {
        <Show
            when=allowed
            fallback=move || {
                if permissions.is_loading() {
                    view! { <div>"Loading permissions..."</div> }.into_any()
                } else {
                    let message = format!(
                        "Access denied. {} on {} is not allowed.",
                        action.display_name(),
                        resource.display_name(),
                    );
                    view! { <div>{message}</div> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
