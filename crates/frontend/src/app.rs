use contracts::system::permissions::ResourceType;
use leptos::prelude::*;

use crate::layout::section::SectionView;
use crate::layout::sidebar::Sidebar;
use crate::system::permissions::context::PermissionProvider;

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(None::<ResourceType>);

    view! {
        <PermissionProvider>
            <div class="app-layout">
                <div class="app-body">
                    <div data-zone="left" class="left">
                        <Sidebar active=active />
                    </div>
                    <div class="app-main">
                        <SectionView active=active />
                    </div>
                </div>
            </div>
        </PermissionProvider>
    }
}
