//! Header Component
//!
//! Product title and the role switcher that gates every edit affordance.

use catalog_shared::Role;
use leptos::*;
use tracing::debug;

use crate::components::common::CatalogIcon;
use crate::state::AppState;

#[component]
pub fn Header() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let on_role_change = move |ev: ev::Event| match event_target_value(&ev).parse::<Role>() {
        Ok(role) => {
            debug!(%role, "Role changed");
            app_state.role.set(role);
        }
        Err(e) => debug!("Ignoring role selection: {}", e),
    };

    view! {
        <header class="h-14 flex items-center justify-between px-4 bg-slate-800 border-b border-slate-700 flex-shrink-0">
            <div class="flex items-center gap-3">
                <div class="w-8 h-8 rounded-lg bg-blue-600 flex items-center justify-center text-white">
                    <CatalogIcon class="w-5 h-5" />
                </div>
                <span class="text-lg font-semibold text-white">"Data Catalog"</span>
            </div>

            <label class="flex items-center gap-2 text-sm text-slate-400">
                "Role"
                <select
                    class="px-3 py-1.5 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || app_state.role.get().as_str()
                    on:change=on_role_change
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! {
                            <option value=role.as_str() selected=move || app_state.role.get() == role>
                                {role.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
        </header>
    }
}
