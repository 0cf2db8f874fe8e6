//! Root Application Component
//!
//! Sets up the global state provider, rehydrates the catalog once after
//! mount and lays out header, explorer, detail panel and chat.

use catalog_shared::Asset;
use leptos::*;
use leptos_meta::*;

use crate::components::detail::AssetDetailView;
use crate::components::layout::{ChatAssistant, Header, Sidebar};
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    provide_context(app_state);

    // Rehydrate once after mount
    create_effect(move |prev_run: Option<bool>| {
        if prev_run.is_none() {
            app_state.load();
        }
        true
    });

    let session = app_state.session();

    view! {
        <Title text="Data Catalog" />
        <div class="h-screen flex flex-col bg-slate-900 text-slate-100">
            <Header />
            <div class="flex-1 flex overflow-hidden">
                <Sidebar />
                <main class="flex-1 overflow-y-auto">
                    {move || app_state.error.get().map(|err| view! {
                        <div class="m-4 bg-red-500/10 border border-red-500/30 rounded-lg p-3">
                            <p class="text-sm text-red-400">"Changes could not be saved: " {err}</p>
                        </div>
                    })}
                    <AssetDetailView
                        selection=app_state.selection
                        session=session
                        on_update=move |asset: Asset| app_state.update(asset)
                        on_select=move |asset: Asset| app_state.select(asset)
                    />
                </main>
            </div>
            <ChatAssistant />
        </div>
    }
}
