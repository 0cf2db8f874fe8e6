//! Modal dialog shell

use leptos::*;

use super::CloseIcon;

/// Centered dialog over a dimmed backdrop; clicking the backdrop closes it
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(default = "max-w-lg")] width: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close.call(())
            />

            // Modal
            <div class=format!(
                "relative bg-slate-800 rounded-xl border border-slate-700 shadow-2xl w-full {} mx-4 max-h-[90vh] flex flex-col",
                width,
            )>
                // Header
                <div class="flex items-center justify-between px-6 py-4 border-b border-slate-700">
                    <h2 class="text-lg font-semibold text-white">{title}</h2>
                    <button
                        class="p-1 text-slate-400 hover:text-white rounded transition-colors"
                        on:click=move |_| on_close.call(())
                    >
                        <CloseIcon class="w-5 h-5" />
                    </button>
                </div>

                <div class="overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}
