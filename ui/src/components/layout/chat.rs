//! Chat Assistant
//!
//! Floating chat panel. Messages are only logged locally; nothing is sent.

use leptos::*;
use tracing::debug;

use crate::components::common::{ChatIcon, CloseIcon};

#[component]
pub fn ChatAssistant() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (message, set_message) = create_signal(String::new());

    let send = move || {
        let text = message.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        debug!(message = %text, "Chat message");
        set_message.set(String::new());
    };

    view! {
        <div class="fixed bottom-4 right-4 z-40 flex flex-col items-end gap-3">
            <Show when=move || open.get()>
                <div class="w-80 bg-slate-800 border border-slate-700 rounded-xl shadow-2xl flex flex-col">
                    <div class="flex items-center justify-between px-4 py-3 border-b border-slate-700">
                        <span class="text-sm font-semibold text-white">"Catalog Assistant"</span>
                        <button
                            class="p-1 text-slate-400 hover:text-white rounded"
                            on:click=move |_| set_open.set(false)
                        >
                            <CloseIcon class="w-4 h-4" />
                        </button>
                    </div>
                    <div class="p-4 h-48 overflow-y-auto text-sm text-slate-300">
                        <div class="bg-slate-700/50 rounded-lg p-3">
                            "Hi! Ask me about catalogs, schemas or tables."
                        </div>
                    </div>
                    <form
                        class="flex gap-2 p-3 border-t border-slate-700"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <input
                            type="text"
                            class="flex-1 px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Type a message..."
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        />
                        <button type="submit" class="px-3 py-2 text-sm font-medium rounded-lg bg-blue-600 hover:bg-blue-500 text-white">
                            "Send"
                        </button>
                    </form>
                </div>
            </Show>

            <button
                class="w-12 h-12 rounded-full bg-blue-600 hover:bg-blue-500 text-white shadow-lg flex items-center justify-center"
                title="Chat"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <ChatIcon />
            </button>
        </div>
    }
}
