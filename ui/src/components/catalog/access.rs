//! Request Access Dialog
//!
//! Collects an access kind, target users and objects from the catalog tree,
//! then shows an acknowledgement. The request is only logged.

use catalog_shared::access::{suggest_users, AccessKind, AccessRequestDraft, AccessRequestSummary, APPROVAL_ESTIMATE};
use catalog_shared::fixtures::DIRECTORY_USERS;
use catalog_shared::Catalog;
use leptos::*;

use crate::components::common::{ChevronIcon, CloseIcon, Modal};

#[component]
pub fn RequestAccessModal(
    catalog: Catalog,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let draft = create_rw_signal(AccessRequestDraft::new(&catalog));
    let catalog = store_value(catalog);
    let (user_input, set_user_input) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(Option::<AccessRequestSummary>::None);

    let add_user = move |user: String| {
        draft.update(|d| {
            d.add_user(&user);
        });
        set_user_input.set(String::new());
    };

    let submit = move |_: ev::MouseEvent| {
        let summary = catalog.with_value(|c| draft.with_untracked(|d| d.submit(c)));
        set_submitted.set(Some(summary));
    };

    let title = catalog.with_value(|c| format!("Request Access to {}", c.title()));

    view! {
        <Modal title=title on_close=on_close width="max-w-2xl">
            {move || match submitted.get() {
                Some(summary) => view! { <Acknowledgement summary=summary on_close=on_close /> }.into_view(),
                None => view! {
                    <div class="p-6 space-y-6">
                        // Access kind
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-slate-300">"Access Type"</label>
                            <div class="flex gap-2">
                                {AccessKind::ALL
                                    .into_iter()
                                    .map(|kind| view! {
                                        <button
                                            class=move || {
                                                let base = "px-4 py-2 text-sm font-medium rounded-lg border transition-colors";
                                                if draft.with(|d| d.kind == kind) {
                                                    format!("{} bg-blue-600 border-blue-500 text-white", base)
                                                } else {
                                                    format!("{} border-slate-700 text-slate-300 hover:bg-slate-700", base)
                                                }
                                            }
                                            on:click=move |_| draft.update(|d| d.kind = kind)
                                        >
                                            {kind.label()}
                                        </button>
                                    })
                                    .collect_view()}
                            </div>
                            <p class="text-xs text-slate-500">{move || draft.with(|d| d.kind.hint())}</p>
                        </div>

                        // Users
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-slate-300">"Users"</label>
                            <div class="relative">
                                <input
                                    type="text"
                                    class="w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    placeholder="Type a name or email and press Enter"
                                    prop:value=move || user_input.get()
                                    on:input=move |ev| set_user_input.set(event_target_value(&ev))
                                    on:keydown=move |ev: ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            add_user(user_input.get_untracked());
                                        }
                                    }
                                />
                                {move || {
                                    let suggestions = suggest_users(&user_input.get(), DIRECTORY_USERS);
                                    (!suggestions.is_empty()).then(|| view! {
                                        <ul class="absolute z-10 mt-1 w-full bg-slate-900 border border-slate-700 rounded-lg shadow-lg py-1">
                                            {suggestions
                                                .into_iter()
                                                .map(|user| view! {
                                                    <li
                                                        class="px-3 py-1.5 text-sm text-slate-300 hover:bg-slate-700 cursor-pointer"
                                                        on:click=move |_| add_user(user.to_string())
                                                    >
                                                        {user}
                                                    </li>
                                                })
                                                .collect_view()}
                                        </ul>
                                    })
                                }}
                            </div>
                            <div class="flex flex-wrap gap-2">
                                {move || draft.with(|d| {
                                    d.users()
                                        .iter()
                                        .map(|user| {
                                            let user = user.clone();
                                            let label = user.clone();
                                            view! {
                                                <span class="inline-flex items-center gap-1 pl-2 pr-1 py-1 text-xs rounded bg-slate-700 text-white">
                                                    {label}
                                                    <button
                                                        class="p-0.5 text-slate-400 hover:text-white"
                                                        on:click=move |_| draft.update(|d| d.remove_user(&user))
                                                    >
                                                        <CloseIcon class="w-3 h-3" />
                                                    </button>
                                                </span>
                                            }
                                        })
                                        .collect_view()
                                })}
                            </div>
                        </div>

                        // Objects
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-slate-300">"Objects"</label>
                            <div class="bg-slate-900 border border-slate-700 rounded-lg p-2 max-h-64 overflow-y-auto">
                                {move || {
                                    let rows = catalog.with_value(|c| draft.with(|d| d.tree_rows(c)));
                                    rows.into_iter()
                                        .map(|row| {
                                            let id = row.key.id.clone();
                                            let toggle_id = id.clone();
                                            let name_class = if row.disabled { "text-slate-500" } else { "text-slate-200" };
                                            view! {
                                                <div
                                                    class="flex items-center gap-2 py-1 text-sm"
                                                    style=format!("padding-left: {}rem", row.level as f32 * 1.25)
                                                >
                                                    {if row.has_children {
                                                        view! {
                                                            <button
                                                                class="p-0.5 text-slate-500 hover:text-white"
                                                                on:click=move |_| draft.update(|d| d.toggle_expanded(&id))
                                                            >
                                                                <ChevronIcon expanded=row.expanded />
                                                            </button>
                                                        }.into_view()
                                                    } else {
                                                        view! { <span class="w-4" /> }.into_view()
                                                    }}
                                                    <input
                                                        type="checkbox"
                                                        class="rounded border-slate-600 bg-slate-800"
                                                        prop:checked=row.selected
                                                        disabled=row.disabled
                                                        on:change=move |_| {
                                                            catalog.with_value(|c| draft.update(|d| d.toggle(c, &toggle_id)))
                                                        }
                                                    />
                                                    <span class=name_class>
                                                        {row.name}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>

                        <p class="text-xs text-slate-500">{APPROVAL_ESTIMATE}</p>

                        // Footer
                        <div class="flex items-center justify-end gap-2 pt-2 border-t border-slate-700">
                            <button
                                class="px-4 py-2 text-sm font-medium rounded-lg text-slate-300 hover:bg-slate-700"
                                on:click=move |_| on_close.call(())
                            >
                                "Cancel"
                            </button>
                            <button
                                class="px-4 py-2 text-sm font-medium rounded-lg bg-blue-600 hover:bg-blue-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled=move || draft.with(|d| d.users().is_empty())
                                on:click=submit
                            >
                                "Submit Request"
                            </button>
                        </div>
                    </div>
                }.into_view(),
            }}
        </Modal>
    }
}

/// Confirmation shown after submitting
#[component]
fn Acknowledgement(
    summary: AccessRequestSummary,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="p-6 space-y-4">
            <div class="bg-green-500/10 border border-green-500/30 rounded-lg p-4">
                <p class="text-sm font-medium text-green-400">"Access request submitted"</p>
                <p class="text-sm text-slate-400 mt-1">
                    {format!("{} access for {} user(s)", summary.kind.label(), summary.users.len())}
                </p>
            </div>
            <ul class="text-sm text-slate-300 list-disc pl-5 space-y-1">
                {summary.objects.into_iter().map(|object| view! { <li class="font-mono">{object}</li> }).collect_view()}
            </ul>
            <p class="text-xs text-slate-500">{APPROVAL_ESTIMATE}</p>
            <div class="flex justify-end">
                <button
                    class="px-4 py-2 text-sm font-medium rounded-lg bg-blue-600 hover:bg-blue-500 text-white"
                    on:click=move |_| on_close.call(())
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}
