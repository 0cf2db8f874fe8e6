//! Sidebar Explorer
//!
//! Collapsible tree of catalogs, schemas and tables. Clicking a node selects
//! it by key; the chevron expands or collapses it. Typing in the search box
//! prunes the tree to matches and their ancestors, shown fully expanded, so
//! rows never hand their pruned nodes to the selection.

use std::collections::HashSet;

use catalog_shared::explorer::{filter_forest, tree_rows, ExplorerRow};
use catalog_shared::{Asset, AssetId, AssetKind};
use leptos::*;

use crate::components::common::{CatalogIcon, ChevronIcon, PanelIcon, SchemaIcon, SearchIcon, TableIcon};
use crate::state::AppState;

/// Explorer sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (query, set_query) = create_signal(String::new());
    let expanded = create_rw_signal(HashSet::<AssetId>::new());

    // Open the catalogs once the forest arrives
    create_effect(move |opened: Option<bool>| {
        if opened == Some(true) || !app_state.loaded.get() {
            return opened.unwrap_or(false);
        }
        let catalogs: Vec<AssetId> = app_state.forest.with_untracked(|f| f.catalogs.iter().map(|c| c.id.clone()).collect());
        expanded.update(|set| set.extend(catalogs));
        true
    });

    let rows = create_memo(move |_| {
        let q = query.get();
        let searching = !q.is_empty();
        app_state.forest.with(|forest| {
            let visible = filter_forest(forest, &q);
            expanded.with(|open| tree_rows(&visible, open, searching))
        })
    });

    view! {
        <aside
            class=move || {
                let base = "h-full bg-slate-800 border-r border-slate-700 flex flex-col transition-all duration-200 flex-shrink-0";
                if app_state.sidebar_collapsed.get() {
                    format!("{} w-12", base)
                } else {
                    format!("{} w-72", base)
                }
            }
        >
            <div class="h-12 flex items-center justify-between px-3 border-b border-slate-700">
                <Show when=move || !app_state.sidebar_collapsed.get()>
                    <span class="text-sm font-semibold text-white">"Explorer"</span>
                </Show>
                <button
                    class="p-1 text-slate-400 hover:text-white rounded transition-colors"
                    title="Toggle sidebar"
                    on:click=move |_| app_state.sidebar_collapsed.update(|c| *c = !*c)
                >
                    <PanelIcon />
                </button>
            </div>

            <Show when=move || !app_state.sidebar_collapsed.get()>
                <div class="p-2 border-b border-slate-700">
                    <div class="relative">
                        <SearchIcon class="w-4 h-4 absolute left-2.5 top-2.5 text-slate-500" />
                        <input
                            type="text"
                            class="w-full pl-8 pr-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Search catalog..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto p-2 space-y-0.5">
                    {move || {
                        if !app_state.loaded.get() {
                            return view! { <div class="px-2 py-1 text-sm text-slate-500">"Loading catalog..."</div> }.into_view();
                        }
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! { <div class="px-2 py-1 text-sm text-slate-500">"No matching assets"</div> }.into_view();
                        }
                        rows.into_iter()
                            .map(|row| view! { <ExplorerNode row=row expanded=expanded /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </aside>
    }
}

/// One row of the explorer tree
#[component]
fn ExplorerNode(
    row: ExplorerRow,
    expanded: RwSignal<HashSet<AssetId>>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let key = row.key();
    let id = key.id.clone();
    let select_key = key.clone();

    let is_selected = move || app_state.selection.with(|s| s.as_ref().map(Asset::key).as_ref() == Some(&key));

    let icon = match row.asset.kind() {
        AssetKind::Catalog => view! { <CatalogIcon class="w-4 h-4 text-blue-400 flex-shrink-0" /> }.into_view(),
        AssetKind::Schema => view! { <SchemaIcon class="w-4 h-4 text-violet-400 flex-shrink-0" /> }.into_view(),
        AssetKind::Table => view! { <TableIcon class="w-4 h-4 text-emerald-400 flex-shrink-0" /> }.into_view(),
    };

    let toggle = if row.has_children {
        let is_open = row.expanded;
        view! {
            <button
                class="p-0.5 text-slate-500 hover:text-white"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    expanded.update(|open| {
                        if !open.remove(&id) {
                            open.insert(id.clone());
                        }
                    });
                }
            >
                <ChevronIcon expanded=is_open />
            </button>
        }
        .into_view()
    } else {
        view! { <span class="w-4 flex-shrink-0" /> }.into_view()
    };

    view! {
        <div
            class=move || {
                let base = "flex items-center gap-1.5 py-1.5 pr-2 rounded cursor-pointer text-sm transition-colors";
                if is_selected() {
                    format!("{} bg-blue-600/20 text-white", base)
                } else {
                    format!("{} text-slate-300 hover:bg-slate-700/50", base)
                }
            }
            style=format!("padding-left: {}rem", 0.5 + row.level as f32)
            title=row.asset.title().to_string()
            on:click=move |_| app_state.select_key(select_key.clone())
        >
            {toggle}
            {icon}
            <span class="truncate">{row.asset.name().to_string()}</span>
        </div>
    }
}
