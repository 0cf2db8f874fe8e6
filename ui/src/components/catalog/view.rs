//! Catalog Detail View
//!
//! Two tabs over a catalog:
//! - Data: business areas with their related schemas, plus terminology
//! - Analytics: dashboards with a closable detail pane
//!
//! Each tab has its own filter text. Business area edits address the area
//! by its position in the unfiltered list.

use catalog_shared::filter::{filter_business_areas, filter_dashboards, related_schemas};
use catalog_shared::{AnalyticsDashboard, Asset, BusinessArea, Catalog, Schema, Session};
use leptos::*;

use super::RequestAccessModal;
use crate::components::common::{CatalogIcon, CloseIcon, EditableText, ExternalLinkIcon, LockIcon, PlusIcon, SearchIcon, TrashIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogTab {
    Data,
    Analytics,
}

impl CatalogTab {
    fn label(&self) -> &'static str {
        match self {
            CatalogTab::Data => "Data",
            CatalogTab::Analytics => "Analytics",
        }
    }
}

#[component]
pub fn CatalogView(
    catalog: Signal<Catalog>,
    session: Signal<Session>,
    #[prop(into)] on_update: Callback<Asset>,
    #[prop(into)] on_select: Callback<Asset>,
) -> impl IntoView {
    let (tab, set_tab) = create_signal(CatalogTab::Data);
    let (show_access, set_show_access) = create_signal(false);
    let can_edit = Signal::derive(move || session.get().can_edit());

    let save_description = Callback::new(move |text: String| {
        let mut updated = catalog.get_untracked();
        updated.description = Some(text);
        on_update.call(Asset::Catalog(updated));
    });

    view! {
        <div class="p-6 max-w-6xl mx-auto space-y-6">
            // Header
            <div class="flex items-start justify-between gap-4">
                <div class="flex items-start gap-3 min-w-0">
                    <div class="w-10 h-10 rounded-lg bg-blue-500/20 text-blue-400 flex items-center justify-center flex-shrink-0">
                        <CatalogIcon class="w-5 h-5" />
                    </div>
                    <div class="min-w-0">
                        <p class="text-xs uppercase tracking-wider text-slate-500">"Catalog"</p>
                        <h1 class="text-2xl font-bold text-white truncate">{move || catalog.with(|c| c.title().to_string())}</h1>
                        <p class="text-sm text-slate-500 font-mono">{move || catalog.with(|c| c.name.clone())}</p>
                    </div>
                </div>
                <button
                    class="flex items-center gap-2 px-4 py-2 text-sm font-medium rounded-lg bg-blue-600 hover:bg-blue-500 text-white flex-shrink-0"
                    on:click=move |_| set_show_access.set(true)
                >
                    <LockIcon />
                    "Request Access"
                </button>
            </div>

            <EditableText
                value=Signal::derive(move || catalog.with(|c| c.description.clone().unwrap_or_default()))
                on_save=save_description
                can_edit=can_edit
                multiline=true
                placeholder="Add a description"
                class="text-slate-300"
            />

            // Tabs
            <div class="flex gap-1 border-b border-slate-700">
                {[CatalogTab::Data, CatalogTab::Analytics]
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class=move || {
                                let base = "px-4 py-2 text-sm font-medium border-b-2 -mb-px transition-colors";
                                if tab.get() == t {
                                    format!("{} border-blue-500 text-white", base)
                                } else {
                                    format!("{} border-transparent text-slate-400 hover:text-white", base)
                                }
                            }
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                CatalogTab::Data => view! {
                    <DataTab catalog=catalog can_edit=can_edit on_update=on_update on_select=on_select />
                }.into_view(),
                CatalogTab::Analytics => view! { <AnalyticsTab catalog=catalog /> }.into_view(),
            }}

            <Show when=move || show_access.get()>
                <RequestAccessModal
                    catalog=catalog.get_untracked()
                    on_close=move |_: ()| set_show_access.set(false)
                />
            </Show>
        </div>
    }
}

// ============================================================================
// Data Tab
// ============================================================================

#[component]
fn DataTab(
    catalog: Signal<Catalog>,
    can_edit: Signal<bool>,
    on_update: Callback<Asset>,
    on_select: Callback<Asset>,
) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let add_area = move |_: ev::MouseEvent| {
        let mut updated = catalog.get_untracked();
        updated.add_business_area();
        on_update.call(Asset::Catalog(updated));
    };

    let change_area = Callback::new(move |(index, area): (usize, BusinessArea)| {
        let mut updated = catalog.get_untracked();
        if updated.update_business_area(index, area) {
            on_update.call(Asset::Catalog(updated));
        }
    });

    let remove_area = Callback::new(move |index: usize| {
        let mut updated = catalog.get_untracked();
        if updated.remove_business_area(index).is_some() {
            on_update.call(Asset::Catalog(updated));
        }
    });

    view! {
        <div class="space-y-6">
            <section class="space-y-3">
                <div class="flex items-center justify-between gap-4">
                    <h2 class="text-lg font-semibold text-white">"Business Areas"</h2>
                    <div class="flex items-center gap-2">
                        <FilterInput query=query set_query=set_query placeholder="Filter business areas..." />
                        <Show when=move || can_edit.get()>
                            <button
                                class="flex items-center gap-1 px-3 py-2 text-sm rounded-lg bg-slate-700 hover:bg-slate-600 text-white"
                                on:click=add_area
                            >
                                <PlusIcon />
                                "Add"
                            </button>
                        </Show>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {move || {
                        let q = query.get();
                        catalog.with(|c| {
                            filter_business_areas(&c.business_areas, &q)
                                .into_iter()
                                .map(|(index, area)| {
                                    let related: Vec<Schema> = related_schemas(c, area).into_iter().cloned().collect();
                                    view! {
                                        <BusinessAreaCard
                                            index=index
                                            area=area.clone()
                                            related=related
                                            can_edit=can_edit
                                            on_change=change_area
                                            on_remove=remove_area
                                            on_select=on_select
                                        />
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </div>
            </section>

            <Show when=move || catalog.with(|c| !c.terminology.is_empty())>
                <section class="space-y-3">
                    <h2 class="text-lg font-semibold text-white">"Terminology"</h2>
                    <dl class="bg-slate-800 rounded-xl border border-slate-700 divide-y divide-slate-700">
                        {move || catalog.with(|c| {
                            c.terminology
                                .iter()
                                .map(|t| view! {
                                    <div class="px-4 py-3">
                                        <dt class="text-sm font-medium text-white">{t.term.clone()}</dt>
                                        <dd class="text-sm text-slate-400 mt-1">{t.definition.clone()}</dd>
                                    </div>
                                })
                                .collect_view()
                        })}
                    </dl>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn BusinessAreaCard(
    index: usize,
    area: BusinessArea,
    related: Vec<Schema>,
    can_edit: Signal<bool>,
    on_change: Callback<(usize, BusinessArea)>,
    on_remove: Callback<usize>,
    on_select: Callback<Asset>,
) -> impl IntoView {
    let stored = store_value(area);

    let rename = Callback::new(move |name: String| {
        let mut area = stored.get_value();
        area.name = name;
        on_change.call((index, area));
    });

    let describe = Callback::new(move |description: String| {
        let mut area = stored.get_value();
        area.description = description;
        on_change.call((index, area));
    });

    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 p-4 space-y-3">
            <div class="flex items-start justify-between gap-2">
                <EditableText
                    value=Signal::derive(move || stored.with_value(|a| a.name.clone()))
                    on_save=rename
                    can_edit=can_edit
                    class="font-medium text-white flex-1"
                />
                <Show when=move || can_edit.get()>
                    <button
                        class="p-1 text-slate-500 hover:text-red-400 rounded transition-colors"
                        title="Remove business area"
                        on:click=move |_| on_remove.call(index)
                    >
                        <TrashIcon />
                    </button>
                </Show>
            </div>
            <EditableText
                value=Signal::derive(move || stored.with_value(|a| a.description.clone()))
                on_save=describe
                can_edit=can_edit
                multiline=true
                class="text-sm text-slate-400"
            />
            {(!related.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2 pt-1">
                    {related
                        .into_iter()
                        .map(|schema| {
                            let name = schema.name.clone();
                            view! {
                                <button
                                    class="px-2 py-1 text-xs rounded bg-violet-500/20 text-violet-300 hover:bg-violet-500/30"
                                    on:click=move |_| on_select.call(Asset::Schema(schema.clone()))
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

// ============================================================================
// Analytics Tab
// ============================================================================

#[component]
fn AnalyticsTab(catalog: Signal<Catalog>) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (selected, set_selected) = create_signal(Option::<AnalyticsDashboard>::None);

    view! {
        <div class="flex gap-6">
            <section class="flex-1 space-y-3 min-w-0">
                <div class="flex items-center justify-between gap-4">
                    <h2 class="text-lg font-semibold text-white">"Dashboards"</h2>
                    <FilterInput query=query set_query=set_query placeholder="Filter dashboards..." />
                </div>
                <div class="space-y-2">
                    {move || {
                        let q = query.get();
                        catalog.with(|c| {
                            filter_dashboards(&c.analytics, &q)
                                .into_iter()
                                .map(|(_, dashboard)| {
                                    let dashboard = dashboard.clone();
                                    let name = dashboard.name.clone();
                                    let is_selected = {
                                        let name = name.clone();
                                        move || selected.with(|s| s.as_ref().is_some_and(|d| d.name == name))
                                    };
                                    view! {
                                        <button
                                            class=move || {
                                                let base = "w-full text-left p-4 rounded-xl border transition-colors";
                                                if is_selected() {
                                                    format!("{} bg-blue-600/10 border-blue-500/50", base)
                                                } else {
                                                    format!("{} bg-slate-800 border-slate-700 hover:border-slate-500", base)
                                                }
                                            }
                                            on:click=move |_| set_selected.set(Some(dashboard.clone()))
                                        >
                                            <div class="font-medium text-white">{name}</div>
                                            <div class="text-sm text-slate-400 mt-1">{dashboard.description.clone()}</div>
                                        </button>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </div>
            </section>

            {move || selected.get().map(|dashboard| view! {
                <aside class="w-80 flex-shrink-0 bg-slate-800 rounded-xl border border-slate-700 p-4 space-y-3 self-start">
                    <div class="flex items-start justify-between gap-2">
                        <h3 class="font-semibold text-white">{dashboard.name.clone()}</h3>
                        <button
                            class="p-1 text-slate-400 hover:text-white rounded"
                            on:click=move |_| set_selected.set(None)
                        >
                            <CloseIcon class="w-4 h-4" />
                        </button>
                    </div>
                    <p class="text-sm text-slate-400">{dashboard.description.clone()}</p>
                    <a
                        href=dashboard.url.clone()
                        target="_blank"
                        class="inline-flex items-center gap-1 text-sm text-blue-400 hover:text-blue-300"
                    >
                        "Open dashboard"
                        <ExternalLinkIcon class="w-3.5 h-3.5" />
                    </a>
                </aside>
            })}
        </div>
    }
}

#[component]
fn FilterInput(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative">
            <SearchIcon class="w-4 h-4 absolute left-2.5 top-2.5 text-slate-500" />
            <input
                type="text"
                class="w-64 pl-8 pr-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
        </div>
    }
}
