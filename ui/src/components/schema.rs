//! Schema Detail View
//!
//! Shows a schema's description, maturity and tables, a read-only reference
//! section (overview, operations, glossary, data modeling, semantic
//! modeling) and the user-authored documentation tabs.

use catalog_shared::schema_tabs::{ReferenceSection, TabEditor};
use catalog_shared::{Asset, Maturity, Schema, Session};
use leptos::*;

use crate::components::common::{
    CloseIcon, EditIcon, EditableText, MarkdownEditor, PlusIcon, SchemaIcon, TableIcon,
};

fn maturity_badge_class(maturity: Maturity) -> &'static str {
    match maturity {
        Maturity::Low => "bg-amber-500/20 text-amber-400",
        Maturity::Medium => "bg-blue-500/20 text-blue-400",
        Maturity::High => "bg-green-500/20 text-green-400",
    }
}

#[component]
pub fn SchemaView(
    schema: Signal<Schema>,
    session: Signal<Session>,
    #[prop(into)] on_update: Callback<Asset>,
    #[prop(into)] on_select: Callback<Asset>,
) -> impl IntoView {
    let can_edit = Signal::derive(move || session.get().can_edit());
    let (section, set_section) = create_signal(ReferenceSection::default());

    let save_description = Callback::new(move |text: String| {
        let mut updated = schema.get_untracked();
        updated.description = Some(text);
        on_update.call(Asset::Schema(updated));
    });

    let on_maturity_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        if let Some(maturity) = Maturity::ALL.into_iter().find(|m| m.label() == value) {
            let mut updated = schema.get_untracked();
            updated.maturity = maturity;
            on_update.call(Asset::Schema(updated));
        }
    };

    view! {
        <div class="p-6 max-w-6xl mx-auto space-y-6">
            // Header
            <div class="flex items-start justify-between gap-4">
                <div class="flex items-start gap-3 min-w-0">
                    <div class="w-10 h-10 rounded-lg bg-violet-500/20 text-violet-400 flex items-center justify-center flex-shrink-0">
                        <SchemaIcon class="w-5 h-5" />
                    </div>
                    <div class="min-w-0">
                        <p class="text-xs uppercase tracking-wider text-slate-500">"Schema"</p>
                        <h1 class="text-2xl font-bold text-white truncate">{move || schema.with(|s| s.title().to_string())}</h1>
                        <p class="text-sm text-slate-500 font-mono">{move || schema.with(|s| s.name.clone())}</p>
                    </div>
                </div>

                // Maturity
                <div class="flex items-center gap-2 text-sm text-slate-400 flex-shrink-0">
                    "Maturity"
                    {move || {
                        let maturity = schema.with(|s| s.maturity);
                        if can_edit.get() {
                            view! {
                                <select
                                    class="px-2 py-1 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    on:change=on_maturity_change
                                >
                                    {Maturity::ALL
                                        .into_iter()
                                        .map(|m| view! {
                                            <option value=m.label() selected={m == maturity}>{m.label()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            }.into_view()
                        } else {
                            view! {
                                <span class=format!("px-2 py-0.5 rounded text-xs font-medium {}", maturity_badge_class(maturity))>
                                    {maturity.label()}
                                </span>
                            }.into_view()
                        }
                    }}
                </div>
            </div>

            <EditableText
                value=Signal::derive(move || schema.with(|s| s.description.clone().unwrap_or_default()))
                on_save=save_description
                can_edit=can_edit
                multiline=true
                placeholder="Add a description"
                class="text-slate-300"
            />

            // Tables
            <Show when=move || schema.with(|s| !s.tables.is_empty())>
                <section class="space-y-2">
                    <h2 class="text-lg font-semibold text-white">"Tables"</h2>
                    <div class="flex flex-wrap gap-2">
                        {move || schema.with(|s| {
                            s.tables
                                .iter()
                                .map(|table| {
                                    let table = table.clone();
                                    let label = table.title().to_string();
                                    view! {
                                        <button
                                            class="flex items-center gap-1.5 px-3 py-1.5 text-sm rounded-lg bg-slate-800 border border-slate-700 text-slate-300 hover:border-slate-500"
                                            on:click=move |_| on_select.call(Asset::Table(table.clone()))
                                        >
                                            <TableIcon class="w-3.5 h-3.5 text-emerald-400" />
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()
                        })}
                    </div>
                </section>
            </Show>

            // Reference
            <section class="space-y-3">
                <div class="flex gap-1 border-b border-slate-700">
                    {ReferenceSection::ALL
                        .into_iter()
                        .map(|s| view! {
                            <button
                                id=s.id()
                                class=move || {
                                    let base = "px-3 py-2 text-sm font-medium border-b-2 -mb-px transition-colors";
                                    if section.get() == s {
                                        format!("{} border-blue-500 text-white", base)
                                    } else {
                                        format!("{} border-transparent text-slate-400 hover:text-white", base)
                                    }
                                }
                                on:click=move |_| set_section.set(s)
                            >
                                {s.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <div class="text-sm text-slate-300">
                    {move || schema.with(|s| reference_content(s, section.get()))}
                </div>
            </section>

            <DocumentationTabs schema=schema can_edit=can_edit on_update=on_update />
        </div>
    }
}

/// Body of a reference section; absent data renders nothing
fn reference_content(schema: &Schema, section: ReferenceSection) -> View {
    match section {
        ReferenceSection::Overview => schema
            .overview
            .clone()
            .map(|overview| view! { <p class="leading-relaxed">{overview}</p> })
            .into_view(),
        ReferenceSection::Operations => schema
            .operations
            .iter()
            .map(|op| view! {
                <div class="py-2">
                    <div class="font-medium text-white">{op.title.clone()}</div>
                    <div class="text-slate-400">{op.description.clone()}</div>
                </div>
            })
            .collect_view(),
        ReferenceSection::Glossary => schema
            .business_glossary
            .iter()
            .map(|t| view! {
                <div class="py-2">
                    <div class="font-medium text-white">{t.term.clone()}</div>
                    <div class="text-slate-400">{t.definition.clone()}</div>
                </div>
            })
            .collect_view(),
        ReferenceSection::DataModeling => schema
            .data_modeling
            .clone()
            .map(|dm| view! {
                <div class="space-y-4">
                    <p>{dm.description}</p>
                    <div>
                        <h4 class="font-medium text-white mb-1">"Flags"</h4>
                        {dm.flags
                            .into_iter()
                            .map(|f| view! {
                                <div class="py-1">
                                    <span class="font-mono text-blue-300">{f.name}</span>
                                    <span class="text-slate-400">" - " {f.description}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <NameList title="Dimensions" items=dm.dimensions />
                        <NameList title="Source Tables" items=dm.source_tables />
                    </div>
                </div>
            })
            .into_view(),
        ReferenceSection::SemanticModeling => schema
            .data_modeling
            .as_ref()
            .map(|dm| {
                dm.semantic_modeling
                    .iter()
                    .map(|m| view! {
                        <div class="py-2">
                            <div class="font-medium text-white">{m.measure.clone()}</div>
                            <div class="text-slate-400">{m.description.clone()}</div>
                        </div>
                    })
                    .collect_view()
            })
            .into_view(),
    }
}

#[component]
fn NameList(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-medium text-white mb-1">{title}</h4>
            <ul class="space-y-0.5">
                {items.into_iter().map(|item| view! { <li class="font-mono text-slate-400">{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

// ============================================================================
// Documentation Tabs
// ============================================================================

/// User-authored markdown tabs
#[component]
fn DocumentationTabs(
    schema: Signal<Schema>,
    can_edit: Signal<bool>,
    on_update: Callback<Asset>,
) -> impl IntoView {
    let editor = create_rw_signal(schema.with_untracked(|s| TabEditor::new(s)));

    let add_tab = move |_: ev::MouseEvent| {
        apply_tab_edit(schema, editor, on_update, |e, s| {
            e.add_tab(s);
            true
        })
    };

    view! {
        <section class="space-y-3">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-white">"Documentation"</h2>
                <Show when=move || can_edit.get()>
                    <button
                        class="flex items-center gap-1 px-3 py-2 text-sm rounded-lg bg-slate-700 hover:bg-slate-600 text-white"
                        on:click=add_tab
                    >
                        <PlusIcon />
                        "Add Tab"
                    </button>
                </Show>
            </div>

            // Tab bar
            <div class="flex flex-wrap gap-1 border-b border-slate-700">
                {move || schema.with(|s| {
                    s.tabs
                        .iter()
                        .map(|tab| {
                            let id = tab.id.clone();
                            let activate_id = id.clone();
                            let remove_id = id.clone();
                            let title = tab.title.clone();
                            let is_active = move || editor.with(|e| e.active() == Some(id.as_str()));
                            view! {
                                <div class=move || {
                                    let base = "flex items-center gap-1 px-3 py-2 text-sm border-b-2 -mb-px";
                                    if is_active() {
                                        format!("{} border-blue-500 text-white", base)
                                    } else {
                                        format!("{} border-transparent text-slate-400 hover:text-white", base)
                                    }
                                }>
                                    <button on:click=move |_| editor.update(|e| e.activate(&activate_id))>{title}</button>
                                    <Show when=move || can_edit.get()>
                                        {
                                            let remove_id = remove_id.clone();
                                            view! {
                                                <button
                                                    class="p-0.5 text-slate-500 hover:text-red-400"
                                                    title="Remove tab"
                                                    on:click=move |_| {
                                                        let id = remove_id.clone();
                                                        apply_tab_edit(schema, editor, on_update, move |e, s| e.remove_tab(s, &id).is_some())
                                                    }
                                                >
                                                    <CloseIcon class="w-3 h-3" />
                                                </button>
                                            }
                                        }
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                })}
            </div>

            // Active tab
            {move || {
                let Some(tab) = schema.with(|s| editor.with(|e| e.active_tab(s).cloned())) else {
                    return schema
                        .with(|s| s.tabs.is_empty())
                        .then(|| view! { <p class="text-sm text-slate-500">"No documentation tabs yet."</p> })
                        .into_view();
                };

                let id = tab.id.clone();
                if editor.with(|e| e.is_editing(&id)) {
                    let save_id = id.clone();
                    let rename_id = id.clone();
                    view! {
                        <div class="space-y-3">
                            <EditableText
                                value=Signal::derive(move || schema.with(|s| s.tab(&rename_id).map(|t| t.title.clone()).unwrap_or_default()))
                                on_save=move |title: String| {
                                    let id = id.clone();
                                    apply_tab_edit(schema, editor, on_update, move |e, s| e.rename_tab(s, &id, &title))
                                }
                                can_edit=can_edit
                                class="font-medium text-white"
                            />
                            <MarkdownEditor
                                content=tab.content
                                on_save=move |content: String| {
                                    let id = save_id.clone();
                                    apply_tab_edit(schema, editor, on_update, move |e, s| e.save_content(s, &id, content))
                                }
                                on_cancel=move |_: ()| editor.update(|e| e.cancel_edit())
                            />
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="bg-slate-800 rounded-xl border border-slate-700 p-4">
                            <div class="flex items-start justify-between gap-2 mb-3">
                                <h3 class="font-medium text-white">{tab.title}</h3>
                                <Show when=move || can_edit.get()>
                                    {
                                        let id = id.clone();
                                        view! {
                                            <button
                                                class="flex items-center gap-1 px-2 py-1 text-xs rounded text-slate-400 hover:text-white hover:bg-slate-700"
                                                on:click=move |_| editor.update(|e| e.begin_edit(&id))
                                            >
                                                <EditIcon class="w-3.5 h-3.5" />
                                                "Edit"
                                            </button>
                                        }
                                    }
                                </Show>
                            </div>
                            <div class="text-sm text-slate-300 whitespace-pre-wrap">{tab.content}</div>
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

/// Run a tab operation against the latest schema and persist the result
fn apply_tab_edit(
    schema: Signal<Schema>,
    editor: RwSignal<TabEditor>,
    on_update: Callback<Asset>,
    op: impl FnOnce(&mut TabEditor, &mut Schema) -> bool,
) {
    let mut updated = schema.get_untracked();
    let changed = editor.try_update(|e| op(e, &mut updated)).unwrap_or(false);
    if changed {
        on_update.call(Asset::Schema(updated));
    }
}
