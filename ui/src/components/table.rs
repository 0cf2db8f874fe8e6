//! Table Detail View
//!
//! Column listing with a name/description filter and sortable headers.
//! Clicking a column opens its details, where anyone can edit the
//! description and privileged roles also the PII flag and quality score.

use catalog_shared::columns::{parse_quality_score, reconcile_columns, visible_columns, ColumnSort, SortField};
use catalog_shared::{Asset, Column, Session, Table};
use leptos::*;

use crate::components::common::{EditableText, LockIcon, Modal, SearchIcon, TableIcon};

fn quality_class(score: f64) -> &'static str {
    if score >= 99.0 {
        "text-green-400"
    } else if score >= 95.0 {
        "text-amber-400"
    } else {
        "text-red-400"
    }
}

fn pii_label(is_pii: bool) -> &'static str {
    if is_pii {
        "PII"
    } else {
        "Non-PII"
    }
}

fn pii_badge_class(is_pii: bool) -> &'static str {
    if is_pii {
        "bg-red-500/20 text-red-400"
    } else {
        "bg-green-500/20 text-green-400"
    }
}

/// Read-only quality line shown to non-privileged roles
fn quality_summary(score: f64) -> String {
    format!("Non-null values: {}%", score)
}

#[component]
pub fn TableView(
    table: Signal<Table>,
    session: Signal<Session>,
    #[prop(into)] on_update: Callback<Asset>,
) -> impl IntoView {
    let can_edit = Signal::derive(move || session.get().can_edit());
    let (filter, set_filter) = create_signal(String::new());
    let sort = create_rw_signal(ColumnSort::default());
    let (open_column, set_open_column) = create_signal(Option::<Column>::None);

    let columns = create_memo(move |_| {
        let reconciled = table.with(reconcile_columns);
        visible_columns(&reconciled, &filter.get(), &sort.get())
    });

    let save_description = Callback::new(move |text: String| {
        let mut updated = table.get_untracked();
        updated.description = Some(text);
        on_update.call(Asset::Table(updated));
    });

    let save_column = Callback::new(move |column: Column| {
        let mut updated = table.get_untracked();
        updated.columns = reconcile_columns(&updated);
        if !updated.replace_column(column.clone()) {
            updated.columns.push(column);
        }
        on_update.call(Asset::Table(updated));
        set_open_column.set(None);
    });

    view! {
        <div class="p-6 max-w-6xl mx-auto space-y-6">
            // Header
            <div class="flex items-start gap-3">
                <div class="w-10 h-10 rounded-lg bg-emerald-500/20 text-emerald-400 flex items-center justify-center flex-shrink-0">
                    <TableIcon class="w-5 h-5" />
                </div>
                <div class="min-w-0">
                    <p class="text-xs uppercase tracking-wider text-slate-500">"Table"</p>
                    <h1 class="text-2xl font-bold text-white truncate">{move || table.with(|t| t.title().to_string())}</h1>
                    <p class="text-sm text-slate-500 font-mono">{move || table.with(|t| t.name.clone())}</p>
                </div>
            </div>

            <EditableText
                value=Signal::derive(move || table.with(|t| t.description.clone().unwrap_or_default()))
                on_save=save_description
                can_edit=can_edit
                multiline=true
                placeholder="Add a description"
                class="text-slate-300"
            />

            // Columns
            <section class="space-y-3">
                <div class="flex items-center justify-between gap-4">
                    <h2 class="text-lg font-semibold text-white">
                        "Columns "
                        <span class="text-sm font-normal text-slate-500">{move || columns.with(Vec::len)}</span>
                    </h2>
                    <div class="relative w-64">
                        <SearchIcon class="w-4 h-4 absolute left-3 top-1/2 -translate-y-1/2 text-slate-500" />
                        <input
                            type="text"
                            class="w-full pl-9 pr-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Filter columns..."
                            prop:value=move || filter.get()
                            on:input=move |ev| set_filter.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="bg-slate-800 rounded-xl border border-slate-700 overflow-hidden">
                    <table class="w-full text-sm">
                        <thead class="bg-slate-900/50 text-slate-400">
                            <tr>
                                {SortField::ALL
                                    .into_iter()
                                    .map(|field| view! {
                                        <th class="px-4 py-3 text-left font-medium">
                                            <button
                                                class="flex items-center gap-1 hover:text-white"
                                                on:click=move |_| sort.update(|s| s.toggle(field))
                                            >
                                                {field.label()}
                                                <span class="text-xs">{move || sort.with(|s| s.indicator(field))}</span>
                                            </button>
                                        </th>
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-700">
                            {move || {
                                let rows = columns.get();
                                if rows.is_empty() {
                                    return view! {
                                        <tr>
                                            <td colspan="4" class="px-4 py-6 text-center text-slate-500">"No columns match the filter"</td>
                                        </tr>
                                    }.into_view();
                                }
                                rows.into_iter()
                                    .map(|column| view! { <ColumnRow column=column on_open=move |c: Column| set_open_column.set(Some(c)) /> })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </section>

            {move || open_column.get().map(|column| view! {
                <ColumnDetailsModal
                    column=column
                    can_edit=can_edit
                    on_save=save_column
                    on_close=move |_: ()| set_open_column.set(None)
                />
            })}
        </div>
    }
}

#[component]
fn ColumnRow(
    column: Column,
    #[prop(into)] on_open: Callback<Column>,
) -> impl IntoView {
    let score = column.quality_score;
    let name = column.name.clone();
    let data_type = column.data_type.clone();
    let is_pii = column.is_pii;

    view! {
        <tr class="hover:bg-slate-700/40 cursor-pointer" on:click=move |_| on_open.call(column.clone())>
            <td class="px-4 py-2.5 font-mono text-white">{name}</td>
            <td class="px-4 py-2.5 font-mono text-slate-400">{data_type}</td>
            <td class="px-4 py-2.5">
                {is_pii.then(|| view! {
                    <span class="inline-flex items-center gap-1 px-2 py-0.5 rounded text-xs bg-red-500/20 text-red-400">
                        <LockIcon class="w-3 h-3" />
                        "PII"
                    </span>
                })}
            </td>
            <td class=format!("px-4 py-2.5 font-mono {}", quality_class(score))>{format!("{:.1}%", score)}</td>
        </tr>
    }
}

// ============================================================================
// Column Details
// ============================================================================

#[component]
fn ColumnDetailsModal(
    column: Column,
    can_edit: Signal<bool>,
    on_save: Callback<Column>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Column: {}", column.name);
    let (description, set_description) = create_signal(column.description.clone());
    let (is_pii, set_is_pii) = create_signal(column.is_pii);
    let (quality, set_quality) = create_signal(column.quality_score.to_string());
    let quality_valid = move || quality.with(|q| parse_quality_score(q).is_some());

    let upstream = column.dependencies.upstream.clone();
    let downstream = column.dependencies.downstream.clone();
    let data_type = column.data_type.clone();
    let original = store_value(column);

    let save = move |_: ev::MouseEvent| {
        let mut updated = original.get_value();
        updated.description = description.get_untracked();
        if can_edit.get_untracked() {
            updated.is_pii = is_pii.get_untracked();
            if let Some(score) = quality.with_untracked(|q| parse_quality_score(q)) {
                updated.set_quality_score(score);
            }
        }
        on_save.call(updated);
    };

    let field_class = "w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm focus:outline-none focus:ring-2 focus:ring-blue-500";

    view! {
        <Modal title=title on_close=on_close>
            <div class="p-6 space-y-5">
                <div class="text-sm text-slate-400">
                    "Type: " <span class="font-mono text-slate-200">{data_type}</span>
                </div>

                <div class="space-y-1.5">
                    <label class="block text-sm font-medium text-slate-300">"Description"</label>
                    <textarea
                        class=field_class
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </div>

                <Show
                    when=move || can_edit.get()
                    fallback=move || {
                        let (pii, score) = original.with_value(|c| (c.is_pii, c.quality_score));
                        view! {
                            <div class="grid grid-cols-2 gap-4 text-sm">
                                <div class="space-y-1.5">
                                    <h4 class="font-medium text-slate-300">"PII Status"</h4>
                                    <span class=format!("inline-block px-2 py-0.5 rounded text-xs {}", pii_badge_class(pii))>
                                        {pii_label(pii)}
                                    </span>
                                </div>
                                <div class="space-y-1.5">
                                    <h4 class="font-medium text-slate-300">"Quality Score"</h4>
                                    <p class=quality_class(score)>{quality_summary(score)}</p>
                                </div>
                            </div>
                        }
                    }
                >
                    <div class="grid grid-cols-2 gap-4">
                        <label class="flex items-center gap-2 text-sm text-slate-300">
                            <input
                                type="checkbox"
                                class="rounded border-slate-600 bg-slate-800"
                                prop:checked=move || is_pii.get()
                                on:change=move |ev| set_is_pii.set(event_target_checked(&ev))
                            />
                            "Contains PII"
                        </label>
                        <div class="space-y-1.5">
                            <label class="block text-sm font-medium text-slate-300">"Quality Score"</label>
                            <input
                                type="number"
                                min="0"
                                max="100"
                                step="0.1"
                                class=field_class
                                prop:value=move || quality.get()
                                on:input=move |ev| set_quality.set(event_target_value(&ev))
                            />
                            <Show when=move || !quality_valid()>
                                <p class="text-xs text-red-400">"Enter a number between 0 and 100"</p>
                            </Show>
                        </div>
                    </div>
                </Show>

                <div class="grid grid-cols-2 gap-4 text-sm">
                    <DependencyList title="Upstream" items=upstream />
                    <DependencyList title="Downstream" items=downstream />
                </div>

                <div class="flex items-center justify-end gap-2 pt-2 border-t border-slate-700">
                    <button
                        class="px-4 py-2 text-sm font-medium rounded-lg text-slate-300 hover:bg-slate-700"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 text-sm font-medium rounded-lg bg-blue-600 hover:bg-blue-500 text-white disabled:opacity-50"
                        disabled=move || can_edit.get() && !quality_valid()
                        on:click=save
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[component]
fn DependencyList(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-medium text-slate-300 mb-1">{title}</h4>
            {if items.is_empty() {
                view! { <p class="text-slate-500">"None"</p> }.into_view()
            } else {
                view! {
                    <ul class="space-y-0.5">
                        {items.into_iter().map(|item| view! { <li class="font-mono text-slate-400">{item}</li> }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pii_label() {
        assert_eq!(pii_label(true), "PII");
        assert_eq!(pii_label(false), "Non-PII");
    }

    #[test]
    fn test_quality_summary() {
        assert_eq!(quality_summary(97.8), "Non-null values: 97.8%");
        assert_eq!(quality_summary(100.0), "Non-null values: 100%");
    }
}
