//! Asset Detail Router
//!
//! Dispatches the selection to the matching detail view. A view is only
//! rebuilt when a different asset gets selected, so edits to the selected
//! asset keep the view's local state (filters, sort, open dialogs).

use catalog_shared::{Asset, AssetKind, Catalog, Schema, Session, Table};
use leptos::*;

use crate::components::catalog::CatalogView;
use crate::components::schema::SchemaView;
use crate::components::table::TableView;

#[component]
pub fn AssetDetailView(
    #[prop(into)] selection: Signal<Option<Asset>>,
    #[prop(into)] session: Signal<Session>,
    #[prop(into)] on_update: Callback<Asset>,
    #[prop(into)] on_select: Callback<Asset>,
) -> impl IntoView {
    let selected_key = create_memo(move |_| selection.with(|s| s.as_ref().map(Asset::key)));

    move || {
        let Some(key) = selected_key.get() else {
            return view! { <EmptySelection /> }.into_view();
        };

        match key.kind {
            AssetKind::Catalog => {
                let catalog = Signal::derive(move || match selection.get() {
                    Some(Asset::Catalog(catalog)) => catalog,
                    _ => Catalog::default(),
                });
                view! { <CatalogView catalog=catalog session=session on_update=on_update on_select=on_select /> }
                    .into_view()
            }
            AssetKind::Schema => {
                let schema = Signal::derive(move || match selection.get() {
                    Some(Asset::Schema(schema)) => schema,
                    _ => Schema::default(),
                });
                view! { <SchemaView schema=schema session=session on_update=on_update on_select=on_select /> }
                    .into_view()
            }
            AssetKind::Table => {
                let table = Signal::derive(move || match selection.get() {
                    Some(Asset::Table(table)) => table,
                    _ => Table::default(),
                });
                view! { <TableView table=table session=session on_update=on_update /> }.into_view()
            }
        }
    }
}

/// Placeholder shown while nothing is selected
#[component]
fn EmptySelection() -> impl IntoView {
    view! {
        <div class="h-full flex items-center justify-center p-6">
            <div class="text-center">
                <div class="w-16 h-16 rounded-full bg-slate-800 flex items-center justify-center mx-auto mb-4">
                    <svg class="w-8 h-8 text-slate-500" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        <ellipse cx="12" cy="5" rx="9" ry="3" />
                        <path d="M21 12c0 1.66-4 3-9 3s-9-1.34-9-3" />
                        <path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5" />
                    </svg>
                </div>
                <p class="text-slate-400">"Select an item from the catalog to view details"</p>
            </div>
        </div>
    }
}
