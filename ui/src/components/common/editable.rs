//! Inline Editors
//!
//! - `EditableText`: Click-to-edit text, gated by the edit capability
//! - `MarkdownEditor`: Full editor for schema tab content

use leptos::*;

use super::EditIcon;

/// What a key press means inside an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Save,
    Cancel,
}

/// Ctrl/Cmd+Enter saves and Escape cancels; plain Enter also saves single-line fields
pub fn edit_key(key: &str, ctrl_or_meta: bool, multiline: bool) -> Option<EditKey> {
    match key {
        "Escape" => Some(EditKey::Cancel),
        "Enter" if ctrl_or_meta || !multiline => Some(EditKey::Save),
        _ => None,
    }
}

/// Text that turns into an input when clicked
///
/// Saving only calls `on_save` when the text actually changed.
#[component]
pub fn EditableText(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] can_edit: Signal<bool>,
    #[prop(optional)] multiline: bool,
    #[prop(default = "Click to add text")] placeholder: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let (editing, set_editing) = create_signal(false);
    let (draft, set_draft) = create_signal(String::new());

    let begin = move |_| {
        if can_edit.get_untracked() {
            set_draft.set(value.get_untracked());
            set_editing.set(true);
        }
    };

    let save = move || {
        set_editing.set(false);
        let text = draft.get_untracked();
        if text != value.get_untracked() {
            on_save.call(text);
        }
    };

    let cancel = move || set_editing.set(false);

    let on_keydown = move |ev: ev::KeyboardEvent| match edit_key(&ev.key(), ev.ctrl_key() || ev.meta_key(), multiline) {
        Some(EditKey::Save) => {
            ev.prevent_default();
            save();
        }
        Some(EditKey::Cancel) => cancel(),
        None => {}
    };

    let input_class = "w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    view! {
        <div class=class>
            {move || {
                if editing.get() {
                    let field = if multiline {
                        view! {
                            <textarea
                                class=input_class
                                rows="4"
                                autofocus=true
                                prop:value=move || draft.get()
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                        }.into_view()
                    } else {
                        view! {
                            <input
                                type="text"
                                class=input_class
                                autofocus=true
                                prop:value=move || draft.get()
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                        }.into_view()
                    };

                    view! {
                        <div class="space-y-2">
                            {field}
                            <div class="flex items-center gap-2">
                                <button
                                    class="px-3 py-1 text-xs font-medium rounded bg-blue-600 hover:bg-blue-500 text-white"
                                    on:click=move |_| save()
                                >
                                    "Save"
                                </button>
                                <button
                                    class="px-3 py-1 text-xs font-medium rounded text-slate-300 hover:bg-slate-700"
                                    on:click=move |_| cancel()
                                >
                                    "Cancel"
                                </button>
                                <span class="text-xs text-slate-500">
                                    {if multiline { "Ctrl+Enter to save, Esc to cancel" } else { "Enter to save, Esc to cancel" }}
                                </span>
                            </div>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div
                            class=move || {
                                if can_edit.get() {
                                    "group flex items-start gap-2 cursor-pointer rounded px-1 -mx-1 hover:bg-slate-800/60"
                                } else {
                                    "flex items-start gap-2"
                                }
                            }
                            on:click=begin
                        >
                            {move || {
                                let text = value.get();
                                if !text.is_empty() {
                                    view! { <span class="whitespace-pre-wrap">{text}</span> }.into_view()
                                } else if can_edit.get() {
                                    view! { <span class="text-slate-500 italic">{placeholder}</span> }.into_view()
                                } else {
                                    ().into_view()
                                }
                            }}
                            <Show when=move || can_edit.get()>
                                <EditIcon class="w-3.5 h-3.5 mt-1 text-slate-500 opacity-0 group-hover:opacity-100 flex-shrink-0" />
                            </Show>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Markdown source editor with save/cancel
#[component]
pub fn MarkdownEditor(
    #[prop(into)] content: String,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (draft, set_draft) = create_signal(content);

    let on_keydown = move |ev: ev::KeyboardEvent| match edit_key(&ev.key(), ev.ctrl_key() || ev.meta_key(), true) {
        Some(EditKey::Save) => {
            ev.prevent_default();
            on_save.call(draft.get_untracked());
        }
        Some(EditKey::Cancel) => on_cancel.call(()),
        None => {}
    };

    view! {
        <div class="space-y-3">
            <textarea
                class="w-full min-h-[240px] px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm font-mono focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                autofocus=true
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <div class="flex items-center justify-end gap-2">
                <span class="text-xs text-slate-500 mr-auto">"Markdown supported. Ctrl+Enter to save, Esc to cancel"</span>
                <button
                    class="px-4 py-2 text-sm font-medium rounded-lg text-slate-300 hover:bg-slate-700"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    class="px-4 py-2 text-sm font-medium rounded-lg bg-blue-600 hover:bg-blue-500 text-white"
                    on:click=move |_| on_save.call(draft.get_untracked())
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_needs_modifier_to_save() {
        assert_eq!(edit_key("Enter", false, true), None);
        assert_eq!(edit_key("Enter", true, true), Some(EditKey::Save));
        assert_eq!(edit_key("Escape", false, true), Some(EditKey::Cancel));
    }

    #[test]
    fn test_single_line_saves_on_enter() {
        assert_eq!(edit_key("Enter", false, false), Some(EditKey::Save));
        assert_eq!(edit_key("a", false, false), None);
    }
}
