//! Todo List Component
//!
//! CRUD over the index-addressed record list, loaded from LocalStorage on
//! mount and written back on every successful mutation. The visual list is
//! rebuilt wholesale on every collection change; rows are small and few, so
//! keyed diffing buys nothing here.

use leptos::prelude::*;

use crate::storage;
use crate::todos;

#[component]
pub fn TodoList() -> impl IntoView {
    let (records, set_records) = signal(storage::load_todos());
    let (draft, set_draft) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.trim().is_empty() {
            return;
        }
        set_records.update(|records| {
            todos::add(records, &text);
            storage::save_todos(records);
        });
        set_draft.set(String::new());
    };

    let rows = move || {
        records
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let on_delete = move |_| {
                    set_records.update(|records| {
                        if todos::remove(records, index) {
                            storage::save_todos(records);
                        }
                    });
                };

                if record.editing {
                    // Edit draft lives outside the records signal, so typing
                    // does not rebuild the list
                    let edit_draft = RwSignal::new(record.text.clone());
                    let on_save = move |_| {
                        let text = edit_draft.get();
                        if text.trim().is_empty() {
                            return;
                        }
                        set_records.update(|records| {
                            todos::commit_edit(records, index, &text);
                            storage::save_todos(records);
                        });
                    };

                    view! {
                        <li class="todo-item editing">
                            <input
                                type="text"
                                class="task-edit-input"
                                prop:value=move || edit_draft.get()
                                on:input=move |ev| edit_draft.set(event_target_value(&ev))
                            />
                            <button class="save-btn" on:click=on_save>"Save"</button>
                            <button class="delete-btn" on:click=on_delete>"Delete"</button>
                        </li>
                    }
                    .into_any()
                } else {
                    let on_edit = move |_| {
                        set_records.update(|records| todos::begin_edit(records, index));
                    };

                    view! {
                        <li class="todo-item">
                            <span class="task-text">{record.text}</span>
                            <button class="edit-btn" on:click=on_edit>"Edit"</button>
                            <button class="delete-btn" on:click=on_delete>"Delete"</button>
                        </li>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <form class="todo-form" on:submit=on_add>
            <input
                type="text"
                class="todo-input"
                placeholder="Add a task..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
        <ul class="todo-list">{rows}</ul>
    }
}
