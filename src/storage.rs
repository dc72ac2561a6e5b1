//! Todo Persistence
//!
//! The whole collection lives under one LocalStorage key as a JSON array.
//! It is read once when the widget mounts and written on every successful
//! mutation.

use gloo_storage::{LocalStorage, Storage};

use crate::models::TodoRecord;

pub const TODOS_KEY: &str = "todos";

/// Missing or malformed saved data reads as an empty collection
pub fn load_todos() -> Vec<TodoRecord> {
    LocalStorage::get(TODOS_KEY).unwrap_or_default()
}

pub fn save_todos(records: &[TodoRecord]) {
    if let Err(err) = LocalStorage::set(TODOS_KEY, records) {
        web_sys::console::error_1(&format!("todo save failed: {err}").into());
    }
}
