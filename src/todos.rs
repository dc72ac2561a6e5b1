//! Todo Collection Operations
//!
//! Mutations over the ordered, index-addressed record list. Each operation
//! reports whether it changed the collection; callers persist only on
//! change. Out-of-range indices are guarded no-ops.

use crate::models::TodoRecord;

/// Append a record, ignoring text that trims to nothing
pub fn add(records: &mut Vec<TodoRecord>, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    records.push(TodoRecord::new(text));
    true
}

/// Remove the record at `index`; later records shift down by one
pub fn remove(records: &mut Vec<TodoRecord>, index: usize) -> bool {
    if index >= records.len() {
        return false;
    }
    records.remove(index);
    true
}

/// Switch the record at `index` into edit mode
pub fn begin_edit(records: &mut [TodoRecord], index: usize) {
    if let Some(record) = records.get_mut(index) {
        record.editing = true;
    }
}

/// Overwrite the record's text and leave edit mode
///
/// Text that trims to nothing leaves the record untouched and in edit mode.
pub fn commit_edit(records: &mut [TodoRecord], index: usize, new_text: &str) -> bool {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return false;
    }
    let Some(record) = records.get_mut(index) else {
        return false;
    };
    record.text = new_text.to_string();
    record.editing = false;
    true
}
