use anyhow::anyhow;
use nudge_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard};

/// Useful functions for creating inmemory repositories

fn lock<T>(collection: &Mutex<Vec<T>>) -> anyhow::Result<MutexGuard<'_, Vec<T>>> {
    collection
        .lock()
        .map_err(|_| anyhow!("In-memory collection lock was poisoned"))
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) -> anyhow::Result<()> {
    lock(collection)?.push(val.clone());
    Ok(())
}

/// Applies `update` to the item with the given id. Returns false when no such item exists.
pub fn update<T: Entity, U: FnOnce(&mut T)>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    update: U,
) -> anyhow::Result<bool> {
    let mut collection = lock(collection)?;
    match collection.iter_mut().find(|item| item.id() == val_id) {
        Some(item) => {
            update(item);
            Ok(true)
        }
        None => Ok(false),
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> anyhow::Result<Option<T>> {
    let collection = lock(collection)?;
    Ok(collection.iter().find(|item| item.id() == val_id).cloned())
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> anyhow::Result<Vec<T>> {
    let collection = lock(collection)?;
    Ok(collection.iter().filter(|item| compare(item)).cloned().collect())
}

pub fn delete<T: Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> anyhow::Result<Option<T>> {
    let mut collection = lock(collection)?;
    Ok(collection
        .iter()
        .position(|item| item.id() == val_id)
        .map(|index| collection.remove(index)))
}
