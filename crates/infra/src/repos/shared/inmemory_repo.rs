use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find_all<T: Clone>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    collection.lock().unwrap().clone()
}

pub fn replace_all<T: Clone>(vals: &[T], collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    *collection = vals.to_vec();
}

/// Removes every item matching `compare` and returns them in their original order
pub fn find_and_delete_by<T: Clone, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> Vec<T> {
    let mut collection = collection.lock().unwrap();
    let (deleted, kept): (Vec<T>, Vec<T>) = collection.drain(..).partition(|item| compare(item));
    *collection = kept;
    deleted
}
