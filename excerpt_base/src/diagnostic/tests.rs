use super::{Counter, Dummy, Handler, Storage};

#[test]
fn storage_keeps_diagnostics_in_order() {
    let storage: Storage<String> = Storage::new();

    storage.receive("first");
    storage.receive("second".to_string());

    assert_eq!(storage.as_vec().len(), 2);
    assert_eq!(storage.into_vec(), vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn counter_counts_and_resets() {
    let counter: Counter = Counter::default();
    assert!(counter.is_clean());

    counter.receive(1);
    counter.receive("two");
    Handler::<()>::receive(&Dummy, ());

    assert_eq!(counter.count(), 2);
    assert!(!counter.is_clean());

    counter.reset();
    assert_eq!(counter.count(), 0);
    assert!(counter.is_clean());
}

#[test]
fn counter_forwards_to_wrapped_handler() {
    let counter = Counter::new(Storage::<String>::new());

    counter.receive("unterminated string");
    counter.receive("unexpected character");

    // the wrapped storage is reachable through deref
    assert_eq!(counter.as_vec().len(), 2);
    assert_eq!(counter.count(), 2);

    counter.reset();

    assert_eq!(counter.count(), 0);
    assert_eq!(counter.into_inner().into_vec(), vec![
        "unterminated string".to_string(),
        "unexpected character".to_string(),
    ]);
}
