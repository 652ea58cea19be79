use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let token = interner.intern("Token");
    let vault = interner.intern("Vault");
    let token2 = interner.intern("Token");

    assert_eq!(token, token2);
    assert_ne!(token, vault);

    assert_eq!(interner.lookup(token), "Token");
    assert_eq!(interner.lookup(vault), "Vault");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    let empty = interner.intern("");
    assert_eq!(empty, Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert!(interner.is_empty());
}

#[test]
fn test_len_counts_distinct_strings() {
    let interner = StringInterner::new();
    interner.intern("balance");
    interner.intern("owner");
    interner.intern("balance");
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_shared_interner() {
    let interner = SharedInterner::new();
    let interner2 = interner.clone();

    let name1 = interner.intern("shared");
    let name2 = interner2.intern("shared");

    assert_eq!(name1, name2);
    assert_eq!(interner2.lookup(name1), "shared");
}

#[test]
fn test_shared_interner_across_threads() {
    let interner = SharedInterner::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let interner = interner.clone();
            std::thread::spawn(move || interner.intern("concurrent"))
        })
        .collect();

    let names: Vec<Name> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or_else(|_| panic!("interning thread panicked")))
        .collect();
    assert!(names.windows(2).all(|w| w[0] == w[1]));
}
