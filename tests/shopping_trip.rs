use legalwise_cart::{
    Book, CartStore, CheckoutDetails, FileStore, InMemoryStore, KeyValueStore, RecordingGateway,
    DEFAULT_CART_KEY,
};

fn catalog() -> Vec<Book> {
    let mut contract_law = Book::new(
        "b1",
        "Contract Law Basics",
        "J. Doe",
        "contracts",
        2000,
    );
    contract_law.cover_image = Some("https://cdn.legalwise.example/b1.jpg".into());

    vec![
        contract_law,
        Book::new("b2", "Tort Primer", "A. Smith", "torts", 1500),
        Book::new("b3", "Evidence Handbook", "M. Jones", "evidence", 3500),
    ]
}

#[test]
fn full_shopping_trip() {
    let books = catalog();
    let kv = InMemoryStore::new();

    // First visit: browse, fill the cart, change quantities.
    let mut store = CartStore::new(kv.clone());
    store.load().unwrap();

    store.add_item(books[0].clone());
    store.add_item(books[0].clone());
    store.add_item(books[1].clone());
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_amount_cents(), 5500);

    store.add_item(books[2].clone());
    store.set_quantity("b3", 2);
    store.remove_item("b2");
    assert_eq!(store.total_items(), 4);
    assert_eq!(store.total_amount_cents(), 2 * 2000 + 2 * 3500);

    // Close the tab; a later session sees the same cart.
    drop(store);
    let mut store = CartStore::new(kv.clone());
    store.load().unwrap();
    assert_eq!(store.total_items(), 4);
    let ids: Vec<&str> = store.items().iter().map(|item| item.id()).collect();
    assert_eq!(ids, vec!["b1", "b3"]);
    assert_eq!(
        store.cart().get("b1").unwrap().book.cover_image.as_deref(),
        Some("https://cdn.legalwise.example/b1.jpg")
    );

    // First checkout attempt fails; nothing is lost.
    let mut down = RecordingGateway::rejecting();
    let details = CheckoutDetails::new("12 Harbor Lane, Springfield", "card");
    assert!(store.checkout(&mut down, details.clone()).is_err());
    assert_eq!(store.total_items(), 4);

    // Retry against a working backend: order placed, cart cleared everywhere.
    let mut gateway = RecordingGateway::new();
    let receipt = store.checkout(&mut gateway, details).unwrap();
    assert_eq!(receipt.id, "order-1");
    assert!(store.cart().is_empty());
    assert_eq!(kv.get(DEFAULT_CART_KEY).unwrap().unwrap(), "[]");

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].items.len(), 2);
    assert_eq!(requests[0].total_amount_cents, 2 * 2000 + 2 * 3500);
    assert_eq!(requests[0].shipping_address, "12 Harbor Lane, Springfield");
}

#[test]
fn cart_survives_process_restart_on_disk() {
    let books = catalog();
    let dir = tempfile::tempdir().unwrap();

    {
        let kv = FileStore::open(dir.path()).unwrap();
        let mut store = CartStore::new(kv);
        store.load().unwrap();
        store.add_item(books[0].clone());
        store.add_item(books[1].clone());
        store.set_quantity("b2", 3);
    }

    let kv = FileStore::open(dir.path()).unwrap();
    let mut store = CartStore::new(kv);
    store.load().unwrap();
    assert_eq!(store.total_items(), 4);
    assert_eq!(store.total_amount_cents(), 2000 + 3 * 1500);
}

#[test]
fn corrupt_file_recovers_to_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let kv = FileStore::open(dir.path()).unwrap();
    kv.set(DEFAULT_CART_KEY, "][ definitely not a cart").unwrap();

    let mut store = CartStore::new(kv);
    store.load().unwrap();
    assert!(store.cart().is_empty());

    // The next mutation overwrites the bad value.
    store.add_item(catalog()[0].clone());
    drop(store);

    let kv = FileStore::open(dir.path()).unwrap();
    let mut store = CartStore::new(kv);
    store.load().unwrap();
    assert_eq!(store.total_items(), 1);
}

#[test]
fn saved_cart_matches_front_end_layout() {
    // A value the web front-end would have left behind in local storage.
    let saved = r#"[
        {"id":"b1","title":"Contract Law Basics","author":"J. Doe","category":"contracts","price_cents":2000,"quantity":2},
        {"id":"b2","title":"Tort Primer","author":"A. Smith","category":"torts","price_cents":1500,"quantity":1}
    ]"#;
    let kv = InMemoryStore::new();
    kv.set(DEFAULT_CART_KEY, saved).unwrap();

    let mut store = CartStore::new(kv);
    store.load().unwrap();
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_amount_cents(), 5500);
}
