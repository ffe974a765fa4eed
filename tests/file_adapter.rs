use prodcat::error::CatalogError;
use prodcat::model::{Price, ProductDraft};
use prodcat::seed;
use prodcat::store::fs::FileAdapter;
use prodcat::store::product_store::ProductStore;
use prodcat::store::PersistenceAdapter;
use std::fs;
use tempfile::TempDir;

fn draft(name: &str, price: &str) -> ProductDraft {
    ProductDraft::new(name, price.parse::<Price>().unwrap())
}

#[test]
fn missing_file_loads_seed() {
    let temp = TempDir::new().unwrap();
    let adapter = FileAdapter::new(temp.path().join("data"));

    assert_eq!(adapter.read().unwrap(), None);
    assert_eq!(adapter.load().unwrap(), seed::default_products());
}

#[test]
fn save_then_reopen_restores_order_and_fields() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("data");

    let mut store = ProductStore::open(FileAdapter::new(root.clone())).unwrap();
    store
        .create(draft("Linen Shirt", "29.99").with_sizes(vec!["M".into(), "S".into()]))
        .unwrap();
    store.create(draft("Boots", "120")).unwrap();
    let expected = store.products().to_vec();

    let reopened = ProductStore::open(FileAdapter::new(root)).unwrap();
    assert_eq!(reopened.products(), expected.as_slice());
}

#[test]
fn save_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();

    let mut store = ProductStore::open(FileAdapter::new(root.clone())).unwrap();
    store.create(draft("Mug", "8")).unwrap();
    store.create(draft("Cup", "6")).unwrap();

    let names: Vec<String> = fs::read_dir(&root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["products.json"]);
}

#[test]
fn prices_are_written_as_numbers() {
    let temp = TempDir::new().unwrap();
    let adapter = FileAdapter::new(temp.path().to_path_buf());
    let mut store = ProductStore::open(adapter).unwrap();
    store.create(draft("Mug", "8.5")).unwrap();

    let text = fs::read_to_string(temp.path().join("products.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value[0]["price"].is_number());
    assert_eq!(value[1]["price"].as_f64(), Some(8.5));
}

#[test]
fn legacy_records_load() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("products.json"),
        r#"[{"_id":"a","name":"Old","price":"12.5","subCategory":"Topwear","sizes":["M","M","L"]}]"#,
    )
    .unwrap();

    let store = ProductStore::open(FileAdapter::new(temp.path().to_path_buf())).unwrap();
    let product = &store.products()[0];
    assert_eq!(product.subcategory, "Topwear");
    assert_eq!(product.sizes, vec!["M", "L"]);
    assert_eq!(product.formatted_price(), "12.50");
    assert!(product.images.is_empty());
}

#[test]
fn corrupt_file_is_a_persistence_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("products.json"), "not json").unwrap();

    let result = ProductStore::open(FileAdapter::new(temp.path().to_path_buf()));
    assert!(matches!(result, Err(CatalogError::Persistence(_))));
}

#[test]
fn custom_file_name() {
    let temp = TempDir::new().unwrap();
    let adapter = FileAdapter::new(temp.path().to_path_buf()).with_file_name("shop.json");
    adapter.save(&seed::default_products()).unwrap();

    assert!(temp.path().join("shop.json").exists());
    assert!(!temp.path().join("products.json").exists());
}
