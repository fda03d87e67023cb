use sea_orm::{Condition, Order};
use training_registry::entities::person::{PersonCreate, PersonPatch, PersonUpdate};
use training_registry::entities::{Person, program};
use training_registry::{ApiError, CrudOperations, CrudResource, DefaultOperations, Patch};

mod common;
use common::setup_test_db;

fn ana() -> PersonCreate {
    PersonCreate {
        first_name: "Ana".to_string(),
        last_name: "Gomez".to_string(),
        document: "600".to_string(),
        email: Some("ana@example.com".to_string()),
        phone: None,
    }
}

#[tokio::test]
async fn test_all_absent_patch_skips_the_write() {
    let db = setup_test_db().await.unwrap();
    let created = Person::create(&db, ana()).await.unwrap();

    let patched = Person::patch(&db, created.id, PersonPatch::default()).await.unwrap();
    assert_eq!(patched, created);
    assert!(patched.update_date.is_none());
}

#[tokio::test]
async fn test_patch_merges_only_present_fields() {
    let db = setup_test_db().await.unwrap();
    let created = Person::create(&db, ana()).await.unwrap();

    let patch = PersonPatch {
        phone: Patch::Value("555-0600".to_string()),
        email: Patch::Null,
        ..Default::default()
    };
    let patched = Person::patch(&db, created.id, patch).await.unwrap();

    assert_eq!(patched.phone.as_deref(), Some("555-0600"));
    assert_eq!(patched.email, None);
    assert_eq!(patched.first_name, created.first_name);
    assert_eq!(patched.create_date, created.create_date);
    assert!(patched.update_date.is_some());
}

#[tokio::test]
async fn test_patch_null_on_required_field() {
    let db = setup_test_db().await.unwrap();
    let created = Person::create(&db, ana()).await.unwrap();

    let patch = PersonPatch {
        document: Patch::Null,
        ..Default::default()
    };
    let err = Person::patch(&db, created.id, patch).await.unwrap_err();
    match err {
        ApiError::InvalidPatch { field, .. } => assert_eq!(field.as_deref(), Some("document")),
        other => panic!("unexpected error: {other:?}"),
    }

    let stored = Person::get_one(&db, created.id).await.unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_update_sets_update_date() {
    let db = setup_test_db().await.unwrap();
    let created = Person::create(&db, ana()).await.unwrap();

    let update = PersonUpdate {
        first_name: "Ana".to_string(),
        last_name: "Gomez Ruiz".to_string(),
        document: "600".to_string(),
        email: None,
        phone: None,
    };
    let updated = Person::update(&db, created.id, update).await.unwrap();
    assert_eq!(updated.last_name, "Gomez Ruiz");
    assert!(updated.update_date.is_some());
}

#[tokio::test]
async fn test_soft_delete_and_delete() {
    let db = setup_test_db().await.unwrap();
    let created = Person::create(&db, ana()).await.unwrap();

    assert_eq!(Person::soft_delete(&db, created.id).await.unwrap(), created.id);
    let stored = Person::get_one(&db, created.id).await.unwrap();
    assert!(!stored.active);
    assert!(stored.delete_date.is_some());

    assert_eq!(Person::delete(&db, created.id).await.unwrap(), created.id);
    assert!(matches!(
        Person::get_one(&db, created.id).await,
        Err(ApiError::NotFound { .. })
    ));
    assert!(matches!(
        Person::delete(&db, created.id).await,
        Err(ApiError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_get_all_and_total_count() {
    let db = setup_test_db().await.unwrap();
    let ops = DefaultOperations::<program::Program>::new();
    for (name, code) in [("Welding", "W1"), ("Accounting", "A1"), ("Nursing", "N1")] {
        let data = program::ProgramCreate {
            name: name.to_string(),
            code: code.to_string(),
            description: None,
        };
        ops.create(&db, data).await.unwrap();
    }

    let all = Condition::all();
    let sorted = ops
        .get_all(&db, &all, program::Column::Name, Order::Asc, 0, 2)
        .await
        .unwrap();
    let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Accounting", "Nursing"]);
    assert_eq!(ops.total_count(&db, &all).await.unwrap(), 3);
}
