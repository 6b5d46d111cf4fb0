//! Round-trip tests for the SQLite repositories, running against a real
//! database file in a temporary directory.

use std::sync::Arc;

use rust_decimal_macros::dec;

use financas_core::entries::{
    Entry, EntryFilter, EntryRepositoryTrait, EntryService, EntryServiceTrait, EntryStatus,
    EntryType,
};
use financas_core::errors::{DatabaseError, Error};
use financas_core::users::{User, UserRepositoryTrait};
use financas_storage_sqlite::entries::EntryRepository;
use financas_storage_sqlite::users::UserRepository;
use financas_storage_sqlite::{init, spawn_writer, DbPool, WriteHandle};

struct TestDb {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    _dir: tempfile::TempDir,
}

fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("financas.db");
    let pool = init(db_path.to_str().unwrap()).unwrap();
    let writer = spawn_writer(pool.clone());
    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

impl TestDb {
    fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone(), self.writer.clone())
    }

    fn entries(&self) -> EntryRepository {
        EntryRepository::new(self.pool.clone(), self.writer.clone())
    }
}

fn new_user(user_email: &str) -> User {
    User {
        id: None,
        name: "nome".to_string(),
        email: user_email.to_string(),
        password: "senha".to_string(),
        recorded_at: None,
    }
}

fn new_entry(owner_id: i64, entry_description: &str) -> Entry {
    Entry {
        id: None,
        description: Some(entry_description.to_string()),
        month: Some(1),
        year: Some(2021),
        user_id: Some(owner_id),
        amount: Some(dec!(250.75)),
        kind: Some(EntryType::Income),
        status: Some(EntryStatus::Pending),
        recorded_at: None,
    }
}

async fn saved_user(db: &TestDb, user_email: &str) -> User {
    db.users().save(new_user(user_email)).await.unwrap()
}

// --- users ---

#[tokio::test]
async fn save_user_assigns_an_id_and_a_registration_date() {
    let db = setup();

    let saved = saved_user(&db, "email@email.com").await;

    assert!(saved.id.is_some());
    assert!(saved.recorded_at.is_some());
    assert_eq!(saved.email, "email@email.com");
}

#[tokio::test]
async fn duplicate_email_is_a_unique_violation() {
    let db = setup();
    saved_user(&db, "email@email.com").await;

    let result = db.users().save(new_user("email@email.com")).await;

    match result {
        Err(Error::Database(DatabaseError::UniqueViolation(_))) => {}
        other => panic!("expected a unique violation, got {:?}", other),
    }
}

#[tokio::test]
async fn users_are_found_by_email_and_id() {
    let db = setup();
    let saved = saved_user(&db, "email@email.com").await;
    let repository = db.users();

    let by_email = repository.find_by_email("email@email.com").unwrap();
    assert_eq!(by_email, Some(saved.clone()));

    let by_id = repository.find_by_id(saved.id.unwrap()).unwrap();
    assert_eq!(by_id, Some(saved));

    assert_eq!(repository.find_by_email("outro@email.com").unwrap(), None);
    assert!(repository.exists_by_email("email@email.com").unwrap());
    assert!(!repository.exists_by_email("outro@email.com").unwrap());
}

// --- entries ---

#[tokio::test]
async fn save_entry_assigns_an_id_and_round_trips() {
    let db = setup();
    let owner = saved_user(&db, "email@email.com").await;
    let repository = db.entries();

    let saved = repository
        .save(new_entry(owner.id.unwrap(), "salario"))
        .await
        .unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.amount, Some(dec!(250.75)));
    assert!(saved.recorded_at.is_some());

    let found = repository.find_by_id(saved.id.unwrap()).unwrap();
    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn updating_an_entry_keeps_its_registration_date() {
    let db = setup();
    let owner = saved_user(&db, "email@email.com").await;
    let repository = db.entries();

    let saved = repository
        .save(new_entry(owner.id.unwrap(), "salario"))
        .await
        .unwrap();

    let updated = repository
        .save(Entry {
            amount: Some(dec!(300)),
            status: Some(EntryStatus::Settled),
            recorded_at: None,
            ..saved.clone()
        })
        .await
        .unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.amount, Some(dec!(300)));
    assert_eq!(updated.status, Some(EntryStatus::Settled));
    assert_eq!(updated.recorded_at, saved.recorded_at);

    let found = repository.find_by_id(saved.id.unwrap()).unwrap();
    assert_eq!(found, Some(updated));
}

#[tokio::test]
async fn delete_removes_the_entry() {
    let db = setup();
    let owner = saved_user(&db, "email@email.com").await;
    let repository = db.entries();

    let saved = repository
        .save(new_entry(owner.id.unwrap(), "salario"))
        .await
        .unwrap();
    let entry_id = saved.id.unwrap();

    assert_eq!(repository.delete(entry_id).await.unwrap(), 1);
    assert_eq!(repository.find_by_id(entry_id).unwrap(), None);
    assert_eq!(repository.delete(entry_id).await.unwrap(), 0);
}

#[tokio::test]
async fn an_entry_without_a_known_user_is_a_foreign_key_violation() {
    let db = setup();

    let result = db.entries().save(new_entry(999, "salario")).await;

    match result {
        Err(Error::Database(DatabaseError::ForeignKeyViolation(_))) => {}
        other => panic!("expected a foreign key violation, got {:?}", other),
    }
}

#[tokio::test]
async fn find_by_filter_matches_only_the_populated_fields() {
    let db = setup();
    let owner = saved_user(&db, "email@email.com").await;
    let other = saved_user(&db, "outro@email.com").await;
    let repository = db.entries();

    let owner_id = owner.id.unwrap();
    let salary = repository
        .save(new_entry(owner_id, "salario"))
        .await
        .unwrap();
    let bonus = repository
        .save(Entry {
            month: Some(2),
            ..new_entry(owner_id, "salario extra")
        })
        .await
        .unwrap();
    let rent = repository
        .save(Entry {
            kind: Some(EntryType::Expense),
            status: Some(EntryStatus::Settled),
            ..new_entry(owner_id, "aluguel")
        })
        .await
        .unwrap();
    repository
        .save(new_entry(other.id.unwrap(), "salario"))
        .await
        .unwrap();

    // Empty filter is all wildcards, ordered by id.
    let all = repository.find_by_filter(&EntryFilter::default()).unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    let for_owner = repository
        .find_by_filter(&EntryFilter {
            user_id: Some(owner_id),
            ..EntryFilter::default()
        })
        .unwrap();
    assert_eq!(for_owner.len(), 3);

    let by_description = repository
        .find_by_filter(&EntryFilter {
            user_id: Some(owner_id),
            description: Some("sal".to_string()),
            ..EntryFilter::default()
        })
        .unwrap();
    assert_eq!(by_description, vec![salary.clone(), bonus.clone()]);

    let by_month = repository
        .find_by_filter(&EntryFilter {
            user_id: Some(owner_id),
            month: Some(2),
            ..EntryFilter::default()
        })
        .unwrap();
    assert_eq!(by_month, vec![bonus]);

    let by_kind = repository
        .find_by_filter(&EntryFilter {
            kind: Some(EntryType::Expense),
            ..EntryFilter::default()
        })
        .unwrap();
    assert_eq!(by_kind, vec![rent.clone()]);

    let by_status = repository
        .find_by_filter(&EntryFilter {
            status: Some(EntryStatus::Settled),
            ..EntryFilter::default()
        })
        .unwrap();
    assert_eq!(by_status, vec![rent]);

    let no_match = repository
        .find_by_filter(&EntryFilter {
            year: Some(1999),
            ..EntryFilter::default()
        })
        .unwrap();
    assert!(no_match.is_empty());
}

// --- service over the real storage ---

#[tokio::test]
async fn entry_service_runs_the_full_lifecycle_over_sqlite() {
    let db = setup();
    let owner = saved_user(&db, "email@email.com").await;
    let service = EntryService::new(Arc::new(db.entries()));

    let saved = service
        .save_entry(Entry {
            status: None,
            ..new_entry(owner.id.unwrap(), "salario")
        })
        .await
        .unwrap();
    assert_eq!(saved.status, Some(EntryStatus::Pending));

    let settled = service
        .set_entry_status(saved.clone(), EntryStatus::Settled)
        .await
        .unwrap();
    assert_eq!(settled.status, Some(EntryStatus::Settled));

    let found = service.get_entry(saved.id.unwrap()).unwrap();
    assert_eq!(found, Some(settled.clone()));

    service.delete_entry(settled).await.unwrap();
    assert_eq!(service.get_entry(saved.id.unwrap()).unwrap(), None);
}
