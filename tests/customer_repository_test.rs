//! Every CustomerRepository adapter must honour the same contract.

use customer_registry::db;
use customer_registry::domain::{Customer, CustomerRepository, DomainError, NewCustomer};
use customer_registry::infrastructure::{
    InMemoryCustomerRepository, SeaOrmCustomerRepository, SqlCustomerRepository,
};

// Helper to create a test database
async fn setup_test_db() -> sea_orm::DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

async fn sql_repo() -> SqlCustomerRepository {
    let db = setup_test_db().await;
    SqlCustomerRepository::new(db.get_sqlite_connection_pool().clone())
}

async fn orm_repo() -> SeaOrmCustomerRepository {
    SeaOrmCustomerRepository::new(setup_test_db().await)
}

fn new_customer(name: &str, email: &str, age: i32) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

async fn check_insert_and_find(repo: &dyn CustomerRepository) {
    let stored = repo
        .insert(new_customer("Alex", "alex@example.com", 21))
        .await
        .expect("Insert failed");
    assert!(stored.id > 0);

    let fetched = repo.find_by_id(stored.id).await.expect("Find failed");
    assert_eq!(fetched, Some(stored.clone()));

    let all = repo.find_all().await.expect("Find all failed");
    assert_eq!(all, vec![stored]);
}

async fn check_find_missing(repo: &dyn CustomerRepository) {
    assert_eq!(repo.find_by_id(999).await.expect("Find failed"), None);
    assert!(!repo.exists_by_id(999).await.expect("Exists failed"));
}

async fn check_existence_queries(repo: &dyn CustomerRepository) {
    assert!(!repo.exists_by_email("jamila@example.com").await.unwrap());

    let stored = repo
        .insert(new_customer("Jamila", "jamila@example.com", 19))
        .await
        .unwrap();

    assert!(repo.exists_by_email("jamila@example.com").await.unwrap());
    assert!(!repo.exists_by_email("JAMILA@example.com ").await.unwrap());
    assert!(repo.exists_by_id(stored.id).await.unwrap());
}

async fn check_ids_are_unique(repo: &dyn CustomerRepository) {
    let first = repo.insert(new_customer("A", "a@x.com", 20)).await.unwrap();
    let second = repo.insert(new_customer("B", "b@x.com", 30)).await.unwrap();
    assert_ne!(first.id, second.id);
}

async fn check_duplicate_email_insert(repo: &dyn CustomerRepository) {
    repo.insert(new_customer("A", "a@x.com", 20)).await.unwrap();

    let err = repo
        .insert(new_customer("Also A", "a@x.com", 25))
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::DuplicateEmail("a@x.com".to_string()));
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

async fn check_delete(repo: &dyn CustomerRepository) {
    let keep = repo.insert(new_customer("Keep", "keep@x.com", 20)).await.unwrap();
    let gone = repo.insert(new_customer("Gone", "gone@x.com", 30)).await.unwrap();

    repo.delete_by_id(gone.id).await.expect("Delete failed");
    assert!(!repo.exists_by_id(gone.id).await.unwrap());
    assert_eq!(repo.find_all().await.unwrap(), vec![keep]);

    // Deleting a missing id is a no-op
    repo.delete_by_id(gone.id).await.expect("Second delete failed");
}

async fn check_update(repo: &dyn CustomerRepository) {
    let stored = repo.insert(new_customer("Alex", "alex@x.com", 21)).await.unwrap();
    let other = repo.insert(new_customer("Other", "other@x.com", 50)).await.unwrap();

    let changed = Customer {
        age: 22,
        email: "alex.new@x.com".to_string(),
        ..stored.clone()
    };
    repo.update(&changed).await.expect("Update failed");

    assert_eq!(repo.find_by_id(stored.id).await.unwrap(), Some(changed));
    assert_eq!(repo.find_by_id(other.id).await.unwrap(), Some(other));
    assert!(!repo.exists_by_email("alex@x.com").await.unwrap());
}

async fn check_update_to_taken_email(repo: &dyn CustomerRepository) {
    let first = repo.insert(new_customer("A", "a@x.com", 20)).await.unwrap();
    repo.insert(new_customer("B", "b@x.com", 30)).await.unwrap();

    let clash = Customer {
        email: "b@x.com".to_string(),
        ..first.clone()
    };
    let err = repo.update(&clash).await.unwrap_err();

    assert_eq!(err, DomainError::DuplicateEmail("b@x.com".to_string()));
    assert_eq!(repo.find_by_id(first.id).await.unwrap(), Some(first));
}

async fn check_update_missing(repo: &dyn CustomerRepository) {
    let ghost = Customer {
        id: 4242,
        name: "Ghost".to_string(),
        email: "ghost@x.com".to_string(),
        age: 40,
    };

    let err = repo.update(&ghost).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(repo.find_all().await.unwrap().is_empty());
}

macro_rules! contract_tests {
    ($module:ident, $make:expr) => {
        mod $module {
            use super::*;

            #[tokio::test]
            async fn insert_and_find() {
                check_insert_and_find(&$make).await;
            }

            #[tokio::test]
            async fn find_missing() {
                check_find_missing(&$make).await;
            }

            #[tokio::test]
            async fn existence_queries() {
                check_existence_queries(&$make).await;
            }

            #[tokio::test]
            async fn ids_are_unique() {
                check_ids_are_unique(&$make).await;
            }

            #[tokio::test]
            async fn duplicate_email_insert() {
                check_duplicate_email_insert(&$make).await;
            }

            #[tokio::test]
            async fn delete() {
                check_delete(&$make).await;
            }

            #[tokio::test]
            async fn update() {
                check_update(&$make).await;
            }

            #[tokio::test]
            async fn update_to_taken_email() {
                check_update_to_taken_email(&$make).await;
            }

            #[tokio::test]
            async fn update_missing() {
                check_update_missing(&$make).await;
            }
        }
    };
}

contract_tests!(sql, sql_repo().await);
contract_tests!(orm, orm_repo().await);
contract_tests!(memory, InMemoryCustomerRepository::new());
