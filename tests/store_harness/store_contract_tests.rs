//! Macro-generated test suite for `KeyValueStore` contract validation.
//!
//! The `key_value_store_tests!` macro generates a test module that validates
//! any `KeyValueStore` implementation against the contract the ledger relies
//! on, then runs an order repository on top of it.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//!
//! use store_harness::*;
//! use kodhiyas::storage::InMemoryStore;
//!
//! key_value_store_tests!(InMemoryStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_get_missing`: absent key reads as None
//! - `test_set_then_get`: a written value reads back
//! - `test_set_overwrites`: second write replaces the first
//! - `test_remove`: removed key reads as None
//! - `test_remove_missing`: removing an absent key is Ok
//! - `test_keys_are_independent`: writes to one key leave others alone
//! - `test_repository_survives_reopen`: orders saved through a repository
//!   are loaded by a second repository over the same store

/// Generate a `KeyValueStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh store implementing
/// `KeyValueStore + Clone + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! key_value_store_tests {
    ($factory:expr) => {
        mod key_value_store_contract_tests {
            use super::*;
            use kodhiyas::prelude::*;

            #[test]
            fn test_get_missing() {
                let store = $factory;
                assert_eq!(store.get("nothing-here").unwrap(), None);
            }

            #[test]
            fn test_set_then_get() {
                let store = $factory;
                store.set("orders", "[1,2,3]").unwrap();
                assert_eq!(store.get("orders").unwrap().as_deref(), Some("[1,2,3]"));
            }

            #[test]
            fn test_set_overwrites() {
                let store = $factory;
                store.set("orders", "first").unwrap();
                store.set("orders", "second").unwrap();
                assert_eq!(store.get("orders").unwrap().as_deref(), Some("second"));
            }

            #[test]
            fn test_remove() {
                let store = $factory;
                store.set("orders", "[]").unwrap();
                store.remove("orders").unwrap();
                assert_eq!(store.get("orders").unwrap(), None);
            }

            #[test]
            fn test_remove_missing() {
                let store = $factory;
                assert!(store.remove("never-written").is_ok());
            }

            #[test]
            fn test_keys_are_independent() {
                let store = $factory;
                store.set("a", "1").unwrap();
                store.set("b", "2").unwrap();
                store.remove("a").unwrap();
                assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
            }

            #[test]
            fn test_repository_survives_reopen() {
                let store = $factory;
                let saved = {
                    let mut repo = OrderRepository::open(
                        store.clone(),
                        DEFAULT_STORAGE_KEY,
                        SequentialIdGenerator::default(),
                    );
                    repo.save(sales("Govind", "Ramesh", "500", "120")).unwrap();
                    repo.save(purchase("Upendra", "Suresh", "100", "40")).unwrap()
                };

                let reopened = OrderRepository::open(
                    store,
                    DEFAULT_STORAGE_KEY,
                    SequentialIdGenerator::default(),
                );
                assert_eq!(reopened.len(), 2);
                assert_eq!(reopened.list()[0], &saved);
                assert_eq!(reopened.list()[1].pending, 380.0);
            }
        }
    };
}
