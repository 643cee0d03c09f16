// Shared fixtures for the pricing test suites.
//
// Services are wired against the in-memory vehicle store and the fixed
// USD/VND table, so no database or network is needed.
//
// Usage (from a file registered under [[test]]):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]


pub use test_data::*;
