pub mod test_utils;

mod core_tests;
