pub mod app_test;
