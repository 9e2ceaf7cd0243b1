mod address_tests;
mod seal_tests;
