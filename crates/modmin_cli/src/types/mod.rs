pub mod module_container;
