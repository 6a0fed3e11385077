pub mod index_template;
