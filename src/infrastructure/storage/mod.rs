pub(crate) mod fs_store;
pub(crate) mod library_db;
