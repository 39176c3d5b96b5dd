mod clients;
mod storage;

pub use clients::steamgriddb::SteamGridDbClient;
pub use storage::{fs_store::FileSystemStore, library_db::LibraryDb};
