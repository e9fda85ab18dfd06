mod local_storage;

pub use self::local_storage::*;
