pub(crate) mod blob_meta;
pub(crate) mod commitment;
pub(crate) mod replay;
pub(crate) mod verify;
