pub mod back_to_latest;
pub mod restore_version;
