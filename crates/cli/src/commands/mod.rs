pub mod deploy;
pub mod fund;
pub mod verify;
