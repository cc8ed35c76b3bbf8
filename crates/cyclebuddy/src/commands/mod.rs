pub mod args;
pub mod autocomplete;
pub mod compile;
pub mod deploy;
pub mod stellar;
pub mod verify;
pub mod wallet;
