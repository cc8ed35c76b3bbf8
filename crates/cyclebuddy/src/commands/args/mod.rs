pub use self::{autocomplete::*, network::*};

mod autocomplete;
mod network;
