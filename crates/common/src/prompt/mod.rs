mod confirm;
mod select;

pub use confirm::PromptConfirm;
pub use select::PromptSelect;
