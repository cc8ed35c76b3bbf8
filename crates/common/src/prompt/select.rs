use std::fmt::Display;

use cliclack::{select, Select};

pub struct PromptSelect<T> {
    inner: Select<T>,
}

impl<T> PromptSelect<T>
where
    T: Clone + Eq + Display,
{
    pub fn new<I>(question: &str, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let inner = items.into_iter().fold(select(question), |select, item| {
            let label = item.to_string();
            select.item(item, label, "")
        });
        Self { inner }
    }

    pub fn ask(mut self) -> T {
        self.inner.interact().unwrap()
    }
}
