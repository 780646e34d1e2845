use std::collections::HashMap;

use crate::{message::ParsedMessage, types::ReceiveType};

pub type Handler = Box<dyn Fn(&ParsedMessage) + Send + Sync>;

/// Routes records to the handlers registered for their category.
///
/// Handlers only get a shared reference, so the same record can be fanned
/// out to any number of them.
#[derive(Default)]
pub struct Dispatcher {
    by_category: HashMap<ReceiveType, Vec<Handler>>,
    any: Vec<Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, category: ReceiveType, handler: F) -> &mut Self
    where
        F: Fn(&ParsedMessage) + Send + Sync + 'static,
    {
        self.by_category
            .entry(category)
            .or_default()
            .push(Box::new(handler));
        self
    }

    /// Register a handler called for every record, after the category ones.
    pub fn on_any<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&ParsedMessage) + Send + Sync + 'static,
    {
        self.any.push(Box::new(handler));
        self
    }

    /// Returns how many handlers were called.
    pub fn dispatch(&self, message: &ParsedMessage) -> usize {
        let specific = self
            .by_category
            .get(&message.category())
            .map(Vec::as_slice)
            .unwrap_or_default();

        if specific.is_empty() && self.any.is_empty() {
            log::debug!(
                "no handler for {:?}: {}",
                message.category(),
                message.raw_line().escape_debug()
            );
            return 0;
        }

        for handler in specific.iter().chain(&self.any) {
            handler(message);
        }
        specific.len() + self.any.len()
    }
}
