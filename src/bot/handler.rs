use crate::config::Config;
use crate::paginator::BookStore;

pub struct Handler {
    pub config: Config,
    pub books: BookStore,
}

impl Handler {
    pub fn new(config: Config) -> Self {
        Handler {
            config,
            books: BookStore::new(),
        }
    }
}
