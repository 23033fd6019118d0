use std::sync::Arc;

use data_loader::DataIndex;

use crate::form::FormRules;

/// Shared, read-only application context.
///
/// Built once in `main` after the catalog is loaded and cloned into every
/// handler. Nothing in it is ever mutated, so no locking is needed.
#[derive(Clone)]
pub struct AppContext {
    pub index: Arc<DataIndex>,
    /// Genre options for the form, sorted and de-duplicated
    pub genres: Arc<[String]>,
    pub form_rules: FormRules,
}

impl AppContext {
    pub fn new(index: Arc<DataIndex>, form_rules: FormRules) -> Self {
        let genres = index.genre_names().into();
        Self {
            index,
            genres,
            form_rules,
        }
    }
}
