use std::collections::HashMap;

use crate::validate::validator::Validator;

/// First-seen path for every id, shared by the business and location passes of one run.
#[derive(Debug, Default)]
pub(crate) struct IdRegistry {
    seen: HashMap<String, String>,
}

impl IdRegistry {
    pub(crate) fn track(&mut self, v: &mut Validator, id: &str, path: &str) {
        match self.seen.get(id) {
            Some(first) => v.push(path, format!("duplicate id also used at {first}")),
            None => {
                self.seen.insert(id.to_string(), path.to_string());
            }
        }
    }
}
