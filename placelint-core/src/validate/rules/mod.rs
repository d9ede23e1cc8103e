pub(crate) mod business;
pub(crate) mod common;
pub(crate) mod document;
pub(crate) mod fields;
pub(crate) mod hours;
pub(crate) mod location;
pub(crate) mod registry;
pub(crate) mod taxonomy;
