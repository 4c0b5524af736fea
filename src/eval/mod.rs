pub(crate) mod evaluable;
pub(crate) mod evaluator;
pub(crate) mod time_ref;
