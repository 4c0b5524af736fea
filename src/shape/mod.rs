pub(crate) mod geom;
pub(crate) mod instance;
pub(crate) mod leaf;
pub(crate) mod modifier;
pub(crate) mod style;
