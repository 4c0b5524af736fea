pub(crate) mod color;
pub(crate) mod ease;
pub(crate) mod keyframes;
pub(crate) mod timing;
