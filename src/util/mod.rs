pub(crate) mod private;
pub(crate) mod string;
