mod scenarios;
pub(crate) mod utils;
