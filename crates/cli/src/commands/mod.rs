pub(crate) mod export;
pub(crate) mod load;
pub(crate) mod query;
pub(crate) mod serve;
