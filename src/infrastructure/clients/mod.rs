pub(crate) mod steamgriddb;
