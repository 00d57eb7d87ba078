pub(super) mod schemas;
