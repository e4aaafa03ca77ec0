use super::*;

mod create;
mod delete;
mod update;
