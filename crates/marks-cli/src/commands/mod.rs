//! One module per `marks` subcommand; each wires the production collaborators
//! into the matching runner from `marks-ops`.

pub(crate) mod add;
pub(crate) mod copy;
pub(crate) mod delete;
pub(crate) mod list;
pub(crate) mod open;
pub(crate) mod update;
