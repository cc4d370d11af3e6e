use super::*;

mod require_role;
