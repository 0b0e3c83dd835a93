//! Domain layer: entities, merge policy, repository traits, postback macros.

pub mod entities;
pub mod optional_fields;
pub mod postback;
pub mod repositories;
