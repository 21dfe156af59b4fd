//! Effect system for face-card interactions.
//!
//! ## Components
//!
//! - `Effect`: caravan-local result of a placement
//! - `Effects`: the full delta of one applied move
//! - `PurgeCriterion`: which bases a Joker removes
//! - `purge`: applies a Joker purge across all caravans

pub mod effect;
pub mod resolver;
pub mod targeting;

pub use effect::{Effect, EffectKind, Effects, PlayedCard, RemovedCard};
pub use resolver::purge;
pub use targeting::PurgeCriterion;
