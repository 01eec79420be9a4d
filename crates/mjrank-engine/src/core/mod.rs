pub use self::{match_record::*, placement::*, player::*, team::*};

pub mod feed;
pub(crate) mod match_record;
pub(crate) mod placement;
pub(crate) mod player;
pub(crate) mod team;
