/*
 *  The rules of five-or-more: a grid of coloured balls, cleared in lines.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub mod geometry;
pub mod notation;
pub mod sets;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, Path},
        consts::*,
        coords::{self, *},
        geometry::Geometry,
        notation::*,
        sets::*,
    };

    pub use super::sets::SetOps;
}
