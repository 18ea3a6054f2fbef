//! Command interpretation and sequencing for the rig.
//!
//! [`RigController`] is the entry point. Hand-mode lines go through
//! [`hand`], coordinate batches through [`auto`], and every outcome is a
//! [`Reply`].

pub mod auto;
mod controller;
pub mod hand;
mod reply;

pub use controller::{RigController, RigSettings};
pub use reply::Reply;
