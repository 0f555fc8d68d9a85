//! Scene Engine — a scene graph and navigation engine for choice-driven
//! illustrated stories.
//!
//! A story is a fixed set of scenes joined by labeled choices. The
//! engine keeps exactly one scene current, moves to whichever scene a
//! choice targets, and hands the resolved scene to a renderer.

pub mod content;
pub mod core;
pub mod schema;
