//! Native bootstrap launcher: locates the application package installed
//! beside its own executable and hands it to a separately installed Java
//! runtime, surfacing a modal error dialog when the handoff cannot happen.

pub mod launcher;
pub mod notify;
pub mod plan;
pub mod spawn;
