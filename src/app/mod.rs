// Presentation collaborators: rendering and the per-mode result cache.

pub mod report;
pub mod session;
