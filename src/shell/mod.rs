//! The simulated shell: path resolution, virtual filesystem, command
//! dispatch, and tab completion over the static portfolio content.

pub mod complete;
pub mod docs;
pub mod output;
pub mod path;
pub mod session;
pub mod vfs;

pub use output::{Entry, OutputLine, Tone};
pub use session::Session;
