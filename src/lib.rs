//! Video Console - an in-memory video catalog console
//!
//! This library implements a single-user command console over a fixed,
//! preloaded video catalog: playback of one current video, named playlists,
//! title/tag search with an interactive pick, and moderation flags. All
//! session state lives in one [`Console`] value; every command is a
//! synchronous call that writes its result lines to the console's output
//! sink.

pub mod console;
pub mod error;
pub mod loader;
pub mod model;
pub mod player;
pub mod repl;
pub mod selection;
pub mod store;

pub use console::{Console, DEFAULT_FLAG_REASON};
pub use error::CommandError;
pub use model::{Catalog, Playlist, Video};
pub use player::Player;
pub use selection::{LineSelection, NoSelection, SelectionSource, StdinSelection};
pub use store::PlaylistStore;
