//! Saved games: the snapshot codec and the save file it is written to.

mod codec;
mod store;

pub use codec::{decode, encode, Snapshot};
pub use store::SaveFile;
