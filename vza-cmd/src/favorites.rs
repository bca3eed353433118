//! Favorites management commands.

use clap::Subcommand;
use std::path::Path;

use crate::FAVORITES_KEY;
use vza_store::favorites::FavoritesStore;
use vza_store::kv::JsonFileStore;

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// Pin a station id
    Add { id: String },
    /// Unpin a station id
    Remove { id: String },
    /// Pin the id if absent, unpin it if present
    Toggle { id: String },
    /// Print pinned ids in pin order
    List,
}

pub fn run_favorites(action: FavoritesAction, file: &Path) -> anyhow::Result<()> {
    let store = FavoritesStore::load(JsonFileStore::new(file), FAVORITES_KEY);
    match action {
        FavoritesAction::Add { id } => {
            store.add(&id);
            println!("pinned {id}");
        }
        FavoritesAction::Remove { id } => {
            store.remove(&id);
            println!("unpinned {id}");
        }
        FavoritesAction::Toggle { id } => {
            if store.toggle(&id) {
                println!("pinned {id}");
            } else {
                println!("unpinned {id}");
            }
        }
        FavoritesAction::List => {
            for id in store.list() {
                println!("{id}");
            }
        }
    }
    Ok(())
}
