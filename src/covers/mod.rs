//! Cover images: decoding off the UI loop and turning them into card palettes.

use crate::app::events::{CoverEvent, Event};
use crate::color::{self, CardPalette};
use crate::library::BookId;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Absolute covers are used as-is; relative ones live under `covers_dir`.
pub fn resolve(cover: &str, covers_dir: &Path) -> PathBuf {
    let p = Path::new(cover);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        covers_dir.join(p)
    }
}

/// Decode an image file and derive its card palette.
///
/// Only decoding can fail; an image with nothing to sample still yields the
/// fallback palette.
pub fn load_palette(path: &Path) -> anyhow::Result<CardPalette> {
    let img = image::open(path).with_context(|| format!("decode {}", path.display()))?;
    let rgba = img.to_rgba8();
    let dominant = color::dominant_color_or_fallback(&rgba);
    tracing::debug!(path = %path.display(), %dominant, "dominant color");
    Ok(color::derive_card_palette(dominant))
}

/// Run [`load_palette`] on the blocking pool and report back on `tx`.
pub fn spawn_extraction(tx: mpsc::Sender<Event>, book_id: BookId, path: PathBuf) {
    tokio::spawn(async move {
        let joined = tokio::task::spawn_blocking({
            let path = path.clone();
            move || load_palette(&path)
        })
        .await;

        let ev = match joined {
            Ok(Ok(palette)) => CoverEvent::Extracted { book_id, palette },
            Ok(Err(e)) => {
                tracing::warn!(%book_id, "cover failed to load: {e:#}");
                CoverEvent::Failed {
                    book_id,
                    error: format!("{e:#}"),
                }
            }
            Err(e) => CoverEvent::Failed {
                book_id,
                error: format!("spawn error: {e:#}"),
            },
        };
        let _ = tx.send(Event::Cover(ev)).await;
    });
}
