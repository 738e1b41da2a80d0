//! Watch Use Case implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::BuildResult;
use crate::domain::value_objects::ContentHash;
use crate::error::{FolioError, FolioResult};

use super::event::{WatchEvent, WatchOptions, WatcherState};

/// Rebuilds the site whenever one of the watched files changes.
///
/// The rebuild itself is supplied by the caller so it can reload
/// configuration as well as content.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    /// Start watching (blocking) until `running` is cleared
    pub fn start<B, F>(&self, running: Arc<AtomicBool>, mut rebuild: B, on_event: F) -> FolioResult<()>
    where
        B: FnMut() -> FolioResult<BuildResult>,
        F: Fn(WatchEvent),
    {
        let watched: Vec<PathBuf> = self
            .options
            .sources
            .iter()
            .map(|p| canonical(p))
            .collect();

        on_event(WatchEvent::WatchStarted {
            watching: watched.iter().map(|p| p.display().to_string()).collect(),
        });

        run_build(&mut rebuild, &on_event);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| FolioError::Watch(e.to_string()))?;

        // Editors often replace files on save, so watch the directories
        for dir in watch_dirs(&watched) {
            watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(|e| FolioError::Watch(format!("{}: {}", dir.display(), e)))?;
        }

        let mut state = WatcherState::new();
        let mut content_hashes: HashMap<PathBuf, ContentHash> = watched
            .iter()
            .filter_map(|p| Some((p.clone(), hash_file(p)?)))
            .collect();

        // notify may replay events for existing files right after registration
        let cooldown_end = Instant::now() + Duration::from_millis(200);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                let path = canonical(&path);
                if watched.contains(&path) {
                    let new_hash = hash_file(&path);
                    if new_hash.as_ref() != content_hashes.get(&path) {
                        match new_hash {
                            Some(hash) => content_hashes.insert(path.clone(), hash),
                            None => content_hashes.remove(&path),
                        };
                        state.add_change(path);
                    }
                }
            }

            if state.should_rebuild() {
                for path in state.take_changes() {
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                }
                run_build(&mut rebuild, &on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}

fn run_build<B, F>(rebuild: &mut B, on_event: &F)
where
    B: FnMut() -> FolioResult<BuildResult>,
    F: Fn(WatchEvent),
{
    on_event(WatchEvent::BuildStarted);
    match rebuild() {
        Ok(result) => on_event(WatchEvent::BuildComplete {
            written: result.written.len(),
            skipped: result.skipped.len(),
            removed: result.removed.len(),
            warnings: result.warnings.len(),
        }),
        Err(e) => on_event(WatchEvent::Error {
            message: e.to_string(),
        }),
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn hash_file(path: &Path) -> Option<ContentHash> {
    std::fs::read(path).ok().map(|bytes| ContentHash::from_bytes(&bytes))
}

/// Distinct existing parent directories of the watched files
pub(super) fn watch_dirs(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = files
        .iter()
        .filter_map(|f| f.parent())
        .map(|d| {
            if d.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                d.to_path_buf()
            }
        })
        .filter(|d| d.is_dir())
        .collect();
    dirs.sort();
    dirs.dedup();
    dirs
}
