//! Periodic dumps of the articulation point search for visualization.
//!
//! Every snapshot is a text file with one `id visited is_ap` line per vertex, flags written as
//! `0` or `1`.

use crate::{
    articulation::{Observer, Progress},
    error::Result,
};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// An [`Observer`] writing a snapshot every `every` edges and once more at the end.
///
/// Write errors cannot interrupt the search, so the first one is kept and writing stops;
/// [`finish`](SnapshotWriter::finish) reports it.
pub struct SnapshotWriter {
    dir: PathBuf,
    every: usize,
    written: usize,
    error: Option<std::io::Error>,
}

impl SnapshotWriter {
    /// Creates a writer into `dir`, which is created if missing. `every` is clamped to 1.
    pub fn new<P: AsRef<Path>>(dir: P, every: usize) -> Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            every: every.max(1),
            written: 0,
            error: None,
        })
    }

    /// Returns the path of the `seq`-th snapshot.
    pub fn path(&self, seq: usize) -> PathBuf {
        self.dir.join(format!("snapshot_{:06}.txt", seq))
    }

    /// Returns the number of snapshots written, or the first write error.
    pub fn finish(self) -> Result<usize> {
        match self.error {
            Some(e) => Err(e.into()),
            None => {
                info!("wrote {} snapshots to {}", self.written, self.dir.display());
                Ok(self.written)
            }
        }
    }

    fn write(&mut self, progress: &Progress<'_>) {
        if self.error.is_some() {
            return;
        }
        let path = self.path(self.written);
        match write_snapshot(&path, progress) {
            Ok(()) => {
                debug!("wrote {}", path.display());
                self.written += 1;
            }
            Err(e) => self.error = Some(e),
        }
    }
}

impl Observer for SnapshotWriter {
    fn edge_visited(&mut self, progress: &Progress<'_>) {
        if progress.edges_visited() % self.every == 0 {
            self.write(progress);
        }
    }

    fn finished(&mut self, progress: &Progress<'_>) {
        self.write(progress);
    }
}

fn write_snapshot(path: &Path, progress: &Progress<'_>) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for vertex in progress.graph().vertices() {
        let v = vertex.id();
        writeln!(
            out,
            "{} {} {}",
            v,
            progress.is_visited(v) as u8,
            progress.is_articulation(v) as u8
        )?;
    }
    out.flush()
}
