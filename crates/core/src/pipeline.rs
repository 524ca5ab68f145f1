//! Encode (`make_face`) and decode (`read_face`) pipelines.

use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::ThreadPool;

use crate::{
    config::{CSS_EXTENSION, FaceConfig},
    error::{Error, Result},
    group::group,
    io::{Discovery, FileSystem, Storage},
    parallel::{build_pool, try_map},
    path::{map_to_destination, normalize},
    record::{CssFragment, FileRecord, FontGroup},
    render::{concatenate, render_font_face},
};

/// Pipeline execution context: where files come from and how they are matched.
#[derive(Debug, Clone, Default)]
pub struct FacePipeline<S = FileSystem> {
    storage: S,
    config: FaceConfig,
}

impl FacePipeline {
    pub fn new(config: FaceConfig) -> Self {
        Self::with_storage(FileSystem, config)
    }
}

impl<S: Storage + Discovery> FacePipeline<S> {
    pub fn with_storage(storage: S, config: FaceConfig) -> Self {
        Self { storage, config }
    }

    /// Render one stylesheet per font family under `origin` into `destination`.
    ///
    /// Both directories must exist. Returns the fragments that were written.
    pub fn make_face(&self, origin: &Path, destination: &Path) -> Result<Vec<CssFragment>> {
        info!("Starting ...");
        self.ensure_exists(origin)?;
        self.ensure_exists(destination)?;
        let pool = build_pool(self.config.jobs)?;

        info!("Reading faces from \"{}\"", origin.display());
        let paths = self.storage.find(origin, &self.config.extensions)?;
        debug!("Found {} font files", paths.len());
        let fonts = self.read_all(&pool, paths)?;
        let groups = group(fonts)?;
        let fragments = render_groups(&groups, origin, destination)?;

        info!("Writing faces to \"{}\"", destination.display());
        try_map(&pool, fragments.iter().collect(), |fragment: &CssFragment| {
            debug!("Writing {}", fragment.path().display());
            self.storage.write(fragment.path(), fragment.data())
        })?;

        info!("Done.");
        Ok(fragments)
    }

    /// Concatenate every stylesheet under `origin` into `to_file`.
    ///
    /// Stylesheets are joined in path order. `to_file` itself is skipped when it
    /// lives under `origin`, so re-running never folds the previous output back in.
    /// Paths are compared after [`normalize`], so `css/sub/../all.css` names `css/all.css`.
    pub fn read_face(&self, origin: &Path, to_file: &Path) -> Result<CssFragment> {
        info!("Starting ...");
        self.ensure_exists(origin)?;
        let pool = build_pool(self.config.jobs)?;

        info!("Reading faces from \"{}\"", origin.display());
        let mut paths = self.storage.find(origin, &[CSS_EXTENSION.to_owned()])?;
        let output_key = normalize(to_file);
        paths.retain(|path| normalize(path) != output_key);
        paths.sort();
        debug!("Found {} stylesheets", paths.len());
        let fragments = self.read_all(&pool, paths)?;
        let output = CssFragment::new(to_file, concatenate(&fragments));

        info!("Writing faces to \"{}\"", to_file.display());
        self.storage.write(output.path(), output.data())?;

        info!("Done.");
        Ok(output)
    }

    fn ensure_exists(&self, path: &Path) -> Result<()> {
        if self.storage.exists(path) {
            Ok(())
        } else {
            Err(Error::PathNotFound { path: path.to_path_buf() })
        }
    }

    fn read_all(&self, pool: &ThreadPool, paths: Vec<PathBuf>) -> Result<Vec<FileRecord>> {
        try_map(pool, paths, |path| {
            debug!("Reading {}", path.display());
            let data = self.storage.read(&path)?;
            Ok(FileRecord::new(path, data))
        })
    }
}

fn render_groups(groups: &[FontGroup], origin: &Path, destination: &Path) -> Result<Vec<CssFragment>> {
    groups
        .iter()
        .map(|group| {
            let path = map_to_destination(group.lead_path(), origin, destination)?;
            Ok(CssFragment::new(path, render_font_face(group)))
        })
        .collect()
}

/// Run [`FacePipeline::make_face`] on the local file system with default settings.
pub fn make_face(origin: &Path, destination: &Path) -> Result<Vec<CssFragment>> {
    FacePipeline::new(FaceConfig::default()).make_face(origin, destination)
}

/// Run [`FacePipeline::read_face`] on the local file system with default settings.
pub fn read_face(origin: &Path, to_file: &Path) -> Result<CssFragment> {
    FacePipeline::new(FaceConfig::default()).read_face(origin, to_file)
}
