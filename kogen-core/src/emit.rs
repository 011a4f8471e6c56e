//! Emitting a view into a project: patch the route table, write the files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::route_table::RouteTable;
use crate::templates;
use crate::view::ViewSpec;

/// File name of the route table, relative to the project root.
pub const ROUTES_FILE: &str = "routes.js";

/// A file to be written, with its full contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub contents: String,
}

/// Everything one invocation will write, rendered up front.
#[derive(Debug, Clone)]
pub struct Plan {
    project_dir: PathBuf,
    /// The patched route table.
    pub routes: PlannedFile,
    /// View files in write order.
    pub files: Vec<PlannedFile>,
}

/// Files written by [`Plan::write`], relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub routes: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Render every output of `spec` without touching the disk.
///
/// Fails if the name is empty, the route table is missing, or the route
/// table cannot be patched.
pub fn plan(
    project_dir: &Path,
    spec: &ViewSpec,
    config: &GeneratorConfig,
) -> Result<Plan, GenError> {
    if spec.name.is_empty() {
        return Err(GenError::MissingName);
    }

    let routes_path = project_dir.join(ROUTES_FILE);
    if !routes_path.is_file() {
        return Err(GenError::RoutesNotFound(routes_path));
    }

    tracing::debug!(path = %routes_path.display(), "patching route table");
    let mut table = RouteTable::parse(fs::read_to_string(&routes_path)?)?;
    table.insert(&spec.route, &spec.name)?;

    let dir = spec.dir();
    let name = &spec.name;

    let mut files = vec![
        PlannedFile {
            path: dir.join("index.js"),
            contents: templates::index_js(spec, config),
        },
        PlannedFile {
            path: dir.join(format!("{name}.html")),
            contents: templates::view_html(spec),
        },
    ];

    if !spec.template_only {
        files.push(PlannedFile {
            path: dir.join(format!("{name}.js")),
            contents: templates::view_js(spec, config),
        });

        if config.test_framework.writes_tests() {
            files.push(PlannedFile {
                path: dir.join(format!("{name}.test.js")),
                contents: templates::view_test_js(spec, config),
            });
        }
    }

    tracing::debug!(view = %name, files = files.len(), "planned view");

    Ok(Plan {
        project_dir: project_dir.to_path_buf(),
        routes: PlannedFile {
            path: PathBuf::from(ROUTES_FILE),
            contents: table.into_source(),
        },
        files,
    })
}

impl Plan {
    /// Write the route table, then every view file.
    ///
    /// Existing view files are an error unless `force` is set; this check
    /// happens before anything is written. Writes themselves are not
    /// transactional: a failure part-way leaves earlier files in place.
    pub fn write(&self, force: bool) -> Result<EmitReport, GenError> {
        if !force {
            if let Some(existing) = self
                .files
                .iter()
                .map(|f| self.project_dir.join(&f.path))
                .find(|p| p.exists())
            {
                return Err(GenError::Conflict(existing));
            }
        }

        fs::write(self.project_dir.join(&self.routes.path), &self.routes.contents)?;
        tracing::info!(path = %self.routes.path.display(), "updated route table");

        let mut report = EmitReport {
            routes: self.routes.path.clone(),
            files: Vec::with_capacity(self.files.len()),
        };

        for file in &self.files {
            let target = self.project_dir.join(&file.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, &file.contents)?;
            tracing::info!(path = %file.path.display(), "wrote file");
            report.files.push(file.path.clone());
        }

        Ok(report)
    }
}

/// Plan and write `spec` into the project at `project_dir`.
pub fn emit(
    project_dir: &Path,
    spec: &ViewSpec,
    config: &GeneratorConfig,
    force: bool,
) -> Result<EmitReport, GenError> {
    plan(project_dir, spec, config)?.write(force)
}
