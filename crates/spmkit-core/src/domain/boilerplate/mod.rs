//! Boilerplate assembly.
//!
//! Every generated document is an ordered list of [`Section`]s. A section is
//! a predicate plus a renderer over a small context value; [`compose`]
//! concatenates the sections whose predicate holds, in declaration order.
//! Keeping the order in one static table per document is what guarantees
//! that, for example, the argument-parser entries always precede the
//! utility entries in both manifest dependency lists.
//!
//! All functions here are pure: the only external facts (year and author)
//! arrive through [`Authorship`].

mod docs;
mod manifest;
mod readme;
mod sources;

pub use docs::{render_changelog, render_license};
pub use manifest::{manifest_sections, render_manifest};
pub use readme::{readme_sections, render_readme};
pub use sources::{render_entry_point, render_library_source};

use std::path::PathBuf;

use crate::domain::{
    entities::{Authorship, ProjectRequest, ProjectStructure, common::RelativePath},
    error::DomainError,
};

pub const README_FILE: &str = "README.md";
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";
pub const LICENSE_FILE: &str = "LICENSE.txt";
pub const MANIFEST_FILE: &str = "Package.swift";
pub const SOURCES_DIR: &str = "Sources";
pub const ENTRY_POINT_FILE: &str = "main.swift";

/// Version string used for the changelog seed entry and the first tag.
pub const SEED_VERSION: &str = "0.0.1";

// ── Section builders ──────────────────────────────────────────────────────────

/// One block of a generated document.
pub struct Section<C> {
    pub name: &'static str,
    include: fn(&C) -> bool,
    render: fn(&C) -> String,
}

impl<C> Section<C> {
    /// A section that is always emitted.
    pub const fn always(name: &'static str, render: fn(&C) -> String) -> Self {
        Self {
            name,
            include: always::<C>,
            render,
        }
    }

    /// A section emitted only when `include` holds for the context.
    pub const fn when(
        name: &'static str,
        include: fn(&C) -> bool,
        render: fn(&C) -> String,
    ) -> Self {
        Self {
            name,
            include,
            render,
        }
    }

    pub fn applies(&self, ctx: &C) -> bool {
        (self.include)(ctx)
    }

    pub fn render(&self, ctx: &C) -> String {
        (self.render)(ctx)
    }
}

fn always<C>(_: &C) -> bool {
    true
}

/// Concatenate every applicable section, in order.
pub fn compose<C>(sections: &[Section<C>], ctx: &C) -> String {
    sections
        .iter()
        .filter(|s| s.applies(ctx))
        .map(|s| s.render(ctx))
        .collect()
}

/// Names of the sections that would be emitted for `ctx`, in order.
pub fn included<C>(sections: &[Section<C>], ctx: &C) -> Vec<&'static str> {
    sections
        .iter()
        .filter(|s| s.applies(ctx))
        .map(|s| s.name)
        .collect()
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Relative path of the Swift source file generated for `request`.
///
/// Executables get `Sources/<name>/main.swift`. Libraries get
/// `Sources/<name>/<name>.swift`, because a `main.swift` would turn the
/// module into an executable target.
pub fn source_file_path(request: &ProjectRequest) -> Result<RelativePath, DomainError> {
    let dir = RelativePath::try_new(SOURCES_DIR)?.join(request.name().as_str())?;
    if request.style().is_executable() {
        dir.join(ENTRY_POINT_FILE)
    } else {
        dir.join(format!("{}.swift", request.name()))
    }
}

/// Relative paths of every generated file, in write order.
pub fn planned_files(request: &ProjectRequest) -> Result<Vec<RelativePath>, DomainError> {
    Ok(vec![
        RelativePath::try_new(README_FILE)?,
        RelativePath::try_new(CHANGELOG_FILE)?,
        RelativePath::try_new(LICENSE_FILE)?,
        source_file_path(request)?,
        RelativePath::try_new(MANIFEST_FILE)?,
    ])
}

/// Render every file for `request` exactly once, rooted at `root`.
pub fn assemble(
    request: &ProjectRequest,
    authorship: &Authorship,
    root: impl Into<PathBuf>,
) -> Result<ProjectStructure, DomainError> {
    let name = request.name();
    let Authorship { year, author } = authorship;

    let source = if request.style().is_executable() {
        render_entry_point(name, request.uses_argument_parser(), *year, author)
    } else {
        render_library_source(name, *year, author)
    };

    let structure = ProjectStructure::new(root)
        .with_file(
            RelativePath::try_new(README_FILE)?,
            render_readme(name, request.style(), request.features(), request.owner()),
        )
        .with_file(RelativePath::try_new(CHANGELOG_FILE)?, render_changelog())
        .with_file(
            RelativePath::try_new(LICENSE_FILE)?,
            render_license(*year, author),
        )
        .with_file(source_file_path(request)?, source)
        .with_file(
            RelativePath::try_new(MANIFEST_FILE)?,
            render_manifest(name, request.style().is_executable(), request.features()),
        );

    structure.validate()?;
    Ok(structure)
}

/// Shared copyright line for generated Swift sources.
fn copyright_header(year: i32, author: &str) -> String {
    format!("/// Copyright (c) {year} {author}. All Rights Reserved.\n\nimport Foundation\n")
}
