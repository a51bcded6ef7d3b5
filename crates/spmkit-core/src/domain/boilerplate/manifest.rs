//! `Package.swift` sections.
//!
//! The manifest is emitted as text. Both dependency lists are always
//! present, even when empty, so users have an obvious place to add entries.

use super::{Section, compose, included};
use crate::domain::{
    dependencies::{Dependency, manifest_dependencies},
    value_objects::{FeatureSet, ProjectName, ProjectStyle},
};

struct ManifestContext {
    name: String,
    is_executable: bool,
    dependencies: Vec<Dependency>,
}

impl ManifestContext {
    fn uses_argument_parser(&self) -> bool {
        self.dependencies.contains(&Dependency::ArgumentParser)
    }
}

static SECTIONS: &[Section<ManifestContext>] = &[
    Section::always("tools-version", |_| "// swift-tools-version:5.3\n".into()),
    Section::when(
        "argument-parser-note",
        ManifestContext::uses_argument_parser,
        |_| "// Version 5.3 required for Swift Argument Parser. Supports Catalina+\n".into(),
    ),
    Section::always("package", package_header),
    Section::when("executable-product", |c| c.is_executable, executable_product),
    Section::when("library-product", |c| !c.is_executable, library_product),
    Section::always("package-dependencies", package_dependencies),
    Section::always("targets", targets),
    Section::always("language-versions", |_| {
        "\n    swiftLanguageVersions: [ .v5 ]\n)\n".into()
    }),
];

fn package_header(c: &ManifestContext) -> String {
    format!(
        "\nimport PackageDescription\n\
         \n\
         let package = Package(\n\
         \x20   // This package name is normally synonymous with a hosted git repo and typically\n\
         \x20   // uses lower or upper kebab casing.\n\
         \x20   name: \"{name}\",\n\
         \n\
         \x20   // The oldest platform capable of supporting this code.\n\
         \x20   platforms: [.macOS(.v10_12)],\n\
         \n\
         \x20   // The executables and/or libraries produced by this project\n\
         \x20   products: [\n",
        name = c.name,
    )
}

fn executable_product(c: &ManifestContext) -> String {
    format!(
        "\x20       // The name of the executable produced by this project.\n\
         \x20       .executable(name: \"{name}\",\n\
         \n\
         \x20           // These are modules listed in the targets section.\n\
         \x20           targets: [\"{name}\"]),\n\
         \x20   ],\n",
        name = c.name,
    )
}

fn library_product(c: &ManifestContext) -> String {
    format!(
        "\x20       // The linkable name of the library that is produced.\n\
         \x20       .library(name: \"{name}\",\n\
         \n\
         \x20           // A library includes one or more module targets, which are the modules\n\
         \x20           // you import into your Swift code when using this library.\n\
         \x20           // The module names are listed in the targets section.\n\
         \x20           targets: [\"{name}\"]),\n\
         \x20   ],\n",
        name = c.name,
    )
}

fn package_dependencies(c: &ManifestContext) -> String {
    let mut out = String::from("\n    dependencies: [\n");
    for dep in &c.dependencies {
        let def = dep.def();
        out.push_str(&format!(
            "        .package(url: \"{}\", {}),\n",
            def.url,
            def.requirement.manifest_fragment()
        ));
    }
    out.push_str("    ],\n");
    out
}

fn targets(c: &ManifestContext) -> String {
    let mut out = format!(
        "\n    // Create module targets\n\
         \x20   targets: [\n\
         \x20       .target(\n\
         \x20           // This is the module name. It is used by the product section targets\n\
         \x20           // and by test target dependencies. SPM now requires both module and package names.\n\
         \x20           name: \"{name}\",\n\
         \x20           dependencies: [\n",
        name = c.name,
    );
    for dep in &c.dependencies {
        let def = dep.def();
        out.push_str(&format!(
            "                .product(name: \"{}\", package: \"{}\"),\n",
            def.product, def.package
        ));
    }
    out.push_str(&format!(
        "\x20           ],\n\
         \x20           path: \"Sources/\" // Omit or override if needed. Overrides help .xcodeproj integration.\n\
         \x20       ),\n\
         \n\
         \x20       // Add a test target once the package has tests.\n\
         \x20       //.testTarget(name: \"{name}Tests\", dependencies: [\"{name}\"]),\n\
         \x20   ],\n",
        name = c.name,
    ));
    out
}

fn context(name: &str, is_executable: bool, features: FeatureSet) -> ManifestContext {
    let style = if is_executable {
        ProjectStyle::Executable
    } else {
        ProjectStyle::Library
    };
    ManifestContext {
        name: name.to_owned(),
        is_executable,
        dependencies: manifest_dependencies(style, features),
    }
}

/// Render `Package.swift`.
///
/// Dependencies are only declared for executables; a library manifest
/// ignores every feature flag.
pub fn render_manifest(name: &ProjectName, is_executable: bool, features: FeatureSet) -> String {
    compose(SECTIONS, &context(name.as_str(), is_executable, features))
}

/// Names of the manifest sections emitted for these inputs.
pub fn manifest_sections(is_executable: bool, features: FeatureSet) -> Vec<&'static str> {
    included(SECTIONS, &context("", is_executable, features))
}
