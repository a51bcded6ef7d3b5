//! `README.md` sections.
//!
//! Every heading after the title is preceded by a blank line. That holds
//! for `## Dependencies` too, which would otherwise run straight on from
//! the "Known Issues" text.

use super::{Section, compose, included};
use crate::domain::{
    dependencies::requested_dependencies,
    value_objects::{FeatureSet, ProjectName, ProjectStyle},
};

/// Placeholder used in the install command when no hosting owner is known.
const OWNER_PLACEHOLDER: &str = "<owner>";

struct ReadmeContext {
    name: String,
    style: ProjectStyle,
    features: FeatureSet,
    owner: Option<String>,
}

static SECTIONS: &[Section<ReadmeContext>] = &[
    Section::always("title", title),
    Section::always("overview", |_| {
        "\n## Overview\n\nAn overview of this project.\n".into()
    }),
    Section::always("known-issues", |_| "\n## Known Issues\n\nNone.\n".into()),
    Section::when("dependencies", |c| !c.features.is_empty(), dependencies),
    Section::when("installation", |c| c.style.is_executable(), installation),
    Section::always("acknowledgements", |_| {
        "\n## Thanks and Acknowledgements\n\nThanks to everyone who pitched in and helped with this.\n"
            .into()
    }),
];

fn title(c: &ReadmeContext) -> String {
    let kind = if c.style.is_executable() {
        "An executable project."
    } else {
        "A library project."
    };
    format!("# {}\n\n{kind}\n", c.name)
}

fn dependencies(c: &ReadmeContext) -> String {
    let mut out = String::from("\n## Dependencies\n\n");
    for dep in requested_dependencies(c.features) {
        let def = dep.def();
        out.push_str(&format!("* [{}]({})\n", def.title, def.url));
    }
    out
}

fn installation(c: &ReadmeContext) -> String {
    let owner = c.owner.as_deref().unwrap_or(OWNER_PLACEHOLDER);
    format!(
        "\n## Installation\n\n\
         * Install [homebrew](https://brew.sh).\n\
         * Install [mint](https://github.com/yonaskolb/Mint) with homebrew (`brew install mint`).\n\
         * From command line: `mint install {owner}/{name}`\n\n\
         Note: This project uses a `master` branch to support `mint` installation.\n",
        name = c.name,
    )
}

/// Render `README.md`.
///
/// The dependency list reflects the requested features regardless of style;
/// only the manifest applies the executable-only gate.
pub fn render_readme(
    name: &ProjectName,
    style: ProjectStyle,
    features: FeatureSet,
    owner: Option<&str>,
) -> String {
    let ctx = ReadmeContext {
        name: name.to_string(),
        style,
        features,
        owner: owner.map(str::to_owned),
    };
    compose(SECTIONS, &ctx)
}

/// Names of the README sections emitted for these inputs.
pub fn readme_sections(style: ProjectStyle, features: FeatureSet) -> Vec<&'static str> {
    let ctx = ReadmeContext {
        name: String::new(),
        style,
        features,
        owner: None,
    };
    included(SECTIONS, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Feature;

    fn name(s: &str) -> ProjectName {
        ProjectName::new(s).unwrap()
    }

    fn all_feature_sets() -> Vec<FeatureSet> {
        (0..8u8)
            .map(|bits| {
                Feature::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| bits & (1 << i) != 0)
                    .map(|(_, f)| f)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn installation_present_iff_executable() {
        for features in all_feature_sets() {
            let exe = render_readme(&name("demo"), ProjectStyle::Executable, features, None);
            let lib = render_readme(&name("demo"), ProjectStyle::Library, features, None);
            assert!(exe.contains("## Installation"), "{features}");
            assert!(!lib.contains("## Installation"), "{features}");
        }
    }

    #[test]
    fn dependencies_present_iff_any_feature() {
        for features in all_feature_sets() {
            for style in [ProjectStyle::Executable, ProjectStyle::Library] {
                let readme = render_readme(&name("demo"), style, features, None);
                assert_eq!(
                    readme.contains("## Dependencies"),
                    !features.is_empty(),
                    "{style} {features}"
                );
            }
        }
    }

    #[test]
    fn general_utility_bullet_listed_once() {
        let features = FeatureSet::empty()
            .with(Feature::GeneralUtility)
            .with(Feature::MacUtility);
        let readme = render_readme(&name("demo"), ProjectStyle::Executable, features, None);
        assert_eq!(readme.matches("Swift General Utility").count(), 1);
        assert_eq!(readme.matches("Swift Mac Utility").count(), 1);
    }

    #[test]
    fn dependency_bullets_follow_canonical_order() {
        let all: FeatureSet = Feature::ALL.into_iter().collect();
        let readme = render_readme(&name("demo"), ProjectStyle::Executable, all, None);
        let sap = readme.find("Swift Argument Parser").unwrap();
        let general = readme.find("Swift General Utility").unwrap();
        let mac = readme.find("Swift Mac Utility").unwrap();
        assert!(sap < general && general < mac);
    }

    #[test]
    fn section_order_is_fixed() {
        let all: FeatureSet = Feature::ALL.into_iter().collect();
        assert_eq!(
            readme_sections(ProjectStyle::Executable, all),
            vec![
                "title",
                "overview",
                "known-issues",
                "dependencies",
                "installation",
                "acknowledgements"
            ]
        );
        assert_eq!(
            readme_sections(ProjectStyle::Library, FeatureSet::empty()),
            vec!["title", "overview", "known-issues", "acknowledgements"]
        );
    }

    #[test]
    fn library_description_and_title() {
        let readme = render_readme(&name("mylib"), ProjectStyle::Library, FeatureSet::empty(), None);
        assert!(readme.starts_with("# mylib\n\nA library project.\n"));
    }

    #[test]
    fn install_command_uses_owner() {
        let with_owner = render_readme(
            &name("demo"),
            ProjectStyle::Executable,
            FeatureSet::empty(),
            Some("octocat"),
        );
        assert!(with_owner.contains("`mint install octocat/demo`"));

        let without = render_readme(&name("demo"), ProjectStyle::Executable, FeatureSet::empty(), None);
        assert!(without.contains("`mint install <owner>/demo`"));
    }

    #[test]
    fn minimal_executable_readme() {
        let readme = render_readme(&name("demo"), ProjectStyle::Executable, FeatureSet::empty(), Some("me"));
        let expected = "# demo\n\
\n\
An executable project.\n\
\n\
## Overview\n\
\n\
An overview of this project.\n\
\n\
## Known Issues\n\
\n\
None.\n\
\n\
## Installation\n\
\n\
* Install [homebrew](https://brew.sh).\n\
* Install [mint](https://github.com/yonaskolb/Mint) with homebrew (`brew install mint`).\n\
* From command line: `mint install me/demo`\n\
\n\
Note: This project uses a `master` branch to support `mint` installation.\n\
\n\
## Thanks and Acknowledgements\n\
\n\
Thanks to everyone who pitched in and helped with this.\n";
        assert_eq!(readme, expected);
    }

    #[test]
    fn dependencies_heading_is_separated_like_its_siblings() {
        let features = FeatureSet::empty().with(Feature::ArgumentParser);
        let readme = render_readme(&name("demo"), ProjectStyle::Executable, features, None);
        assert!(readme.contains("None.\n\n## Dependencies\n"));
        assert!(readme.contains("\n\n## Installation\n"));
    }
}
