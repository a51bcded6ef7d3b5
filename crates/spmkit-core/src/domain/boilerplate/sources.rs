//! Swift source files.

use super::copyright_header;
use crate::domain::value_objects::ProjectName;

/// Render `Sources/<name>/main.swift`.
///
/// With `use_argument_parsing` the entry point is a `ParsableCommand`
/// named after the project; otherwise it prints a greeting.
pub fn render_entry_point(
    name: &ProjectName,
    use_argument_parsing: bool,
    year: i32,
    author: &str,
) -> String {
    let mut out = copyright_header(year, author);
    if !use_argument_parsing {
        out.push_str("\nprint(\"Hello world!\")\n");
        return out;
    }

    let type_name = name.type_name();
    out.push_str(&format!(
        "import ArgumentParser\n\
\n\
struct {type_name}: ParsableCommand {{\n\
\x20   static var configuration = CommandConfiguration(\n\
\x20       abstract: \"Execute the {name} command\",\n\
\x20       shouldDisplay: true)\n\
\n\
\x20   @Argument(help: \"A name\") var name = \"World\"\n\
\n\
\x20   func run() throws {{\n\
\x20       print(\"Hello, \\(name)!\")\n\
\x20   }}\n\
}}\n\
\n\
{type_name}.main()\n"
    ));
    out
}

/// Render `Sources/<name>/<name>.swift` for a library target.
pub fn render_library_source(name: &ProjectName, year: i32, author: &str) -> String {
    let mut out = copyright_header(year, author);
    out.push_str(&format!(
        "\n/// Namespace for the `{name}` module.\npublic enum {} {{}}\n",
        name.type_name()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ProjectName {
        ProjectName::new(s).unwrap()
    }

    #[test]
    fn plain_entry_point() {
        let src = render_entry_point(&name("demo"), false, 2026, "Jane Doe");
        assert_eq!(
            src,
            "/// Copyright (c) 2026 Jane Doe. All Rights Reserved.\n\
\n\
import Foundation\n\
\n\
print(\"Hello world!\")\n"
        );
    }

    #[test]
    fn argument_parser_entry_point() {
        let src = render_entry_point(&name("demo"), true, 2026, "Jane Doe");
        let expected = r#"/// Copyright (c) 2026 Jane Doe. All Rights Reserved.

import Foundation
import ArgumentParser

struct Demo: ParsableCommand {
    static var configuration = CommandConfiguration(
        abstract: "Execute the demo command",
        shouldDisplay: true)

    @Argument(help: "A name") var name = "World"

    func run() throws {
        print("Hello, \(name)!")
    }
}

Demo.main()
"#;
        assert_eq!(src, expected);
    }

    #[test]
    fn type_name_keeps_inner_case() {
        let src = render_entry_point(&name("myTool"), true, 2026, "x");
        assert!(src.contains("struct MyTool: ParsableCommand"));
        assert!(src.contains("MyTool.main()"));
        assert!(src.contains("Execute the myTool command"));
    }

    #[test]
    fn library_source_declares_namespace() {
        let src = render_library_source(&name("mylib"), 2026, "Jane Doe");
        assert!(src.starts_with("/// Copyright (c) 2026 Jane Doe. All Rights Reserved.\n"));
        assert!(src.contains("import Foundation\n"));
        assert!(src.contains("public enum Mylib {}\n"));
        assert!(!src.contains("print("));
    }
}
