//! Go package name and import path of a schema file.
//!
//! Sources, by priority: `M` parameter overrides (dependencies only), the
//! `go_package` file option, the `import_path` parameter, the proto package,
//! and finally the file name itself.
use log::debug;

use crate::conf::Params;
use crate::schema::{FileId, PackageId, SchemaGraph};

//==================================================================================GO_PACKAGE
/// Import path and package name a file resolves to before sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GoPackage {
    pub(crate) import_path: String,
    pub(crate) name: String,
}

/// Resolve the raw import path / package name pair of a file. The
/// `import_path` parameter only applies to files that carry neither a mapping
/// nor a `go_package` option. A source that yields an empty package name
/// (`path;`, `example.com/`) keeps its import path but hands the name over to
/// the next source.
pub(crate) fn go_package(graph: &SchemaGraph, params: &Params, file: FileId) -> GoPackage {
    let info = graph.file_info(file);
    let mut import_path = None;

    if !info.build_target {
        if let Some(mapping) = params.mapping(&info.input_path) {
            let (path, name) = split_go_package(mapping);
            if !name.is_empty() {
                return GoPackage {
                    import_path: path,
                    name,
                };
            }
            debug!("mapping `{mapping}` of `{}` names no package", info.input_path);
            import_path = Some(path);
        }
    }

    if let Some(option) = info.go_package.as_deref().filter(|o| !o.is_empty()) {
        let (path, name) = if option.contains(';') || option.contains('/') {
            split_go_package(option)
        } else {
            (input_dir(&info.input_path).to_string(), option.to_string())
        };
        let path = import_path.unwrap_or(path);
        if !name.is_empty() {
            return GoPackage {
                import_path: path,
                name,
            };
        }
        debug!("go_package `{option}` of `{}` names no package", info.input_path);
        import_path = Some(path);
    }

    let proto_package = graph.get(graph.file_package(file).id()).name();
    let name = if proto_package.is_empty() {
        file_stem(&info.input_path).to_string()
    } else {
        to_snake_case(proto_package)
    };

    if let Some(path) = import_path {
        return GoPackage {
            import_path: path,
            name,
        };
    }

    match params.import_path.as_deref() {
        Some(path) => {
            let segment = last_segment(path);
            if segment.is_empty() {
                debug!("import_path `{path}` names no package, keeping `{name}`");
            }
            GoPackage {
                import_path: path.to_string(),
                name: if segment.is_empty() {
                    name
                } else {
                    segment.to_string()
                },
            }
        }
        None => GoPackage {
            import_path: input_dir(&info.input_path).to_string(),
            name,
        },
    }
}

/// Sanitized Go package name of a file.
pub(crate) fn file_package_name(graph: &SchemaGraph, params: &Params, file: FileId) -> String {
    sanitize_package_name(&go_package(graph, params, file).name)
}

/// Package name of a proto package: the name of its first file. Files of one
/// package are expected to agree; that is checked upstream, not here.
pub(crate) fn package_name(graph: &SchemaGraph, params: &Params, package: PackageId) -> String {
    match graph.package_files(package).next() {
        Some(file) => file_package_name(graph, params, file),
        None => {
            let proto_name = graph.get(package.id()).name();
            debug!("package `{proto_name}` has no files, naming it from its proto name");
            sanitize_package_name(&to_snake_case(proto_name))
        }
    }
}

//==================================================================================HELPERS
/// Split a `path;name` or `a/b/name` value into its import path and name.
fn split_go_package(value: &str) -> (String, String) {
    match value.split_once(';') {
        Some((path, name)) => (path.to_string(), name.to_string()),
        None => (value.to_string(), last_segment(value).to_string()),
    }
}

/// Last `/` segment, ignoring trailing slashes. Empty when nothing is left.
fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Directory part of an input path, `.` for files at the root.
fn input_dir(input_path: &str) -> &str {
    match input_path.rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() => dir,
        Some(_) => "/",
        None => ".",
    }
}

/// File name without directory and last extension.
fn file_stem(input_path: &str) -> &str {
    let base = last_segment(input_path);
    match base.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => base,
    }
}

/// Lowercase words joined by `_`. Words break on any non-alphanumeric
/// character, on lower-to-upper transitions, and at the end of an acronym
/// (`HTTPServer` -> `http_server`).
pub(crate) fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut buffer = String::with_capacity(name.len() + 4);
    let mut pending_break = false;

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            pending_break = true;
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower) {
                pending_break = true;
            }
        }

        if pending_break && !buffer.is_empty() {
            buffer.push('_');
        }
        pending_break = false;
        buffer.extend(c.to_lowercase());
    }

    buffer
}

/// Turn an arbitrary string into a valid Go package identifier.
pub(crate) fn sanitize_package_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len() + 1);

    if GO_KEYWORDS.contains(&raw) || raw.starts_with(|c: char| c.is_ascii_digit()) {
        name.push('_');
    }

    name.extend(raw.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));

    if name != raw {
        debug!("package name `{raw}` sanitized to `{name}`");
    }
    name
}

/// Go keywords, which cannot be used as package names.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

#[cfg(test)]
mod tests;
