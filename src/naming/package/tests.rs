//! Unit tests for Go package naming.
use super::*;
use crate::schema::{FileInfo, SchemaBuilder};

fn single_file(proto_package: &str, info: FileInfo) -> (SchemaGraph, FileId) {
    let mut builder = SchemaBuilder::new();
    let package = builder.package(proto_package);
    let file = builder.file(package, info);
    (builder.build(), file)
}

fn name_of(proto_package: &str, info: FileInfo, params: &Params) -> String {
    let (graph, file) = single_file(proto_package, info);
    file_package_name(&graph, params, file)
}

//==================================================================================SOURCES
#[test]
/// Without options the proto package is snake-cased.
fn test_from_proto_package() {
    let params = Params::default();
    assert_eq!(name_of("acme.chat.v1", FileInfo::new("a.proto"), &params), "acme_chat_v1");
    assert_eq!(name_of("FooBar", FileInfo::new("a.proto"), &params), "foo_bar");
}

#[test]
/// Without a proto package the file stem is used.
fn test_from_file_stem() {
    let params = Params::default();
    assert_eq!(name_of("", FileInfo::new("dir/my-file.proto"), &params), "my_file");
    assert_eq!(name_of("", FileInfo::new("plain"), &params), "plain");
}

#[test]
/// The `go_package` option wins over the proto package in all its forms.
fn test_from_go_package() {
    let params = Params::default();
    let semicolon = FileInfo::new("a.proto").with_go_package("example.com/foo/v1;foopb");
    let path = FileInfo::new("a.proto").with_go_package("example.com/foo/bar");
    let bare = FileInfo::new("a.proto").with_go_package("baz");

    assert_eq!(name_of("acme", semicolon, &params), "foopb");
    assert_eq!(name_of("acme", path, &params), "bar");
    assert_eq!(name_of("acme", bare, &params), "baz");
}

#[test]
/// The `import_path` parameter only applies when no `go_package` is set.
fn test_import_path_param() {
    let params: Params = "import_path=example.com/gen/widgets".parse().unwrap();
    assert_eq!(name_of("acme", FileInfo::new("a.proto"), &params), "widgets");

    let with_option = FileInfo::new("a.proto").with_go_package("example.com/x;xpb");
    assert_eq!(name_of("acme", with_option, &params), "xpb");
}

#[test]
/// `M` mappings override dependencies but never build targets.
fn test_mapping_override() {
    let params: Params = "Mdep.proto=example.com/deps/depv2".parse().unwrap();

    let dependency = FileInfo::new("dep.proto").with_go_package("other;other").dependency();
    assert_eq!(name_of("dep", dependency, &params), "depv2");

    let target = FileInfo::new("dep.proto").with_go_package("other;other");
    assert_eq!(name_of("dep", target, &params), "other");
}

//==================================================================================SANITIZE
#[test]
/// Keywords and leading digits get an underscore prefix.
fn test_sanitize_prefix() {
    assert_eq!(sanitize_package_name("type"), "_type");
    assert_eq!(sanitize_package_name("2fa"), "_2fa");
    assert_eq!(sanitize_package_name("types"), "types");
}

#[test]
/// Characters outside `[A-Za-z0-9_]` become underscores.
fn test_sanitize_characters() {
    assert_eq!(sanitize_package_name("foo-bar.baz"), "foo_bar_baz");
    assert_eq!(sanitize_package_name("foo_bar"), "foo_bar");
    assert_eq!(sanitize_package_name(""), "");
}

#[test]
/// Word splitting used for proto package names.
fn test_snake_case() {
    assert_eq!(to_snake_case("foo.bar.v1"), "foo_bar_v1");
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_eq!(to_snake_case("v1Alpha"), "v1_alpha");
    assert_eq!(to_snake_case("already_snake"), "already_snake");
    assert_eq!(to_snake_case(".leading"), "leading");
}

//==================================================================================PACKAGE
#[test]
/// A package is named after its first file.
fn test_package_first_file() {
    let mut builder = SchemaBuilder::new();
    let package = builder.package("acme");
    builder.file(package, FileInfo::new("a.proto").with_go_package("x/first"));
    builder.file(package, FileInfo::new("b.proto").with_go_package("x/second"));
    let graph = builder.build();

    assert_eq!(package_name(&graph, &Params::default(), package), "first");
}

#[test]
/// A package without files falls back to its own proto name.
fn test_package_without_files() {
    let mut builder = SchemaBuilder::new();
    let package = builder.package("acme.go");
    let keyword = builder.package("go");
    let graph = builder.build();

    assert_eq!(package_name(&graph, &Params::default(), package), "acme_go");
    assert_eq!(package_name(&graph, &Params::default(), keyword), "_go");
}

//==================================================================================IMPORT_PATH
#[test]
/// Import paths follow the same priority as package names.
fn test_import_paths() {
    let params: Params = "Mdep.proto=example.com/dep;deppb".parse().unwrap();
    let cases = [
        (FileInfo::new("dep.proto").dependency(), "example.com/dep"),
        (FileInfo::new("a/b.proto").with_go_package("example.com/a;apb"), "example.com/a"),
        (FileInfo::new("a/b.proto").with_go_package("example.com/a"), "example.com/a"),
        (FileInfo::new("a/b.proto").with_go_package("apb"), "a"),
        (FileInfo::new("a/b.proto"), "a"),
        (FileInfo::new("b.proto"), "."),
    ];

    for (info, expected) in cases {
        let (graph, file) = single_file("pkg", info);
        assert_eq!(go_package(&graph, &params, file).import_path, expected);
    }

    let params: Params = "import_path=example.com/gen".parse().unwrap();
    let (graph, file) = single_file("pkg", FileInfo::new("a/b.proto"));
    assert_eq!(go_package(&graph, &params, file).import_path, "example.com/gen");
}

//==================================================================================EMPTY_NAMES
#[test]
/// Trailing slashes are ignored when taking the last path segment.
fn test_trailing_slash_import_path() {
    let params: Params = "import_path=example.com/foo/".parse().unwrap();
    assert_eq!(name_of("acme", FileInfo::new("a.proto"), &params), "foo");

    let (graph, file) = single_file("acme", FileInfo::new("a.proto"));
    assert_eq!(go_package(&graph, &params, file).import_path, "example.com/foo/");

    let with_option = FileInfo::new("a.proto").with_go_package("example.com/bar/");
    assert_eq!(name_of("acme", with_option, &Params::default()), "bar");
}

#[test]
/// A source naming no package falls back to the next one for the name only.
fn test_empty_name_falls_back() {
    let params = Params::default();

    let (graph, file) = single_file(
        "acme.chat",
        FileInfo::new("chat/a.proto").with_go_package("example.com/chat;"),
    );
    let resolved = go_package(&graph, &params, file);
    assert_eq!(resolved.name, "acme_chat");
    assert_eq!(resolved.import_path, "example.com/chat");

    let root = Params {
        import_path: Some("/".to_string()),
        ..Params::default()
    };
    assert_eq!(name_of("", FileInfo::new("dir/widget.proto"), &root), "widget");

    let mapping: Params = "Mdep.proto=example.com/dep;".parse().unwrap();
    let (graph, file) = single_file("dep.v1", FileInfo::new("dep.proto").dependency());
    let resolved = go_package(&graph, &mapping, file);
    assert_eq!(resolved.name, "dep_v1");
    assert_eq!(resolved.import_path, "example.com/dep");
}
