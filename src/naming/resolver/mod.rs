//! Entity classifier: picks the naming rule for each kind of schema entity and
//! combines the transform, the composer and the protected-name guard.
use log::trace;

use crate::conf::{Params, CLIENT_SUFFIX, SERVER_SUFFIX};
use crate::core::{EntityId, Kind, Name};
use crate::naming::{camel_case, join_names, package, replace_protected};
use crate::schema::{EntityData, EnumValueId, FieldId, FileId, PackageId, SchemaGraph, ServiceId};

//==================================================================================RESOLVER
/// Computes the Go identifier of every entity of a [`SchemaGraph`].
///
/// The resolver only reads the graph. Every method is a pure function of the
/// entity, its ancestors and the parameters, so one resolver can be shared
/// between threads.
///
/// ```
/// use pgsgo_names::{naming::Resolver, schema::{FileInfo, SchemaBuilder}};
///
/// let mut builder = SchemaBuilder::new();
/// let package = builder.package("acme");
/// let file = builder.file(package, FileInfo::new("acme.proto"));
/// let outer = builder.message(file, "outer");
/// let inner = builder.message(outer, "inner_msg");
/// let graph = builder.build();
///
/// let resolver = Resolver::new(&graph);
/// assert_eq!(resolver.name(inner), "Outer_InnerMsg");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<'g> {
    graph: &'g SchemaGraph,
    params: Params,
}

impl<'g> Resolver<'g> {
    /// Resolver with default plugin parameters.
    pub fn new(graph: &'g SchemaGraph) -> Self {
        Self::with_params(graph, Params::default())
    }

    /// Resolver honouring `import_path` and `M` parameters for package names.
    pub fn with_params(graph: &'g SchemaGraph, params: Params) -> Self {
        Self { graph, params }
    }

    pub fn graph(&self) -> &'g SchemaGraph {
        self.graph
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Identifier of any entity, dispatched on its kind:
    ///
    /// | kind                | name                                   |
    /// |---------------------|----------------------------------------|
    /// | package, file       | Go package name                        |
    /// | message, enum       | `Parent_` prefix when nested + camel   |
    /// | field, oneof        | camel, protected names suffixed by `_` |
    /// | enum value          | `Enum_` + declared value name          |
    /// | service             | [`server_name`](Self::server_name)     |
    /// | method              | camel                                  |
    ///
    /// # Panics
    /// When the entity does not belong to the graph, or when a hand-built graph
    /// breaks the ownership contract (e.g. an enum value outside an enum).
    pub fn name(&self, entity: impl Into<EntityId>) -> Name {
        let id = entity.into();
        let entity = self.graph.get(id);
        trace!("resolving {} {id} `{}`", entity.kind(), entity.name());

        let name = match entity.data() {
            EntityData::Package => package::package_name(self.graph, &self.params, PackageId(id)),
            EntityData::File(_) => package::file_package_name(self.graph, &self.params, FileId(id)),
            EntityData::Message | EntityData::Enum => {
                let local = camel_case(entity.name());
                match entity.parent() {
                    Some(parent) if self.graph.get(parent).kind() == Kind::Message => {
                        join_names(&self.name(parent), &local)
                    }
                    _ => local,
                }
            }
            EntityData::Field { .. } | EntityData::OneOf => {
                replace_protected(&camel_case(entity.name())).into_owned()
            }
            EntityData::EnumValue { .. } => {
                let owner = self.graph.value_enum(EnumValueId(id));
                self.expect_kind(owner.id(), Kind::Enum, id);
                join_names(&self.name(owner), entity.name())
            }
            EntityData::Service => return self.server_name(ServiceId(id)),
            EntityData::Method => camel_case(entity.name()),
        };

        Name::from(name)
    }

    /// Identifier of the wrapper type generated for a oneof member:
    /// `Message_Field`.
    pub fn oneof_option(&self, field: FieldId) -> Name {
        let message = self.graph.field_message(field);
        self.expect_kind(message.id(), Kind::Message, field.id());
        Name::from(join_names(&self.name(message), &self.name(field)))
    }

    /// Server interface name of a service (`ChatServer`).
    pub fn server_name(&self, service: ServiceId) -> Name {
        self.service_name(service, SERVER_SUFFIX)
    }

    /// Client interface name of a service (`ChatClient`).
    pub fn client_name(&self, service: ServiceId) -> Name {
        self.service_name(service, CLIENT_SUFFIX)
    }

    /// Go package name of a file or package. Same as [`name`](Self::name) on
    /// those kinds.
    pub fn package_name(&self, entity: impl Into<EntityId>) -> Name {
        let id = entity.into();
        match self.graph.get(id).kind() {
            Kind::Package => self.name(id),
            _ => match self.graph.file_of(id) {
                Some(file) => self.name(file),
                None => unreachable!("{id} is neither a package nor declared in a file"),
            },
        }
    }

    /// Go import path of the package generated for a file.
    pub fn import_path(&self, file: FileId) -> String {
        package::go_package(self.graph, &self.params, file).import_path
    }

    /// Names of every entity of the graph, in insertion order.
    pub fn resolve_all(&self) -> impl Iterator<Item = (EntityId, Name)> + '_ {
        self.graph.iter().map(move |(id, _)| (id, self.name(id)))
    }

    fn service_name(&self, service: ServiceId, suffix: &str) -> Name {
        let entity = self.graph.get(service.id());
        trace!("resolving service {} `{}` with suffix {suffix}", service.id(), entity.name());
        let mut name = camel_case(entity.name());
        name.push_str(suffix);
        Name::from(name)
    }

    fn expect_kind(&self, id: EntityId, expected: Kind, child: EntityId) {
        let found = self.graph.get(id).kind();
        if found != expected {
            unreachable!("{child} is owned by {found} {id}, expected a {expected}");
        }
    }
}
