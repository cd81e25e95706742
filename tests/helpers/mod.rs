//! Fixture schema shared by the integration tests: a small chat API with
//! nested types, a oneof, enums and a service.
use pgsgo_names::schema::{
    EnumId, EnumValueId, FieldId, FileId, FileInfo, MessageId, MethodId, OneOfId, PackageId,
    SchemaBuilder, SchemaGraph, ServiceId,
};

#[allow(dead_code)]
/// Ids of the interesting entities of [`chat_schema`].
pub struct ChatSchema {
    pub graph: SchemaGraph,
    pub package: PackageId,
    pub file: FileId,
    pub dependency: FileId,
    pub msg: MessageId,
    pub attachment: MessageId,
    pub kind: FieldId,
    pub string_field: FieldId,
    pub private_field: FieldId,
    pub payload: OneOfId,
    pub text: FieldId,
    pub status: EnumId,
    pub status_foo: EnumId,
    pub foo: EnumValueId,
    pub nested_value: EnumValueId,
    pub chat: ServiceId,
    pub send: MethodId,
}

/// Build the chat fixture.
///
/// ```text
/// package acme.chat.v1;            // chat/v1/chat.proto
/// message Msg {
///   message attachment_info { enum status { FOO = 0; } }
///   string kind = 1;
///   string String = 2;
///   string _private = 3;
///   oneof payload { string text = 4; }
/// }
/// enum Status { FOO = 0; }
/// service Chat { rpc send_message(..) }
/// ```
#[allow(dead_code)]
pub fn chat_schema() -> ChatSchema {
    let mut builder = SchemaBuilder::new();
    let package = builder.package("acme.chat.v1");
    let file = builder.file(package, FileInfo::new("chat/v1/chat.proto"));

    let common = builder.package("acme.common");
    let dependency = builder.file(
        common,
        FileInfo::new("common/common.proto")
            .with_go_package("example.com/common;commonpb")
            .dependency(),
    );

    let msg = builder.message(file, "Msg");
    let attachment = builder.message(msg, "attachment_info");
    let status_foo = builder.enumeration(attachment, "status");
    let nested_value = builder.enum_value(status_foo, "FOO", 0);
    let kind = builder.field(msg, "kind");
    let string_field = builder.field(msg, "String");
    let private_field = builder.field(msg, "_private");
    let payload = builder.oneof(msg, "payload");
    let text = builder.oneof_field(payload, "text");

    let status = builder.enumeration(file, "Status");
    let foo = builder.enum_value(status, "FOO", 0);

    let chat = builder.service(file, "Chat");
    let send = builder.method(chat, "send_message");

    ChatSchema {
        graph: builder.build(),
        package,
        file,
        dependency,
        msg,
        attachment,
        kind,
        string_field,
        private_field,
        payload,
        text,
        status,
        status_foo,
        foo,
        nested_value,
        chat,
        send,
    }
}
