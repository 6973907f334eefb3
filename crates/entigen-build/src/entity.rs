use crate::source::{SourceBuilder, SourceUnit};
use entigen_schema::{
    descriptor::{FieldDescriptor, FieldTarget},
    types::Primitive,
};
use std::collections::BTreeSet;

///
/// MethodSpec
///
/// The single method-synthesis primitive. Accessors, the definition factory,
/// and the metadata loader all render through it so the three method
/// families stay textually consistent.
///

pub(crate) struct MethodSpec<'a> {
    pub name: &'a str,
    pub args: &'a [String],
    pub ret: Option<&'a str>,
    pub nullable: bool,
    pub body: &'a [String],

    /// Associated function (no receiver); otherwise takes `&self`.
    pub assoc: bool,

    /// Rendered inside an inherent impl; trait impls carry no `pub`.
    pub public: bool,
}

impl MethodSpec<'_> {
    pub fn render(&self, out: &mut SourceBuilder) {
        let mut sig = String::new();
        if self.public {
            sig.push_str("pub ");
        }
        sig.push_str("fn ");
        sig.push_str(self.name);
        sig.push('(');

        let mut params: Vec<&str> = Vec::new();
        if !self.assoc {
            params.push("&self");
        }
        params.extend(self.args.iter().map(String::as_str));
        sig.push_str(&params.join(", "));
        sig.push(')');

        if let Some(ret) = self.ret {
            if self.nullable {
                sig.push_str(&format!(" -> Option<{ret}>"));
            } else {
                sig.push_str(&format!(" -> {ret}"));
            }
        }
        sig.push_str(" {");

        out.push_line(&sig);
        out.indent();
        for line in self.body {
            out.push_line(line);
        }
        out.dedent();
        out.push_line("}");
    }
}

///
/// EntityBuilder
///
/// Assembles one entity source unit from an ordered field-descriptor list.
/// Output is byte-identical for identical inputs: every rendered line
/// follows descriptor order or an explicitly sorted import set.
///

pub struct EntityBuilder<'a> {
    class_name: &'a str,
    table_name: &'a str,
    identifier: &'a [String],
    fields: &'a [FieldDescriptor],
}

impl<'a> EntityBuilder<'a> {
    #[must_use]
    pub const fn new(
        class_name: &'a str,
        table_name: &'a str,
        identifier: &'a [String],
        fields: &'a [FieldDescriptor],
    ) -> Self {
        Self {
            class_name,
            table_name,
            identifier,
            fields,
        }
    }

    /// Render the complete unit.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut unit = SourceUnit::new(vec![
            "Generated by entigen. Do not edit.".to_string(),
            String::new(),
            format!(
                "Entity `{}` mapped to table `{}`.",
                self.class_name, self.table_name
            ),
        ]);

        unit.imports = self.imports();
        unit.items.push(self.struct_decl());
        unit.items.push(self.inherent_impl());
        unit.items.push(self.entity_kind_impl());

        unit.to_source()
    }

    // Fixed runtime imports first, then one import per distinct wrapper
    // type, deduplicated and sorted by the rendered line.
    fn imports(&self) -> Vec<String> {
        let any_base = self.fields.iter().any(FieldDescriptor::is_base_type);
        let any_wrapper = self.fields.iter().any(|f| !f.is_base_type());
        let any_array = self
            .fields
            .iter()
            .any(|f| f.primitive() == Some(Primitive::Array));

        let mut lines = vec![
            "use entigen::core::builder::ClassMetadataBuilder;".to_string(),
            "use entigen::core::definition::{Definition, DefinitionCollection};".to_string(),
            "use entigen::core::entity::EntityKind;".to_string(),
        ];
        if any_base {
            lines.push("use entigen::core::kind::FieldKind;".to_string());
        }
        if any_wrapper {
            lines.push("use entigen::core::scalar::ScalarType;".to_string());
        }
        if any_array {
            lines.push("use entigen::core::value::Json;".to_string());
        }

        let wrappers: BTreeSet<String> = self
            .fields
            .iter()
            .filter_map(|f| f.wrapper())
            .map(|(_, path)| format!("use {path};"))
            .collect();
        lines.extend(wrappers);

        lines
    }

    fn struct_decl(&self) -> String {
        let mut out = SourceBuilder::new();

        out.push_line(&format!("pub struct {} {{", self.class_name));
        out.indent();
        for field in self.fields {
            out.push_line(&format!("{}: {},", field.column_name, slot_type(field)));
        }
        out.dedent();
        out.push_line("}");

        out.build().trim_end().to_string()
    }

    fn inherent_impl(&self) -> String {
        let mut out = SourceBuilder::new();

        out.push_line(&format!("impl {} {{", self.class_name));
        out.indent();

        self.constructor().render(&mut out);

        for field in self.fields {
            out.blank();
            let (ret, body) = accessor_parts(field);
            let body = vec![body];
            MethodSpec {
                name: &field.field_name,
                args: &[],
                ret: Some(&ret),
                nullable: field.nullable,
                body: &body,
                assoc: false,
                public: true,
            }
            .render(&mut out);
        }

        out.dedent();
        out.push_line("}");

        out.build().trim_end().to_string()
    }

    fn constructor(&self) -> OwnedMethod {
        let args: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.column_name, slot_type(f)))
            .collect();

        let mut body = vec!["Self {".to_string()];
        for field in self.fields {
            body.push(format!("    {},", field.column_name));
        }
        body.push("}".to_string());

        OwnedMethod {
            name: "new".to_string(),
            args,
            ret: Some("Self".to_string()),
            nullable: false,
            body,
            assoc: true,
            public: true,
        }
    }

    fn entity_kind_impl(&self) -> String {
        let mut out = SourceBuilder::new();

        out.push_line(&format!("impl EntityKind for {} {{", self.class_name));
        out.indent();
        self.definitions_method().render(&mut out);
        out.blank();
        self.load_metadata_method().render(&mut out);
        out.dedent();
        out.push_line("}");

        out.build().trim_end().to_string()
    }

    fn definitions_method(&self) -> OwnedMethod {
        let mut body = vec!["DefinitionCollection::new(vec![".to_string()];
        for field in self.fields {
            body.push(format!("    {},", definition_entry(field)));
        }
        body.push("])".to_string());

        OwnedMethod {
            name: "definitions".to_string(),
            args: Vec::new(),
            ret: Some("DefinitionCollection".to_string()),
            nullable: false,
            body,
            assoc: true,
            public: false,
        }
    }

    fn load_metadata_method(&self) -> OwnedMethod {
        let mut body = vec![format!("builder.set_table(\"{}\");", self.table_name)];
        body.push(String::new());

        for field in self.fields {
            let type_ref = match &field.target {
                FieldTarget::Base { .. } => format!("\"{}\"", field.source_type),
                FieldTarget::Wrapper { class_name, .. } => format!("{class_name}::NAME"),
            };

            let marker = if self.identifier.iter().any(|id| id == &field.column_name) {
                ".primary_key()".to_string()
            } else {
                format!(".nullable({})", field.nullable)
            };

            body.push(format!(
                "builder.create_field(\"{}\", {type_ref}){marker}.build();",
                field.column_name
            ));
        }

        OwnedMethod {
            name: "load_metadata".to_string(),
            args: vec!["builder: &mut ClassMetadataBuilder".to_string()],
            ret: None,
            nullable: false,
            body,
            assoc: true,
            public: false,
        }
    }
}

// Owned variant of MethodSpec for methods whose parts are computed.
struct OwnedMethod {
    name: String,
    args: Vec<String>,
    ret: Option<String>,
    nullable: bool,
    body: Vec<String>,
    assoc: bool,
    public: bool,
}

impl OwnedMethod {
    fn render(&self, out: &mut SourceBuilder) {
        MethodSpec {
            name: &self.name,
            args: &self.args,
            ret: self.ret.as_deref(),
            nullable: self.nullable,
            body: &self.body,
            assoc: self.assoc,
            public: self.public,
        }
        .render(out);
    }
}

fn slot_type(field: &FieldDescriptor) -> String {
    let inner = match &field.target {
        FieldTarget::Base { primitive } => primitive.slot_type().to_string(),
        FieldTarget::Wrapper { class_name, .. } => class_name.clone(),
    };

    if field.nullable {
        format!("Option<{inner}>")
    } else {
        inner
    }
}

// Return type (before the Option wrapping MethodSpec applies) and body of a
// field accessor.
fn accessor_parts(field: &FieldDescriptor) -> (String, String) {
    let name = &field.column_name;

    match &field.target {
        FieldTarget::Base { primitive } => {
            let ret = primitive.accessor_type().to_string();
            let body = match (primitive.is_copy(), field.nullable) {
                (true, _) => format!("self.{name}"),
                (false, false) => format!("&self.{name}"),
                (false, true) if *primitive == Primitive::Str => {
                    format!("self.{name}.as_deref()")
                }
                (false, true) => format!("self.{name}.as_ref()"),
            };
            (ret, body)
        }
        FieldTarget::Wrapper { class_name, .. } => {
            let body = if field.nullable {
                format!("self.{name}.as_ref()")
            } else {
                format!("&self.{name}")
            };
            (format!("&{class_name}"), body)
        }
    }
}

fn definition_entry(field: &FieldDescriptor) -> String {
    match &field.target {
        FieldTarget::Base { primitive } => format!(
            "Definition::base(\"{}\", FieldKind::{}, {}, true)",
            field.column_name,
            primitive.tag(),
            field.nullable
        ),
        FieldTarget::Wrapper { class_name, .. } => format!(
            "Definition::custom::<{class_name}>(\"{}\", {}, true)",
            field.column_name, field.nullable
        ),
    }
}
