use crate::{
    error::GenerateError,
    source::{SourceBuilder, SourceUnit},
};
use entigen_schema::{
    registry::generated_type_key,
    types::{Primitive, primitive_of},
};

///
/// TypeUnitBuilder
///
/// Renders the minimal wrapper unit for one declared scalar type: a newtype
/// over the base primitive with a `new`/`get` surface and its registration
/// identity. The base storage type is the unit's only parameter.
///

pub struct TypeUnitBuilder<'a> {
    name: &'a str,
    base_type: &'a str,
}

impl<'a> TypeUnitBuilder<'a> {
    #[must_use]
    pub const fn new(name: &'a str, base_type: &'a str) -> Self {
        Self { name, base_type }
    }

    pub fn generate(&self) -> Result<String, GenerateError> {
        let primitive =
            primitive_of(self.base_type).ok_or_else(|| GenerateError::UnknownBaseType {
                name: self.name.to_string(),
                base_type: self.base_type.to_string(),
            })?;

        let class_name = generated_type_key(self.name).short_name().to_string();

        let mut unit = SourceUnit::new(vec![
            "Generated by entigen. Do not edit.".to_string(),
            String::new(),
            format!(
                "Scalar type `{}` delegating to `{}`.",
                self.name, self.base_type
            ),
        ]);

        unit.imports
            .push("use entigen::core::scalar::ScalarType;".to_string());
        if primitive == Primitive::Array {
            unit.imports
                .push("use entigen::core::value::Json;".to_string());
        }

        unit.items.push(format!(
            "#[derive(Clone, Debug)]\npub struct {class_name}({});",
            primitive.slot_type()
        ));
        unit.items.push(inherent_impl(&class_name, primitive));
        unit.items.push(format!(
            "impl ScalarType for {class_name} {{\n    const NAME: &'static str = \"{}\";\n    const BASE_TYPE: &'static str = \"{}\";\n}}",
            self.name, self.base_type
        ));

        Ok(unit.to_source())
    }
}

fn inherent_impl(class_name: &str, primitive: Primitive) -> String {
    let mut out = SourceBuilder::new();

    out.push_line(&format!("impl {class_name} {{"));
    out.indent();
    out.push_line(&format!("pub fn new(value: {}) -> Self {{", primitive.slot_type()));
    out.indent();
    out.push_line("Self(value)");
    out.dedent();
    out.push_line("}");
    out.blank();
    out.push_line(&format!("pub fn get(&self) -> {} {{", primitive.accessor_type()));
    out.indent();
    if primitive.is_copy() {
        out.push_line("self.0");
    } else {
        out.push_line("&self.0");
    }
    out.dedent();
    out.push_line("}");
    out.dedent();
    out.push_line("}");

    out.build().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_wrapper_renders_a_newtype_with_identity() {
        let source = TypeUnitBuilder::new("email", "string")
            .generate()
            .expect("render");

        assert!(source.contains("pub struct Email(String);"));
        assert!(source.contains("pub fn get(&self) -> &str {"));
        assert!(source.contains("const NAME: &'static str = \"email\";"));
        assert!(source.contains("const BASE_TYPE: &'static str = \"string\";"));
        assert!(!source.contains("Json"));

        syn::parse_file(&source).expect("unit parses");
    }

    #[test]
    fn json_wrapper_imports_the_slot_alias() {
        let source = TypeUnitBuilder::new("attributes", "json")
            .generate()
            .expect("render");

        assert!(source.contains("use entigen::core::value::Json;"));
        assert!(source.contains("pub struct Attributes(Json);"));

        syn::parse_file(&source).expect("unit parses");
    }

    #[test]
    fn copy_wrapper_returns_by_value() {
        let source = TypeUnitBuilder::new("amount", "integer")
            .generate()
            .expect("render");

        assert!(source.contains("pub fn get(&self) -> i64 {"));
        assert!(source.contains("        self.0"));
    }

    #[test]
    fn unknown_base_type_is_a_lookup_error() {
        let err = TypeUnitBuilder::new("price", "decimal")
            .generate()
            .expect_err("unknown base");

        assert!(matches!(err, GenerateError::UnknownBaseType { .. }));
    }
}
