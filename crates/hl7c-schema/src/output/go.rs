//! Go emitter.
//!
//! [`lower`] turns a sanitized [`Config`] into a [`GoFile`]; [`GoWriter`]
//! renders it. Struct fields are column-aligned the way `gofmt` aligns them,
//! so the formatter pass should leave the output unchanged.

use super::syntax::*;
use crate::config::{Config, Field};
use crate::resolve::{TypeClass, resolve};
use std::fmt::Write;

/// Name of the bookkeeping struct embedded by every model.
pub const BASE_STRUCT: &str = "Base";

/// Generate Go source for a sanitized config.
pub fn generate_go(config: &Config) -> String {
    GoWriter::emit(&lower(config))
}

/// Build the Go syntax tree for a sanitized config.
///
/// Declaration order is fixed: `Base`, then each custom type (followed by its
/// `UnmarshalJSON` when it needs one), then each model and its `UnmarshalJSON`.
pub fn lower(config: &Config) -> GoFile {
    let mut decls = vec![Decl::Struct(base_struct())];

    for custom in &config.types {
        decls.push(Decl::Struct(struct_decl(&custom.name, Vec::new(), &custom.fields)));
        if custom.needs_custom_deserialize() {
            decls.push(Decl::Unmarshal(unmarshal_fn(
                "t",
                &custom.name,
                &custom.fields,
                false,
            )));
        }
    }

    for model in &config.models {
        decls.push(Decl::Struct(struct_decl(
            &model.name,
            vec![BASE_STRUCT.to_string()],
            &model.fields,
        )));
        decls.push(Decl::Unmarshal(unmarshal_fn(
            "m",
            &model.name,
            &model.fields,
            true,
        )));
    }

    GoFile {
        package: config.meta.package_name().to_string(),
        imports: config.meta.imports.clone(),
        decls,
    }
}

fn base_struct() -> StructDecl {
    StructDecl {
        name: BASE_STRUCT.to_string(),
        embeds: Vec::new(),
        fields: vec![
            StructField::new("ID", "uuid.UUID"),
            StructField::new("CreatedAt", "time.Time"),
            StructField::new("UpdatedAt", "time.Time"),
        ],
    }
}

fn struct_decl(name: &str, embeds: Vec<String>, fields: &[Field]) -> StructDecl {
    StructDecl {
        name: name.to_string(),
        embeds,
        fields: fields
            .iter()
            .map(|f| StructField::new(&f.name, resolve(&f.ty).go_type).with_tag(&f.tag))
            .collect(),
    }
}

fn unmarshal_fn(
    receiver: &'static str,
    type_name: &str,
    fields: &[Field],
    stamp_base: bool,
) -> UnmarshalFn {
    let shadows = fields
        .iter()
        .filter_map(|f| match resolve(&f.ty).class {
            TypeClass::Temporal(layout) => Some(ShadowField {
                name: f.name.clone(),
                json_tag: f.tag.clone(),
                layout,
            }),
            _ => None,
        })
        .collect();

    UnmarshalFn {
        receiver,
        type_name: type_name.to_string(),
        shadows,
        stamp_base,
    }
}

/// Renders a [`GoFile`] as source text.
pub struct GoWriter {
    output: String,
    indent: usize,
}

impl Default for GoWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GoWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    /// Emit a file to Go source.
    pub fn emit(file: &GoFile) -> String {
        let mut writer = Self::new();
        writer.write_file(file);
        writer.output
    }

    fn write_file(&mut self, file: &GoFile) {
        writeln!(self.output, "package {}", file.package).unwrap();

        if !file.imports.is_empty() {
            self.output.push('\n');
            self.line("import (");
            self.indent += 1;
            for import in &file.imports {
                self.line(&format!("\"{}\"", import));
            }
            self.indent -= 1;
            self.line(")");
        }

        for decl in &file.decls {
            self.output.push('\n');
            match decl {
                Decl::Struct(s) => self.write_struct(s),
                Decl::Unmarshal(f) => self.write_unmarshal(f),
            }
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push('\t');
        }
    }

    fn line(&mut self, text: &str) {
        self.write_indent();
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn write_struct(&mut self, decl: &StructDecl) {
        self.line(&format!("type {} struct {{", decl.name));
        self.indent += 1;
        for embed in &decl.embeds {
            self.line(embed);
        }
        self.write_fields(&decl.fields);
        self.indent -= 1;
        self.line("}");
    }

    /// Write field lines with `gofmt` column alignment.
    fn write_fields(&mut self, fields: &[StructField]) {
        let name_width = fields.iter().map(|f| f.name.chars().count()).max();
        let type_width = fields
            .iter()
            .filter(|f| f.json_tag.is_some())
            .map(|f| f.ty.chars().count())
            .max();

        for field in fields {
            let name_width = name_width.unwrap_or(0);
            let text = match &field.json_tag {
                Some(tag) => format!(
                    "{:<nw$} {:<tw$} `json:\"{}\"`",
                    field.name,
                    field.ty,
                    tag,
                    nw = name_width,
                    tw = type_width.unwrap_or(0),
                ),
                None => format!("{:<nw$} {}", field.name, field.ty, nw = name_width),
            };
            self.line(&text);
        }
    }

    fn write_unmarshal(&mut self, func: &UnmarshalFn) {
        let r = func.receiver;
        self.line(&format!(
            "func ({} *{}) UnmarshalJSON(b []byte) error {{",
            r, func.type_name
        ));
        self.indent += 1;

        self.line(&format!("type alias {}", func.type_name));
        self.line("aux := &struct {");
        self.indent += 1;
        let shadows: Vec<StructField> = func
            .shadows
            .iter()
            .map(|s| StructField::new(&s.name, "string").with_tag(&s.json_tag))
            .collect();
        self.write_fields(&shadows);
        self.line("*alias");
        self.indent -= 1;
        self.line("}{");
        self.indent += 1;
        self.line(&format!("alias: (*alias)({}),", r));
        self.indent -= 1;
        self.line("}");

        self.line("if err := json.Unmarshal(b, &aux); err != nil {");
        self.indent += 1;
        self.line("return err");
        self.indent -= 1;
        self.line("}");

        for shadow in &func.shadows {
            self.line(&format!(
                "{r}.{name}, _ = time.Parse(\"{layout}\", aux.{name})",
                name = shadow.name,
                layout = shadow.layout.go_layout(),
            ));
        }

        if func.stamp_base {
            self.output.push('\n');
            self.line(&format!("{r}.ID = uuid.New()"));
            self.line(&format!("{r}.CreatedAt = time.Now()"));
            self.line(&format!("{r}.UpdatedAt = time.Now()"));
        }

        self.line("return nil");
        self.indent -= 1;
        self.line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CustomType, Meta, Model};
    use crate::resolve::TimeLayout;

    fn field(name: &str, ty: &str, tag: &str) -> Field {
        Field::new(name, ty, tag)
    }

    fn sample() -> Config {
        Config {
            meta: Meta {
                package: "internal/objects".into(),
                imports: vec!["encoding/json".into(), "github.com/google/uuid".into()],
            },
            models: vec![Model {
                name: "Message".into(),
                fields: vec![
                    field("SendingApp", "string", "MSH.3"),
                    field("SentAt", "timestamp", "MSH.7"),
                ],
            }],
            types: vec![
                CustomType {
                    name: "CX".into(),
                    fields: vec![field("Id", "", "1")],
                },
                CustomType {
                    name: "Account".into(),
                    fields: vec![field("Id", "", "1"), field("OpenedOn", "date", "2")],
                },
            ],
        }
    }

    #[test]
    fn declaration_order() {
        let file = lower(&sample());
        let names: Vec<String> = file
            .decls
            .iter()
            .map(|d| match d {
                Decl::Struct(s) => format!("struct {}", s.name),
                Decl::Unmarshal(f) => format!("unmarshal {}", f.type_name),
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "struct Base",
                "struct CX",
                "struct Account",
                "unmarshal Account",
                "struct Message",
                "unmarshal Message",
            ]
        );
        assert_eq!(file.package, "objects");
    }

    #[test]
    fn shadows_carry_layouts() {
        let file = lower(&sample());
        let Decl::Unmarshal(account) = &file.decls[3] else {
            panic!("expected unmarshal decl");
        };
        assert_eq!(account.receiver, "t");
        assert!(!account.stamp_base);
        assert_eq!(account.shadows.len(), 1);
        assert_eq!(account.shadows[0].layout, TimeLayout::Date);
        assert_eq!(account.shadows[0].json_tag, "2");

        let Decl::Unmarshal(message) = &file.decls[5] else {
            panic!("expected unmarshal decl");
        };
        assert_eq!(message.receiver, "m");
        assert!(message.stamp_base);
        assert_eq!(message.shadows[0].layout, TimeLayout::DateTime);
    }

    #[test]
    fn base_struct_is_aligned() {
        let go = generate_go(&sample());
        assert!(go.contains(
            "type Base struct {\n\tID        uuid.UUID\n\tCreatedAt time.Time\n\tUpdatedAt time.Time\n}\n"
        ));
    }

    #[test]
    fn model_fields_are_aligned() {
        let go = generate_go(&sample());
        assert!(go.contains(
            "type Message struct {\n\tBase\n\tSendingApp string    `json:\"MSH.3\"`\n\tSentAt     time.Time `json:\"MSH.7\"`\n}\n"
        ));
    }

    #[test]
    fn import_block_omitted_when_empty() {
        let mut config = sample();
        config.meta.imports.clear();
        let go = generate_go(&config);
        assert!(go.starts_with("package objects\n\ntype Base struct {"));
        assert!(!go.contains("import ("));
    }

    #[test]
    fn base_stamping_is_separated_by_a_blank_line() {
        let mut config = sample();
        config.models[0].fields = vec![field("SendingApp", "string", "MSH.3")];
        let go = generate_go(&config);
        assert!(go.contains(
            "\t\treturn err\n\t}\n\n\tm.ID = uuid.New()\n\tm.CreatedAt = time.Now()\n\tm.UpdatedAt = time.Now()\n\treturn nil\n}\n"
        ));
    }

    #[test]
    fn uuid_only_type_gets_unmarshal_without_shadows() {
        let mut config = sample();
        config.types = vec![CustomType {
            name: "Ref".into(),
            fields: vec![field("Key", "uuid", "1")],
        }];
        let go = generate_go(&config);
        assert!(go.contains(
            "func (t *Ref) UnmarshalJSON(b []byte) error {\n\ttype alias Ref\n\taux := &struct {\n\t\t*alias\n\t}{\n\t\talias: (*alias)(t),\n\t}\n\tif err := json.Unmarshal(b, &aux); err != nil {\n\t\treturn err\n\t}\n\treturn nil\n}\n"
        ));
    }

    #[test]
    fn emission_is_deterministic() {
        let config = sample();
        assert_eq!(generate_go(&config), generate_go(&config));
    }
}
