use serde_derive::{Deserialize, Serialize};

/* Structural description of a field type as written in the source */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum TypeExpr {
    Named(String),
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    Array(ArrayType),
    Map(MapType),
    Qualified(QualifiedType),
    Record(StructType),
    /* Function, channel, interface and generic instantiation types */
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ArrayType {
    /* Length expression exactly as written, e.g. `4` or `Size` */
    pub len: String,
    pub element_type: Box<TypeExpr>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MapType {
    pub key_type: Box<TypeExpr>,
    pub value_type: Box<TypeExpr>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct QualifiedType {
    pub package: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct StructType {
    pub fields: Vec<FieldDef>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FieldDef {
    /* None for an embedded field */
    #[serde(default)]
    pub name: Option<String>,
    #[serde(with = "serde_yml::with::singleton_map_recursive")]
    pub field_type: TypeExpr,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RecordDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/* One parsed source file: its package clause and every top-level record */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct SourceUnit {
    pub package: String,
    pub records: Vec<RecordDef>,
}

/// Reference from a field type to a top-level record, e.g. `Foo` or `*Foo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef<'a> {
    pub base_name: &'a str,
    pub is_pointer: bool,
}

/// Go's export rule: the first character is an upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn slice(element: TypeExpr) -> Self {
        TypeExpr::Slice(Box::new(element))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map(MapType {
            key_type: Box::new(key),
            value_type: Box::new(value),
        })
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Qualified(QualifiedType {
            package: package.into(),
            name: name.into(),
        })
    }

    /// Names a candidate top-level record: `Named` or a single `Pointer` to `Named`.
    pub fn record_ref(&self) -> Option<RecordRef<'_>> {
        match self {
            TypeExpr::Named(name) => Some(RecordRef {
                base_name: name,
                is_pointer: false,
            }),
            TypeExpr::Pointer(inner) => match inner.as_ref() {
                TypeExpr::Named(name) => Some(RecordRef {
                    base_name: name,
                    is_pointer: true,
                }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Implicit field name of an embedded type: `T`, `*T`, `pkg.T` and `*pkg.T` all yield `T`.
    pub fn embedded_name(&self) -> Option<&str> {
        match self {
            TypeExpr::Named(name) => Some(name),
            TypeExpr::Qualified(q) => Some(&q.name),
            TypeExpr::Pointer(inner) => match inner.as_ref() {
                TypeExpr::Named(name) => Some(name),
                TypeExpr::Qualified(q) => Some(&q.name),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_inline_record(&self) -> Option<&StructType> {
        match self {
            TypeExpr::Record(st) => Some(st),
            _ => None,
        }
    }
}

impl FieldDef {
    pub fn named(name: impl Into<String>, field_type: TypeExpr) -> Self {
        Self {
            name: Some(name.into()),
            field_type,
            tag: None,
        }
    }

    pub fn embedded(field_type: TypeExpr) -> Self {
        Self {
            name: None,
            field_type,
            tag: None,
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.name.is_none()
    }

    /* Embedded fields are judged by the implicit name of their type */
    pub fn is_exported(&self) -> bool {
        match &self.name {
            Some(name) => is_exported(name),
            None => self.field_type.embedded_name().is_some_and(is_exported),
        }
    }
}

impl RecordDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}
