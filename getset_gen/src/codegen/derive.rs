//! Accessor Derivation
//!
//! Flattens one record, including nested, inline and embedded sub-records,
//! into a list of leaf accessors. Every leaf contributes a getter, an
//! interface signature and, when requested, a setter.
//!
//! Two prefixes are threaded through the depth-first walk:
//!
//! - the method-name stem: every named field appends its name, embedded
//!   records append nothing;
//! - the access path: every named field appends `.name`, embedded records
//!   pass the current path through unchanged (field promotion).
//!
//! Only exported names take part. A record already being expanded on the
//! current branch is not expanded again; the field that refers back to it
//! is treated as a leaf.

use crate::codegen::go_gen::{
    emit_getter, emit_setter, getter_signature, setter_signature, Receiver,
};
use crate::codegen::render::{replace_empty_interface, TypeRenderer};
use crate::error::DeriveError;
use crate::model::catalog::RecordCatalog;
use getset_types::{FieldDef, RecordDef, TypeExpr};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeriveOptions {
    pub generate_setters: bool,
    pub use_any_type: bool,
    /* Keep colliding stems instead of rejecting the record */
    pub allow_duplicates: bool,
}

/// One leaf field reachable from the record receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorEntry {
    pub method_suffix: String,
    pub access_path: String,
    pub rendered_type: String,
}

/// Generated fragments for one record, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub entries: Vec<AccessorEntry>,
    pub getters: Vec<String>,
    pub setters: Vec<String>,
    pub interface_methods: Vec<String>,
}

impl Output {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn replace_empty_interface(&mut self) {
        for fragment in self
            .getters
            .iter_mut()
            .chain(self.setters.iter_mut())
            .chain(self.interface_methods.iter_mut())
        {
            *fragment = replace_empty_interface(fragment);
        }
    }
}

pub fn derive<'a>(
    record: &'a RecordDef,
    catalog: &RecordCatalog<'a>,
    options: &DeriveOptions,
) -> Result<Output, DeriveError> {
    let mut deriver = Deriver {
        record,
        receiver: Receiver::for_record(&record.name),
        catalog,
        renderer: TypeRenderer::new(options.use_any_type),
        options: *options,
        chain: vec![record.name.as_str()],
        seen: HashMap::new(),
        output: Output::default(),
    };

    deriver.walk(&record.fields, "", "")?;

    let mut output = deriver.output;
    if options.use_any_type {
        output.replace_empty_interface();
    }

    tracing::debug!(
        "derived {} accessor(s) for {}",
        output.entries.len(),
        record.name
    );
    Ok(output)
}

/* Fields to descend into, plus the record name when it is a top-level one */
struct SubRecord<'a> {
    fields: &'a [FieldDef],
    name: Option<&'a str>,
}

struct Deriver<'a, 'c> {
    record: &'a RecordDef,
    receiver: Receiver,
    catalog: &'c RecordCatalog<'a>,
    renderer: TypeRenderer,
    options: DeriveOptions,
    /* Top-level records entered on the current branch */
    chain: Vec<&'a str>,
    /* stem -> access path of the first leaf that produced it */
    seen: HashMap<String, String>,
    output: Output,
}

impl<'a> Deriver<'a, '_> {
    fn walk(
        &mut self,
        fields: &'a [FieldDef],
        name_prefix: &str,
        access_prefix: &str,
    ) -> Result<(), DeriveError> {
        for field in fields {
            if field.is_embedded() {
                self.visit_embedded(field, name_prefix, access_prefix)?;
                continue;
            }
            let Some(name) = field.name.as_deref() else {
                continue;
            };
            if !field.is_exported() {
                self.skip_unexported(name, field);
                continue;
            }
            let stem = format!("{}{}", name_prefix, name);
            let access = join_access(access_prefix, name);
            self.visit(&field.field_type, &stem, &access)?;
        }
        Ok(())
    }

    fn skip_unexported(&self, name: &str, field: &FieldDef) {
        match &field.tag {
            Some(tag) => tracing::debug!("{}: skipping unexported field {} {}", self.record.name, name, tag),
            None => tracing::debug!("{}: skipping unexported field {}", self.record.name, name),
        }
    }

    fn visit(&mut self, ty: &'a TypeExpr, stem: &str, access: &str) -> Result<(), DeriveError> {
        match self.sub_record(ty) {
            Some(sub) => self.descend(sub, stem, access),
            None => self.emit_leaf(ty, stem, access),
        }
    }

    /* Embedded records are promoted; any other embedded type is named by its identifier */
    fn visit_embedded(
        &mut self,
        field: &'a FieldDef,
        name_prefix: &str,
        access_prefix: &str,
    ) -> Result<(), DeriveError> {
        let ty = &field.field_type;
        if let Some(sub) = self.sub_record(ty) {
            return self.descend(sub, name_prefix, access_prefix);
        }

        let Some(name) = ty.embedded_name() else {
            tracing::debug!("{}: skipping embedded field without a type name", self.record.name);
            return Ok(());
        };
        if !field.is_exported() {
            self.skip_unexported(name, field);
            return Ok(());
        }

        let stem = format!("{}{}", name_prefix, name);
        let access = join_access(access_prefix, name);
        self.emit_leaf(ty, &stem, &access)
    }

    fn sub_record(&self, ty: &'a TypeExpr) -> Option<SubRecord<'a>> {
        if let Some(inline) = ty.as_inline_record() {
            return Some(SubRecord {
                fields: &inline.fields,
                name: None,
            });
        }

        let record_ref = ty.record_ref()?;
        let record = self.catalog.lookup(ty)?;
        if self.chain.contains(&record.name.as_str()) {
            tracing::debug!(
                "{}: '{}' refers back to a record being expanded, keeping it as a leaf",
                self.record.name,
                record.name
            );
            return None;
        }
        tracing::debug!(
            "{}: expanding {}{}",
            self.record.name,
            if record_ref.is_pointer { "*" } else { "" },
            record.name
        );
        Some(SubRecord {
            fields: &record.fields,
            name: Some(record.name.as_str()),
        })
    }

    fn descend(&mut self, sub: SubRecord<'a>, stem: &str, access: &str) -> Result<(), DeriveError> {
        if let Some(name) = sub.name {
            self.chain.push(name);
        }
        let result = self.walk(sub.fields, stem, access);
        if sub.name.is_some() {
            self.chain.pop();
        }
        result
    }

    fn emit_leaf(&mut self, ty: &TypeExpr, stem: &str, access: &str) -> Result<(), DeriveError> {
        if let Some(first) = self.seen.get(stem) {
            if !self.options.allow_duplicates {
                return Err(DeriveError::DuplicateAccessor {
                    record: self.record.name.clone(),
                    method: format!("Get{}", stem),
                    first: first.clone(),
                    second: access.to_string(),
                });
            }
            tracing::warn!(
                "{}: accessor Get{} generated more than once",
                self.record.name,
                stem
            );
        } else {
            self.seen.insert(stem.to_string(), access.to_string());
        }

        let rendered = self.renderer.render(ty);
        let output = &mut self.output;

        output.getters.push(emit_getter(&self.receiver, stem, &rendered, access));
        output.interface_methods.push(getter_signature(stem, &rendered));

        if self.options.generate_setters {
            output.setters.push(emit_setter(&self.receiver, stem, &rendered, access));
            output
                .interface_methods
                .push(setter_signature(&self.receiver, stem, &rendered));
        }

        output.entries.push(AccessorEntry {
            method_suffix: stem.to_string(),
            access_path: access.to_string(),
            rendered_type: rendered,
        });
        Ok(())
    }
}

fn join_access(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
