use getset_types::{RecordDef, SourceUnit, TypeExpr};
use std::collections::HashMap;

/* Read-only index of the top-level records of one source unit */
#[derive(Debug)]
pub struct RecordCatalog<'a> {
    records: HashMap<&'a str, &'a RecordDef>,
    order: Vec<&'a str>,
}

impl<'a> RecordCatalog<'a> {
    pub fn from_unit(unit: &'a SourceUnit) -> Self {
        Self::from_records(&unit.records)
    }

    /* A later declaration with the same name replaces the earlier one */
    pub fn from_records(records: &'a [RecordDef]) -> Self {
        let mut index = HashMap::new();
        let mut order = Vec::new();
        for record in records {
            if index.insert(record.name.as_str(), record).is_none() {
                order.push(record.name.as_str());
            }
        }
        Self {
            records: index,
            order,
        }
    }

    pub fn get(&self, name: &str) -> Option<&'a RecordDef> {
        self.records.get(name).copied()
    }

    /// Resolve a field type to a record; `Foo` and `*Foo` both find `Foo`.
    pub fn lookup(&self, ty: &TypeExpr) -> Option<&'a RecordDef> {
        let record_ref = ty.record_ref()?;
        self.get(record_ref.base_name)
    }

    /* Record names in declaration order */
    pub fn names(&self) -> &[&'a str] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
