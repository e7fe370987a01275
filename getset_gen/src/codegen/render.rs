//! Type Renderer
//!
//! Turns a `TypeExpr` back into Go source text. Anything the parser could
//! not describe structurally renders as the empty-interface placeholder.

use getset_types::TypeExpr;

pub const EMPTY_INTERFACE: &str = "interface{}";
pub const ANY_ALIAS: &str = "any";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeRenderer {
    use_any_type: bool,
}

impl TypeRenderer {
    pub fn new(use_any_type: bool) -> Self {
        Self { use_any_type }
    }

    pub fn placeholder(&self) -> &'static str {
        if self.use_any_type {
            ANY_ALIAS
        } else {
            EMPTY_INTERFACE
        }
    }

    pub fn render(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Named(name) if name == EMPTY_INTERFACE => self.placeholder().to_string(),
            TypeExpr::Named(name) => name.clone(),
            TypeExpr::Pointer(inner) => format!("*{}", self.render(inner)),
            TypeExpr::Slice(element) => format!("[]{}", self.render(element)),
            TypeExpr::Array(array) => format!("[{}]{}", array.len, self.render(&array.element_type)),
            TypeExpr::Map(map) => format!(
                "map[{}]{}",
                self.render(&map.key_type),
                self.render(&map.value_type)
            ),
            TypeExpr::Qualified(q) => format!("{}.{}", q.package, q.name),
            TypeExpr::Record(_) | TypeExpr::Unknown => self.placeholder().to_string(),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every whole `interface{}` token in `text` with `any`.
pub fn replace_empty_interface(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (idx, _) in text.match_indices(EMPTY_INTERFACE) {
        let preceded_by_ident = text[..idx].chars().next_back().is_some_and(is_ident_char);
        if preceded_by_ident {
            continue;
        }
        out.push_str(&text[last..idx]);
        out.push_str(ANY_ALIAS);
        last = idx + EMPTY_INTERFACE.len();
    }
    out.push_str(&text[last..]);
    out
}
