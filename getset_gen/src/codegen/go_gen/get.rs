use super::Receiver;

pub fn emit_getter(receiver: &Receiver, stem: &str, rendered_type: &str, access_path: &str) -> String {
    format!(
        "func ({var} *{ty}) Get{stem}() {ret} {{\n\treturn {var}.{path}\n}}",
        var = receiver.var,
        ty = receiver.type_name,
        stem = stem,
        ret = rendered_type,
        path = access_path,
    )
}

pub fn getter_signature(stem: &str, rendered_type: &str) -> String {
    format!("Get{}() {}", stem, rendered_type)
}
