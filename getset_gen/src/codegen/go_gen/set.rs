use super::Receiver;

/* A record named `V...` already owns `v` as its receiver */
pub fn setter_param(receiver: &Receiver) -> &'static str {
    if receiver.var == "v" { "value" } else { "v" }
}

pub fn emit_setter(receiver: &Receiver, stem: &str, rendered_type: &str, access_path: &str) -> String {
    let param = setter_param(receiver);
    format!(
        "func ({var} *{ty}) Set{stem}({param} {arg}) {{\n\t{var}.{path} = {param}\n}}",
        var = receiver.var,
        ty = receiver.type_name,
        stem = stem,
        param = param,
        arg = rendered_type,
        path = access_path,
    )
}

pub fn setter_signature(receiver: &Receiver, stem: &str, rendered_type: &str) -> String {
    format!("Set{}({} {})", stem, setter_param(receiver), rendered_type)
}
