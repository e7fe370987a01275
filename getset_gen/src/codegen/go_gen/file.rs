/* Package clause followed by fragments separated by blank lines */
pub fn format_file(package: &str, fragments: &[String]) -> String {
    format!("package {}\n\n{}\n", package, fragments.join("\n\n"))
}

pub fn format_interface(package: &str, interface_name: &str, methods: &[String]) -> String {
    format!(
        "package {}\n\ntype {} interface {{\n\t{}\n}}\n",
        package,
        interface_name,
        methods.join("\n\t")
    )
}
