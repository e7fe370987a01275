use crate::codegen::derive::Output;
use crate::codegen::go_gen::{format_file, format_interface};

pub const DEFAULT_INTERFACE_NAME_SUFFIX: &str = "Interface";

pub struct GoCodeGeneratorOptions {
    pub package: String,
    pub interface_name_suffix: String,
    pub emit_setters: bool,
}

impl Default for GoCodeGeneratorOptions {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            interface_name_suffix: DEFAULT_INTERFACE_NAME_SUFFIX.to_string(),
            emit_setters: false,
        }
    }
}

/// The three source bodies generated for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub getter: String,
    /* None unless setters were requested */
    pub setter: Option<String>,
    pub interface: String,
}

pub struct GoCodeGenerator {
    options: GoCodeGeneratorOptions,
}

impl GoCodeGenerator {
    pub fn new(options: GoCodeGeneratorOptions) -> Self {
        Self { options }
    }

    pub fn interface_name(&self, record_name: &str) -> String {
        format!("{}{}", record_name, self.options.interface_name_suffix)
    }

    pub fn assemble(&self, record_name: &str, output: &Output) -> GeneratedFiles {
        let package = &self.options.package;

        let getter = format_file(package, &output.getters);
        let setter = self
            .options
            .emit_setters
            .then(|| format_file(package, &output.setters));
        let interface = format_interface(
            package,
            &self.interface_name(record_name),
            &output.interface_methods,
        );

        GeneratedFiles {
            getter,
            setter,
            interface,
        }
    }
}
