/* Generate command - write accessor files for the records of Go sources */

use crate::codegen::{derive, DeriveOptions, GoCodeGenerator, GoCodeGeneratorOptions};
use crate::error::GenerateError;
use crate::model::catalog::RecordCatalog;
use crate::naming::build_file_names;
use crate::options::GenerateOptions;
use crate::writer::write_generated_file;
use getset_loader::getset_types::RecordDef;
use getset_loader::{collect_source_files, load_source_unit};
use std::path::{Path, PathBuf};

/// Paths written by one run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
}

/* Execute the generate command */
pub fn run(options: &GenerateOptions) -> Result<GenerateReport, GenerateError> {
    let files = collect_source_files(&options.path)?;
    tracing::debug!("{} Go file(s) under {}", files.len(), options.path.display());

    let mut report = GenerateReport::default();
    for file in &files {
        if !options.quiet {
            println!("generating: {} for [{}]", file.display(), options.record_names.join(" "));
        }
        generate_file(file, options, &mut report)?;
    }

    Ok(report)
}

/// Requested records in request order, or every record when nothing was requested.
pub fn resolve_targets<'a>(
    catalog: &RecordCatalog<'a>,
    requested: &[String],
    path: &Path,
) -> Result<Vec<&'a RecordDef>, GenerateError> {
    if catalog.is_empty() {
        tracing::debug!("{} declares no structs", path.display());
    }

    let targets: Vec<&'a RecordDef> = if requested.is_empty() {
        catalog.names().iter().filter_map(|name| catalog.get(name)).collect()
    } else {
        requested
            .iter()
            .filter_map(|name| {
                let record = catalog.get(name);
                if record.is_none() {
                    tracing::warn!("record '{}' not found in {}, skipping", name, path.display());
                }
                record
            })
            .collect()
    };

    if targets.is_empty() {
        return Err(GenerateError::NoRecords {
            path: path.to_path_buf(),
        });
    }
    Ok(targets)
}

fn generate_file(
    path: &Path,
    options: &GenerateOptions,
    report: &mut GenerateReport,
) -> Result<(), GenerateError> {
    let unit = load_source_unit(path)?;
    let catalog = RecordCatalog::from_unit(&unit);
    tracing::debug!("{}: {} record(s) in package {}", path.display(), catalog.len(), unit.package);
    let targets = resolve_targets(&catalog, &options.record_names, path)?;

    let derive_options = DeriveOptions {
        generate_setters: options.generate_setters,
        use_any_type: options.use_any_type,
        allow_duplicates: options.allow_duplicates,
    };
    let generator = GoCodeGenerator::new(GoCodeGeneratorOptions {
        package: unit.package.clone(),
        interface_name_suffix: options.suffixes.interface_name.clone(),
        emit_setters: options.generate_setters,
    });

    /* Generated files live next to their source */
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    for record in targets {
        let output = derive(record, &catalog, &derive_options).map_err(|source| GenerateError::Derive {
            path: path.to_path_buf(),
            source,
        })?;
        if output.is_empty() {
            tracing::debug!("{}: no exported leaf fields, writing empty files", record.name);
        }
        let files = generator.assemble(&record.name, &output);
        let paths = build_file_names(
            dir,
            &record.name,
            &options.suffixes.interface_file,
            &options.suffixes.getter_file,
            &options.suffixes.setter_file,
        );

        write_generated_file(&paths.getter, &files.getter, options.file_perm)?;
        report.written.push(paths.getter);

        if let Some(setter) = &files.setter {
            write_generated_file(&paths.setter, setter, options.file_perm)?;
            report.written.push(paths.setter);
        }

        write_generated_file(&paths.interface, &files.interface, options.file_perm)?;
        report.written.push(paths.interface);

        tracing::debug!("{}: {} accessor(s) written", record.name, output.entries.len());
    }

    Ok(())
}
