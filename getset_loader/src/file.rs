use crate::error::LoadError;
use crate::parser::parse_source;
use getset_types::SourceUnit;
use std::path::Path;

/* Read and parse one Go source file */
pub fn load_source_unit(path: &Path) -> Result<SourceUnit, LoadError> {
    let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let unit = parse_source(&src).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "parsed {}: package {}, {} record(s)",
        path.display(),
        unit.package,
        unit.records.len()
    );

    Ok(unit)
}
