use crate::io::{read_instance, write_edge_list, ConvertError, OutputLayout, Transformed};
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use tempfile::Builder;
use tracing::{info, instrument};

/// Counts of a single conversion.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ConvertSummary {
    pub num_vertices: usize,
    pub num_tokens: usize,
    pub num_edges: usize,
}

impl From<&Transformed> for ConvertSummary {
    fn from(transformed: &Transformed) -> Self {
        Self {
            num_vertices: transformed.num_vertices(),
            num_tokens: transformed.num_tokens(),
            num_edges: transformed.edges().len(),
        }
    }
}

/// Converts the instance at `input` and writes the edge list to `output`.
///
/// The output is first written to a temporary file next to `output` and then
/// renamed over it. On error `output` is left as it was. A new output gets
/// the usual permissions of a freshly created file, an existing one keeps
/// its permissions.
#[instrument(skip_all, fields(input = %input.display()))]
pub fn convert_instance(input: &Path, output: &Path, layout: OutputLayout) -> Result<ConvertSummary, ConvertError> {
    let transformed = read_instance(input)?;
    write_atomic(output, &transformed, layout)?;

    let summary = ConvertSummary::from(&transformed);
    info!(output = %output.display(), n = summary.num_vertices, m = summary.num_edges, tokens = summary.num_tokens);
    Ok(summary)
}

fn write_atomic(output: &Path, transformed: &Transformed, layout: OutputLayout) -> Result<(), ConvertError> {
    let err = |source| ConvertError::WriteFailure { path: output.to_path_buf(), source };

    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // subject to the umask like any other created file
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(dir).map_err(err)?;
    if let Ok(metadata) = fs::metadata(output) {
        file.as_file().set_permissions(metadata.permissions()).map_err(err)?;
    }
    write_edge_list(&mut BufWriter::new(file.as_file_mut()), transformed, layout).map_err(err)?;
    file.persist(output).map_err(|e| err(e.error))?;
    Ok(())
}
