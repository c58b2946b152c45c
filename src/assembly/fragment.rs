//! Fragment records and benchmark-file parsing.
//!
//! Benchmark files interleave header and sequence lines: line 0 is a
//! header, line 1 the first sequence, line 2 the next header, and so on.
//! Only the odd-numbered lines carry sequence data.

use crate::error::AssemblyError;
use std::path::Path;

/// One sequenced DNA fragment.
///
/// The `index` is the fragment's position in the input file and is the
/// value that appears in solution genomes; the optimizer never touches
/// the sequence itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    /// Nucleotide sequence.
    pub sequence: String,

    /// Length of the sequence, in bases.
    pub length: usize,

    /// Zero-based position of this fragment in the input file.
    pub index: usize,
}

impl Fragment {
    /// Creates a fragment from a sequence and its file position.
    pub fn new(sequence: impl Into<String>, index: usize) -> Self {
        let sequence = sequence.into();
        let length = sequence.len();
        Self {
            sequence,
            length,
            index,
        }
    }
}

/// Parses fragments from the raw contents of a benchmark file.
///
/// Sequences are the odd-numbered lines (0-based) of the newline-split
/// input; even-numbered lines are headers and are skipped. Fragments are
/// indexed in order of appearance.
pub fn parse_fragments(contents: &str) -> Vec<Fragment> {
    contents
        .split('\n')
        .skip(1)
        .step_by(2)
        .enumerate()
        .map(|(index, line)| Fragment::new(line, index))
        .collect()
}

/// Reads and parses a fragment benchmark file.
///
/// # Errors
///
/// Returns [`AssemblyError::FragmentFile`] if the file cannot be read.
pub fn read_fragments(path: impl AsRef<Path>) -> Result<Vec<Fragment>, AssemblyError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| AssemblyError::FragmentFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_fragments(&contents))
}

// ============================================================================
// Tests
// ============================================================================
