// Copyright 2024 The Platter Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared types for the volume decoders: the [`Volume`] capability every
//! decoder implements, the directory entry metadata it hands back, and
//! the on-disk attribute flags both FAT32 and NTFS encode the same way.

mod time;

pub use platter_err::{Error, Result};
pub use time::Timestamp;

use bitflags::bitflags;

bitflags! {
    /// File/directory attribute bits, shared verbatim between FAT32's
    /// directory entries and NTFS's `$STANDARD_INFORMATION` attribute.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Attributes: u32 {
        const READ_ONLY = 0x01;
        const HIDDEN    = 0x02;
        const SYSTEM    = 0x04;
        const VOLUME_ID = 0x08;
        const DIRECTORY = 0x10;
        const ARCHIVE   = 0x20;
    }
}

/// One entry as returned by [`Volume::list`].
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: String,
    pub attributes: Attributes,
    pub modified: Option<Timestamp>,
    /// Size in bytes; always 0 for directories.
    pub size: u64,
    /// The sector this entry's data begins at, for display in a listing.
    pub sector: u64,
}

impl DirEntryInfo {
    pub fn is_directory(&self) -> bool {
        self.attributes.contains(Attributes::DIRECTORY)
    }
}

/// The capability a decoded volume exposes to callers, independent of
/// whether it's backed by a FAT32 or an NTFS filesystem.
pub trait Volume {
    /// A short human-readable description of the volume (format, label,
    /// size), used by a shell's `info` command.
    fn describe(&self) -> String;

    /// The current working directory, as a backslash-joined path prefixed
    /// with the volume name; a bare volume name renders with a trailing
    /// `\`.
    fn cwd(&self) -> String;

    /// Lists the entries of the directory at `path`. An empty path lists
    /// the current working directory.
    fn list(&mut self, path: &str) -> Result<Vec<DirEntryInfo>>;

    /// Changes the current working directory to `path`, which may be
    /// relative to the current directory or absolute.
    fn chdir(&mut self, path: &str) -> Result<()>;

    /// Reads the file at `path` and decodes it as UTF-8 text.
    fn read_text(&mut self, path: &str) -> Result<String>;
}

/// Splits a `/`- or `\`-separated path into its non-empty components.
///
/// `"a/b/c"`, `"/a/b/c"` and `"a\\b\\c"` all yield `["a", "b", "c"]`; an
/// empty or root-only path yields an empty vector. Components are not
/// otherwise interpreted here — `.` and `..` handling is decoder-specific
/// (see the FAT32 and NTFS crates).
pub fn split_path(path: &str) -> Vec<String> {
    path.split(['/', '\\'])
        .filter(|component| !component.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mixed_separators() {
        assert_eq!(split_path("/a/b\\c"), vec!["a", "b", "c"]);
        assert_eq!(split_path(""), Vec::<String>::new());
        assert_eq!(split_path("/"), Vec::<String>::new());
    }

    #[test]
    fn attribute_bits_match_fat_layout() {
        assert_eq!(Attributes::DIRECTORY.bits(), 0x10);
        assert_eq!(Attributes::ARCHIVE.bits(), 0x20);
    }
}
