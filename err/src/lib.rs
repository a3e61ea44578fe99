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

//! Error kinds raised by the FAT32 and NTFS decoders and their shared
//! volume glue.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The boot-sector signature does not match the decoder being probed.
    #[error("not a recognized volume for this decoder")]
    NotThisFormat,
    /// A FAT cluster chain escaped the table, cycled, or outran its length.
    #[error("corrupt cluster chain: {0}")]
    CorruptChain(String),
    /// An MFT record failed header or required-attribute validation.
    #[error("corrupt MFT record: {0}")]
    CorruptRecord(String),
    /// A path component was absent in the target directory.
    #[error("not found: {0}")]
    NotFound(String),
    /// A non-final path component resolved to a file.
    #[error("not a directory: {0}")]
    NotADirectory(String),
    /// `read_text` targeted a directory.
    #[error("is a directory: {0}")]
    IsADirectory(String),
    /// File bytes could not be decoded as UTF-8.
    #[error("not a text file")]
    NotText,
    /// `chdir("")` or `read_text("")`.
    #[error("a path is required")]
    RequiresPath,
    /// The underlying block device could not be read.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
