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

//! Opens a raw block device or disk image through the host's ordinary
//! file I/O and exposes it as a [`BlockReader`].

use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    sync::Mutex,
};

use log::debug;
use platter_ds::{BlockReader, Error, Result};

/// A [`BlockReader`] backed by a host file handle.
///
/// Reads are never concurrent from a single `Volume` (see the crate-level
/// concurrency notes), so a seek-then-read pair behind a mutex is
/// sufficient and keeps this portable across platforms that don't expose
/// positioned reads.
pub struct BlockDeviceFile {
    file: Mutex<File>,
    size: Option<u64>,
}

impl BlockDeviceFile {
    /// Opens `path` (a disk image, or a raw device node such as
    /// `/dev/sdb` or `\\.\PhysicalDrive0`) for reading.
    pub fn open(path: &str) -> Result<Self> {
        let file = File::open(path)?;
        let size = file.metadata().ok().map(|m| m.len());
        debug!("opened {path} ({size:?} bytes)");
        Ok(Self {
            file: Mutex::new(file),
            size,
        })
    }
}

impl BlockReader for BlockDeviceFile {
    fn read_at(&self, offset: u64, buffer: &mut [u8]) -> Result<()> {
        let mut file = self.file.lock().expect("block device mutex poisoned");
        file.seek(SeekFrom::Start(offset))?;
        file.read_exact(buffer)?;
        Ok(())
    }

    fn size_hint(&self) -> Option<u64> {
        self.size
    }
}
