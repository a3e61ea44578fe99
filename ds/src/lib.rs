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

//! Byte-addressable, read-only access to whatever backs a volume: a raw
//! block device, a disk image file, or anything else a decoder can be
//! pointed at.

pub use platter_err::*;

/// Random-access reader over a block device or disk image.
///
/// Every decoder in this workspace reads exclusively through this trait;
/// nothing ever reaches for `std::fs` directly. Implementors own the
/// underlying handle and are expected to release it on drop.
pub trait BlockReader {
    /// Read exactly `buffer.len()` bytes starting at `offset`.
    fn read_at(&self, offset: u64, buffer: &mut [u8]) -> Result<()>;

    /// The total size of the backing store, if known.
    fn size_hint(&self) -> Option<u64>;
}
