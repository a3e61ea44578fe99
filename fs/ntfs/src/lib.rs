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

//! A read-only NTFS volume decoder: boot sector parsing, a generic MFT
//! attribute walk, directory tree reconstruction from flat file records,
//! and the [`NtfsVolume`] that ties it all together behind [`Volume`].

use std::collections::HashMap;

use log::debug;
use platter_ds::BlockReader;
use platter_fs::{Attributes, DirEntryInfo, Error, Result, Timestamp, Volume};
use zerocopy::{
    little_endian::{U16, U32, U64},
    FromBytes, Immutable, KnownLayout,
};

const FILE_RECORD_SIGNATURE: [u8; 4] = *b"FILE";
const RECORD_IN_USE: u16 = 0x0001;
const RECORD_IS_DIRECTORY: u16 = 0x0002;

const ATTR_STANDARD_INFORMATION: u32 = 0x10;
const ATTR_FILE_NAME: u32 = 0x30;
const ATTR_DATA: u32 = 0x80;
const ATTR_INDEX_ROOT: u32 = 0x90;
const ATTR_END: u32 = 0xFFFF_FFFF;

const FILE_NAME_NAMESPACE_DOS: u8 = 2;

const ROOT_RECORD_NUMBER: u64 = 5;

/// NTFS boot sector / BIOS parameter block. Only the fields this decoder
/// needs are named individually; the rest are grouped as reserved padding.
#[repr(C)]
#[derive(Debug, FromBytes, Immutable, KnownLayout)]
struct BootSector {
    bs_jmpboot: [u8; 3],
    oem_id: [u8; 8],

    bytes_per_sector: U16,
    sectors_per_cluster: u8,
    reserved0: [u8; 7],
    media_descriptor: u8,
    reserved1: [u8; 2],
    sectors_per_track: U16,
    number_of_heads: U16,
    hidden_sectors: U32,
    reserved2: [u8; 8],

    total_sectors: U64,
    /// Logical cluster number of the start of the $MFT.
    mft_lcn: U64,
    /// Logical cluster number of the start of the $MFT mirror.
    mft_mirror_lcn: U64,
    /// Positive: clusters per file record. Negative: `2.pow(-n)` bytes
    /// per file record.
    clusters_per_file_record_segment: i8,
    reserved3: [u8; 3],
    clusters_per_index_buffer: i8,
    reserved4: [u8; 3],
    volume_serial_number: U64,
    checksum: U32,

    bootstrap: [u8; 426],
    end_of_sector_marker: [u8; 2],
}

/// A FILE record's fixed-size header, corrected to include the record
/// number (`file_id`) at offset `0x2C` that a plain cache-manager
/// multisector header omits.
#[repr(C)]
#[derive(Debug, FromBytes, Immutable, KnownLayout)]
struct FileRecordHeader {
    multi_sector_header: MultiSectorHeader,
    logfile_sequence_number: U64,
    sequence_number: U16,
    hard_link_count: U16,
    first_attribute_offset: U16,
    flags: U16,
    bytes_in_use: U32,
    bytes_allocated: U32,
    base_file_record: MftSegmentReference,
    next_attribute_id: U16,
    padding: U16,
    /// This record's own index in the MFT; NTFS calls this the file ID.
    record_number: U32,
}

#[repr(C)]
#[derive(Debug, FromBytes, Immutable, KnownLayout)]
struct MultiSectorHeader {
    signature: [u8; 4],
    update_sequence_array_offset: U16,
    update_sequence_array_size: U16,
}

#[repr(C)]
#[derive(Debug, FromBytes, Immutable, KnownLayout)]
struct MftSegmentReference {
    segment_number_low_part: U32,
    segment_number_high_part: U16,
    sequence_number: U16,
}

impl MftSegmentReference {
    fn file_id(&self) -> u64 {
        (self.segment_number_low_part.get() as u64)
            | ((self.segment_number_high_part.get() as u64) << 32)
    }
}

/// The common prefix shared by every attribute record, resident or not.
/// Unlike the cache-manager headers this format is often copied from, the
/// real on-disk `type_code` is a 32-bit value, not a byte.
#[repr(C)]
#[derive(Debug, FromBytes, Immutable, KnownLayout)]
struct AttributeHeader {
    type_code: U32,
    record_length: U32,
    form_code: u8,
    name_length: u8,
    name_offset: U16,
    flags: U16,
    instance: U16,
}

#[repr(C)]
#[derive(Debug, FromBytes, Immutable, KnownLayout)]
struct ResidentAttributeHeader {
    common: AttributeHeader,
    value_length: U32,
    value_offset: U16,
    indexed_flag: u8,
    padding: u8,
}

#[repr(C)]
#[derive(Debug, FromBytes, Immutable, KnownLayout)]
struct NonresidentAttributeHeader {
    common: AttributeHeader,
    lowest_vcn: U64,
    highest_vcn: U64,
    mapping_pairs_offset: U16,
    compression_unit: U16,
    reserved: U32,
    allocated_length: U64,
    file_size: U64,
    valid_data_length: U64,
}

/// Where a file's data actually lives, decoded from its `$DATA` attribute.
#[derive(Debug, Clone)]
enum DataStream {
    Resident(Vec<u8>),
    /// A single data run: `cluster_count` clusters starting at
    /// `start_cluster`. Multi-run (fragmented) files are out of scope.
    NonResident {
        start_cluster: u64,
        cluster_count: u64,
        file_size: u64,
    },
}

/// One reconstructed MFT entry: a file or directory, with its parent's
/// record number so a [`DirectoryTree`] can be built from a flat scan.
#[derive(Debug, Clone)]
struct MftRecord {
    record_number: u64,
    parent_id: u64,
    name: String,
    is_directory: bool,
    modified: Timestamp,
    data: Option<DataStream>,
}

/// Decodes a single mapping-pairs run (offset field, length field) from
/// the byte immediately following the standard non-resident attribute
/// header. Returns `None` at the mapping-pairs terminator (a zero byte).
fn decode_single_run(bytes: &[u8]) -> Option<(i64, u64)> {
    let header = *bytes.first()?;
    if header == 0 {
        return None;
    }
    let length_size = (header & 0x0F) as usize;
    let offset_size = ((header >> 4) & 0x0F) as usize;
    let mut pos = 1;

    let mut length: u64 = 0;
    for i in 0..length_size {
        length |= (*bytes.get(pos + i)? as u64) << (8 * i);
    }
    pos += length_size;

    let mut offset: i64 = 0;
    for i in 0..offset_size {
        offset |= (*bytes.get(pos + i)? as i64) << (8 * i);
    }
    if offset_size > 0 && bytes[pos + offset_size - 1] & 0x80 != 0 {
        offset -= 1i64 << (8 * offset_size);
    }

    Some((offset, length))
}

/// Walks the attribute records of one FILE record's raw bytes, folding
/// `$STANDARD_INFORMATION`, `$FILE_NAME` and `$DATA` into an [`MftRecord`].
/// Returns `Ok(None)` if the record has no name (unused slot, or a system
/// record this browser doesn't surface).
fn parse_record(raw: &[u8], record_number: u64) -> Result<Option<MftRecord>> {
    let header = FileRecordHeader::ref_from_bytes(&raw[..std::mem::size_of::<FileRecordHeader>()])
        .map_err(|_| Error::CorruptRecord(format!("record {record_number} too short")))?;
    if header.multi_sector_header.signature != FILE_RECORD_SIGNATURE {
        return Err(Error::CorruptRecord(format!(
            "record {record_number} has bad signature"
        )));
    }
    if header.flags.get() & RECORD_IN_USE == 0 {
        return Ok(None);
    }
    let mut is_directory = header.flags.get() & RECORD_IS_DIRECTORY != 0;

    let mut offset = header.first_attribute_offset.get() as usize;
    let mut name: Option<String> = None;
    let mut name_namespace = FILE_NAME_NAMESPACE_DOS;
    let mut parent_id = record_number;
    let mut modified = Timestamp::from_filetime(0);
    let mut data = None;

    while offset + 8 <= raw.len() {
        let type_code = u32::from_le_bytes(raw[offset..offset + 4].try_into().unwrap());
        let record_length = u32::from_le_bytes(raw[offset + 4..offset + 8].try_into().unwrap());
        if type_code == ATTR_END || record_length == 0 {
            break;
        }
        let record_length = record_length as usize;
        if record_length < 16 || offset + record_length > raw.len() {
            return Err(Error::CorruptRecord(format!(
                "record {record_number} has an attribute that overruns its bounds"
            )));
        }
        let attribute = &raw[offset..offset + record_length];
        let common = AttributeHeader::ref_from_bytes(&attribute[..16])
            .map_err(|_| Error::CorruptRecord(format!("record {record_number} truncated attribute")))?;

        match type_code {
            ATTR_STANDARD_INFORMATION if common.form_code == 0 => {
                let resident = ResidentAttributeHeader::ref_from_bytes(
                    &attribute[..std::mem::size_of::<ResidentAttributeHeader>()],
                )
                .map_err(|_| Error::CorruptRecord(format!("record {record_number} bad $STANDARD_INFORMATION")))?;
                let value_offset = resident.value_offset.get() as usize;
                if value_offset + 16 <= attribute.len() {
                    let ticks = u64::from_le_bytes(
                        attribute[value_offset + 8..value_offset + 16]
                            .try_into()
                            .unwrap(),
                    );
                    modified = Timestamp::from_filetime(ticks);
                }
            }
            ATTR_FILE_NAME if common.form_code == 0 => {
                let resident = ResidentAttributeHeader::ref_from_bytes(
                    &attribute[..std::mem::size_of::<ResidentAttributeHeader>()],
                )
                .map_err(|_| Error::CorruptRecord(format!("record {record_number} bad $FILE_NAME")))?;
                let value_offset = resident.value_offset.get() as usize;
                let value = &attribute[value_offset..];
                if value.len() >= 66 {
                    let parent_ref = MftSegmentReference::ref_from_bytes(&value[..8])
                        .map_err(|_| Error::CorruptRecord(format!("record {record_number} bad parent reference")))?;
                    let char_count = value[64] as usize;
                    let namespace = value[65];
                    let name_bytes = &value[66..66 + char_count * 2];
                    // Prefer a POSIX/Win32 name over the 8.3 DOS alias when
                    // a file has both (common for hard links).
                    if name.is_none() || name_namespace == FILE_NAME_NAMESPACE_DOS {
                        let units: Vec<u16> = name_bytes
                            .chunks_exact(2)
                            .map(|b| u16::from_le_bytes([b[0], b[1]]))
                            .collect();
                        name = Some(String::from_utf16_lossy(&units));
                        name_namespace = namespace;
                        parent_id = parent_ref.file_id();
                    }
                }
            }
            ATTR_DATA => {
                if common.form_code == 0 {
                    let resident = ResidentAttributeHeader::ref_from_bytes(
                        &attribute[..std::mem::size_of::<ResidentAttributeHeader>()],
                    )
                    .map_err(|_| Error::CorruptRecord(format!("record {record_number} bad resident $DATA")))?;
                    let value_offset = resident.value_offset.get() as usize;
                    let value_length = resident.value_length.get() as usize;
                    data = Some(DataStream::Resident(
                        attribute[value_offset..value_offset + value_length].to_vec(),
                    ));
                } else {
                    let nonresident = NonresidentAttributeHeader::ref_from_bytes(
                        &attribute[..std::mem::size_of::<NonresidentAttributeHeader>()],
                    )
                    .map_err(|_| Error::CorruptRecord(format!("record {record_number} bad non-resident $DATA")))?;
                    // This decoder only follows a single data run, at the
                    // fixed offset right after the standard non-resident
                    // header; fragmented files are out of scope.
                    if let Some((start, count)) =
                        decode_single_run(&attribute[0x40..])
                    {
                        data = Some(DataStream::NonResident {
                            start_cluster: start.max(0) as u64,
                            cluster_count: count,
                            file_size: nonresident.file_size.get(),
                        });
                    }
                }
            }
            // $INDEX_ROOT has no bearing on file content; its presence is
            // what actually marks a record as a directory (the header flag
            // is not always trustworthy on its own). Directories carry no
            // $DATA attribute, so `data` is left `None` and reports as a
            // zero-length size.
            ATTR_INDEX_ROOT => {
                is_directory = true;
            }
            _ => {}
        }

        offset += record_length;
    }

    Ok(name.map(|name| MftRecord {
        record_number,
        parent_id,
        name,
        is_directory,
        modified,
        data,
    }))
}

/// All file and directory records on the volume, indexed by record
/// number, with parent links reconstructed from each record's
/// `$FILE_NAME` attribute.
struct DirectoryTree {
    records: HashMap<u64, MftRecord>,
}

impl DirectoryTree {
    fn build(
        reader: &dyn BlockReader,
        mft_offset: u64,
        record_size: u64,
        bytes_per_sector: u64,
    ) -> Result<Self> {
        let num_records = estimate_mft_record_count(reader, mft_offset, record_size, bytes_per_sector)?;
        let mut records = HashMap::new();
        for index in 0..num_records {
            let offset = mft_offset + index * record_size;
            let mut raw = vec![0u8; record_size as usize];
            reader.read_at(offset, &mut raw)?;
            match parse_record(&raw, index) {
                Ok(Some(record)) => {
                    records.insert(record.record_number as u64, record);
                }
                Ok(None) => {}
                Err(error) => debug!("skipping MFT record {index}: {error}"),
            }
        }
        Ok(Self { records })
    }

    fn get(&self, record_number: u64) -> Result<&MftRecord> {
        self.records
            .get(&record_number)
            .ok_or_else(|| Error::NotFound(record_number.to_string()))
    }

    fn find_child(&self, parent_id: u64, name: &str) -> Result<&MftRecord> {
        self.records
            .values()
            .find(|record| record.parent_id == parent_id && record.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}

/// Reads the raw `u64` at offset `0x118` into the `$MFT`'s own file
/// record and derives an approximate record count from it. This mirrors
/// the one piece of the format this decoder doesn't parse structurally
/// (the `$MFT`'s own `$DATA` run list) with a fixed-offset read instead.
fn estimate_mft_record_count(
    reader: &dyn BlockReader,
    mft_offset: u64,
    record_size: u64,
    bytes_per_sector: u64,
) -> Result<u64> {
    let mut raw = [0u8; 8];
    reader.read_at(mft_offset + 0x118, &mut raw)?;
    let value = u64::from_le_bytes(raw);
    Ok(((value + 1) * 8 * bytes_per_sector) / record_size)
}

/// A decoded, read-only NTFS volume.
pub struct NtfsVolume<R: BlockReader> {
    reader: R,
    tree: DirectoryTree,
    bytes_per_cluster: u64,
    sectors_per_cluster: u64,
    /// Logical cluster number of the start of the $MFT, used to derive a
    /// record's sector the same way a resident attribute's does.
    mft_lcn: u64,
    volume_serial_number: u64,
    /// The name this volume was opened under (e.g. a drive letter or mount
    /// point); NTFS carries no on-disk label in the fields this decoder
    /// parses, so the opening caller supplies it, same as the reference
    /// implementation does for both filesystems.
    volume_label: String,

    cwd_record: u64,
    cwd_components: Vec<String>,
}

impl<R: BlockReader> NtfsVolume<R> {
    /// Parses the boot sector and builds the directory tree. Returns
    /// [`Error::NotThisFormat`] if the OEM ID doesn't read `"NTFS    "`.
    pub fn open(reader: R, volume_label: impl Into<String>) -> Result<Self> {
        let mut buffer = [0u8; 512];
        reader.read_at(0, &mut buffer)?;
        let boot_sector = BootSector::ref_from_bytes(&buffer).expect("buffer is exactly 512 bytes");

        if boot_sector.end_of_sector_marker != [0x55, 0xAA] {
            return Err(Error::NotThisFormat);
        }
        if &boot_sector.oem_id != b"NTFS    " {
            return Err(Error::NotThisFormat);
        }

        let bytes_per_sector = boot_sector.bytes_per_sector.get() as u64;
        let sectors_per_cluster = boot_sector.sectors_per_cluster as u64;
        let bytes_per_cluster = bytes_per_sector * sectors_per_cluster;

        let cpfrs = boot_sector.clusters_per_file_record_segment;
        let record_size = if cpfrs >= 0 {
            cpfrs as u64 * bytes_per_cluster
        } else {
            1u64 << (-(cpfrs as i32)) as u32
        };

        let mft_offset = boot_sector.mft_lcn.get() * bytes_per_cluster;
        let volume_serial_number = boot_sector.volume_serial_number.get();

        debug!(
            "opened NTFS volume {volume_serial_number:x}: {bytes_per_cluster} bytes/cluster, \
             {record_size} bytes/record"
        );

        let tree = DirectoryTree::build(&reader, mft_offset, record_size, bytes_per_sector)?;
        if tree.get(ROOT_RECORD_NUMBER).is_err() {
            return Err(Error::CorruptRecord("root directory record missing".into()));
        }

        Ok(Self {
            reader,
            tree,
            bytes_per_cluster,
            sectors_per_cluster,
            mft_lcn: boot_sector.mft_lcn.get(),
            volume_serial_number,
            volume_label: volume_label.into(),
            cwd_record: ROOT_RECORD_NUMBER,
            cwd_components: Vec::new(),
        })
    }

    /// Resolves path components to a record number and the path components
    /// relative to the volume root. If the first component names this
    /// volume, resolution restarts at the root; otherwise it proceeds from
    /// the current directory. `.` and `..` are handled here explicitly,
    /// since (unlike FAT32) NTFS directories carry no on-disk `.`/`..`
    /// entries to resolve through.
    fn resolve_components(&self, mut components: Vec<String>) -> Result<(u64, Vec<String>)> {
        let (mut record_id, mut out) = match components.first() {
            Some(first) if first.eq_ignore_ascii_case(&self.volume_label) => {
                components.remove(0);
                (ROOT_RECORD_NUMBER, Vec::new())
            }
            _ => (self.cwd_record, self.cwd_components.clone()),
        };

        for name in components {
            if name == "." {
                continue;
            }
            if name == ".." {
                if record_id != ROOT_RECORD_NUMBER {
                    let record = self.tree.get(record_id)?;
                    record_id = record.parent_id;
                }
                if out.len() > 1 {
                    out.pop();
                } else {
                    out.clear();
                }
                continue;
            }
            let child = self.tree.find_child(record_id, &name)?;
            if !child.is_directory {
                return Err(Error::NotADirectory(name));
            }
            record_id = child.record_number;
            out.push(name);
        }

        Ok((record_id, out))
    }

    fn resolve_directory(&self, path: &str) -> Result<(u64, Vec<String>)> {
        self.resolve_components(platter_fs::split_path(path))
    }

    fn resolve_entry(&self, path: &str) -> Result<&MftRecord> {
        let mut components = platter_fs::split_path(path);
        let name = components.pop().ok_or(Error::RequiresPath)?;
        let (dir_record, _) = self.resolve_components(components)?;
        self.tree.find_child(dir_record, &name)
    }

    fn read_data(&self, data: &DataStream) -> Result<Vec<u8>> {
        match data {
            DataStream::Resident(bytes) => Ok(bytes.clone()),
            DataStream::NonResident {
                start_cluster,
                cluster_count,
                file_size,
            } => {
                let mut buffer = vec![0u8; (*cluster_count * self.bytes_per_cluster) as usize];
                self.reader
                    .read_at(start_cluster * self.bytes_per_cluster, &mut buffer)?;
                buffer.truncate((*file_size).min(buffer.len() as u64) as usize);
                Ok(buffer)
            }
        }
    }
}

impl<R: BlockReader> Volume for NtfsVolume<R> {
    fn describe(&self) -> String {
        format!(
            "NTFS volume {} ({:016x}): {} bytes/cluster, {} records",
            self.volume_label,
            self.volume_serial_number,
            self.bytes_per_cluster,
            self.tree.records.len()
        )
    }

    fn cwd(&self) -> String {
        if self.cwd_components.is_empty() {
            format!("{}\\", self.volume_label)
        } else {
            format!("{}\\{}", self.volume_label, self.cwd_components.join("\\"))
        }
    }

    fn list(&mut self, path: &str) -> Result<Vec<DirEntryInfo>> {
        let (record_id, _) = self.resolve_directory(path)?;
        Ok(self
            .tree
            .records
            .values()
            .filter(|record| record.parent_id == record_id && record.record_number != record_id)
            .map(|record| {
                let size = match &record.data {
                    Some(DataStream::Resident(bytes)) => bytes.len() as u64,
                    Some(DataStream::NonResident { file_size, .. }) => *file_size,
                    None => 0,
                };
                // Mirrors the reference implementation's sector field: a
                // resident attribute (or a directory, which has none) sits
                // inside the $MFT itself, so its "sector" is the record's
                // offset within it; a non-resident attribute reports the
                // sector of its first data run.
                let sector = match &record.data {
                    Some(DataStream::NonResident { start_cluster, .. }) => {
                        *start_cluster * self.sectors_per_cluster
                    }
                    _ => self.mft_lcn * self.sectors_per_cluster + record.record_number,
                };
                let mut attributes = Attributes::empty();
                if record.is_directory {
                    attributes |= Attributes::DIRECTORY;
                }
                DirEntryInfo {
                    name: record.name.clone(),
                    attributes,
                    modified: Some(record.modified),
                    size,
                    sector,
                }
            })
            .collect())
    }

    fn chdir(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(Error::RequiresPath);
        }
        let (record_id, components) = self.resolve_directory(path)?;
        self.cwd_record = record_id;
        self.cwd_components = components;
        Ok(())
    }

    fn read_text(&mut self, path: &str) -> Result<String> {
        let record = self.resolve_entry(path)?;
        if record.is_directory {
            return Err(Error::IsADirectory(path.to_string()));
        }
        let data = record
            .data
            .as_ref()
            .ok_or_else(|| Error::NotFound(path.to_string()))?;
        let bytes = self.read_data(data)?;
        String::from_utf8(bytes).map_err(|_| Error::NotText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_run_decodes_absolute_start_cluster() {
        // header byte: length field 2 bytes, offset field 2 bytes
        let bytes = [0x22, 0x10, 0x00, 0x05, 0x00];
        let (offset, length) = decode_single_run(&bytes).unwrap();
        assert_eq!(offset, 5);
        assert_eq!(length, 0x10);
    }

    #[test]
    fn single_run_terminator_is_none() {
        assert!(decode_single_run(&[0x00]).is_none());
    }

    #[test]
    fn filetime_epoch_decodes_to_1601() {
        let ts = Timestamp::from_filetime(0);
        assert_eq!(ts.year, 1601);
        assert_eq!(ts.month, 1);
        assert_eq!(ts.day, 1);
    }

    struct NullReader;

    impl BlockReader for NullReader {
        fn read_at(&self, _offset: u64, _buffer: &mut [u8]) -> Result<()> {
            Err(Error::NotThisFormat)
        }

        fn size_hint(&self) -> Option<u64> {
            None
        }
    }

    fn record(record_number: u64, parent_id: u64, name: &str, is_directory: bool) -> MftRecord {
        MftRecord {
            record_number,
            parent_id,
            name: name.to_string(),
            is_directory,
            modified: Timestamp::from_filetime(0),
            data: None,
        }
    }

    /// Root (5), a `FOO` directory (6) under it, and a `BAR.TXT` file (7)
    /// under `FOO`.
    fn volume_with_foo_bar() -> NtfsVolume<NullReader> {
        let mut records = HashMap::new();
        records.insert(5, record(5, 5, ".", true));
        records.insert(6, record(6, 5, "FOO", true));
        records.insert(7, record(7, 6, "BAR.TXT", false));

        NtfsVolume {
            reader: NullReader,
            tree: DirectoryTree { records },
            bytes_per_cluster: 4096,
            sectors_per_cluster: 8,
            mft_lcn: 4,
            volume_serial_number: 0,
            volume_label: "VOL".to_string(),
            cwd_record: ROOT_RECORD_NUMBER,
            cwd_components: Vec::new(),
        }
    }

    #[test]
    fn volume_name_reroots_resolution_case_insensitively() {
        let volume = volume_with_foo_bar();
        let (record_id, components) = volume
            .resolve_directory("VOL\\foo")
            .expect("foo resolves under the volume name");
        assert_eq!(record_id, 6);
        assert_eq!(components, vec!["foo".to_string()]);
    }

    #[test]
    fn relative_resolution_matches_volume_rooted_resolution() {
        let mut relative = volume_with_foo_bar();
        relative.chdir("FOO").unwrap();
        let relative_entry = relative.resolve_entry("BAR.TXT").unwrap();

        let rooted = volume_with_foo_bar();
        let rooted_entry = rooted.resolve_entry("VOL\\FOO\\BAR.TXT").unwrap();

        assert_eq!(relative_entry.name, rooted_entry.name);
    }

    #[test]
    fn cwd_renders_volume_name_with_trailing_backslash_at_root() {
        let volume = volume_with_foo_bar();
        assert_eq!(volume.cwd(), "VOL\\");
    }

    #[test]
    fn cwd_joins_components_with_backslashes() {
        let mut volume = volume_with_foo_bar();
        volume.chdir("FOO").unwrap();
        assert_eq!(volume.cwd(), "VOL\\FOO");
    }

    #[test]
    fn list_reports_mft_relative_sector_for_directories() {
        let mut volume = volume_with_foo_bar();
        let entries = volume.list("").unwrap();
        let foo = entries.iter().find(|e| e.name == "FOO").unwrap();
        // Directories have no $DATA run, so their sector mirrors a resident
        // attribute's: mft_lcn * sectors_per_cluster + the record number.
        assert_eq!(foo.sector, 4 * 8 + 6);
    }

    #[test]
    fn list_reports_run_start_sector_for_nonresident_data() {
        let mut volume = volume_with_foo_bar();
        {
            let bar = volume.tree.records.get_mut(&7).unwrap();
            bar.data = Some(DataStream::NonResident {
                start_cluster: 100,
                cluster_count: 1,
                file_size: 0,
            });
        }
        volume.chdir("FOO").unwrap();
        let entries = volume.list("").unwrap();
        let bar = entries.iter().find(|e| e.name == "BAR.TXT").unwrap();
        assert_eq!(bar.sector, 100 * 8);
    }

    #[test]
    fn index_root_attribute_marks_a_record_as_a_directory() {
        let mut raw = vec![0u8; 512];
        raw[0..4].copy_from_slice(&FILE_RECORD_SIGNATURE);
        raw[0x16..0x18].copy_from_slice(&RECORD_IN_USE.to_le_bytes());
        raw[0x14..0x16].copy_from_slice(&56u16.to_le_bytes());
        raw[0x2C..0x30].copy_from_slice(&5u32.to_le_bytes());

        let mut offset = 56usize;
        // $FILE_NAME, resident, naming this record "FOO" under itself.
        let file_name_len = 0x18 + 66 + 6;
        raw[offset..offset + 4].copy_from_slice(&ATTR_FILE_NAME.to_le_bytes());
        raw[offset + 4..offset + 8].copy_from_slice(&(file_name_len as u32).to_le_bytes());
        raw[offset + 8] = 0;
        raw[offset + 16..offset + 20].copy_from_slice(&6u32.to_le_bytes());
        raw[offset + 20..offset + 22].copy_from_slice(&(0x18u16).to_le_bytes());
        let value_offset = offset + 0x18;
        raw[value_offset..value_offset + 8].copy_from_slice(&5u64.to_le_bytes());
        raw[value_offset + 64] = 3;
        raw[value_offset + 65] = 1;
        let name_units: Vec<u8> = "FOO".encode_utf16().flat_map(u16::to_le_bytes).collect();
        raw[value_offset + 66..value_offset + 66 + name_units.len()].copy_from_slice(&name_units);
        offset += file_name_len;

        // $INDEX_ROOT, marking this record as a directory.
        raw[offset..offset + 4].copy_from_slice(&ATTR_INDEX_ROOT.to_le_bytes());
        raw[offset + 4..offset + 8].copy_from_slice(&16u32.to_le_bytes());
        offset += 16;

        raw[offset..offset + 4].copy_from_slice(&ATTR_END.to_le_bytes());

        let record = parse_record(&raw, 6).unwrap().expect("record has a name");
        assert!(record.is_directory);
        assert!(record.data.is_none());
    }

    #[test]
    fn chdir_rejects_empty_path() {
        let mut volume = volume_with_foo_bar();
        assert!(matches!(volume.chdir(""), Err(Error::RequiresPath)));
    }

    #[test]
    fn dot_dot_at_root_is_a_no_op() {
        let mut volume = volume_with_foo_bar();
        volume.chdir("FOO").unwrap();
        volume.chdir("..").unwrap();
        volume.chdir("..").unwrap();
        assert_eq!(volume.cwd(), "VOL\\");
    }
}
