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

//! A read-only FAT32 volume decoder: boot sector parsing, FAT chain
//! traversal, directory entry folding (including long file names), and
//! the [`Fat32Volume`] that ties it all together behind [`Volume`].

use std::collections::{HashMap, HashSet};

use log::debug;
use platter_ds::BlockReader;
use platter_fs::{split_path, Attributes, DirEntryInfo, Error, Result, Timestamp, Volume};
use zerocopy::{
    little_endian::{U16, U32},
    FromBytes, Immutable, KnownLayout,
};

const DIR_ENTRY_SIZE: u64 = 32;
const ATTR_LONG_NAME: u8 = 0x0F;
const LAST_LONG_ENTRY: u8 = 0x40;
const ORDINAL_MASK: u8 = 0x3F;
const FREE_CLUSTER_MARK: u8 = 0xE5;
const END_OF_DIRECTORY_MARK: u8 = 0x00;

/// Boot sector / BIOS parameter block, as laid out on disk.
#[repr(C)]
#[derive(Debug, FromBytes, Immutable, KnownLayout)]
struct BootSector {
    bs_jmpboot: [u8; 3],
    bs_oemname: [u8; 8],

    bpb_bytspersec: U16,
    bpb_secperclus: u8,
    bpb_rsvdseccnt: U16,
    bpb_numfats: u8,
    bpb_rootentcnt: U16,
    bpb_totsec16: U16,
    bpb_media: u8,
    bpb_fatsz16: U16,

    bpb_secpertrk: U16,
    bpb_numheads: U16,
    bpb_hiddsec: U32,

    bpb_totsec32: U32,

    bpb_fatsz32: U32,
    bpb_extflags: U16,
    bpb_fsver: U16,
    /// Cluster number of the first cluster of the root directory.
    bpb_rootclus: U32,
    bpb_fsinfo: U16,
    bpb_bkbootsec: U16,
    bpb_reserved: [u8; 12],

    bs_drvnum: u8,
    bs_reserved1: u8,
    bs_bootsig: u8,
    bs_volid: U32,
    /// Volume label, space-padded to 11 bytes.
    bs_vollab: [u8; 11],
    bs_filsystype: [u8; 8],

    bs_boot: [u8; 420],
    signature_word: [u8; 2],
}

/// A 32-byte short-name directory entry.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, Immutable, KnownLayout)]
struct RawDirEntry {
    dir_name: [u8; 11],
    dir_attr: u8,
    dir_ntres: u8,
    dir_crttimetenth: u8,
    dir_crttime: U16,
    dir_crtdate: U16,
    dir_lstaccdate: U16,
    dir_fstclushi: U16,
    dir_wrttime: U16,
    dir_wrtdate: U16,
    dir_fstcluslo: U16,
    dir_filesize: U32,
}

impl RawDirEntry {
    fn first_cluster(&self) -> u32 {
        (self.dir_fstcluslo.get() as u32) | ((self.dir_fstclushi.get() as u32) << 16)
    }

    fn attributes(&self) -> Attributes {
        Attributes::from_bits_truncate(self.dir_attr as u32)
    }

    /// The 8.3 short name, reassembled as `NAME.EXT` (or just `NAME` for
    /// entries without an extension).
    fn short_name(&self) -> String {
        let (name, ext) = self.dir_name.split_at(8);
        let name: String = name
            .iter()
            .rev()
            .skip_while(|&&c| c == b' ')
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|&c| c as char)
            .collect();
        let ext: String = ext
            .iter()
            .rev()
            .skip_while(|&&c| c == b' ')
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|&c| c as char)
            .collect();
        if ext.is_empty() {
            name
        } else {
            format!("{name}.{ext}")
        }
    }
}

/// A 32-byte long-name sub-entry, overlaid on the same 32 bytes as a
/// [`RawDirEntry`] whenever `dir_attr == ATTR_LONG_NAME`.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, Immutable, KnownLayout)]
struct LongNameDirEntry {
    ldir_ord: u8,
    ldir_name1: [U16; 5],
    ldir_attr: u8,
    ldir_type: u8,
    ldir_chksum: u8,
    ldir_name2: [U16; 6],
    ldir_fstcluslo: U16,
    ldir_name3: [U16; 2],
}

impl LongNameDirEntry {
    /// Decodes this sub-entry's 13 UTF-16 code units, dropping the
    /// null-terminator and any trailing `0xFFFF` padding.
    fn chunk(&self) -> String {
        let units: Vec<u16> = self
            .ldir_name1
            .iter()
            .chain(self.ldir_name2.iter())
            .chain(self.ldir_name3.iter())
            .map(|c| c.get())
            .collect();
        let end = units
            .iter()
            .position(|&c| c == 0x0000)
            .unwrap_or(units.len());
        String::from_utf16_lossy(&units[..end])
            .chars()
            .filter(|&c| c != '\u{FFFF}')
            .collect()
    }
}

/// The 32-bit File Allocation Table: maps a cluster number to the next
/// cluster in its chain.
struct FatTable<'a> {
    reader: &'a dyn BlockReader,
    fat_offset: u64,
}

impl<'a> FatTable<'a> {
    fn entry(&self, cluster: u32) -> Result<u32> {
        let mut buffer = [0u8; 4];
        self.reader
            .read_at(self.fat_offset + cluster as u64 * 4, &mut buffer)?;
        Ok(u32::from_le_bytes(buffer) & 0x0FFF_FFFF)
    }

    /// Follows the cluster chain starting at `start_cluster`, returning
    /// every cluster visited in order. Detects cycles (a cluster revisited
    /// before the chain terminates) as a corrupt chain rather than
    /// looping forever.
    fn chain(&self, start_cluster: u32) -> Result<Vec<u32>> {
        let mut visited = HashSet::new();
        let mut clusters = Vec::new();
        let mut current = start_cluster;
        while (2..0x0FFF_FFF8).contains(&current) {
            if !visited.insert(current) {
                return Err(Error::CorruptChain(format!(
                    "cluster {current} revisited before end-of-chain"
                )));
            }
            clusters.push(current);
            current = self.entry(current)?;
        }
        Ok(clusters)
    }
}

/// A decoded directory entry: a file or subdirectory, with its long name
/// folded in if one was present.
#[derive(Debug, Clone)]
struct Entry {
    name: String,
    attributes: Attributes,
    first_cluster: u32,
    size: u32,
    modified: Timestamp,
}

/// Reads every cluster of `start_cluster`'s chain and folds the raw
/// 32-byte entries into [`Entry`] values, reconstructing long file names
/// from their `LongNameDirEntry` sub-entries.
///
/// A malformed long-name sequence (bad ordinal, wrong attribute) never
/// aborts the scan; it just falls back to the short name, since a single
/// damaged entry shouldn't make the rest of the directory unreadable.
fn read_directory(
    reader: &dyn BlockReader,
    fat: &FatTable,
    cluster_heap_offset: u64,
    bytes_per_cluster: u64,
    start_cluster: u32,
) -> Result<Vec<Entry>> {
    let clusters = fat.chain(start_cluster)?;
    let mut entries = Vec::new();
    let mut long_name: Option<String> = None;
    let mut expected_ordinal: Option<u8> = None;

    'clusters: for cluster in clusters {
        let cluster_offset = cluster_heap_offset + (cluster as u64 - 2) * bytes_per_cluster;
        let mut offset = cluster_offset;
        while offset < cluster_offset + bytes_per_cluster {
            let mut buffer = [0u8; DIR_ENTRY_SIZE as usize];
            reader.read_at(offset, &mut buffer)?;
            offset += DIR_ENTRY_SIZE;

            if buffer[0] == END_OF_DIRECTORY_MARK {
                break 'clusters;
            }
            if buffer[0] == FREE_CLUSTER_MARK {
                long_name = None;
                expected_ordinal = None;
                continue;
            }

            let raw = RawDirEntry::ref_from_bytes(&buffer).expect("buffer is exactly 32 bytes");
            if raw.dir_attr == ATTR_LONG_NAME {
                let ldir = LongNameDirEntry::ref_from_bytes(&buffer)
                    .expect("buffer is exactly 32 bytes");
                let ordinal = ldir.ldir_ord & ORDINAL_MASK;
                if ldir.ldir_ord & LAST_LONG_ENTRY != 0 {
                    long_name = Some(ldir.chunk());
                    expected_ordinal = ordinal.checked_sub(1);
                } else if expected_ordinal == Some(ordinal) {
                    let mut name = ldir.chunk();
                    name.push_str(long_name.as_deref().unwrap_or(""));
                    long_name = Some(name);
                    expected_ordinal = ordinal.checked_sub(1);
                } else {
                    // Out-of-sequence ordinal: give up on the long name
                    // but keep scanning the directory.
                    long_name = None;
                    expected_ordinal = None;
                }
                continue;
            }

            if !raw.attributes().contains(Attributes::VOLUME_ID)
                && !raw.attributes().contains(Attributes::SYSTEM)
            {
                let name = long_name.take().unwrap_or_else(|| raw.short_name());
                entries.push(Entry {
                    name,
                    attributes: raw.attributes(),
                    first_cluster: raw.first_cluster(),
                    size: raw.dir_filesize.get(),
                    modified: Timestamp::from_fat(raw.dir_wrtdate.get(), raw.dir_wrttime.get()),
                });
            }
            long_name = None;
            expected_ordinal = None;
        }
    }

    Ok(entries)
}

/// A decoded, read-only FAT32 volume.
pub struct Fat32Volume<R: BlockReader> {
    reader: R,

    fat_offset: u64,
    cluster_heap_offset: u64,
    bytes_per_cluster: u64,
    bytes_per_sector: u64,
    root_cluster: u32,
    /// The name this volume was opened under (e.g. a drive letter or mount
    /// point), used both to re-root path resolution and as the `cwd()`
    /// prefix. Not derived from the on-disk volume label.
    volume_label: String,
    total_clusters: u32,

    cwd_cluster: u32,
    cwd_components: Vec<String>,

    directory_cache: HashMap<u32, Vec<Entry>>,
}

impl<R: BlockReader> Fat32Volume<R> {
    /// Parses the boot sector from `reader` and opens the volume. Returns
    /// [`Error::NotThisFormat`] if the trailing boot signature or the
    /// filesystem-type string don't look like FAT32.
    pub fn open(reader: R, volume_label: impl Into<String>) -> Result<Self> {
        let mut buffer = [0u8; 512];
        reader.read_at(0, &mut buffer)?;
        let boot_sector =
            BootSector::ref_from_bytes(&buffer).expect("buffer is exactly 512 bytes");

        if boot_sector.signature_word != [0x55, 0xAA] {
            return Err(Error::NotThisFormat);
        }
        if decode_padded_ascii(&boot_sector.bs_filsystype) != "FAT32" {
            return Err(Error::NotThisFormat);
        }

        let bytes_per_sector = boot_sector.bpb_bytspersec.get() as u64;
        let sectors_per_cluster = boot_sector.bpb_secperclus as u64;
        let bytes_per_cluster = bytes_per_sector * sectors_per_cluster;

        let reserved_sectors = boot_sector.bpb_rsvdseccnt.get() as u64;
        let number_of_fats = boot_sector.bpb_numfats as u64;
        let fat_length_sectors = boot_sector.bpb_fatsz32.get() as u64;

        let fat_offset = reserved_sectors * bytes_per_sector;
        let cluster_heap_offset =
            fat_offset + number_of_fats * fat_length_sectors * bytes_per_sector;

        let total_sectors = if boot_sector.bpb_totsec32.get() != 0 {
            boot_sector.bpb_totsec32.get() as u64
        } else {
            boot_sector.bpb_totsec16.get() as u64
        };
        let data_sectors = total_sectors.saturating_sub(
            reserved_sectors + number_of_fats * fat_length_sectors,
        );
        let total_clusters = (data_sectors / sectors_per_cluster.max(1)) as u32;

        let volume_label = volume_label.into();
        let root_cluster = boot_sector.bpb_rootclus.get();

        debug!(
            "opened FAT32 volume {volume_label:?}: {bytes_per_cluster} bytes/cluster, \
             {total_clusters} clusters"
        );

        Ok(Self {
            reader,
            fat_offset,
            cluster_heap_offset,
            bytes_per_cluster,
            bytes_per_sector,
            root_cluster,
            volume_label,
            total_clusters,
            cwd_cluster: root_cluster,
            cwd_components: Vec::new(),
            directory_cache: HashMap::new(),
        })
    }

    fn fat(&self) -> FatTable<'_> {
        FatTable {
            reader: &self.reader,
            fat_offset: self.fat_offset,
        }
    }


    fn directory(&mut self, cluster: u32) -> Result<&[Entry]> {
        if !self.directory_cache.contains_key(&cluster) {
            let entries = read_directory(
                &self.reader,
                &self.fat(),
                self.cluster_heap_offset,
                self.bytes_per_cluster,
                cluster,
            )?;
            self.directory_cache.insert(cluster, entries);
        }
        Ok(&self.directory_cache[&cluster])
    }

    /// Resolves a list of path components (already split on separators)
    /// to the cluster of the directory they name, and the path
    /// components relative to the volume root. A leading component equal
    /// to the volume name re-roots the resolution; otherwise it proceeds
    /// relative to the current working directory.
    fn resolve_components(&mut self, mut components: Vec<String>) -> Result<(u32, Vec<String>)> {
        let (mut cluster, mut out) = match components.first() {
            Some(first) if first.eq_ignore_ascii_case(&self.volume_label) => {
                components.remove(0);
                (self.root_cluster, Vec::new())
            }
            _ => (self.cwd_cluster, self.cwd_components.clone()),
        };

        for name in components {
            if name == "." {
                continue;
            }
            let entry = self
                .directory(cluster)?
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(&name))
                .cloned()
                .ok_or_else(|| Error::NotFound(name.clone()))?;
            if !entry.attributes.contains(Attributes::DIRECTORY) {
                return Err(Error::NotADirectory(name));
            }
            if name == ".." {
                // A `..` entry pointing at cluster 0 means "the root", the
                // on-disk convention for a subdirectory whose parent is the
                // root directory itself.
                cluster = if entry.first_cluster == 0 {
                    self.root_cluster
                } else {
                    entry.first_cluster
                };
                if out.len() > 1 {
                    out.pop();
                }
            } else {
                cluster = entry.first_cluster;
                out.push(name);
            }
        }

        Ok((cluster, out))
    }

    /// Resolves `path` to the cluster of the directory it names, and the
    /// path components relative to the volume root.
    fn resolve_directory(&mut self, path: &str) -> Result<(u32, Vec<String>)> {
        self.resolve_components(split_path(path))
    }

    /// Resolves `path` to its final directory entry. `path` must name at
    /// least one component.
    fn resolve_entry(&mut self, path: &str) -> Result<Entry> {
        let mut components = split_path(path);
        let name = components.pop().ok_or(Error::RequiresPath)?;
        let (dir_cluster, _) = self.resolve_components(components)?;
        self.directory(dir_cluster)?
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(&name))
            .cloned()
            .ok_or_else(|| Error::NotFound(name.clone()))
    }
}

impl<R: BlockReader> Volume for Fat32Volume<R> {
    fn describe(&self) -> String {
        format!(
            "FAT32 volume {:?}: {} bytes/cluster, {} clusters",
            self.volume_label, self.bytes_per_cluster, self.total_clusters
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
        let (cluster, _) = self.resolve_directory(path)?;
        let sectors_per_cluster = self.bytes_per_cluster / self.bytes_per_sector;
        let cluster_heap_offset = self.cluster_heap_offset;
        let bytes_per_sector = self.bytes_per_sector;
        Ok(self
            .directory(cluster)?
            .iter()
            .map(|entry| {
                let sector = if entry.first_cluster < 2 {
                    0
                } else {
                    cluster_heap_offset / bytes_per_sector
                        + (entry.first_cluster as u64 - 2) * sectors_per_cluster
                };
                DirEntryInfo {
                    name: entry.name.clone(),
                    attributes: entry.attributes,
                    modified: Some(entry.modified),
                    size: entry.size as u64,
                    sector,
                }
            })
            .collect())
    }

    fn chdir(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(Error::RequiresPath);
        }
        let (cluster, components) = self.resolve_directory(path)?;
        self.cwd_cluster = cluster;
        self.cwd_components = components;
        Ok(())
    }

    fn read_text(&mut self, path: &str) -> Result<String> {
        let entry = self.resolve_entry(path)?;
        if entry.attributes.contains(Attributes::DIRECTORY) {
            return Err(Error::IsADirectory(path.to_string()));
        }

        let clusters = self.fat().chain(entry.first_cluster)?;
        let mut data = Vec::with_capacity(entry.size as usize);
        for cluster in clusters {
            if data.len() as u32 >= entry.size {
                break;
            }
            let cluster_offset = self.cluster_heap_offset + (cluster as u64 - 2) * self.bytes_per_cluster;
            let mut buffer = vec![0u8; self.bytes_per_cluster as usize];
            self.reader.read_at(cluster_offset, &mut buffer)?;
            data.extend_from_slice(&buffer);
        }
        data.truncate(entry.size as usize);

        String::from_utf8(data).map_err(|_| Error::NotText)
    }
}

fn decode_padded_ascii(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MemoryReader(RefCell<Vec<u8>>);

    impl BlockReader for MemoryReader {
        fn read_at(&self, offset: u64, buffer: &mut [u8]) -> Result<()> {
            let data = self.0.borrow();
            let start = offset as usize;
            buffer.copy_from_slice(&data[start..start + buffer.len()]);
            Ok(())
        }

        fn size_hint(&self) -> Option<u64> {
            Some(self.0.borrow().len() as u64)
        }
    }

    fn fat_with_entries(entries: &[(u32, u32)]) -> MemoryReader {
        let max_cluster = entries.iter().map(|(c, _)| *c).max().unwrap_or(0);
        let mut bytes = vec![0u8; (max_cluster as usize + 1) * 4];
        for (cluster, next) in entries {
            let offset = *cluster as usize * 4;
            bytes[offset..offset + 4].copy_from_slice(&next.to_le_bytes());
        }
        MemoryReader(RefCell::new(bytes))
    }

    #[test]
    fn chain_follows_linked_clusters_to_end_of_chain() {
        let reader = fat_with_entries(&[(2, 3), (3, 4), (4, 0x0FFF_FFFF)]);
        let fat = FatTable {
            reader: &reader,
            fat_offset: 0,
        };
        assert_eq!(fat.chain(2).unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn chain_rejects_a_cycle() {
        let reader = fat_with_entries(&[(2, 3), (3, 2)]);
        let fat = FatTable {
            reader: &reader,
            fat_offset: 0,
        };
        assert!(matches!(fat.chain(2), Err(Error::CorruptChain(_))));
    }

    #[test]
    fn short_name_joins_name_and_extension() {
        let mut raw_bytes = [0u8; 32];
        raw_bytes[..11].copy_from_slice(b"README  TXT");
        let raw = RawDirEntry::ref_from_bytes(&raw_bytes).unwrap();
        assert_eq!(raw.short_name(), "README.TXT");
    }

    #[test]
    fn long_name_chunk_stops_at_null_terminator() {
        let mut entry_bytes = [0u8; 32];
        entry_bytes[0] = 0x41;
        let units: [u16; 5] = [
            'h' as u16, 'e' as u16, 'l' as u16, 'l' as u16, 'o' as u16,
        ];
        for (i, unit) in units.iter().enumerate() {
            entry_bytes[1 + i * 2..3 + i * 2].copy_from_slice(&unit.to_le_bytes());
        }
        entry_bytes[11] = 0x0F;
        let ldir = LongNameDirEntry::ref_from_bytes(&entry_bytes).unwrap();
        assert_eq!(ldir.chunk(), "hello");
    }

    fn volume_for_test(reader: MemoryReader) -> Fat32Volume<MemoryReader> {
        Fat32Volume {
            reader,
            fat_offset: 0,
            cluster_heap_offset: 512,
            bytes_per_cluster: 512,
            bytes_per_sector: 512,
            root_cluster: 2,
            volume_label: "VOL".to_string(),
            total_clusters: 16,
            cwd_cluster: 2,
            cwd_components: Vec::new(),
            directory_cache: HashMap::new(),
        }
    }

    /// One FAT sector (enough for clusters up to 127) followed by two
    /// clusters: the root at cluster 2 holding a `FOO` subdirectory, and
    /// `FOO` at cluster 3 holding a zero-length `BAR.TXT`.
    fn volume_with_foo_bar() -> Fat32Volume<MemoryReader> {
        let mut bytes = vec![0u8; 512 + 512 + 512];
        bytes[2 * 4..2 * 4 + 4].copy_from_slice(&0x0FFF_FFFFu32.to_le_bytes());
        bytes[3 * 4..3 * 4 + 4].copy_from_slice(&0x0FFF_FFFFu32.to_le_bytes());

        let mut foo_entry = [0u8; 32];
        foo_entry[..11].copy_from_slice(b"FOO        ");
        foo_entry[11] = Attributes::DIRECTORY.bits() as u8;
        foo_entry[20..22].copy_from_slice(&0u16.to_le_bytes());
        foo_entry[26..28].copy_from_slice(&3u16.to_le_bytes());
        bytes[512..512 + 32].copy_from_slice(&foo_entry);

        let mut bar_entry = [0u8; 32];
        bar_entry[..11].copy_from_slice(b"BAR     TXT");
        bar_entry[26..28].copy_from_slice(&0u16.to_le_bytes());
        bytes[1024..1024 + 32].copy_from_slice(&bar_entry);

        volume_for_test(MemoryReader(RefCell::new(bytes)))
    }

    #[test]
    fn volume_name_reroots_resolution_case_insensitively() {
        let mut volume = volume_with_foo_bar();
        let (cluster, components) = volume
            .resolve_directory("VOL\\foo")
            .expect("foo resolves under the volume name");
        assert_eq!(cluster, 3);
        assert_eq!(components, vec!["foo".to_string()]);
    }

    #[test]
    fn relative_resolution_matches_volume_rooted_resolution() {
        let mut relative = volume_with_foo_bar();
        relative.chdir("foo").unwrap();
        let relative_entry = relative.resolve_entry("BAR.TXT").unwrap();

        let mut rooted = volume_with_foo_bar();
        let rooted_entry = rooted.resolve_entry("VOL\\FOO\\bar.txt").unwrap();

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
    fn list_reports_the_sector_of_each_entrys_first_cluster() {
        let mut volume = volume_with_foo_bar();
        let entries = volume.list("").unwrap();
        let foo = entries.iter().find(|e| e.name == "FOO").unwrap();
        // cluster 3 sits one cluster into the heap, which starts at sector 1.
        assert_eq!(foo.sector, 2);
    }

    #[test]
    fn chdir_rejects_empty_path() {
        let mut volume = volume_with_foo_bar();
        assert!(matches!(volume.chdir(""), Err(Error::RequiresPath)));
    }
}
