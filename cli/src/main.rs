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

//! A small interactive shell over a read-only FAT32 or NTFS volume.

use std::io::{self, Write};

use clap::Parser;
use log::{debug, warn};
use platter_ds_std::BlockDeviceFile;
use platter_fs::Volume;
use platter_fs_fat::Fat32Volume;
use platter_fs_ntfs::NtfsVolume;

/// Browse a FAT32 or NTFS volume read-only.
#[derive(Parser)]
struct Args {
    /// Path to a disk image or raw block device (e.g. /dev/sdb1).
    volume: String,
}

fn open_volume(path: &str) -> platter_err::Result<Box<dyn Volume>> {
    match BlockDeviceFile::open(path).and_then(|reader| Fat32Volume::open(reader, path)) {
        Ok(volume) => return Ok(Box::new(volume)),
        Err(error) => debug!("{path} is not FAT32: {error}"),
    }
    let reader = BlockDeviceFile::open(path)?;
    Ok(Box::new(NtfsVolume::open(reader, path)?))
}

fn run_command(volume: &mut dyn Volume, line: &str) -> Option<()> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    let argument = parts.next().unwrap_or("");

    match command {
        "info" => println!("{}", volume.describe()),
        "pwd" => println!("{}", volume.cwd()),
        "ls" => match volume.list(argument) {
            Ok(entries) => {
                for entry in entries {
                    let kind = if entry.is_directory() { "d" } else { "-" };
                    println!("{kind} {:>10} {}", entry.size, entry.name);
                }
            }
            Err(error) => warn!("ls: {error}"),
        },
        "cd" => {
            if let Err(error) = volume.chdir(argument) {
                warn!("cd: {error}");
            }
        }
        "cat" => match volume.read_text(argument) {
            Ok(text) => print!("{text}"),
            Err(error) => warn!("cat: {error}"),
        },
        "exit" | "quit" => return None,
        "" => {}
        _ => warn!("unknown command: {command}"),
    }
    Some(())
}

fn main() -> platter_err::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut volume = open_volume(&args.volume)?;
    println!("{}", volume.describe());

    let stdin = io::stdin();
    loop {
        print!("{}> ", volume.cwd());
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        if run_command(volume.as_mut(), line.trim()).is_none() {
            break;
        }
    }

    Ok(())
}
