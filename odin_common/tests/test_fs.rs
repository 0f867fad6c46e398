/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use odin_common::fs::{ensure_writable_dir, remove_file_if_exists};
use std::path::Path;

// run with "cargo test --test test_fs -- --nocapture"

#[test]
fn test_ensure_writable_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("satellite_data").join("southeast");

    assert!( !dir.exists());
    ensure_writable_dir(&dir).unwrap();
    assert!( dir.is_dir());

    // existing dir is fine
    ensure_writable_dir(&dir).unwrap();

    // but a regular file is not
    let file = tmp.path().join("not_a_dir");
    std::fs::write( &file, b"x").unwrap();
    assert!( ensure_writable_dir(&file).is_err());
}

#[test]
fn test_remove_file_if_exists() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("southeast_abi13_20180107120000.png");

    assert!( !remove_file_if_exists(&file).unwrap());

    std::fs::write( &file, b"0123456789").unwrap();

    assert!( remove_file_if_exists(&file).unwrap());
    assert!( !file.exists());
    assert!( !remove_file_if_exists(&file).unwrap());
}
