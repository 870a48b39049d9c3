//! Integration tests for ndarray support
//!
//! These tests load IDX files straight into ndarray for ML workflows.

#![cfg(feature = "ndarray")]

use idxset::load;
use ndarray::{Axis, array, s};
use std::fs;
use tempfile::TempDir;

fn write_images(dir: &TempDir) -> std::path::PathBuf {
    let mut bytes: Vec<u8> = [0x0803u32, 3, 2, 2]
        .iter()
        .flat_map(|f| f.to_be_bytes())
        .collect();
    bytes.extend((0..12).map(|v| v * 20));
    let path = dir.path().join("images.idx3-ubyte");
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn images_as_tensor() {
    let dir = TempDir::new().unwrap();
    let set = load::<u8, f32, _>(write_images(&dir)).unwrap();

    let tensor = set.into_ndarray().unwrap();
    assert_eq!(tensor.shape(), &[3, 2, 2]);
    assert_eq!(
        tensor.index_axis(Axis(0), 1),
        array![[80.0f32, 100.0], [120.0, 140.0]]
    );
}

#[test]
fn normalize_batch() {
    let dir = TempDir::new().unwrap();
    let set = load::<u8, f32, _>(write_images(&dir)).unwrap();

    let batch = set.to_ndarray().unwrap().slice(s![0..2, .., ..]).mapv(|p| p / 255.0);
    assert_eq!(batch.shape(), &[2, 2, 2]);
    assert!(batch.iter().all(|&p| (0.0..=1.0).contains(&p)));
}

#[test]
fn item_view_borrows_set() {
    let dir = TempDir::new().unwrap();
    let set = load::<u8, u8, _>(write_images(&dir)).unwrap();

    let view = set.item_view(2).unwrap();
    assert_eq!(view, array![[160u8, 180], [200, 220]]);
    assert!(set.item_view(3).is_err());
}
