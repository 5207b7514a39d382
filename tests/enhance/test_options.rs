// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for labelled enhancement options

use image_prompt_relay::enhance::{dynamic_enhancements, recommendations, static_enhancements};

#[test]
fn test_every_option_extends_the_base() {
    let base = "a lighthouse";
    let options = static_enhancements()
        .iter()
        .chain(recommendations())
        .copied()
        .chain(dynamic_enhancements("nature scene"));
    for option in options {
        let varied = option.apply(base);
        assert!(varied.starts_with("a lighthouse, "), "{}", option.label);
        assert!(varied.len() > "a lighthouse, ".len(), "{}", option.label);
    }
}

#[test]
fn test_static_labels() {
    let labels: Vec<_> = static_enhancements().iter().map(|o| o.label).collect();
    assert_eq!(
        labels,
        vec![
            "Add more details",
            "Make it more realistic",
            "Make it artistic",
            "Cinematic look"
        ]
    );
}

#[test]
fn test_recommendation_labels() {
    let labels: Vec<_> = recommendations().iter().map(|o| o.label).collect();
    assert_eq!(
        labels,
        vec!["Artistic Style", "Photorealistic", "Fantasy", "Cinematic", "Minimalist"]
    );
}

#[test]
fn test_dynamic_outdoor_without_scene() {
    let labels: Vec<_> = dynamic_enhancements("Outdoor picnic")
        .iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["Misty atmosphere", "Autumn colors"]);
}

#[test]
fn test_dynamic_indoor_excludes_mist() {
    let labels: Vec<_> = dynamic_enhancements("INDOOR garden, nature")
        .iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["Sunset version", "Autumn colors"]);
}

#[test]
fn test_cinematic_look_text() {
    let cinematic = static_enhancements()
        .iter()
        .find(|o| o.label == "Cinematic look")
        .unwrap();
    assert_eq!(
        cinematic.apply("a car"),
        "a car, cinematic, dramatic lighting, movie scene, wide angle, depth of field"
    );
}
