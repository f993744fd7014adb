// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Name normalization used by catalog lookups

/// Lower-case a name and drop `_`, `-` and whitespace
///
/// `Date_Of_Birth`, `date-of-birth` and `DateOfBirth` all homogenize to
/// `dateofbirth`.
pub fn homogenize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
