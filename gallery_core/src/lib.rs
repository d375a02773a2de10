// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
pub mod batch;
pub mod catalog;
pub mod config;
pub mod entry;
pub mod error;
pub mod extensions;
pub mod file_io;
pub mod fits;
pub mod generate;
pub mod palette;
pub mod similarity;
pub mod types;
